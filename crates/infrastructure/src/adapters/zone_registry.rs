//! In-memory zone registry - Implements ZoneLookupPort

use std::collections::HashMap;

use application::ports::ZoneLookupPort;
use domain::{Zone, ZoneId};
use parking_lot::RwLock;
use tracing::debug;

/// Zone state held in memory, seeded from configuration
#[derive(Debug, Default)]
pub struct InMemoryZoneRegistry {
    zones: RwLock<HashMap<ZoneId, Zone>>,
}

impl InMemoryZoneRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a zone, returning the previous state
    pub fn upsert(&self, zone: Zone) -> Option<Zone> {
        debug!(zone = %zone.id, "Zone updated");
        self.zones.write().insert(zone.id.clone(), zone)
    }

    pub fn remove(&self, id: &ZoneId) -> Option<Zone> {
        self.zones.write().remove(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.read().is_empty()
    }
}

impl FromIterator<Zone> for InMemoryZoneRegistry {
    fn from_iter<I: IntoIterator<Item = Zone>>(iter: I) -> Self {
        let zones = iter.into_iter().map(|z| (z.id.clone(), z)).collect();
        Self {
            zones: RwLock::new(zones),
        }
    }
}

impl ZoneLookupPort for InMemoryZoneRegistry {
    fn zone(&self, id: &ZoneId) -> Option<Zone> {
        self.zones.read().get(id).cloned()
    }

    fn zone_ids(&self) -> Vec<ZoneId> {
        let mut ids: Vec<_> = self.zones.read().keys().cloned().collect();
        ids.sort();
        ids
    }
}
