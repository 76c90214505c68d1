//! Zone lookup port
//!
//! Read access to the zones currently known to the host.

use domain::{Zone, ZoneId};

/// Port for resolving zone entities from host state
pub trait ZoneLookupPort: Send + Sync {
    /// Current state of the zone, or `None` if it does not exist
    fn zone(&self, id: &ZoneId) -> Option<Zone>;

    /// Ids of every known zone
    fn zone_ids(&self) -> Vec<ZoneId>;
}
