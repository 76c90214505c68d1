//! Zone entity - a named location in host state

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, ZoneId};

/// Default zone radius used by the host when none is configured
pub const DEFAULT_RADIUS_METERS: f64 = 100.0;

/// A named geographic zone
///
/// Forecast polling only reads the coordinates. The radius is carried from
/// the zone configuration and shown by `meteo-cli zones`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Entity id, e.g. `zone.home`
    pub id: ZoneId,
    /// Friendly name
    pub name: String,
    /// Center of the zone
    pub location: GeoLocation,
    /// Radius in meters
    pub radius_meters: f64,
}

impl Zone {
    /// Create a zone with the default radius
    #[must_use]
    pub fn new(id: ZoneId, name: impl Into<String>, location: GeoLocation) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            radius_meters: DEFAULT_RADIUS_METERS,
        }
    }

    /// Override the radius
    #[must_use]
    pub const fn with_radius(mut self, radius_meters: f64) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    /// Latitude attribute
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.latitude()
    }

    /// Longitude attribute
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.longitude()
    }
}
