//! Zone definitions

use domain::{DEFAULT_RADIUS_METERS, DomainError, GeoLocation, Zone, ZoneId};
use serde::{Deserialize, Serialize};

/// One `[[zones]]` entry
///
/// ```toml
/// [[zones]]
/// id = "zone.home"
/// name = "Home"
/// latitude = 52.52
/// longitude = 13.41
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_radius")]
    pub radius_meters: f64,
}

const fn default_radius() -> f64 {
    DEFAULT_RADIUS_METERS
}

impl ZoneConfig {
    /// Convert to the domain entity
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed id or out-of-range
    /// coordinates.
    pub fn to_zone(&self) -> Result<Zone, DomainError> {
        let id = ZoneId::parse(&self.id)?;
        let location = GeoLocation::new(self.latitude, self.longitude).map_err(|e| {
            DomainError::ValidationError(format!("zone {}: {e}", self.id))
        })?;
        Ok(Zone::new(id, &self.name, location).with_radius(self.radius_meters))
    }
}
