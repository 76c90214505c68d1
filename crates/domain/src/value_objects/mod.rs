//! Value objects - Immutable types defined by their attributes

pub mod geo_location;
pub mod zone_id;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use zone_id::ZoneId;
