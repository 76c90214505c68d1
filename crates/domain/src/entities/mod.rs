//! Domain entities

pub mod zone;

pub use zone::{DEFAULT_RADIUS_METERS, Zone};
