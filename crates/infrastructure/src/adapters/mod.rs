//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod open_meteo_update;
mod zone_registry;

pub use open_meteo_update::{
    CURRENT_VARIABLES, DAILY_VARIABLES, FORECAST_TIMEZONE, ForecastUpdateError, HOURLY_VARIABLES,
    OpenMeteoUpdateRoutine,
};
pub use zone_registry::InMemoryZoneRegistry;
