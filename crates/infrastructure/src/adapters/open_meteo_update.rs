//! Open-Meteo update routine - Implements UpdateRoutine<Forecast>
//!
//! Each cycle resolves the tracked zone from host state and fetches one
//! forecast for its coordinates. Nothing is kept between cycles.

use std::sync::Arc;

use application::UpdateFailed;
use application::ports::{UpdateRoutine, ZoneLookupPort};
use async_trait::async_trait;
use domain::{Zone, ZoneId};
use integration_open_meteo::{
    DailyParameter, Forecast, ForecastClient, ForecastRequest, HourlyParameter, OpenMeteoError,
    PrecipitationUnit, TemperatureUnit, WindSpeedUnit,
};
use thiserror::Error;
use tracing::{debug, instrument};

/// Variables requested in the `current` section
pub const CURRENT_VARIABLES: [HourlyParameter; 6] = [
    HourlyParameter::Temperature2m,
    HourlyParameter::WindSpeed10m,
    HourlyParameter::WindDirection10m,
    HourlyParameter::WeatherCode,
    HourlyParameter::CloudCover,
    HourlyParameter::WindGusts10m,
];

/// Variables requested in the `daily` series
pub const DAILY_VARIABLES: [DailyParameter; 6] = [
    DailyParameter::PrecipitationSum,
    DailyParameter::Temperature2mMax,
    DailyParameter::Temperature2mMin,
    DailyParameter::WeatherCode,
    DailyParameter::WindDirection10mDominant,
    DailyParameter::WindSpeed10mMax,
];

/// Variables requested in the `hourly` series
pub const HOURLY_VARIABLES: [HourlyParameter; 9] = [
    HourlyParameter::Precipitation,
    HourlyParameter::Temperature2m,
    HourlyParameter::WeatherCode,
    HourlyParameter::WindDirection10m,
    HourlyParameter::WindSpeed10m,
    HourlyParameter::RelativeHumidity2m,
    HourlyParameter::CloudCover,
    HourlyParameter::PressureMsl,
    HourlyParameter::WindGusts10m,
];

/// Let the API resolve the timezone from the coordinates
pub const FORECAST_TIMEZONE: &str = "auto";

/// Failure of one update cycle
#[derive(Debug, Error)]
pub enum ForecastUpdateError {
    /// The tracked zone does not exist in host state
    #[error("Zone '{0}' not found")]
    ZoneNotFound(ZoneId),

    /// The forecast client failed
    #[error("Open-Meteo API communication error")]
    Upstream(#[from] OpenMeteoError),
}

impl From<ForecastUpdateError> for UpdateFailed {
    fn from(err: ForecastUpdateError) -> Self {
        Self::with_source(err.to_string(), err)
    }
}

/// Periodic forecast fetch for one zone
pub struct OpenMeteoUpdateRoutine {
    zones: Arc<dyn ZoneLookupPort>,
    client: Arc<dyn ForecastClient>,
    zone_id: ZoneId,
}

impl std::fmt::Debug for OpenMeteoUpdateRoutine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenMeteoUpdateRoutine")
            .field("zone_id", &self.zone_id)
            .finish_non_exhaustive()
    }
}

impl OpenMeteoUpdateRoutine {
    pub fn new(
        zones: Arc<dyn ZoneLookupPort>,
        client: Arc<dyn ForecastClient>,
        zone_id: ZoneId,
    ) -> Self {
        Self {
            zones,
            client,
            zone_id,
        }
    }

    /// Coordinator name, e.g. `open_meteo_zone.home`
    #[must_use]
    pub fn name(&self) -> String {
        format!("open_meteo_{}", self.zone_id)
    }

    #[must_use]
    pub const fn zone_id(&self) -> &ZoneId {
        &self.zone_id
    }

    /// The forecast query sent for a zone
    #[must_use]
    pub fn build_request(zone: &Zone) -> ForecastRequest {
        ForecastRequest::new(zone.latitude(), zone.longitude())
            .with_timezone(FORECAST_TIMEZONE)
            .with_current(CURRENT_VARIABLES)
            .with_daily(DAILY_VARIABLES)
            .with_hourly(HOURLY_VARIABLES)
            .with_precipitation_unit(PrecipitationUnit::Millimeters)
            .with_temperature_unit(TemperatureUnit::Celsius)
            .with_wind_speed_unit(WindSpeedUnit::KilometersPerHour)
    }

    /// Resolve the zone and fetch its forecast
    ///
    /// # Errors
    ///
    /// `ZoneNotFound` before any request is made, or `Upstream` when the
    /// client fails.
    #[instrument(skip(self), fields(zone = %self.zone_id))]
    pub async fn fetch(&self) -> Result<Forecast, ForecastUpdateError> {
        let zone = self
            .zones
            .zone(&self.zone_id)
            .ok_or_else(|| ForecastUpdateError::ZoneNotFound(self.zone_id.clone()))?;

        debug!(lat = zone.latitude(), lon = zone.longitude(), "Resolved zone");

        let forecast = self.client.forecast(&Self::build_request(&zone)).await?;
        Ok(forecast)
    }
}

#[async_trait]
impl UpdateRoutine<Forecast> for OpenMeteoUpdateRoutine {
    async fn update(&self) -> Result<Forecast, UpdateFailed> {
        self.fetch().await.map_err(UpdateFailed::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::GeoLocation;
    use std::error::Error;

    fn zone(id: &str, latitude: f64, longitude: f64) -> Zone {
        Zone::new(
            ZoneId::parse(id).unwrap(),
            "Home",
            GeoLocation::new(latitude, longitude).unwrap(),
        )
    }

    fn value<'a>(pairs: &'a [(&'static str, String)], key: &str) -> &'a str {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or_else(|| panic!("missing query parameter {key}"))
    }

    #[test]
    fn request_uses_fixed_variables_and_units() {
        let request = OpenMeteoUpdateRoutine::build_request(&zone("zone.home", 52.52, 13.41));
        let pairs = request.query_pairs();

        assert_eq!(value(&pairs, "latitude"), "52.52");
        assert_eq!(value(&pairs, "longitude"), "13.41");
        assert_eq!(value(&pairs, "timezone"), "auto");
        assert_eq!(value(&pairs, "current_weather"), "false");
        assert_eq!(
            value(&pairs, "current"),
            "temperature_2m,wind_speed_10m,wind_direction_10m,weather_code,cloud_cover,wind_gusts_10m"
        );
        assert_eq!(
            value(&pairs, "daily"),
            "precipitation_sum,temperature_2m_max,temperature_2m_min,weather_code,wind_direction_10m_dominant,wind_speed_10m_max"
        );
        assert_eq!(
            value(&pairs, "hourly"),
            "precipitation,temperature_2m,weather_code,wind_direction_10m,wind_speed_10m,relative_humidity_2m,cloud_cover,pressure_msl,wind_gusts_10m"
        );
        assert_eq!(value(&pairs, "precipitation_unit"), "mm");
        assert_eq!(value(&pairs, "temperature_unit"), "celsius");
        assert_eq!(value(&pairs, "windspeed_unit"), "kmh");
    }

    #[test]
    fn zone_not_found_message() {
        let err: UpdateFailed =
            ForecastUpdateError::ZoneNotFound(ZoneId::parse("zone.home").unwrap()).into();
        assert_eq!(err.to_string(), "Zone 'zone.home' not found");
        assert!(matches!(
            err.cause::<ForecastUpdateError>(),
            Some(ForecastUpdateError::ZoneNotFound(_))
        ));
    }

    #[test]
    fn upstream_keeps_client_error_in_chain() {
        let client_err = OpenMeteoError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            reason: "upstream down".to_string(),
        };
        let err: UpdateFailed = ForecastUpdateError::from(client_err).into();
        assert_eq!(err.to_string(), "Open-Meteo API communication error");

        let routine_err = err.source().expect("routine error");
        let client_err = routine_err.source().expect("client error");
        assert!(client_err.to_string().contains("upstream down"));
    }
}
