//! Forecast request parameters and query serialization

use crate::params::{
    DailyParameter, HourlyParameter, PrecipitationUnit, TemperatureUnit, TimeFormat,
    WindSpeedUnit,
};

/// Timezone used when the caller does not pick one
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Parameters of a single forecast query
///
/// Every field maps to one query parameter. `None` variable lists are sent as
/// an empty value rather than omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone name or `auto` to resolve from the coordinates
    pub timezone: String,
    /// Request the legacy `current_weather` block
    pub current_weather: bool,
    pub current: Option<Vec<HourlyParameter>>,
    pub daily: Option<Vec<DailyParameter>>,
    pub hourly: Option<Vec<HourlyParameter>>,
    pub past_days: u8,
    pub precipitation_unit: PrecipitationUnit,
    pub temperature_unit: TemperatureUnit,
    pub time_format: TimeFormat,
    pub wind_speed_unit: WindSpeedUnit,
}

impl ForecastRequest {
    /// Request for a location with every other parameter at its default
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            timezone: DEFAULT_TIMEZONE.to_string(),
            current_weather: false,
            current: None,
            daily: None,
            hourly: None,
            past_days: 0,
            precipitation_unit: PrecipitationUnit::default(),
            temperature_unit: TemperatureUnit::default(),
            time_format: TimeFormat::default(),
            wind_speed_unit: WindSpeedUnit::default(),
        }
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    #[must_use]
    pub const fn with_current_weather(mut self, enabled: bool) -> Self {
        self.current_weather = enabled;
        self
    }

    #[must_use]
    pub fn with_current(mut self, variables: impl IntoIterator<Item = HourlyParameter>) -> Self {
        self.current = Some(variables.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_daily(mut self, variables: impl IntoIterator<Item = DailyParameter>) -> Self {
        self.daily = Some(variables.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_hourly(mut self, variables: impl IntoIterator<Item = HourlyParameter>) -> Self {
        self.hourly = Some(variables.into_iter().collect());
        self
    }

    #[must_use]
    pub const fn with_past_days(mut self, past_days: u8) -> Self {
        self.past_days = past_days;
        self
    }

    #[must_use]
    pub const fn with_precipitation_unit(mut self, unit: PrecipitationUnit) -> Self {
        self.precipitation_unit = unit;
        self
    }

    #[must_use]
    pub const fn with_temperature_unit(mut self, unit: TemperatureUnit) -> Self {
        self.temperature_unit = unit;
        self
    }

    #[must_use]
    pub const fn with_time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = format;
        self
    }

    #[must_use]
    pub const fn with_wind_speed_unit(mut self, unit: WindSpeedUnit) -> Self {
        self.wind_speed_unit = unit;
        self
    }

    /// Query parameters in the order they are sent
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("timezone", self.timezone.clone()),
            ("current_weather", self.current_weather.to_string()),
            ("current", join(self.current.as_deref(), HourlyParameter::as_str)),
            ("daily", join(self.daily.as_deref(), DailyParameter::as_str)),
            ("hourly", join(self.hourly.as_deref(), HourlyParameter::as_str)),
            ("past_days", self.past_days.to_string()),
            ("precipitation_unit", self.precipitation_unit.to_string()),
            ("temperature_unit", self.temperature_unit.to_string()),
            ("timeformat", self.time_format.to_string()),
            ("windspeed_unit", self.wind_speed_unit.to_string()),
        ]
    }
}

fn join<T>(variables: Option<&[T]>, name: fn(&T) -> &'static str) -> String {
    variables
        .unwrap_or_default()
        .iter()
        .map(name)
        .collect::<Vec<_>>()
        .join(",")
}
