//! Forecast data models
//!
//! Types for the decoded Open-Meteo forecast response. The API delivers the
//! daily and hourly series column-wise (`{"time": [..], "rain": [..]}`);
//! they are transposed into ordered row records here.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

/// Weather condition derived from WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky (WMO 0)
    ClearSky,
    /// Mainly clear (WMO 1)
    MainlyClear,
    /// Partly cloudy (WMO 2)
    PartlyCloudy,
    /// Overcast (WMO 3)
    Overcast,
    /// Fog (WMO 45, 48)
    Fog,
    /// Drizzle (WMO 51, 53, 55)
    Drizzle,
    /// Freezing drizzle (WMO 56, 57)
    FreezingDrizzle,
    /// Rain (WMO 61, 63, 65)
    Rain,
    /// Freezing rain (WMO 66, 67)
    FreezingRain,
    /// Snow (WMO 71, 73, 75)
    Snow,
    /// Snow grains (WMO 77)
    SnowGrains,
    /// Rain showers (WMO 80, 81, 82)
    RainShowers,
    /// Snow showers (WMO 85, 86)
    SnowShowers,
    /// Thunderstorm (WMO 95)
    Thunderstorm,
    /// Thunderstorm with hail (WMO 96, 99)
    ThunderstormWithHail,
    /// Unknown condition
    Unknown,
}

impl WeatherCondition {
    /// Convert WMO weather code to `WeatherCondition`
    ///
    /// See: <https://open-meteo.com/en/docs> for WMO code reference
    #[must_use]
    pub const fn from_wmo_code(code: u8) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::FreezingDrizzle,
            61 | 63 | 65 => Self::Rain,
            66 | 67 => Self::FreezingRain,
            71 | 73 | 75 => Self::Snow,
            77 => Self::SnowGrains,
            80..=82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::ThunderstormWithHail,
            _ => Self::Unknown,
        }
    }

    /// Get a human-readable description of the weather condition
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::FreezingDrizzle => "Freezing drizzle",
            Self::Rain => "Rain",
            Self::FreezingRain => "Freezing rain",
            Self::Snow => "Snow",
            Self::SnowGrains => "Snow grains",
            Self::RainShowers => "Rain showers",
            Self::SnowShowers => "Snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormWithHail => "Thunderstorm with hail",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Point in time as delivered by the API
///
/// With `timeformat=iso8601` times are local to the response timezone and
/// carry no offset; with `timeformat=unixtime` they are UTC seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Unix(i64),
    Iso8601(String),
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix(secs) => write!(f, "{secs}"),
            Self::Iso8601(s) => f.write_str(s),
        }
    }
}

/// A single value from the `current` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurrentValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl CurrentValue {
    /// Numeric value; integers are widened
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for CurrentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::Null => f.write_str("null"),
        }
    }
}

/// Current conditions, keyed by whatever field names the API returned
///
/// The set of keys depends on the `current` variables requested and on the
/// API itself (it always adds `time` and `interval`). Only scalar and null
/// values are accepted; a nested array or object fails with the key named.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CurrentConditions(BTreeMap<String, CurrentValue>);

impl<'de> Deserialize<'de> for CurrentConditions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(key, value)| {
                let value = match value {
                    serde_json::Value::Null => CurrentValue::Null,
                    serde_json::Value::Bool(b) => CurrentValue::Bool(b),
                    serde_json::Value::String(s) => CurrentValue::Text(s),
                    serde_json::Value::Number(n) => match n.as_i64() {
                        Some(i) => CurrentValue::Integer(i),
                        None => n.as_f64().map(CurrentValue::Float).ok_or_else(|| {
                            <D::Error as de::Error>::custom(format!(
                                "current field `{key}` is not a representable number"
                            ))
                        })?,
                    },
                    serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                        return Err(<D::Error as de::Error>::custom(format!(
                            "current field `{key}` must be a scalar or null"
                        )));
                    },
                };
                Ok((key, value))
            })
            .collect()
    }
}

impl CurrentConditions {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CurrentValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(CurrentValue::as_f64)
    }

    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(CurrentValue::as_i64)
    }

    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(CurrentValue::as_str)
    }

    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(CurrentValue::as_bool)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CurrentValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Condition from the `weather_code` field, if present
    #[must_use]
    pub fn condition(&self) -> Option<WeatherCondition> {
        self.get_i64("weather_code")
            .and_then(|code| u8::try_from(code).ok())
            .map(WeatherCondition::from_wmo_code)
    }
}

impl FromIterator<(String, CurrentValue)> for CurrentConditions {
    fn from_iter<I: IntoIterator<Item = (String, CurrentValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Legacy `current_weather` block (requested with `current_weather=true`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub time: Timestamp,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub windspeed: Option<f64>,
    #[serde(default)]
    pub winddirection: Option<f64>,
    #[serde(default)]
    pub weathercode: Option<u8>,
    #[serde(default)]
    pub is_day: Option<u8>,
    #[serde(default)]
    pub interval: Option<u32>,
}

/// One day of the daily series
///
/// Variables that were not requested, or that the API reported as `null`,
/// are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub time: Timestamp,
    #[serde(default)]
    pub apparent_temperature_max: Option<f64>,
    #[serde(default)]
    pub apparent_temperature_min: Option<f64>,
    #[serde(default)]
    pub precipitation_hours: Option<f64>,
    #[serde(default)]
    pub precipitation_probability_max: Option<f64>,
    #[serde(default)]
    pub precipitation_sum: Option<f64>,
    #[serde(default)]
    pub rain_sum: Option<f64>,
    #[serde(default)]
    pub showers_sum: Option<f64>,
    #[serde(default)]
    pub snowfall_sum: Option<f64>,
    #[serde(default)]
    pub sunrise: Option<Timestamp>,
    #[serde(default)]
    pub sunset: Option<Timestamp>,
    #[serde(default)]
    pub temperature_2m_max: Option<f64>,
    #[serde(default)]
    pub temperature_2m_min: Option<f64>,
    #[serde(default)]
    pub uv_index_max: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<u8>,
    #[serde(default)]
    pub wind_direction_10m_dominant: Option<f64>,
    #[serde(default)]
    pub wind_gusts_10m_max: Option<f64>,
    #[serde(default)]
    pub wind_speed_10m_max: Option<f64>,
}

impl DailyForecast {
    #[must_use]
    pub fn condition(&self) -> Option<WeatherCondition> {
        self.weather_code.map(WeatherCondition::from_wmo_code)
    }
}

/// One hour of the hourly series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: Timestamp,
    #[serde(default)]
    pub apparent_temperature: Option<f64>,
    #[serde(default)]
    pub cloud_cover: Option<f64>,
    #[serde(default)]
    pub dew_point_2m: Option<f64>,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub precipitation_probability: Option<f64>,
    #[serde(default)]
    pub pressure_msl: Option<f64>,
    #[serde(default)]
    pub rain: Option<f64>,
    #[serde(default)]
    pub relative_humidity_2m: Option<f64>,
    #[serde(default)]
    pub showers: Option<f64>,
    #[serde(default)]
    pub snowfall: Option<f64>,
    #[serde(default)]
    pub surface_pressure: Option<f64>,
    #[serde(default)]
    pub temperature_2m: Option<f64>,
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<u8>,
    #[serde(default)]
    pub wind_direction_10m: Option<f64>,
    #[serde(default)]
    pub wind_gusts_10m: Option<f64>,
    #[serde(default)]
    pub wind_speed_10m: Option<f64>,
}

impl HourlyForecast {
    #[must_use]
    pub fn condition(&self) -> Option<WeatherCondition> {
        self.weather_code.map(WeatherCondition::from_wmo_code)
    }
}

/// Decoded forecast response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Elevation in meters
    #[serde(default)]
    pub elevation: Option<f64>,
    #[serde(default, rename = "generationtime_ms")]
    pub generation_time_ms: Option<f64>,
    #[serde(default)]
    pub utc_offset_seconds: i32,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub timezone_abbreviation: Option<String>,
    #[serde(default)]
    pub current_weather: Option<CurrentWeather>,
    /// Present only when the response carried a `current` object
    #[serde(default)]
    pub current: Option<CurrentConditions>,
    #[serde(default)]
    pub current_units: Option<BTreeMap<String, String>>,
    #[serde(default, deserialize_with = "series::daily")]
    pub daily: Vec<DailyForecast>,
    #[serde(default)]
    pub daily_units: Option<BTreeMap<String, String>>,
    #[serde(default, deserialize_with = "series::hourly")]
    pub hourly: Vec<HourlyForecast>,
    #[serde(default)]
    pub hourly_units: Option<BTreeMap<String, String>>,
}

impl Forecast {
    /// Get today's forecast
    #[must_use]
    pub fn today(&self) -> Option<&DailyForecast> {
        self.daily.first()
    }

    /// Get the next N days of forecasts
    #[must_use]
    pub fn next_days(&self, n: usize) -> &[DailyForecast] {
        let end = n.min(self.daily.len());
        &self.daily[..end]
    }

    /// Unit reported for a daily variable, e.g. `°C`
    #[must_use]
    pub fn daily_unit(&self, variable: &str) -> Option<&str> {
        self.daily_units
            .as_ref()
            .and_then(|units| units.get(variable))
            .map(String::as_str)
    }

    /// Unit reported for a current variable
    #[must_use]
    pub fn current_unit(&self, variable: &str) -> Option<&str> {
        self.current_units
            .as_ref()
            .and_then(|units| units.get(variable))
            .map(String::as_str)
    }
}

/// Column-to-row decoding of the daily/hourly series
mod series {
    use super::{DailyForecast, Deserialize, Deserializer, HourlyForecast, Timestamp};

    /// A series arrives either column-wise (the API's format) or already as rows
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Series<C, R> {
        Rows(Vec<R>),
        Columns(C),
    }

    fn at<T: Clone>(column: &[Option<T>], i: usize) -> Option<T> {
        column.get(i).cloned().flatten()
    }

    #[derive(Deserialize)]
    struct DailyColumns {
        time: Vec<Timestamp>,
        #[serde(default)]
        apparent_temperature_max: Vec<Option<f64>>,
        #[serde(default)]
        apparent_temperature_min: Vec<Option<f64>>,
        #[serde(default)]
        precipitation_hours: Vec<Option<f64>>,
        #[serde(default)]
        precipitation_probability_max: Vec<Option<f64>>,
        #[serde(default)]
        precipitation_sum: Vec<Option<f64>>,
        #[serde(default)]
        rain_sum: Vec<Option<f64>>,
        #[serde(default)]
        showers_sum: Vec<Option<f64>>,
        #[serde(default)]
        snowfall_sum: Vec<Option<f64>>,
        #[serde(default)]
        sunrise: Vec<Option<Timestamp>>,
        #[serde(default)]
        sunset: Vec<Option<Timestamp>>,
        #[serde(default)]
        temperature_2m_max: Vec<Option<f64>>,
        #[serde(default)]
        temperature_2m_min: Vec<Option<f64>>,
        #[serde(default)]
        uv_index_max: Vec<Option<f64>>,
        #[serde(default)]
        weather_code: Vec<Option<u8>>,
        #[serde(default)]
        wind_direction_10m_dominant: Vec<Option<f64>>,
        #[serde(default)]
        wind_gusts_10m_max: Vec<Option<f64>>,
        #[serde(default)]
        wind_speed_10m_max: Vec<Option<f64>>,
    }

    impl DailyColumns {
        fn into_rows(self) -> Vec<DailyForecast> {
            self.time
                .iter()
                .enumerate()
                .map(|(i, time)| DailyForecast {
                    time: time.clone(),
                    apparent_temperature_max: at(&self.apparent_temperature_max, i),
                    apparent_temperature_min: at(&self.apparent_temperature_min, i),
                    precipitation_hours: at(&self.precipitation_hours, i),
                    precipitation_probability_max: at(&self.precipitation_probability_max, i),
                    precipitation_sum: at(&self.precipitation_sum, i),
                    rain_sum: at(&self.rain_sum, i),
                    showers_sum: at(&self.showers_sum, i),
                    snowfall_sum: at(&self.snowfall_sum, i),
                    sunrise: at(&self.sunrise, i),
                    sunset: at(&self.sunset, i),
                    temperature_2m_max: at(&self.temperature_2m_max, i),
                    temperature_2m_min: at(&self.temperature_2m_min, i),
                    uv_index_max: at(&self.uv_index_max, i),
                    weather_code: at(&self.weather_code, i),
                    wind_direction_10m_dominant: at(&self.wind_direction_10m_dominant, i),
                    wind_gusts_10m_max: at(&self.wind_gusts_10m_max, i),
                    wind_speed_10m_max: at(&self.wind_speed_10m_max, i),
                })
                .collect()
        }
    }

    #[derive(Deserialize)]
    struct HourlyColumns {
        time: Vec<Timestamp>,
        #[serde(default)]
        apparent_temperature: Vec<Option<f64>>,
        #[serde(default)]
        cloud_cover: Vec<Option<f64>>,
        #[serde(default)]
        dew_point_2m: Vec<Option<f64>>,
        #[serde(default)]
        precipitation: Vec<Option<f64>>,
        #[serde(default)]
        precipitation_probability: Vec<Option<f64>>,
        #[serde(default)]
        pressure_msl: Vec<Option<f64>>,
        #[serde(default)]
        rain: Vec<Option<f64>>,
        #[serde(default)]
        relative_humidity_2m: Vec<Option<f64>>,
        #[serde(default)]
        showers: Vec<Option<f64>>,
        #[serde(default)]
        snowfall: Vec<Option<f64>>,
        #[serde(default)]
        surface_pressure: Vec<Option<f64>>,
        #[serde(default)]
        temperature_2m: Vec<Option<f64>>,
        #[serde(default)]
        visibility: Vec<Option<f64>>,
        #[serde(default)]
        weather_code: Vec<Option<u8>>,
        #[serde(default)]
        wind_direction_10m: Vec<Option<f64>>,
        #[serde(default)]
        wind_gusts_10m: Vec<Option<f64>>,
        #[serde(default)]
        wind_speed_10m: Vec<Option<f64>>,
    }

    impl HourlyColumns {
        fn into_rows(self) -> Vec<HourlyForecast> {
            self.time
                .iter()
                .enumerate()
                .map(|(i, time)| HourlyForecast {
                    time: time.clone(),
                    apparent_temperature: at(&self.apparent_temperature, i),
                    cloud_cover: at(&self.cloud_cover, i),
                    dew_point_2m: at(&self.dew_point_2m, i),
                    precipitation: at(&self.precipitation, i),
                    precipitation_probability: at(&self.precipitation_probability, i),
                    pressure_msl: at(&self.pressure_msl, i),
                    rain: at(&self.rain, i),
                    relative_humidity_2m: at(&self.relative_humidity_2m, i),
                    showers: at(&self.showers, i),
                    snowfall: at(&self.snowfall, i),
                    surface_pressure: at(&self.surface_pressure, i),
                    temperature_2m: at(&self.temperature_2m, i),
                    visibility: at(&self.visibility, i),
                    weather_code: at(&self.weather_code, i),
                    wind_direction_10m: at(&self.wind_direction_10m, i),
                    wind_gusts_10m: at(&self.wind_gusts_10m, i),
                    wind_speed_10m: at(&self.wind_speed_10m, i),
                })
                .collect()
        }
    }

    pub(super) fn daily<'de, D>(deserializer: D) -> Result<Vec<DailyForecast>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(
            match Option::<Series<DailyColumns, DailyForecast>>::deserialize(deserializer)? {
                Some(Series::Rows(rows)) => rows,
                Some(Series::Columns(columns)) => columns.into_rows(),
                None => Vec::new(),
            },
        )
    }

    pub(super) fn hourly<'de, D>(deserializer: D) -> Result<Vec<HourlyForecast>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(
            match Option::<Series<HourlyColumns, HourlyForecast>>::deserialize(deserializer)? {
                Some(Series::Rows(rows)) => rows,
                Some(Series::Columns(columns)) => columns.into_rows(),
                None => Vec::new(),
            },
        )
    }
}
