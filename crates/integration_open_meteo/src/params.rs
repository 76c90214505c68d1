//! Request parameter enumerations
//!
//! Variable identifiers and unit choices accepted by the forecast endpoint.
//! Each value knows its wire name; lists of variables are comma-joined by
//! [`ForecastRequest`](crate::ForecastRequest).

use std::fmt;

/// Daily aggregated variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DailyParameter {
    ApparentTemperatureMax,
    ApparentTemperatureMin,
    PrecipitationHours,
    PrecipitationProbabilityMax,
    PrecipitationSum,
    RainSum,
    ShowersSum,
    SnowfallSum,
    Sunrise,
    Sunset,
    Temperature2mMax,
    Temperature2mMin,
    UvIndexMax,
    WeatherCode,
    WindDirection10mDominant,
    WindGusts10mMax,
    WindSpeed10mMax,
}

impl DailyParameter {
    /// Identifier as sent in the `daily` query parameter
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ApparentTemperatureMax => "apparent_temperature_max",
            Self::ApparentTemperatureMin => "apparent_temperature_min",
            Self::PrecipitationHours => "precipitation_hours",
            Self::PrecipitationProbabilityMax => "precipitation_probability_max",
            Self::PrecipitationSum => "precipitation_sum",
            Self::RainSum => "rain_sum",
            Self::ShowersSum => "showers_sum",
            Self::SnowfallSum => "snowfall_sum",
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::Temperature2mMax => "temperature_2m_max",
            Self::Temperature2mMin => "temperature_2m_min",
            Self::UvIndexMax => "uv_index_max",
            Self::WeatherCode => "weather_code",
            Self::WindDirection10mDominant => "wind_direction_10m_dominant",
            Self::WindGusts10mMax => "wind_gusts_10m_max",
            Self::WindSpeed10mMax => "wind_speed_10m_max",
        }
    }
}

impl fmt::Display for DailyParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hourly variables
///
/// Also used for the `current` parameter, which accepts the same identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourlyParameter {
    ApparentTemperature,
    CloudCover,
    DewPoint2m,
    Precipitation,
    PrecipitationProbability,
    PressureMsl,
    Rain,
    RelativeHumidity2m,
    Showers,
    Snowfall,
    SurfacePressure,
    Temperature2m,
    Visibility,
    WeatherCode,
    WindDirection10m,
    WindGusts10m,
    WindSpeed10m,
}

impl HourlyParameter {
    /// Identifier as sent in the `hourly` and `current` query parameters
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ApparentTemperature => "apparent_temperature",
            Self::CloudCover => "cloud_cover",
            Self::DewPoint2m => "dew_point_2m",
            Self::Precipitation => "precipitation",
            Self::PrecipitationProbability => "precipitation_probability",
            Self::PressureMsl => "pressure_msl",
            Self::Rain => "rain",
            Self::RelativeHumidity2m => "relative_humidity_2m",
            Self::Showers => "showers",
            Self::Snowfall => "snowfall",
            Self::SurfacePressure => "surface_pressure",
            Self::Temperature2m => "temperature_2m",
            Self::Visibility => "visibility",
            Self::WeatherCode => "weather_code",
            Self::WindDirection10m => "wind_direction_10m",
            Self::WindGusts10m => "wind_gusts_10m",
            Self::WindSpeed10m => "wind_speed_10m",
        }
    }
}

impl fmt::Display for HourlyParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Precipitation unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrecipitationUnit {
    #[default]
    Millimeters,
    Inches,
}

impl PrecipitationUnit {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Inches => "inch",
        }
    }
}

/// Temperature unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }
}

/// Wind speed unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindSpeedUnit {
    #[default]
    KilometersPerHour,
    MetersPerSecond,
    MilesPerHour,
    Knots,
}

impl WindSpeedUnit {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::KilometersPerHour => "kmh",
            Self::MetersPerSecond => "ms",
            Self::MilesPerHour => "mph",
            Self::Knots => "kn",
        }
    }
}

/// Format of the `time` arrays in the response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// Local ISO 8601 strings, e.g. `2024-01-15T12:00`
    #[default]
    Iso8601,
    /// Unix seconds (UTC)
    UnixTime,
}

impl TimeFormat {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Iso8601 => "iso8601",
            Self::UnixTime => "unixtime",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(PrecipitationUnit, TemperatureUnit, WindSpeedUnit, TimeFormat);
