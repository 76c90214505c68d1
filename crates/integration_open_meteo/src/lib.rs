//! Open-Meteo forecast integration
//!
//! Client for the Open-Meteo forecast API (<https://open-meteo.com>).
//! Builds a parameterized forecast query, sends it over a shared HTTP session
//! and decodes the response into a typed [`Forecast`]. No API key is needed.

pub mod client;
mod models;
mod params;
mod request;

pub use client::{ForecastClient, OpenMeteoClient, OpenMeteoConfig, OpenMeteoError};
pub use models::{
    CurrentConditions, CurrentValue, CurrentWeather, DailyForecast, Forecast, HourlyForecast,
    Timestamp, WeatherCondition,
};
pub use params::{
    DailyParameter, HourlyParameter, PrecipitationUnit, TemperatureUnit, TimeFormat,
    WindSpeedUnit,
};
pub use request::ForecastRequest;
