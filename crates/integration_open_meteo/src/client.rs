//! Open-Meteo forecast client
//!
//! HTTP client for the Open-Meteo forecast endpoint. The HTTP session is
//! injected: the client holds a clone of the host's shared `reqwest::Client`
//! and never configures timeouts of its own.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::{self, Unexpected};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::Forecast;
use crate::request::ForecastRequest;

/// Forecast client errors
#[derive(Debug, Error)]
pub enum OpenMeteoError {
    /// Coordinates outside the valid ranges
    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("Request failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// The API answered with a non-success status
    #[error("HTTP {status}: {reason}")]
    Status { status: StatusCode, reason: String },

    /// The body is not JSON
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The body is JSON but does not match the forecast schema
    #[error("Response does not match the forecast schema: {0}")]
    Schema(#[source] serde_json::Error),
}

impl OpenMeteoError {
    /// HTTP status, when the failure came from a response
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Open-Meteo client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenMeteoConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Forecast retrieval
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Fetch and decode one forecast
    async fn forecast(&self, request: &ForecastRequest) -> Result<Forecast, OpenMeteoError>;
}

/// Error body returned by the API alongside 4xx statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    reason: String,
}

/// Open-Meteo HTTP client implementation
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    session: Client,
    config: OpenMeteoConfig,
}

impl OpenMeteoClient {
    /// Create a client on top of a shared HTTP session
    #[must_use]
    pub const fn new(session: Client, config: OpenMeteoConfig) -> Self {
        Self { session, config }
    }

    /// Create a client with the default base URL
    #[must_use]
    pub fn with_session(session: Client) -> Self {
        Self::new(session, OpenMeteoConfig::default())
    }

    /// Full URL of the forecast endpoint
    #[must_use]
    pub fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    /// Decode a response body
    ///
    /// Parsing is split in two so that a body that is not JSON at all is
    /// reported differently from JSON with the wrong shape.
    ///
    /// # Errors
    ///
    /// Returns `InvalidJson` or `Schema`. A top-level value other than an
    /// object is a `Schema` error.
    pub fn decode(body: &str) -> Result<Forecast, OpenMeteoError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(OpenMeteoError::InvalidJson)?;
        if !value.is_object() {
            return Err(OpenMeteoError::Schema(<serde_json::Error as de::Error>::invalid_type(
                Self::unexpected(&value),
                &"a forecast object",
            )));
        }
        serde_json::from_value(value).map_err(OpenMeteoError::Schema)
    }

    fn unexpected(value: &serde_json::Value) -> Unexpected<'_> {
        match value {
            serde_json::Value::Null => Unexpected::Unit,
            serde_json::Value::Bool(b) => Unexpected::Bool(*b),
            serde_json::Value::Number(_) => Unexpected::Other("number"),
            serde_json::Value::String(s) => Unexpected::Str(s),
            serde_json::Value::Array(_) => Unexpected::Seq,
            serde_json::Value::Object(_) => Unexpected::Map,
        }
    }

    fn error_reason(status: StatusCode, body: &str) -> String {
        if let Ok(api_error) = serde_json::from_str::<ApiErrorBody>(body) {
            return api_error.reason;
        }
        let body = body.trim();
        if body.is_empty() {
            status.canonical_reason().unwrap_or("unknown error").to_string()
        } else {
            body.to_string()
        }
    }
}

#[async_trait]
impl ForecastClient for OpenMeteoClient {
    #[instrument(skip(self, request), fields(lat = %request.latitude, lon = %request.longitude))]
    async fn forecast(&self, request: &ForecastRequest) -> Result<Forecast, OpenMeteoError> {
        if !(-90.0..=90.0).contains(&request.latitude)
            || !(-180.0..=180.0).contains(&request.longitude)
        {
            return Err(OpenMeteoError::InvalidCoordinates {
                latitude: request.latitude,
                longitude: request.longitude,
            });
        }

        let url = self.forecast_url();
        debug!(url = %url, "Fetching forecast");

        let response = self
            .session
            .get(&url)
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(OpenMeteoError::Connection)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(OpenMeteoError::Connection)?;

        if !status.is_success() {
            let reason = Self::error_reason(status, &body);
            debug!(status = %status, reason = %reason, "Forecast request rejected");
            return Err(OpenMeteoError::Status { status, reason });
        }

        let forecast = Self::decode(&body)?;
        debug!(
            daily = forecast.daily.len(),
            hourly = forecast.hourly.len(),
            current = forecast.current.is_some(),
            "Decoded forecast"
        );
        Ok(forecast)
    }
}
