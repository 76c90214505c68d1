//! Open-Meteo polling configuration

use std::time::Duration;

use integration_open_meteo::OpenMeteoConfig;
use serde::{Deserialize, Serialize};

/// Default refresh interval in minutes
pub const DEFAULT_SCAN_INTERVAL_MINUTES: u64 = 30;

/// Forecast API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenMeteoAppConfig {
    /// Open-Meteo API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Minutes between two refreshes of a tracked zone
    #[serde(default = "default_scan_interval_minutes")]
    pub scan_interval_minutes: u64,
}

fn default_base_url() -> String {
    OpenMeteoConfig::default().base_url
}

const fn default_scan_interval_minutes() -> u64 {
    DEFAULT_SCAN_INTERVAL_MINUTES
}

impl Default for OpenMeteoAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            scan_interval_minutes: default_scan_interval_minutes(),
        }
    }
}

impl OpenMeteoAppConfig {
    #[must_use]
    pub const fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan_interval_minutes.saturating_mul(60))
    }

    /// Client configuration for this endpoint
    #[must_use]
    pub fn client_config(&self) -> OpenMeteoConfig {
        OpenMeteoConfig {
            base_url: self.base_url.clone(),
        }
    }
}
