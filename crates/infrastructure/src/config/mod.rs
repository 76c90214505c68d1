//! Application configuration
//!
//! Split into focused sub-modules:
//! - `open_meteo`: forecast API endpoint and polling interval
//! - `zones`: zone definitions seeded into the registry
//!
//! HTTP session and logging settings live next to the code that uses them
//! ([`crate::http`], [`crate::telemetry`]).

mod open_meteo;
mod zones;

use std::path::Path;

use domain::{DomainError, Zone, ZoneId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http::HttpSessionConfig;
use crate::telemetry::LoggingConfig;

pub use open_meteo::OpenMeteoAppConfig;
pub use zones::ZoneConfig;

/// Prefix of environment variable overrides, e.g. `METEO__OPEN_METEO__BASE_URL`
pub const ENV_PREFIX: &str = "METEO";

/// Separator between nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config";

fn default_tracked_zones() -> Vec<String> {
    vec!["zone.home".to_string()]
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub open_meteo: OpenMeteoAppConfig,

    #[serde(default)]
    pub http: HttpSessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Zones known to the registry
    #[serde(default)]
    pub zones: Vec<ZoneConfig>,

    /// Zone ids polled for forecasts
    #[serde(default = "default_tracked_zones")]
    pub tracked_zones: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            open_meteo: OpenMeteoAppConfig::default(),
            http: HttpSessionConfig::default(),
            logging: LoggingConfig::default(),
            zones: Vec::new(),
            tracked_zones: default_tracked_zones(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// With no path, `config.toml` in the working directory is read if it
    /// exists. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., METEO__OPEN_METEO__SCAN_INTERVAL_MINUTES)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("tracked_zones")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        debug!(
            zones = loaded.zones.len(),
            tracked = loaded.tracked_zones.len(),
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Configured zones as domain entities
    ///
    /// # Errors
    ///
    /// Fails on the first zone with an invalid id or coordinates.
    pub fn zone_entities(&self) -> Result<Vec<Zone>, DomainError> {
        self.zones.iter().map(ZoneConfig::to_zone).collect()
    }

    /// Tracked zone ids, parsed
    ///
    /// # Errors
    ///
    /// Fails on the first malformed id.
    pub fn tracked_zone_ids(&self) -> Result<Vec<ZoneId>, DomainError> {
        self.tracked_zones.iter().map(|id| ZoneId::parse(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.open_meteo.scan_interval(), Duration::from_secs(30 * 60));
        assert_eq!(config.tracked_zones, ["zone.home"]);
        assert!(config.zones.is_empty());
        assert!(config.http.timeout_secs.is_none());
    }

    #[test]
    fn load_from_file() {
        let file = write_config(
            r#"
tracked_zones = ["zone.home", "zone.cabin"]

[open_meteo]
base_url = "http://localhost:9000/v1"
scan_interval_minutes = 10

[http]
timeout_secs = 20

[logging]
filter = "debug"
format = "json"

[[zones]]
id = "zone.home"
name = "Home"
latitude = 52.52
longitude = 13.41

[[zones]]
id = "zone.cabin"
name = "Cabin"
latitude = 61.5
longitude = 8.1
radius_meters = 250.0
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.open_meteo.base_url, "http://localhost:9000/v1");
        assert_eq!(config.open_meteo.scan_interval(), Duration::from_secs(600));
        assert_eq!(config.http.timeout_secs, Some(20));
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.zones.len(), 2);

        let zones = config.zone_entities().unwrap();
        assert_eq!(zones[0].name, "Home");
        assert!((zones[0].radius_meters - domain::DEFAULT_RADIUS_METERS).abs() < f64::EPSILON);
        assert!((zones[1].radius_meters - 250.0).abs() < f64::EPSILON);

        let tracked: Vec<_> = config
            .tracked_zone_ids()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(tracked, ["zone.home", "zone.cabin"]);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_config("");
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.open_meteo.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.tracked_zones, ["zone.home"]);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/meteo/config.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_zone_is_reported() {
        let file = write_config(
            r#"
[[zones]]
id = "zone.nowhere"
name = "Nowhere"
latitude = 123.0
longitude = 0.0
"#,
        );
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert!(matches!(
            config.zone_entities(),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn malformed_tracked_zone_is_reported() {
        let config = AppConfig {
            tracked_zones: vec!["home".to_string()],
            ..AppConfig::default()
        };
        assert!(config.tracked_zone_ids().is_err());
    }
}
