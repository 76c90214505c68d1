//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports: the Open-Meteo update routine, the
//! in-memory zone registry, configuration loading, the shared HTTP session,
//! logging setup and the refresh scheduler.

pub mod adapters;
pub mod config;
pub mod http;
pub mod scheduler;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, OpenMeteoAppConfig, ZoneConfig};
pub use http::{HttpSessionConfig, build_session};
pub use scheduler::{RefreshScheduler, SchedulerError};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};
