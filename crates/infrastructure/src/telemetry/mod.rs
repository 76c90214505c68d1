//! Logging initialization
//!
//! Installs the global `tracing` subscriber with a text or JSON formatter.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_logging};
