//! HTTP session construction

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings of the shared HTTP session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSessionConfig {
    /// Total request timeout in seconds; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("meteo-poller/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpSessionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl HttpSessionConfig {
    #[must_use]
    pub const fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Build the shared session
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_session(config: &HttpSessionConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(&config.user_agent);
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    debug!(
        user_agent = %config.user_agent,
        timeout_secs = ?config.timeout_secs,
        "Building HTTP session"
    );
    builder.build()
}
