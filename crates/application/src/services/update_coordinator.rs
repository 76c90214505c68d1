//! Data update coordinator
//!
//! Runs an [`UpdateRoutine`] on demand, caches the last successful result and
//! publishes it to subscribers. A failed cycle never clears the cache.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tokio::sync::{Mutex as AsyncMutex, watch};
use tracing::{debug, error, info, instrument};

use crate::error::{ApplicationError, UpdateFailed};
use crate::ports::UpdateRoutine;

/// Outcome bookkeeping of the most recent refreshes
#[derive(Debug, Clone)]
struct RefreshStatus {
    last_update_success: bool,
    last_error: Option<String>,
    last_success_at: Option<DateTime<Utc>>,
    consecutive_failures: u32,
}

impl Default for RefreshStatus {
    fn default() -> Self {
        Self {
            last_update_success: true,
            last_error: None,
            last_success_at: None,
            consecutive_failures: 0,
        }
    }
}

/// Caches the latest value produced by an update routine
pub struct DataUpdateCoordinator<T: Send + Sync + 'static> {
    name: String,
    update_interval: Duration,
    routine: Arc<dyn UpdateRoutine<T>>,
    data: watch::Sender<Option<Arc<T>>>,
    status: RwLock<RefreshStatus>,
    refresh_lock: AsyncMutex<()>,
}

impl<T: Send + Sync + 'static> fmt::Debug for DataUpdateCoordinator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataUpdateCoordinator")
            .field("name", &self.name)
            .field("update_interval", &self.update_interval)
            .field("has_data", &self.data.borrow().is_some())
            .field("status", &*self.status.read())
            .finish_non_exhaustive()
    }
}

impl<T: Send + Sync + 'static> DataUpdateCoordinator<T> {
    /// Create a coordinator with no data yet
    pub fn new(
        name: impl Into<String>,
        update_interval: Duration,
        routine: Arc<dyn UpdateRoutine<T>>,
    ) -> Self {
        let (data, _) = watch::channel(None);
        Self {
            name: name.into(),
            update_interval,
            routine,
            data,
            status: RwLock::new(RefreshStatus::default()),
            refresh_lock: AsyncMutex::new(()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn update_interval(&self) -> Duration {
        self.update_interval
    }

    /// Latest successfully produced value
    pub fn data(&self) -> Option<Arc<T>> {
        self.data.borrow().clone()
    }

    /// Receiver notified every time a new value is published
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<T>>> {
        self.data.subscribe()
    }

    /// Whether the most recent refresh succeeded
    ///
    /// `true` before the first refresh.
    pub fn last_update_success(&self) -> bool {
        self.status.read().last_update_success
    }

    /// Error of the most recent refresh, cleared on success
    pub fn last_error(&self) -> Option<String> {
        self.status.read().last_error.clone()
    }

    pub fn last_success_at(&self) -> Option<DateTime<Utc>> {
        self.status.read().last_success_at
    }

    /// Run one update cycle, recording the outcome
    ///
    /// Failures are logged and kept in the status; the previous value stays
    /// published. Concurrent callers wait for the running cycle to finish.
    pub async fn refresh(&self) {
        // Outcome is recorded and logged inside
        let _ = self.run_cycle().await;
    }

    /// Initial refresh whose failure the caller must handle
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotReady` wrapping the update failure.
    pub async fn first_refresh(&self) -> Result<Arc<T>, ApplicationError> {
        self.run_cycle()
            .await
            .map_err(|source| ApplicationError::NotReady {
                name: self.name.clone(),
                source,
            })
    }

    #[instrument(skip(self), fields(coordinator = %self.name))]
    async fn run_cycle(&self) -> Result<Arc<T>, UpdateFailed> {
        let _guard = self.refresh_lock.lock().await;
        let started = std::time::Instant::now();

        match self.routine.update().await {
            Ok(value) => {
                let value = Arc::new(value);
                self.data.send_replace(Some(Arc::clone(&value)));

                let previous_failures = {
                    let mut status = self.status.write();
                    let failures = status.consecutive_failures;
                    *status = RefreshStatus {
                        last_update_success: true,
                        last_error: None,
                        last_success_at: Some(Utc::now()),
                        consecutive_failures: 0,
                    };
                    failures
                };

                let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                if previous_failures > 0 {
                    info!(
                        failures = previous_failures,
                        elapsed_ms, "Fetching data recovered"
                    );
                } else {
                    debug!(elapsed_ms, "Finished fetching data");
                }
                Ok(value)
            },
            Err(err) => {
                let message = error_chain(&err);
                let was_successful = {
                    let mut status = self.status.write();
                    let was_successful = status.last_update_success;
                    status.last_update_success = false;
                    status.last_error = Some(message.clone());
                    status.consecutive_failures = status.consecutive_failures.saturating_add(1);
                    was_successful
                };

                if was_successful {
                    error!(error = %message, "Error fetching data");
                } else {
                    debug!(error = %message, "Fetching data still failing");
                }
                Err(err)
            },
        }
    }
}

/// Render an error followed by its causes, separated by `: `
///
/// A cause whose text repeats the previous link is skipped.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut previous = err.to_string();
    let mut rendered = previous.clone();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if text != previous {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        previous = text;
        source = cause.source();
    }
    rendered
}
