//! Interval scheduler for coordinator refreshes
//!
//! Every scheduled coordinator gets one repeated job that calls
//! [`DataUpdateCoordinator::refresh`] each `update_interval`. Uses
//! `tokio-cron-scheduler` for job management.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use application::DataUpdateCoordinator;
use parking_lot::RwLock;
use thiserror::Error;
use tokio::sync::Mutex as AsyncMutex;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Scheduler errors
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Interval of zero
    #[error("Invalid refresh interval for {0}: must be greater than zero")]
    InvalidInterval(String),

    /// A job with this name already exists
    #[error("Already scheduled: {0}")]
    AlreadyScheduled(String),

    /// No job with this name
    #[error("Job not found: {0}")]
    JobNotFound(String),

    /// Internal scheduler error
    #[error("Internal scheduler error: {0}")]
    Internal(String),
}

impl From<JobSchedulerError> for SchedulerError {
    fn from(err: JobSchedulerError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Runs coordinator refreshes on their update interval
pub struct RefreshScheduler {
    scheduler: AsyncMutex<JobScheduler>,
    jobs: RwLock<HashMap<String, Uuid>>,
    running: AtomicBool,
}

impl std::fmt::Debug for RefreshScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshScheduler")
            .field("running", &self.running.load(Ordering::Relaxed))
            .field("job_count", &self.jobs.read().len())
            .finish_non_exhaustive()
    }
}

impl RefreshScheduler {
    /// Create a stopped scheduler
    #[instrument(skip_all)]
    pub async fn new() -> Result<Self, SchedulerError> {
        let scheduler = JobScheduler::new().await?;
        debug!("Refresh scheduler initialized");
        Ok(Self {
            scheduler: AsyncMutex::new(scheduler),
            jobs: RwLock::new(HashMap::new()),
            running: AtomicBool::new(false),
        })
    }

    /// Register a repeated refresh job for a coordinator
    ///
    /// The first run happens one interval after the scheduler starts; callers
    /// run `first_refresh` themselves.
    #[instrument(skip(self, coordinator), fields(coordinator = %coordinator.name()))]
    pub async fn schedule<T>(
        &self,
        coordinator: Arc<DataUpdateCoordinator<T>>,
    ) -> Result<Uuid, SchedulerError>
    where
        T: Send + Sync + 'static,
    {
        let name = coordinator.name().to_string();
        let interval = coordinator.update_interval();

        if interval.is_zero() {
            return Err(SchedulerError::InvalidInterval(name));
        }
        if self.jobs.read().contains_key(&name) {
            return Err(SchedulerError::AlreadyScheduled(name));
        }

        let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
            let coordinator = Arc::clone(&coordinator);
            Box::pin(async move {
                debug!(coordinator = %coordinator.name(), "Scheduled refresh");
                coordinator.refresh().await;
            })
        })?;

        let job_id = self.scheduler.lock().await.add(job).await?;
        self.jobs.write().insert(name.clone(), job_id);

        info!(
            coordinator = %name,
            interval_secs = interval.as_secs(),
            "Refresh scheduled"
        );
        Ok(job_id)
    }

    /// Remove the job of a coordinator
    #[instrument(skip(self))]
    pub async fn unschedule(&self, name: &str) -> Result<(), SchedulerError> {
        let job_id = self
            .jobs
            .write()
            .remove(name)
            .ok_or_else(|| SchedulerError::JobNotFound(name.to_string()))?;

        self.scheduler.lock().await.remove(&job_id).await?;
        info!(coordinator = %name, "Refresh unscheduled");
        Ok(())
    }

    /// Start firing jobs
    #[instrument(skip(self))]
    pub async fn start(&self) -> Result<(), SchedulerError> {
        if self.running.load(Ordering::Relaxed) {
            debug!("Scheduler already running");
            return Ok(());
        }

        self.scheduler.lock().await.start().await?;
        self.running.store(true, Ordering::Relaxed);
        info!("Refresh scheduler started");
        Ok(())
    }

    /// Stop the scheduler gracefully
    #[instrument(skip(self))]
    pub async fn stop(&self) -> Result<(), SchedulerError> {
        if !self.running.load(Ordering::Relaxed) {
            debug!("Scheduler already stopped");
            return Ok(());
        }

        self.scheduler.lock().await.shutdown().await?;
        self.running.store(false, Ordering::Relaxed);
        info!("Refresh scheduler stopped");
        Ok(())
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Number of scheduled coordinators
    #[must_use]
    pub fn job_count(&self) -> usize {
        self.jobs.read().len()
    }

    /// Names of scheduled coordinators
    #[must_use]
    pub fn scheduled(&self) -> Vec<String> {
        let mut names: Vec<_> = self.jobs.read().keys().cloned().collect();
        names.sort();
        names
    }
}
