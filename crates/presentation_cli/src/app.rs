//! Wiring of registry, client, coordinators and scheduler from configuration

use std::sync::Arc;

use anyhow::Context;
use application::{DataUpdateCoordinator, UpdateRoutine, ZoneLookupPort};
use domain::ZoneId;
use infrastructure::{
    AppConfig, InMemoryZoneRegistry, OpenMeteoUpdateRoutine, RefreshScheduler, build_session,
};
use integration_open_meteo::{Forecast, ForecastClient, OpenMeteoClient};
use tracing::{info, warn};

use crate::output;

/// Shared collaborators built once per process
pub struct Services {
    pub zones: Arc<InMemoryZoneRegistry>,
    pub client: Arc<dyn ForecastClient>,
}

impl Services {
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let zones: InMemoryZoneRegistry = config
            .zone_entities()
            .context("invalid zone configuration")?
            .into_iter()
            .collect();

        let session = build_session(&config.http).context("failed to build HTTP session")?;
        let client = OpenMeteoClient::new(session, config.open_meteo.client_config());

        Ok(Self {
            zones: Arc::new(zones),
            client: Arc::new(client),
        })
    }

    pub fn routine(&self, zone_id: ZoneId) -> OpenMeteoUpdateRoutine {
        let zones: Arc<dyn ZoneLookupPort> = self.zones.clone();
        OpenMeteoUpdateRoutine::new(zones, Arc::clone(&self.client), zone_id)
    }
}

/// Run one update cycle for a zone
pub async fn fetch(config: &AppConfig, zone: &str) -> anyhow::Result<(ZoneId, Forecast)> {
    let zone_id = ZoneId::parse(zone)?;
    let services = Services::from_config(config)?;
    let forecast = services.routine(zone_id.clone()).update().await?;
    Ok((zone_id, forecast))
}

/// Poll every tracked zone until Ctrl-C
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let services = Services::from_config(config)?;
    let tracked = config.tracked_zone_ids()?;
    anyhow::ensure!(!tracked.is_empty(), "no zones to track");

    let scheduler = RefreshScheduler::new().await?;
    let interval = config.open_meteo.scan_interval();

    for zone_id in tracked {
        let routine = services.routine(zone_id);
        let coordinator = Arc::new(DataUpdateCoordinator::new(
            routine.name(),
            interval,
            Arc::new(routine),
        ));

        spawn_summary_logger(&coordinator);

        if let Err(e) = coordinator.first_refresh().await {
            // Keeps retrying on the regular interval
            warn!(error = %e, "Coordinator not ready");
        }

        scheduler.schedule(coordinator).await?;
    }

    scheduler.start().await?;
    info!(
        zones = scheduler.job_count(),
        interval_secs = interval.as_secs(),
        "Polling started, press Ctrl-C to stop"
    );

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C")?;

    info!("Shutting down");
    scheduler.stop().await?;
    Ok(())
}

/// Log a one-line summary whenever the coordinator publishes a forecast
fn spawn_summary_logger(coordinator: &DataUpdateCoordinator<Forecast>) {
    let mut updates = coordinator.subscribe();
    let name = coordinator.name().to_string();

    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let latest = updates.borrow_and_update().clone();
            if let Some(forecast) = latest {
                info!(
                    coordinator = %name,
                    summary = %output::summary_line(&forecast),
                    "Forecast updated"
                );
            }
        }
    });
}
