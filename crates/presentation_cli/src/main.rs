//! Open-Meteo forecast poller CLI
//!
//! Polls forecasts for the configured zones, or runs a single fetch.

#![allow(clippy::print_stdout)]

mod app;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, init_logging};

/// Open-Meteo forecast poller
#[derive(Parser)]
#[command(name = "meteo-cli")]
#[command(author, version, about = "Open-Meteo forecast poller", long_about = None)]
struct Cli {
    /// Verbosity level (overrides the configured log filter)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, global = true, env = "METEO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll every tracked zone until interrupted
    Run,

    /// Run one update cycle for a zone and print the forecast
    ///
    /// Example: meteo-cli fetch --zone zone.home --json
    Fetch {
        /// Zone id, e.g. zone.home
        #[arg(short, long)]
        zone: String,

        /// Print the decoded forecast as JSON
        #[arg(long)]
        json: bool,
    },

    /// List configured zones
    Zones,
}

/// Log filter for a verbosity count, `None` keeps the configured filter
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    let mut logging = config.logging.clone();
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        logging = logging.with_filter(filter);
    }
    init_logging(&logging)?;

    match cli.command {
        Commands::Run => app::run(&config).await,
        Commands::Fetch { zone, json } => {
            let (zone_id, forecast) = app::fetch(&config, &zone).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&forecast)?);
            } else {
                println!("{}", output::render_forecast(&zone_id, &forecast));
            }
            Ok(())
        },
        Commands::Zones => {
            let zones = config.zone_entities()?;
            let tracked = config.tracked_zone_ids()?;
            println!("{}", output::render_zones(&zones, &tracked));
            Ok(())
        },
    }
}
