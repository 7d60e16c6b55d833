//! Fleet health poller.
//!
//! # Architecture Overview
//!
//! ```text
//!   server.txt
//!       │
//!       ▼
//!  ┌───────────┐    ┌──────────────────────────────┐    ┌────────────┐
//!  │ inventory │───▶│ pool: W workers              │───▶│ aggregate  │
//!  └───────────┘    │  dequeue → probe → forward   │    │ last-write │
//!                   │  GET http://<addr>/healthz   │    │    wins    │
//!                   └──────────────┬───────────────┘    └─────┬──────┘
//!                                  │ failures                 │
//!                                  ▼                          ▼
//!                          ┌──────────────┐          ┌─────────────────┐
//!                          │ diagnostics  │          │ output: console │
//!                          │  (tracing)   │          │  + report.json  │
//!                          └──────────────┘          └─────────────────┘
//! ```
//!
//! Running with no arguments reads `server.txt`, probes with 10 workers and
//! writes `report.json` in the current directory.

use std::path::PathBuf;
use clap::Parser;

use fleet_health::config::loader::{load_config, ConfigError};
use fleet_health::config::validation::validate_config;
use fleet_health::config::FleetConfig;
use fleet_health::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "fleet-health")]
#[command(about = "Poll a server fleet and report success rates per application version", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server list, one address per line.
    #[arg(short, long)]
    servers: Option<String>,

    /// Where to write the JSON report.
    #[arg(short, long)]
    output: Option<String>,

    /// Number of concurrent workers.
    #[arg(short, long)]
    workers: Option<usize>,
}

impl Cli {
    fn into_config(self) -> Result<FleetConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => FleetConfig::default(),
        };

        if let Some(servers) = self.servers {
            config.inventory.path = servers;
        }
        if let Some(output) = self.output {
            config.report.output_path = output;
        }
        if let Some(workers) = self.workers {
            config.pool.workers = workers;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    init_logging(&config.observability.log_level)?;

    tracing::info!(
        servers = %config.inventory.path,
        workers = config.pool.workers,
        output = %config.report.output_path,
        "fleet-health v0.1.0 starting"
    );

    let summary = fleet_health::run(&config).await?;

    tracing::info!(
        probed = summary.stats.queued,
        failed = summary.stats.failed,
        entries = summary.report.len(),
        "Run complete"
    );
    Ok(())
}
