//! Run orchestration.
//!
//! # Responsibilities
//! - Load the server list (fatal on failure)
//! - Drive the worker pool and the aggregator
//! - Print the report (failures logged) and persist it (fatal on failure)

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::aggregate::{aggregate, Report};
use crate::config::FleetConfig;
use crate::health::{HealthProbe, HttpProbe};
use crate::inventory::{load_servers, InventoryError};
use crate::observability::{DiagnosticsSink, TracingDiagnostics};
use crate::output::{save_report, write_report, ReportError};
use crate::pool::{PoolStats, WorkerPool};

/// Fatal errors that end a run.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub report: Report,
    pub stats: PoolStats,
}

/// Run against the fleet over HTTP, logging per-server failures.
pub async fn run(config: &FleetConfig) -> Result<RunSummary, FleetError> {
    let probe = HttpProbe::new(config.probe.clone())?;
    let mut stdout = std::io::stdout();
    run_with(config, probe, Arc::new(TracingDiagnostics), &mut stdout).await
}

/// Run with an explicit probe, diagnostics sink and console writer.
pub async fn run_with<P, W>(
    config: &FleetConfig,
    probe: P,
    diagnostics: Arc<dyn DiagnosticsSink>,
    console: &mut W,
) -> Result<RunSummary, FleetError>
where
    P: HealthProbe,
    W: Write,
{
    let servers = load_servers(Path::new(&config.inventory.path))?;

    let pool = WorkerPool::new(probe, config.pool.workers).with_diagnostics(diagnostics);
    let output = pool.run(servers).await;

    let report = aggregate(&output.records);
    tracing::info!(
        applications = report.applications().count(),
        versions = report.len(),
        "Report aggregated"
    );

    // Only persisting is fatal; a closed stdout must not lose report.json.
    if config.report.print {
        if let Err(e) = write_report(&report, console) {
            tracing::warn!(error = %e, "Failed to print report");
        }
    }
    save_report(&report, Path::new(&config.report.output_path))?;

    Ok(RunSummary {
        report,
        stats: output.stats,
    })
}
