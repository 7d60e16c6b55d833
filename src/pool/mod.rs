//! Worker pool subsystem.
//!
//! # Data Flow
//! ```text
//! Vec<ServerAddress>
//!     → bounded work queue (filled, then closed)
//!     → W workers (worker.rs), each: dequeue → probe → forward
//!     → results channel (closed when the last worker exits)
//!     → Vec<ProbeRecord> (unordered)
//! ```
//!
//! # Design Decisions
//! - Exactly W workers regardless of list size
//! - Every address is dequeued by exactly one worker
//! - Per-server failures are reported to a DiagnosticsSink, never returned
//! - A panicking worker is logged; the others keep draining the queue

mod worker;

use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;

use crate::health::{HealthProbe, ProbeRecord, ServerAddress};
use crate::observability::{DiagnosticsSink, TracingDiagnostics};
use worker::run_worker;

/// Counters for one pool run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Addresses queued.
    pub queued: usize,
    /// Probes that produced a record.
    pub succeeded: usize,
    /// Probes that failed.
    pub failed: usize,
    /// Workers that panicked before finishing.
    pub aborted_workers: usize,
}

/// Records collected by a pool run.
#[derive(Debug, Default)]
pub struct PoolOutput {
    pub records: Vec<ProbeRecord>,
    pub stats: PoolStats,
}

/// Fixed-size pool of probe workers.
pub struct WorkerPool<P> {
    probe: Arc<P>,
    workers: usize,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl<P: HealthProbe> WorkerPool<P> {
    /// Create a pool of `workers` workers (at least one).
    pub fn new(probe: P, workers: usize) -> Self {
        Self {
            probe: Arc::new(probe),
            workers: workers.max(1),
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Replace the default tracing sink.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Number of workers this pool runs.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Probe every address once and collect the successful records.
    pub async fn run(&self, servers: Vec<ServerAddress>) -> PoolOutput {
        let queued = servers.len();
        let capacity = queued.max(1);

        let (work_tx, work_rx) = mpsc::channel(capacity);
        for address in servers {
            // Capacity covers the whole list and the receiver is held above.
            if work_tx.send(address).await.is_err() {
                break;
            }
        }
        drop(work_tx);
        let queue = Arc::new(Mutex::new(work_rx));

        let (results_tx, mut results_rx) = mpsc::channel(capacity);
        let mut tasks = JoinSet::new();
        for id in 0..self.workers {
            tasks.spawn(run_worker(
                id,
                self.probe.clone(),
                queue.clone(),
                results_tx.clone(),
                self.diagnostics.clone(),
            ));
        }
        drop(results_tx);

        tracing::debug!(servers = queued, workers = self.workers, "Worker pool started");

        let mut records = Vec::with_capacity(queued);
        while let Some(record) = results_rx.recv().await {
            records.push(record);
        }

        let mut stats = PoolStats {
            queued,
            ..PoolStats::default()
        };
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(tally) => stats.failed += tally.failed,
                Err(e) => {
                    tracing::error!(error = %e, "Worker aborted");
                    stats.aborted_workers += 1;
                }
            }
        }
        // Records from a worker that later panicked still count.
        stats.succeeded = records.len();

        tracing::info!(
            queued = stats.queued,
            succeeded = stats.succeeded,
            failed = stats.failed,
            "Worker pool finished"
        );

        PoolOutput { records, stats }
    }
}
