//! A single pool worker.

use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use crate::health::{HealthProbe, ProbeRecord, ServerAddress};
use crate::observability::DiagnosticsSink;

/// Shared, pre-filled and closed queue of addresses.
pub(crate) type WorkQueue = Arc<Mutex<mpsc::Receiver<ServerAddress>>>;

/// Per-worker counters returned when the worker exits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WorkerTally {
    pub succeeded: usize,
    pub failed: usize,
}

/// Drain the queue until it is empty.
///
/// Each dequeued address is probed exactly once. Failures go to the
/// diagnostics sink and never stop the loop.
pub(crate) async fn run_worker<P: HealthProbe>(
    id: usize,
    probe: Arc<P>,
    queue: WorkQueue,
    results: mpsc::Sender<ProbeRecord>,
    diagnostics: Arc<dyn DiagnosticsSink>,
) -> WorkerTally {
    let mut tally = WorkerTally::default();

    loop {
        // Queue is closed before workers start, so recv never parks for long.
        let next = queue.lock().await.recv().await;
        let Some(address) = next else {
            break;
        };

        match probe.probe(&address).await {
            Ok(record) => {
                diagnostics.probe_succeeded(&address, &record);
                tally.succeeded += 1;
                if results.send(record).await.is_err() {
                    tracing::error!(worker = id, "Results channel closed, stopping worker");
                    break;
                }
            }
            Err(failure) => {
                diagnostics.probe_failed(&failure);
                tally.failed += 1;
            }
        }
    }

    tracing::trace!(
        worker = id,
        succeeded = tally.succeeded,
        failed = tally.failed,
        "Worker finished"
    );
    tally
}
