//! Diagnostics sink for per-server probe outcomes.
//!
//! The worker pool never logs directly. It reports every outcome to a
//! `DiagnosticsSink`, which by default forwards to `tracing`.

use std::sync::Mutex;

use crate::health::{ProbeFailure, ProbeRecord};

/// Receives probe outcomes from the worker pool.
///
/// Called concurrently from every worker.
pub trait DiagnosticsSink: Send + Sync {
    /// A server could not be probed; its contribution is dropped.
    fn probe_failed(&self, failure: &ProbeFailure);

    /// A server answered with a valid record.
    fn probe_succeeded(&self, _address: &str, _record: &ProbeRecord) {}
}

/// Default sink: structured log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn probe_failed(&self, failure: &ProbeFailure) {
        tracing::warn!(
            address = %failure.address,
            error = %failure.kind,
            "Error querying server"
        );
    }

    fn probe_succeeded(&self, address: &str, record: &ProbeRecord) {
        tracing::debug!(
            address = %address,
            application = %record.application,
            version = %record.version,
            "Server probed"
        );
    }
}

/// A failure as captured by [`CollectingDiagnostics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureEvent {
    pub address: String,
    pub cause: String,
}

/// Sink that keeps every event in memory, for callers that want to inspect
/// failures after the run instead of reading logs.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    failures: Mutex<Vec<FailureEvent>>,
    successes: Mutex<Vec<String>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Failures seen so far, in arrival order.
    pub fn failures(&self) -> Vec<FailureEvent> {
        self.failures
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Addresses that produced a record, in arrival order.
    pub fn successes(&self) -> Vec<String> {
        self.successes
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticsSink for CollectingDiagnostics {
    fn probe_failed(&self, failure: &ProbeFailure) {
        if let Ok(mut events) = self.failures.lock() {
            events.push(FailureEvent {
                address: failure.address.clone(),
                cause: failure.kind.to_string(),
            });
        }
    }

    fn probe_succeeded(&self, address: &str, _record: &ProbeRecord) {
        if let Ok(mut events) = self.successes.lock() {
            events.push(address.to_string());
        }
    }
}
