//! Health record reported by a single server.

use serde::{Deserialize, Serialize};

/// Address of one server in the fleet (`host[:port]`).
pub type ServerAddress = String;

/// Counters a server reports on its health endpoint.
///
/// All six fields are required; a body missing any of them is rejected
/// during decoding and never becomes a record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeRecord {
    /// Logical service name.
    pub application: String,

    /// Release identifier.
    pub version: String,

    /// Uptime in seconds.
    pub uptime: i64,

    /// Requests served since start.
    pub request_count: u64,

    /// Requests that ended in error.
    pub error_count: u64,

    /// Requests that succeeded.
    pub success_count: u64,
}

impl ProbeRecord {
    /// Success rate of this record, `None` when no requests were served.
    pub fn success_rate(&self) -> Option<f64> {
        if self.request_count == 0 {
            return None;
        }
        Some(self.success_count as f64 / self.request_count as f64)
    }
}
