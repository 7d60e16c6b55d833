//! Aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! Vec<ProbeRecord> (any order)
//!     → aggregator.rs (flat map keyed by (application, version))
//!     → report.rs Report (application → version → summary)
//! ```
//!
//! # Design Decisions
//! - Runs single-threaded after the pool has drained; no locking
//! - Last write wins per key; counters are not summed across servers
//! - Zero requests gives an undefined rate (`None`), never NaN

pub mod aggregator;
pub mod report;

pub use aggregator::{aggregate, Aggregator};
pub use report::{Report, VersionSummary};
