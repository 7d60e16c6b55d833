//! Fleet health poller library.
//!
//! Polls every server in a list for its self-reported counters, folds the
//! answers into per-(application, version) success rates and emits a report.

pub mod aggregate;
pub mod config;
pub mod health;
pub mod inventory;
pub mod lifecycle;
pub mod observability;
pub mod output;
pub mod pool;

pub use aggregate::{Report, VersionSummary};
pub use config::FleetConfig;
pub use health::{HealthProbe, HttpProbe, ProbeRecord};
pub use lifecycle::{run, FleetError};
pub use pool::WorkerPool;
