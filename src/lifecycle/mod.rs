//! Lifecycle of a single run.
//!
//! # Data Flow
//! ```text
//! run.rs:
//!     Load server list → Worker pool → Aggregate → Print → Persist → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: inventory and persistence errors are fatal
//! - Per-server probe failures never reach this layer
//! - No state survives between runs

pub mod run;

pub use run::{run, run_with, FleetError, RunSummary};
