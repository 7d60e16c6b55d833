//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Worker pool:
//!     → diagnostics.rs (one event per probe outcome)
//!     → TracingDiagnostics → logging.rs subscriber → stderr
//! ```
//!
//! # Design Decisions
//! - Structured fields (address, error) on every event
//! - Per-server failures are events, never errors returned to callers

pub mod diagnostics;
pub mod logging;

pub use diagnostics::{CollectingDiagnostics, DiagnosticsSink, FailureEvent, TracingDiagnostics};
