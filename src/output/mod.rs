//! Report output.
//!
//! # Data Flow
//! ```text
//! Report
//!     → console.rs (one line per application/version, stdout)
//!     → persist.rs (indented JSON, file overwritten each run)
//! ```

pub mod console;
pub mod persist;

use std::path::PathBuf;
use thiserror::Error;

pub use console::{format_line, write_report};
pub use persist::{load_report, save_report};

/// Errors that can occur while emitting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to parse report: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("failed to write report to file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read report file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
