//! Health probing subsystem.
//!
//! # Data Flow
//! ```text
//! ServerAddress
//!     → probe.rs (GET <scheme>://<address><path>)
//!     → status 200 + decodable body → record.rs ProbeRecord
//!     → anything else → ProbeFailure { address, kind }
//! ```
//!
//! # Design Decisions
//! - One request per server, never retried
//! - The probe is a trait so the worker pool can run against any source
//! - Timeouts only when configured; otherwise the client default applies

pub mod probe;
pub mod record;

pub use probe::{HealthProbe, HttpProbe, ProbeErrorKind, ProbeFailure};
pub use record::{ProbeRecord, ServerAddress};
