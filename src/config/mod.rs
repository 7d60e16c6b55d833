//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI overrides applied in main
//!     → FleetConfig (validated, immutable for the run)
//! ```
//!
//! # Design Decisions
//! - Every field has a default, so running without a file works
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::FleetConfig;
pub use schema::InventoryConfig;
pub use schema::ObservabilityConfig;
pub use schema::PoolConfig;
pub use schema::ProbeConfig;
pub use schema::ReportConfig;
