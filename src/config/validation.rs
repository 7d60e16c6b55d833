//! Configuration validation.
//!
//! Serde handles the syntax; this pass checks value ranges and reports every
//! problem at once instead of stopping at the first.

use std::fmt;
use crate::config::schema::FleetConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &FleetConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.inventory.path.trim().is_empty() {
        errors.push(ValidationError::new("inventory.path", "must not be empty"));
    }

    if config.pool.workers == 0 {
        errors.push(ValidationError::new("pool.workers", "must be at least 1"));
    }

    match config.probe.scheme.as_str() {
        "http" | "https" => {}
        other => errors.push(ValidationError::new(
            "probe.scheme",
            format!("unsupported scheme '{}'", other),
        )),
    }

    if !config.probe.path.starts_with('/') {
        errors.push(ValidationError::new("probe.path", "must start with '/'"));
    }

    if config.probe.timeout_secs == Some(0) {
        errors.push(ValidationError::new("probe.timeout_secs", "must be greater than 0"));
    }

    if config.report.output_path.trim().is_empty() {
        errors.push(ValidationError::new("report.output_path", "must not be empty"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
