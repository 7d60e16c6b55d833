//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for a fleet run.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for a fleet health run.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct FleetConfig {
    /// Server list input.
    pub inventory: InventoryConfig,

    /// Health probe settings.
    pub probe: ProbeConfig,

    /// Worker pool sizing.
    pub pool: PoolConfig,

    /// Report output.
    pub report: ReportConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Where the server list is read from.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct InventoryConfig {
    /// Path to a text file with one server address per line.
    pub path: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: "server.txt".to_string(),
        }
    }
}

/// Health probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// URL scheme prepended to each address ("http" or "https").
    pub scheme: String,

    /// Path to probe on each server.
    pub path: String,

    /// Per-request timeout in seconds. Unset means no timeout.
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every probe.
    pub user_agent: String,

    /// Honour HTTP_PROXY / HTTPS_PROXY from the environment.
    pub system_proxy: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            path: "/healthz".to_string(),
            timeout_secs: None,
            user_agent: "fleet-health-probe".to_string(),
            system_proxy: true,
        }
    }
}

/// Worker pool configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of concurrent workers.
    pub workers: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { workers: 10 }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Path of the JSON report, overwritten on every run.
    pub output_path: String,

    /// Print the report to stdout.
    pub print: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: "report.json".to_string(),
            print: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
