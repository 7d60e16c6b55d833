//! Server inventory loading.
//!
//! The inventory is a UTF-8 text file with one `host[:port]` per line.
//! Lines are trimmed and blank lines are skipped; duplicates are kept.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::health::ServerAddress;

/// Errors that can occur while loading the server list.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// File missing, unreadable, or not valid UTF-8.
    #[error("failed to read server list {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse server addresses from file contents.
pub fn parse_servers(contents: &str) -> Vec<ServerAddress> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Read and parse the server list at `path`.
pub fn load_servers(path: &Path) -> Result<Vec<ServerAddress>, InventoryError> {
    let contents = fs::read_to_string(path).map_err(|source| InventoryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let servers = parse_servers(&contents);
    tracing::info!(path = %path.display(), servers = servers.len(), "Server list loaded");
    if servers.is_empty() {
        tracing::warn!(path = %path.display(), "Server list is empty");
    }
    Ok(servers)
}
