//! JSON report file.

use std::fs;
use std::path::Path;

use crate::aggregate::Report;
use crate::output::ReportError;

/// Serialize the report as indented JSON and overwrite `path`.
pub fn save_report(report: &Report, path: &Path) -> Result<(), ReportError> {
    let data = serde_json::to_string_pretty(report).map_err(ReportError::Serialize)?;
    fs::write(path, data).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), entries = report.len(), "Report saved");
    Ok(())
}

/// Read back a report written by [`save_report`].
pub fn load_report(path: &Path) -> Result<Report, ReportError> {
    let data = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(ReportError::Deserialize)
}
