//! Report types.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Success rate of one (application, version) pair.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    pub application: String,
    pub version: String,

    /// `success / requests` from the last record seen for this pair.
    /// `None` when that record reported zero requests; serialized as `null`.
    pub success_rate: Option<f64>,
}

/// Aggregated report: application → version → summary.
///
/// Both levels are sorted maps so iteration and serialization order are
/// stable for a given set of summaries.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Report {
    applications: BTreeMap<String, BTreeMap<String, VersionSummary>>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the summary for its (application, version) pair.
    pub fn insert(&mut self, summary: VersionSummary) {
        self.applications
            .entry(summary.application.clone())
            .or_default()
            .insert(summary.version.clone(), summary);
    }

    pub fn get(&self, application: &str, version: &str) -> Option<&VersionSummary> {
        self.applications.get(application)?.get(version)
    }

    /// Versions reported for one application.
    pub fn versions(&self, application: &str) -> Option<&BTreeMap<String, VersionSummary>> {
        self.applications.get(application)
    }

    /// Application names, sorted.
    pub fn applications(&self) -> impl Iterator<Item = &str> {
        self.applications.keys().map(String::as_str)
    }

    /// All summaries in (application, version) order.
    pub fn iter(&self) -> impl Iterator<Item = &VersionSummary> {
        self.applications.values().flat_map(|versions| versions.values())
    }

    /// Number of (application, version) pairs.
    pub fn len(&self) -> usize {
        self.applications.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }
}

impl FromIterator<VersionSummary> for Report {
    fn from_iter<I: IntoIterator<Item = VersionSummary>>(iter: I) -> Self {
        let mut report = Report::new();
        for summary in iter {
            report.insert(summary);
        }
        report
    }
}
