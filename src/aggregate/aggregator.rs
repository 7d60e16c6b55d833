//! Fold probe records into per-version summaries.

use std::collections::HashMap;

use crate::aggregate::report::{Report, VersionSummary};
use crate::health::ProbeRecord;

/// Aggregation state keyed by `(application, version)`.
///
/// Last write wins: each record replaces the summary for its key, so when
/// several servers report the same pair the result depends on the order in
/// which their records arrive.
#[derive(Debug, Default)]
pub struct Aggregator {
    summaries: HashMap<(String, String), VersionSummary>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the state.
    pub fn observe(&mut self, record: &ProbeRecord) {
        let key = (record.application.clone(), record.version.clone());
        let rate = record.success_rate();

        if rate.is_none() {
            tracing::debug!(
                application = %record.application,
                version = %record.version,
                "Record reports zero requests, success rate undefined"
            );
        }

        self.summaries
            .entry(key)
            .and_modify(|summary| summary.success_rate = rate)
            .or_insert_with(|| VersionSummary {
                application: record.application.clone(),
                version: record.version.clone(),
                success_rate: rate,
            });
    }

    /// Number of distinct pairs seen so far.
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Produce the nested report.
    pub fn finish(self) -> Report {
        self.summaries.into_values().collect()
    }
}

/// Aggregate a whole batch of records in iteration order.
pub fn aggregate<'a, I>(records: I) -> Report
where
    I: IntoIterator<Item = &'a ProbeRecord>,
{
    let mut aggregator = Aggregator::new();
    for record in records {
        aggregator.observe(record);
    }
    aggregator.finish()
}
