//! Plain-text report for the terminal.

use std::io::Write;

use crate::aggregate::{Report, VersionSummary};

/// One report line, e.g.
/// `Application: svc, Version: 1.0, Success Rate: 95.00%`.
pub fn format_line(summary: &VersionSummary) -> String {
    match summary.success_rate {
        Some(rate) => format!(
            "Application: {}, Version: {}, Success Rate: {:.2}%",
            summary.application,
            summary.version,
            rate * 100.0
        ),
        None => format!(
            "Application: {}, Version: {}, Success Rate: n/a",
            summary.application, summary.version
        ),
    }
}

/// Write every line of the report to `out`.
pub fn write_report<W: Write>(report: &Report, out: &mut W) -> std::io::Result<()> {
    for summary in report.iter() {
        writeln!(out, "{}", format_line(summary))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        let report: Report = vec![
            VersionSummary { application: "svc".into(), version: "2.0".into(), success_rate: Some(1.0) },
            VersionSummary { application: "svc".into(), version: "1.0".into(), success_rate: Some(0.95) },
            VersionSummary { application: "idle".into(), version: "0.1".into(), success_rate: None },
        ]
        .into_iter()
        .collect();

        let mut out: Vec<u8> = Vec::new();
        write_report(&report, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Application: idle, Version: 0.1, Success Rate: n/a\n\
             Application: svc, Version: 1.0, Success Rate: 95.00%\n\
             Application: svc, Version: 2.0, Success Rate: 100.00%\n"
        );
    }

    #[test]
    fn test_rounding() {
        let summary = VersionSummary {
            application: "a".into(),
            version: "v".into(),
            success_rate: Some(2.0 / 3.0),
        };
        assert_eq!(format_line(&summary), "Application: a, Version: v, Success Rate: 66.67%");
    }
}
