//! Output formatting for bias reports.
//!
//! Supports both human-readable terminal output and JSON for scripting.

use anyhow::{Context, Result};
use fairaudit_core::BiasReport;

/// Formats a report as pretty-printed JSON.
pub fn format_json(report: &BiasReport) -> Result<String> {
    report.to_json().context("Failed to render report as JSON")
}

/// Formats a report for human-readable terminal output.
pub fn format_human(report: &BiasReport) -> String {
    report.to_pretty()
}

/// Formats a report in the requested mode.
pub fn render(report: &BiasReport, json: bool) -> Result<String> {
    if json {
        format_json(report)
    } else {
        Ok(format_human(report))
    }
}
