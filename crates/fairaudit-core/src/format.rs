//! Human-readable report rendering.
//!
//! Produces a right-aligned table of per-group metrics, a bullet list of
//! summary metrics and a trailing metadata line. Rates use
//! [`DISPLAY_PRECISION`] decimals and undefined values print as [`NAN_TEXT`].

use crate::config::{
    COLUMN_SEPARATOR, DISPLAY_PRECISION, EMPTY_REPORT_TEXT, GROUP_COLUMNS, NAN_TEXT,
};
use crate::fairness::GroupMetrics;
use crate::report::{BiasReport, ReportMetadata};

/// Formats a rate with fixed precision, or `nan` when undefined.
///
/// ```
/// use fairaudit_core::format::format_rate;
///
/// assert_eq!(format_rate(1.0 / 3.0), "0.3333");
/// assert_eq!(format_rate(f64::NAN), "nan");
/// ```
pub fn format_rate(value: f64) -> String {
    if value.is_nan() {
        NAN_TEXT.to_string()
    } else {
        format!("{:.prec$}", value, prec = DISPLAY_PRECISION)
    }
}

/// Renders the full pretty report.
///
/// Returns [`EMPTY_REPORT_TEXT`] when the report has no groups.
pub fn format_pretty(report: &BiasReport) -> String {
    if report.by_group.is_empty() {
        return EMPTY_REPORT_TEXT.to_string();
    }

    let summary_lines: Vec<String> = report
        .summary
        .entries()
        .iter()
        .map(|(name, value)| format!("  - {}: {}", name, format_rate(*value)))
        .collect();

    format!(
        "Group metrics:\n{}\n\nSummary metrics:\n{}\n\n{}",
        format_group_table(&report.by_group),
        summary_lines.join("\n"),
        format_metadata(&report.metadata)
    )
}

/// Renders the per-group table, header included.
pub fn format_group_table(groups: &[GroupMetrics]) -> String {
    let rows: Vec<Vec<String>> = groups
        .iter()
        .map(|g| {
            let mut cells = vec![g.group.to_string(), g.count.to_string()];
            cells.extend(g.rates().iter().map(|&r| format_rate(r)));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = GROUP_COLUMNS.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = GROUP_COLUMNS.iter().map(|h| h.to_string()).collect();
    std::iter::once(&header)
        .chain(rows.iter())
        .map(|cells| align_row(cells, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn align_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

fn format_metadata(metadata: &ReportMetadata) -> String {
    format!(
        "(metadata: n_samples={}, n_groups={}, positive_label={})",
        metadata.n_samples, metadata.n_groups, metadata.positive_label
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fairness::SummaryMetrics;
    use crate::label::Label;
    use crate::test_utils::group_with_rates;

    fn report_with(groups: Vec<GroupMetrics>) -> BiasReport {
        let summary = SummaryMetrics::from_groups(&groups);
        BiasReport {
            metadata: ReportMetadata {
                n_samples: groups.iter().map(|g| g.count).sum(),
                n_groups: groups.len(),
                positive_label: Label::Int(1),
            },
            by_group: groups,
            summary,
        }
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.5), "0.5000");
        assert_eq!(format_rate(1.0), "1.0000");
        assert_eq!(format_rate(0.0), "0.0000");
        assert_eq!(format_rate(f64::NAN), "nan");
    }

    #[test]
    fn test_empty_report() {
        let report = report_with(Vec::new());
        assert_eq!(format_pretty(&report), "<no groups>");
    }

    #[test]
    fn test_table_header_and_alignment() {
        let table = format_group_table(&[
            group_with_rates("A", 0.75, 1.0, 0.0, 1.0),
            group_with_rates("longer", 0.25, f64::NAN, 0.5, 0.0),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            " group  count  selection_rate     tpr     fpr     ppv     tnr     fnr"
        );
        assert_eq!(
            lines[1],
            "     A     10          0.7500  1.0000  0.0000  1.0000  1.0000  0.0000"
        );
        assert_eq!(
            lines[2],
            "longer     10          0.2500     nan  0.5000  0.0000  0.5000     nan"
        );
    }

    #[test]
    fn test_pretty_sections() {
        let report = report_with(vec![
            group_with_rates("A", 0.75, 1.0, 0.0, 1.0),
            group_with_rates("B", 0.25, 0.5, 0.5, 0.5),
        ]);
        let output = format_pretty(&report);

        assert!(output.starts_with("Group metrics:\n"));
        assert!(output.contains("\n\nSummary metrics:\n"));
        assert!(output.contains("  - demographic_parity_difference: 0.5000"));
        assert!(output.contains("  - disparate_impact_ratio: 0.3333"));
        assert!(output.contains("  - equalized_odds_difference: 0.5000"));
        assert!(output.ends_with("(metadata: n_samples=20, n_groups=2, positive_label=1)"));
    }

    #[test]
    fn test_pretty_single_group_summary_is_nan() {
        let report = report_with(vec![group_with_rates("A", 0.5, 0.5, 0.5, 0.5)]);
        let output = format_pretty(&report);
        assert!(output.contains("  - predictive_parity_difference: nan"));
    }
}
