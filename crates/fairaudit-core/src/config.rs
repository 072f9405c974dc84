//! Report configuration constants.
//!
//! These values define the default calculator behavior and the exact text
//! layout of rendered reports. The CLI and the renderers both read them, so
//! changing one here changes every output consistently.
//!
//! # Usage
//!
//! ```
//! use fairaudit_core::config::{DISPLAY_PRECISION, NAN_TEXT};
//!
//! let cell = format!("{:.prec$}", 0.25_f64, prec = DISPLAY_PRECISION);
//! assert_eq!(cell, "0.2500");
//! assert_eq!(NAN_TEXT, "nan");
//! ```

// =============================================================================
// Calculator Defaults
// =============================================================================

/// Positive class used by [`ReportOptions::default`](crate::report::ReportOptions).
///
/// Integer `1`, the usual encoding of the positive class in 0/1 label arrays.
pub const DEFAULT_POSITIVE_LABEL: i64 = 1;

/// Positive label string accepted by the CLI when none is given.
///
/// The CLI coerces it to the truth column's type before comparison.
pub const DEFAULT_POSITIVE_LABEL_TEXT: &str = "1";

// =============================================================================
// Rendering
// =============================================================================

/// Decimal places for every rate in pretty output.
pub const DISPLAY_PRECISION: usize = 4;

/// Text shown in place of an undefined (NaN) rate.
pub const NAN_TEXT: &str = "nan";

/// Column order of the per-group table.
pub const GROUP_COLUMNS: [&str; 8] = [
    "group",
    "count",
    "selection_rate",
    "tpr",
    "fpr",
    "ppv",
    "tnr",
    "fnr",
];

/// Separator between table columns.
pub const COLUMN_SEPARATOR: &str = "  ";

/// Pretty output of a report without any group.
pub const EMPTY_REPORT_TEXT: &str = "<no groups>";

/// Indent used by [`BiasReport::to_json`](crate::report::BiasReport::to_json).
pub const JSON_INDENT: &[u8] = b"  ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_columns_start_with_identity_fields() {
        assert_eq!(GROUP_COLUMNS[0], "group");
        assert_eq!(GROUP_COLUMNS[1], "count");
        assert_eq!(GROUP_COLUMNS.len(), 8);
    }

    #[test]
    fn test_default_label_text_matches_numeric_default() {
        let parsed: i64 = DEFAULT_POSITIVE_LABEL_TEXT.parse().unwrap();
        assert_eq!(parsed, DEFAULT_POSITIVE_LABEL);
    }
}
