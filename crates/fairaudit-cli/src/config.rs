//! Mapping of command-line values onto report options.
//!
//! Values typed on the command line are strings, while CSV columns are typed
//! by inference. Before comparison, strings are coerced to the type of the
//! column they refer to:
//! - Integer columns: parsed as a float, then truncated (`"1.0"` -> `1`)
//! - Float columns: parsed as a float
//! - Boolean and text columns: kept as text
//!
//! A value that fails to parse stays text. That is not an error: it just
//! never matches, so every row counts as negative.
//!
//! Group names also accept `true`/`false` (any case) for boolean columns, so
//! `--group_order` can list the groups of a boolean sensitive attribute.

use crate::dataset::{self, Column, ColumnKind};
use fairaudit_core::{Label, ReportOptions};
use tracing::warn;

/// Coerces a command-line string to the type of `column`.
pub fn coerce_label(raw: &str, column: &Column) -> Label {
    let numeric = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite());
    match (column.kind, numeric) {
        (ColumnKind::Int, Some(v)) => Label::Int(v.trunc() as i64),
        (ColumnKind::Float, Some(v)) => Label::Float(v),
        (kind, _) => {
            if kind.is_numeric() {
                warn!(
                    "'{}' is not numeric; it will not match any value of column '{}'",
                    raw, column.name
                );
            }
            Label::from(raw)
        }
    }
}

/// Coerces a `--group_order` entry to the type of the sensitive column.
pub fn coerce_group(raw: &str, column: &Column) -> Label {
    match (column.kind, dataset::parse_bool(raw.trim())) {
        (ColumnKind::Bool, Some(value)) => Label::Bool(value),
        (ColumnKind::Bool, None) => {
            warn!(
                "'{}' is not a boolean; it will not match any value of column '{}'",
                raw, column.name
            );
            Label::from(raw)
        }
        _ => coerce_label(raw, column),
    }
}

/// Builds calculator options from CLI values.
///
/// `positive_label` is coerced against the truth column with
/// [`coerce_label`], every `group_order` entry against the sensitive column
/// with [`coerce_group`].
pub fn build_options(
    positive_label: &str,
    group_order: Option<&[String]>,
    dropna_groups: bool,
    truth: &Column,
    sensitive: &Column,
) -> ReportOptions {
    let options = ReportOptions::default()
        .with_positive_label(coerce_label(positive_label, truth))
        .with_dropna_groups(dropna_groups);

    match group_order {
        Some(order) => options.with_group_order(
            order
                .iter()
                .map(|group| coerce_group(group, sensitive))
                .collect(),
        ),
        None => options,
    }
}
