//! Test utilities for fairaudit-core.
//!
//! Shared fixtures for unit tests. Only compiled when running tests.

use crate::fairness::GroupMetrics;
use crate::label::{labels, Label};

/// Absolute tolerance for float comparisons in tests.
pub const TOLERANCE: f64 = 1e-9;

/// Asserts two finite floats are equal within [`TOLERANCE`].
///
/// # Panics
///
/// Panics with both values in the message when they differ.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Builds a `GroupMetrics` with the rates that summary metrics read.
///
/// `tnr` and `fnr` are filled in as the complements of `fpr` and `tpr`.
pub fn group_with_rates(
    name: &str,
    selection_rate: f64,
    tpr: f64,
    fpr: f64,
    ppv: f64,
) -> GroupMetrics {
    GroupMetrics {
        group: Label::from(name),
        count: 10,
        selection_rate,
        tpr,
        fpr,
        ppv,
        tnr: 1.0 - fpr,
        fnr: 1.0 - tpr,
    }
}

/// The eight-sample, two-group dataset used across the crate's tests.
///
/// Returns `(y_true, y_pred, sensitive)`.
pub fn binary_groups_fixture() -> (Vec<Label>, Vec<Label>, Vec<Label>) {
    (
        labels([0, 1, 1, 0, 1, 0, 1, 0]),
        labels([0, 1, 0, 0, 1, 0, 1, 1]),
        labels(["A", "A", "B", "B", "A", "B", "A", "B"]),
    )
}
