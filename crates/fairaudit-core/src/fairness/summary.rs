//! Cross-group disparity metrics.
//!
//! Each summary value reduces one per-group rate to a single number: either a
//! span (max − min) or a ratio (min / max). NaN rates are ignored by the
//! reduction, the same way `nanmax`/`nanmin` behave in array libraries.

use super::metrics::{safe_div, GroupMetrics};
use super::serde_nan;
use serde::{Deserialize, Serialize};

/// Disparity scores across all groups of a report.
///
/// Every value is NaN when the report has fewer than two groups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// max(selection_rate) − min(selection_rate)
    #[serde(deserialize_with = "serde_nan::deserialize")]
    pub demographic_parity_difference: f64,
    /// min(selection_rate) / max(selection_rate)
    #[serde(deserialize_with = "serde_nan::deserialize")]
    pub disparate_impact_ratio: f64,
    /// max(TPR) − min(TPR)
    #[serde(deserialize_with = "serde_nan::deserialize")]
    pub equal_opportunity_difference: f64,
    /// max(TPR span, FPR span)
    #[serde(deserialize_with = "serde_nan::deserialize")]
    pub equalized_odds_difference: f64,
    /// max(PPV) − min(PPV)
    #[serde(deserialize_with = "serde_nan::deserialize")]
    pub predictive_parity_difference: f64,
}

impl SummaryMetrics {
    /// All-NaN summary, used when there is nothing to compare.
    pub fn undefined() -> Self {
        Self {
            demographic_parity_difference: f64::NAN,
            disparate_impact_ratio: f64::NAN,
            equal_opportunity_difference: f64::NAN,
            equalized_odds_difference: f64::NAN,
            predictive_parity_difference: f64::NAN,
        }
    }

    /// Reduces per-group metrics into disparity scores.
    pub fn from_groups(groups: &[GroupMetrics]) -> Self {
        if groups.len() < 2 {
            return Self::undefined();
        }

        let tpr_span = span(groups.iter().map(|g| g.tpr));
        let fpr_span = span(groups.iter().map(|g| g.fpr));

        Self {
            demographic_parity_difference: span(groups.iter().map(|g| g.selection_rate)),
            disparate_impact_ratio: min_over_max(groups.iter().map(|g| g.selection_rate)),
            equal_opportunity_difference: tpr_span,
            // f64::max returns the other operand when one side is NaN
            equalized_odds_difference: tpr_span.max(fpr_span),
            predictive_parity_difference: span(groups.iter().map(|g| g.ppv)),
        }
    }

    /// Summary values in serialized order, paired with their names.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            (
                "demographic_parity_difference",
                self.demographic_parity_difference,
            ),
            ("disparate_impact_ratio", self.disparate_impact_ratio),
            (
                "equal_opportunity_difference",
                self.equal_opportunity_difference,
            ),
            ("equalized_odds_difference", self.equalized_odds_difference),
            (
                "predictive_parity_difference",
                self.predictive_parity_difference,
            ),
        ]
    }
}

/// NaN-ignoring (min, max). `None` if no value is finite.
fn finite_bounds<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |bounds, v| match bounds {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Spread (max − min) of the non-NaN values; NaN when there are none.
///
/// ```
/// use fairaudit_core::fairness::span;
///
/// assert_eq!(span([0.25, f64::NAN, 0.75]), 0.5);
/// assert!(span([f64::NAN]).is_nan());
/// ```
pub fn span<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    finite_bounds(values).map_or(f64::NAN, |(lo, hi)| hi - lo)
}

fn min_over_max<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    finite_bounds(values).map_or(f64::NAN, |(lo, hi)| safe_div(lo, hi))
}
