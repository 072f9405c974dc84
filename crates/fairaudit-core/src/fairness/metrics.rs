//! Confusion counts and per-group rates.

use super::serde_nan;
use crate::label::Label;
use serde::{Deserialize, Serialize};

/// Divides `numerator` by `denominator`, returning NaN for a zero denominator.
///
/// Every rate in the crate goes through this helper, so division by zero
/// never panics and never yields infinity.
///
/// ```
/// use fairaudit_core::fairness::safe_div;
///
/// assert_eq!(safe_div(1.0, 4.0), 0.25);
/// assert!(safe_div(0.0, 0.0).is_nan());
/// ```
#[inline]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        f64::NAN
    } else {
        numerator / denominator
    }
}

/// Binary confusion matrix for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionCounts {
    /// Tallies `(truth, prediction)` pairs, both already normalized to booleans.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (bool, bool)>,
    {
        let mut counts = Self::default();
        for (truth, predicted) in pairs {
            counts.record(truth, predicted);
        }
        counts
    }

    /// Adds one sample to the matrix.
    pub fn record(&mut self, truth: bool, predicted: bool) {
        match (truth, predicted) {
            (true, true) => self.true_positives += 1,
            (false, true) => self.false_positives += 1,
            (false, false) => self.true_negatives += 1,
            (true, false) => self.false_negatives += 1,
        }
    }

    /// Number of samples recorded.
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    /// Number of samples predicted positive.
    pub fn predicted_positive(&self) -> usize {
        self.true_positives + self.false_positives
    }

    pub fn selection_rate(&self) -> f64 {
        safe_div(self.predicted_positive() as f64, self.total() as f64)
    }

    /// TP / (TP + FN)
    pub fn tpr(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    /// FP / (FP + TN)
    pub fn fpr(&self) -> f64 {
        ratio(self.false_positives, self.false_positives + self.true_negatives)
    }

    /// TP / (TP + FP)
    pub fn ppv(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    /// TN / (TN + FP)
    pub fn tnr(&self) -> f64 {
        ratio(self.true_negatives, self.true_negatives + self.false_positives)
    }

    /// FN / (FN + TP)
    pub fn fnr(&self) -> f64 {
        ratio(self.false_negatives, self.false_negatives + self.true_positives)
    }
}

#[inline]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    safe_div(numerator as f64, denominator as f64)
}

/// Fairness rates for a single group.
///
/// Field order is the serialized (and tabulated) column order. Rates are in
/// `[0, 1]` or NaN when the underlying denominator is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMetrics {
    /// Group value as found in the sensitive attribute
    pub group: Label,
    /// Number of samples in the group (always > 0)
    pub count: usize,
    /// P(ŷ=1 | G)
    #[serde(deserialize_with = "serde_nan::deserialize")]
    pub selection_rate: f64,
    /// P(ŷ=1 | Y=1, G)
    #[serde(deserialize_with = "serde_nan::deserialize")]
    pub tpr: f64,
    /// P(ŷ=1 | Y=0, G)
    #[serde(deserialize_with = "serde_nan::deserialize")]
    pub fpr: f64,
    /// P(Y=1 | ŷ=1, G)
    #[serde(deserialize_with = "serde_nan::deserialize")]
    pub ppv: f64,
    /// P(ŷ=0 | Y=0, G)
    #[serde(deserialize_with = "serde_nan::deserialize")]
    pub tnr: f64,
    /// P(ŷ=0 | Y=1, G)
    #[serde(deserialize_with = "serde_nan::deserialize")]
    pub fnr: f64,
}

impl GroupMetrics {
    /// Derives all six rates from a group's confusion counts.
    pub fn from_counts(group: Label, counts: &ConfusionCounts) -> Self {
        Self {
            group,
            count: counts.total(),
            selection_rate: counts.selection_rate(),
            tpr: counts.tpr(),
            fpr: counts.fpr(),
            ppv: counts.ppv(),
            tnr: counts.tnr(),
            fnr: counts.fnr(),
        }
    }

    /// Rates in column order, without the group identity fields.
    pub fn rates(&self) -> [f64; 6] {
        [
            self.selection_rate,
            self.tpr,
            self.fpr,
            self.ppv,
            self.tnr,
            self.fnr,
        ]
    }
}
