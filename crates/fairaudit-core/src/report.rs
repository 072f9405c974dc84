//! Bias report construction.
//!
//! [`BiasReport::from_arrays`] is the library entry point: it validates the
//! aligned input arrays, normalizes labels against the positive class,
//! partitions rows by sensitive attribute and computes per-group and summary
//! metrics in a single pass.
//!
//! # Example
//!
//! ```
//! use fairaudit_core::label::labels;
//! use fairaudit_core::report::{BiasReport, ReportInput, ReportOptions};
//!
//! let y_true = labels([0, 1, 1, 0, 1, 0, 1, 0]);
//! let y_pred = labels([0, 1, 0, 0, 1, 0, 1, 1]);
//! let groups = labels(["A", "A", "B", "B", "A", "B", "A", "B"]);
//!
//! let input = ReportInput::new(&y_true, &groups).with_predictions(&y_pred);
//! let report = BiasReport::from_arrays(&input, &ReportOptions::default()).unwrap();
//!
//! assert_eq!(report.metadata.n_samples, 8);
//! assert_eq!(report.by_group.len(), 2);
//! ```

use crate::config::{DEFAULT_POSITIVE_LABEL, JSON_INDENT};
use crate::error::ReportError;
use crate::fairness::{ConfusionCounts, GroupMetrics, GroupPartition, SummaryMetrics};
use crate::format;
use crate::label::Label;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Aligned input arrays for a report.
///
/// Exactly one prediction source is used: hard predictions when present,
/// otherwise scores compared against a threshold.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    /// Ground-truth labels
    pub y_true: &'a [Label],
    /// Hard predicted labels
    pub y_pred: Option<&'a [Label]>,
    /// Scores or probabilities for the positive class
    pub y_score: Option<&'a [f64]>,
    /// Cut-off turning scores into predictions (`score >= threshold`)
    pub threshold: Option<f64>,
    /// Sensitive attribute (group) per sample
    pub sensitive: &'a [Label],
}

impl<'a> ReportInput<'a> {
    /// Creates an input with no prediction source yet.
    pub fn new(y_true: &'a [Label], sensitive: &'a [Label]) -> Self {
        Self {
            y_true,
            y_pred: None,
            y_score: None,
            threshold: None,
            sensitive,
        }
    }

    /// Uses hard predicted labels.
    pub fn with_predictions(mut self, y_pred: &'a [Label]) -> Self {
        self.y_pred = Some(y_pred);
        self
    }

    /// Uses scores thresholded at `threshold`.
    pub fn with_scores(mut self, y_score: &'a [f64], threshold: f64) -> Self {
        self.y_score = Some(y_score);
        self.threshold = Some(threshold);
        self
    }
}

/// Calculator configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Value treated as the positive class in truth and predicted labels
    pub positive_label: Label,
    /// Explicit group enumeration; groups not listed are excluded
    pub group_order: Option<Vec<Label>>,
    /// Drop rows whose sensitive value is missing before counting samples
    pub dropna_groups: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            positive_label: Label::Int(DEFAULT_POSITIVE_LABEL),
            group_order: None,
            dropna_groups: false,
        }
    }
}

impl ReportOptions {
    pub fn with_positive_label(mut self, label: impl Into<Label>) -> Self {
        self.positive_label = label.into();
        self
    }

    pub fn with_group_order(mut self, order: Vec<Label>) -> Self {
        self.group_order = Some(order);
        self
    }

    pub fn with_dropna_groups(mut self, dropna: bool) -> Self {
        self.dropna_groups = dropna;
        self
    }
}

/// Facts about the evaluated dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Samples considered, after dropping missing groups if requested
    pub n_samples: usize,
    /// Number of non-empty groups in `by_group`
    pub n_groups: usize,
    /// Positive class the labels were compared against
    pub positive_label: Label,
}

/// Per-group fairness metrics plus cross-group disparities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasReport {
    pub by_group: Vec<GroupMetrics>,
    pub summary: SummaryMetrics,
    pub metadata: ReportMetadata,
}

/// How predictions are turned into booleans.
enum PredictionSource<'a> {
    Labels(&'a [Label]),
    Scores { scores: &'a [f64], threshold: f64 },
}

impl PredictionSource<'_> {
    fn len(&self) -> usize {
        match self {
            PredictionSource::Labels(labels) => labels.len(),
            PredictionSource::Scores { scores, .. } => scores.len(),
        }
    }

    fn is_positive(&self, row: usize, positive_label: &Label) -> bool {
        match self {
            PredictionSource::Labels(labels) => labels[row].matches(positive_label),
            // NaN compares false, so a missing score is a negative prediction
            PredictionSource::Scores { scores, threshold } => scores[row] >= *threshold,
        }
    }
}

impl BiasReport {
    /// Builds a report from aligned arrays.
    ///
    /// # Errors
    ///
    /// - [`ReportError::MissingPredictions`] if neither `y_pred` nor
    ///   `y_score` with `threshold` is set
    /// - [`ReportError::LengthMismatch`] if the arrays differ in length
    /// - [`ReportError::DuplicateGroup`] if `group_order` repeats a group
    ///
    /// Zero denominators are not errors; the affected rates are NaN.
    #[instrument(skip_all, fields(samples = input.y_true.len()))]
    pub fn from_arrays(
        input: &ReportInput<'_>,
        options: &ReportOptions,
    ) -> Result<Self, ReportError> {
        let predictions = match (input.y_pred, input.y_score, input.threshold) {
            (Some(labels), _, _) => PredictionSource::Labels(labels),
            (None, Some(scores), Some(threshold)) => PredictionSource::Scores { scores, threshold },
            _ => return Err(ReportError::MissingPredictions),
        };

        if input.y_true.len() != predictions.len() || input.y_true.len() != input.sensitive.len() {
            return Err(ReportError::LengthMismatch {
                y_true: input.y_true.len(),
                predictions: predictions.len(),
                sensitive: input.sensitive.len(),
            });
        }

        let rows: Vec<usize> = (0..input.y_true.len())
            .filter(|&row| !(options.dropna_groups && input.sensitive[row].is_missing()))
            .collect();
        let dropped = input.y_true.len() - rows.len();
        if dropped > 0 {
            debug!("Dropped {} rows with missing group", dropped);
        }

        let partition = match &options.group_order {
            Some(order) => GroupPartition::ordered(input.sensitive, rows.iter().copied(), order)?,
            None => GroupPartition::natural(input.sensitive, rows.iter().copied()),
        };
        if partition.unassigned() > 0 {
            warn!(
                "{} rows belong to no reported group (missing or not in group_order)",
                partition.unassigned()
            );
        }

        let positive = &options.positive_label;
        let by_group: Vec<GroupMetrics> = partition
            .iter()
            .map(|(group, group_rows)| {
                let counts = ConfusionCounts::from_pairs(group_rows.iter().map(|&row| {
                    (
                        input.y_true[row].matches(positive),
                        predictions.is_positive(row, positive),
                    )
                }));
                debug!(
                    group = %group,
                    rows = group_rows.len(),
                    ?counts,
                    "Computed group confusion counts"
                );
                GroupMetrics::from_counts(group.clone(), &counts)
            })
            .collect();

        let summary = SummaryMetrics::from_groups(&by_group);
        let metadata = ReportMetadata {
            n_samples: rows.len(),
            n_groups: by_group.len(),
            positive_label: positive.clone(),
        };

        Ok(Self {
            by_group,
            summary,
            metadata,
        })
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// Undefined rates are written as `null`.
    pub fn to_json(&self) -> Result<String, ReportError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| ReportError::Serialization(e.to_string()))
    }

    /// Parses a report previously written by [`to_json`](Self::to_json).
    ///
    /// `null` rates are read back as NaN.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        serde_json::from_str(json).map_err(|e| ReportError::InvalidJson(e.to_string()))
    }

    /// Renders the report as human-readable text tables.
    pub fn to_pretty(&self) -> String {
        format::format_pretty(self)
    }
}
