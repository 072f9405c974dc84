//! Group fairness metrics.
//!
//! Rows are split by sensitive attribute, each group gets a confusion matrix
//! and six derived rates, and the rates are then reduced across groups into
//! disparity scores.
//!
//! # Overview
//!
//! - [`partition`] - splits row indices by group value (natural or explicit order)
//! - [`metrics`] - confusion counts and per-group rates
//! - [`summary`] - cross-group spans and ratios
//!
//! # Undefined values
//!
//! A rate whose denominator is zero is `f64::NAN`. Nothing in this module
//! returns an error for arithmetic reasons; NaN simply propagates into the
//! report and is rendered as `nan` (pretty) or `null` (JSON).
//!
//! # Metrics Reference
//!
//! | Metric | Formula | Glossary |
//! |--------|---------|----------|
//! | selection_rate | (TP + FP) / n | fraction predicted positive |
//! | tpr | TP / (TP + FN) | recall, sensitivity |
//! | fpr | FP / (FP + TN) | false alarms |
//! | ppv | TP / (TP + FP) | precision |
//! | tnr | TN / (TN + FP) | specificity |
//! | fnr | FN / (FN + TP) | miss rate |

pub mod metrics;
pub mod partition;
pub(crate) mod serde_nan;
pub mod summary;

pub use metrics::{safe_div, ConfusionCounts, GroupMetrics};
pub use partition::GroupPartition;
pub use summary::{span, SummaryMetrics};
