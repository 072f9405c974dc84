//! # Fairaudit Core
//!
//! Group fairness metrics from ground-truth labels, predictions (or scores)
//! and a sensitive attribute.
//!
//! This crate holds the metric computation and report rendering, designed to
//! be reusable from other tools as well as the `fairaudit` CLI.
//!
//! ## Modules
//!
//! - [`report`] - Library entry point: [`BiasReport::from_arrays`]
//! - [`fairness`] - Confusion counts, per-group rates and cross-group disparities
//! - [`label`] - Dynamically-typed label values with numeric cross-type equality
//! - [`format`] - Pretty text rendering
//! - [`config`] - Defaults and rendering constants
//! - [`error`] - Validation errors

pub mod config;
pub mod error;
pub mod fairness;
pub mod format;
pub mod label;
pub mod report;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::ReportError;
pub use fairness::{GroupMetrics, SummaryMetrics};
pub use label::Label;
pub use report::{BiasReport, ReportInput, ReportMetadata, ReportOptions};
