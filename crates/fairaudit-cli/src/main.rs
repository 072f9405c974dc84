//! Fairaudit CLI - group fairness metrics for a CSV file.
//!
//! # Usage
//!
//! ```bash
//! # Hard predictions
//! fairaudit --csv data.csv --y_true label --y_pred pred --sensitive gender
//!
//! # Scores with a threshold, JSON output
//! fairaudit --csv data.csv --y_true label --y_score prob --threshold 0.5 \
//!     --sensitive gender --json
//!
//! # Show help
//! fairaudit --help
//! ```

mod config;
mod dataset;
mod output;

use anyhow::Result;
use clap::{ArgGroup, Parser};
use dataset::Dataset;
use fairaudit_core::config::DEFAULT_POSITIVE_LABEL_TEXT;
use fairaudit_core::{BiasReport, ReportInput};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Bias check: basic group fairness metrics.
///
/// Reads labels, predictions (or scores) and a sensitive attribute from a
/// CSV file and reports per-group rates plus cross-group disparities.
#[derive(Parser, Debug)]
#[command(name = "fairaudit", version, about)]
#[command(group(
    ArgGroup::new("prediction")
        .required(true)
        .args(["y_pred", "y_score"])
))]
struct Cli {
    /// Path to CSV with columns
    #[arg(long, value_name = "PATH")]
    csv: PathBuf,

    /// Column with ground truth labels
    #[arg(long = "y_true", value_name = "COL")]
    y_true: String,

    /// Column with predicted labels
    #[arg(long = "y_pred", value_name = "COL")]
    y_pred: Option<String>,

    /// Column with predicted scores/probabilities (0..1)
    #[arg(long = "y_score", value_name = "COL", requires = "threshold")]
    y_score: Option<String>,

    /// Threshold for scores -> label (required with --y_score)
    #[arg(long)]
    threshold: Option<f64>,

    /// Column with sensitive attribute (group)
    #[arg(long, value_name = "COL")]
    sensitive: String,

    /// Value to treat as positive label
    #[arg(long = "positive_label", default_value = DEFAULT_POSITIVE_LABEL_TEXT)]
    positive_label: String,

    /// Explicit group order for output (comma-separated); unlisted groups are excluded
    #[arg(long = "group_order", value_delimiter = ',')]
    group_order: Option<Vec<String>>,

    /// Drop rows with a missing sensitive attribute
    #[arg(long = "dropna_groups")]
    dropna_groups: bool,

    /// Output JSON instead of pretty table
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays parseable
    let default_level = if cli.verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    println!("{}", run(&cli)?);
    Ok(())
}

/// Loads the CSV, builds the report and renders it.
fn run(cli: &Cli) -> Result<String> {
    let data = Dataset::from_path(&cli.csv)?;
    info!("Loaded {} rows from {}", data.len(), cli.csv.display());

    let truth = data.column(&cli.y_true)?;
    let sensitive = data.column(&cli.sensitive)?;
    let options = config::build_options(
        &cli.positive_label,
        cli.group_order.as_deref(),
        cli.dropna_groups,
        truth,
        sensitive,
    );

    let input = ReportInput::new(&truth.values, &sensitive.values);
    let scores;
    let input = match (&cli.y_pred, &cli.y_score, cli.threshold) {
        (Some(pred), _, _) => input.with_predictions(&data.column(pred)?.values),
        (None, Some(score), Some(threshold)) => {
            scores = data.column(score)?.scores()?;
            input.with_scores(&scores, threshold)
        }
        // clap enforces a prediction source; the builder reports anything else
        _ => input,
    };

    let report = BiasReport::from_arrays(&input, &options)?;
    info!(
        "Computed metrics for {} groups over {} samples",
        report.metadata.n_groups, report.metadata.n_samples
    );

    output::render(&report, cli.json)
}
