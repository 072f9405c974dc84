//! Error types for fairaudit-core.
//!
//! Only input validation can fail. Arithmetic edge cases (zero denominators)
//! are never errors; they surface as NaN rates instead.

use thiserror::Error;

/// Errors that can occur while building a [`BiasReport`](crate::report::BiasReport).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// Neither hard predictions nor scores with a threshold were supplied
    #[error("Provide either y_pred, or y_score+threshold")]
    MissingPredictions,
    /// Input sequences are not aligned
    #[error(
        "y_true, y_pred/y_score, and sensitive must have the same length \
         (y_true={y_true}, predictions={predictions}, sensitive={sensitive})"
    )]
    LengthMismatch {
        y_true: usize,
        predictions: usize,
        sensitive: usize,
    },
    /// The explicit group ordering names a group more than once
    #[error("Duplicate group in group_order: {0}")]
    DuplicateGroup(String),
    /// Failed to render the report as JSON
    #[error("Failed to serialize report: {0}")]
    Serialization(String),
    /// Report JSON could not be parsed
    #[error("Invalid report JSON: {0}")]
    InvalidJson(String),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Serialization(err.to_string())
    }
}

impl From<ReportError> for String {
    fn from(err: ReportError) -> String {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message_names_all_lengths() {
        let err = ReportError::LengthMismatch {
            y_true: 8,
            predictions: 7,
            sensitive: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("y_true=8"));
        assert!(msg.contains("predictions=7"));
        assert!(msg.contains("same length"));
    }

    #[test]
    fn test_json_errors_name_their_direction() {
        let parse = ReportError::InvalidJson("EOF while parsing".to_string());
        assert_eq!(parse.to_string(), "Invalid report JSON: EOF while parsing");

        let render = ReportError::Serialization("key must be a string".to_string());
        assert!(render.to_string().starts_with("Failed to serialize report"));
    }

    #[test]
    fn test_error_into_string() {
        let s: String = ReportError::MissingPredictions.into();
        assert_eq!(s, "Provide either y_pred, or y_score+threshold");
    }
}
