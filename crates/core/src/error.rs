use serde::Serialize;
use thiserror::Error;

use crate::case::Case;

/// Error type for every conversion in this crate
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseError {
    /// The input was rejected before any transformation ran.
    #[error("Invalid input: {0}")]
    InvalidInput(InvalidInputReason),

    /// The transformation itself failed.
    #[error("Error processing the input as {case}: {message}")]
    Processing { case: Case, message: String },
}

impl CaseError {
    /// Wrap an internal failure with the conversion it happened in.
    pub fn processing(case: Case, err: impl std::fmt::Display) -> Self {
        CaseError::Processing {
            case,
            message: err.to_string(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CaseError::InvalidInput(_))
    }
}

impl From<InvalidInputReason> for CaseError {
    fn from(reason: InvalidInputReason) -> Self {
        CaseError::InvalidInput(reason)
    }
}

/// Why a [`crate::ValidationPolicy`] rejected an input
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidInputReason {
    #[error("input cannot be empty")]
    Empty,

    #[error("non-ASCII character {ch:?} at position {index}")]
    NonAscii { ch: char, index: usize },

    #[error("input must start with an English letter, found {ch:?}")]
    LeadingNonLetter { ch: char },

    #[error("input needs at least {min} letters or digits, found {found}")]
    TooShort { min: usize, found: usize },

    #[error("input contains no letters or digits")]
    NoAlphanumeric,

    #[error("too many special characters ({ratio:.2} > {limit:.2}), please try an English sentence")]
    TooManySpecialCharacters { ratio: f64, limit: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display_includes_reason() {
        let err = CaseError::from(InvalidInputReason::TooShort { min: 2, found: 1 });
        assert_eq!(
            err.to_string(),
            "Invalid input: input needs at least 2 letters or digits, found 1"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_special_ratio_display_rounds() {
        let reason = InvalidInputReason::TooManySpecialCharacters {
            ratio: 2.0 / 3.0,
            limit: 0.5,
        };
        assert_eq!(
            reason.to_string(),
            "too many special characters (0.67 > 0.50), please try an English sentence"
        );
    }

    #[test]
    fn test_processing_wraps_message() {
        let err = CaseError::processing(Case::Camel, std::fmt::Error);
        assert!(!err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Error processing the input as camelCase: an error occurred when formatting an argument"
        );
    }

    #[test]
    fn test_serialize_unit_reason() {
        let err = CaseError::from(InvalidInputReason::Empty);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({ "invalid_input": "empty" }));
    }

    #[test]
    fn test_serialize_struct_reason() {
        let err = CaseError::from(InvalidInputReason::LeadingNonLetter { ch: '1' });
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "invalid_input": { "leading_non_letter": { "ch": "1" } } })
        );
    }

    #[test]
    fn test_serialize_processing() {
        let err = CaseError::processing(Case::Dot, "boom");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "processing": { "case": "dot", "message": "boom" } })
        );
    }
}
