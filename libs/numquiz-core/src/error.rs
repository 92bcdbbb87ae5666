//! Error types for numquiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised by question generation, word conversion and input parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("invalid range [{min}, {max}]: {reason}")]
    InvalidRange {
        min: i64,
        max: i64,
        reason: &'static str,
    },

    #[error("{0} is outside the supported range 0..=9999 for word conversion")]
    UnsupportedMagnitude(i64),

    #[error("cannot parse {input:?} as a number")]
    ParseFailure { input: String },
}

impl QuizError {
    pub(crate) fn invalid_range(min: i64, max: i64, reason: &'static str) -> Self {
        Self::InvalidRange { min, max, reason }
    }
}
