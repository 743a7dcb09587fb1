//! Error types shared by the threat and clock modules.

use thiserror::Error;

/// Errors returned by threat scoring and time conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument was outside the domain the operation accepts.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what's wrong with the input
        message: String,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// An hour value that does not fall within `[0, 24)`.
    pub fn time_out_of_range(name: &str, value: f64) -> Self {
        Self::invalid_input(format!(
            "{} must be between 0 and 24 hours, got {}",
            name, value
        ))
    }

    /// A sampling parameter or weight that is NaN or infinite.
    pub fn non_finite(name: &str, value: f64) -> Self {
        Self::invalid_input(format!("{} must be finite, got {}", name, value))
    }

    /// Score and importance slices of different lengths.
    pub fn length_mismatch(scores: usize, weights: usize) -> Self {
        Self::invalid_input(format!(
            "department scores ({}) and importances ({}) differ in length",
            scores, weights
        ))
    }

    /// A sampling range with no integers in it.
    pub fn empty_sample_range(low: i64, high: i64) -> Self {
        Self::invalid_input(format!("sample range [{}, {}) is empty", low, high))
    }

    /// A mean requested over no values.
    pub fn empty_scores() -> Self {
        Self::invalid_input("cannot score a department with no samples")
    }

    /// Returns true for `InvalidInput` errors.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
