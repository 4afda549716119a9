//! Error types for preprocessing operations.

use thiserror::Error;

/// Error type for preprocessing operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreprocessingError {
    /// Input could not be coerced into a 2D numeric array.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// `transform` (or `inverse_transform`) called before `fit`.
    #[error("{0} is not fitted: call `fit` before using it")]
    NotFitted(&'static str),
    /// Empty data provided where non-empty was required.
    #[error("Empty data: {0}")]
    EmptyData(String),
    /// Feature dimension mismatch between fit and transform.
    #[error("Feature mismatch: expected {expected_features} features, got {got_features}")]
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },
    /// Invalid hyperparameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// The forward transform discarded information needed to invert it.
    #[error("Not invertible: {0}")]
    NotInvertible(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PreprocessingError>;
