//! Fit-state tracking shared by all transformers.
//!
//! ```text
//! Unfitted --fit--> Fitted(params) --fit--> Fitted(params')
//! ```
//!
//! Re-fitting replaces the parameters wholesale; nothing accumulates across
//! calls.

use crate::preprocessing::error::{PreprocessingError, Result};

/// Whether a transformer has learned its parameters yet.
#[derive(Clone, Debug, PartialEq)]
pub enum FitState<P> {
    /// No parameters learned yet.
    Unfitted,
    /// Parameters learned by the most recent successful `fit`.
    Fitted(P),
}

impl<P> Default for FitState<P> {
    fn default() -> Self {
        FitState::Unfitted
    }
}

impl<P> FitState<P> {
    /// Returns true once parameters have been learned.
    pub fn is_fitted(&self) -> bool {
        matches!(self, FitState::Fitted(_))
    }

    /// Borrow the fitted parameters, if any.
    pub fn get(&self) -> Option<&P> {
        match self {
            FitState::Unfitted => None,
            FitState::Fitted(params) => Some(params),
        }
    }

    /// Borrow the fitted parameters, or fail with `NotFitted` naming `owner`.
    pub fn require(&self, owner: &'static str) -> Result<&P> {
        self.get().ok_or(PreprocessingError::NotFitted(owner))
    }

    /// Replace the current state with freshly learned parameters.
    pub fn set(&mut self, params: P) {
        *self = FitState::Fitted(params);
    }
}
