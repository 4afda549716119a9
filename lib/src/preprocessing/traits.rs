//! The shared transformer contract.
//!
//! Implementors provide the array-level operations (`*_array`); the provided
//! methods coerce arbitrary input once via [`coerce`] and delegate.

use crate::preprocessing::coerce::{coerce, AsDataset};
use crate::preprocessing::error::Result;
use ndarray::{Array2, ArrayView2};

/// A stateful column-wise transformer.
///
/// A transformer starts unfitted. `fit` learns per-column parameters and may
/// be called again at any time to replace them. `transform` only reads the
/// learned parameters, so a fitted transformer can be shared across threads.
///
/// # Example
/// ```
/// use feature_scaling::preprocessing::{MinMaxScaler, Transformer};
///
/// let mut scaler = MinMaxScaler::new();
/// let scaled = scaler.fit_transform(&[[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]])?;
/// assert_eq!(scaled[[1, 0]], 0.5);
/// # Ok::<(), feature_scaling::preprocessing::PreprocessingError>(())
/// ```
pub trait Transformer {
    /// Learn parameters from an already-coerced dataset.
    ///
    /// # Errors
    /// Returns [`PreprocessingError::EmptyData`](crate::preprocessing::PreprocessingError::EmptyData)
    /// if `data` has no rows. On error the previous state is left untouched.
    fn fit_array(&mut self, data: ArrayView2<'_, f64>) -> Result<()>;

    /// Apply the learned parameters to an already-coerced dataset.
    ///
    /// # Errors
    /// - `NotFitted` if called before a successful `fit`
    /// - `FeatureMismatch` if the column count differs from the fitted one
    fn transform_array(&self, data: ArrayView2<'_, f64>) -> Result<Array2<f64>>;

    /// Map transformed values back to the original feature space.
    fn inverse_transform_array(&self, data: ArrayView2<'_, f64>) -> Result<Array2<f64>>;

    /// Number of features seen during the last fit, `None` while unfitted.
    fn n_features_in(&self) -> Option<usize>;

    /// Returns true once `fit` has succeeded.
    fn is_fitted(&self) -> bool {
        self.n_features_in().is_some()
    }

    /// Coerce `input` and learn parameters from it.
    fn fit<'a, X: AsDataset<'a>>(&mut self, input: X) -> Result<()>
    where
        Self: Sized,
    {
        let data = coerce(input)?;
        self.fit_array(data.view())
    }

    /// Coerce `input` and scale it with the learned parameters.
    fn transform<'a, X: AsDataset<'a>>(&self, input: X) -> Result<Array2<f64>>
    where
        Self: Sized,
    {
        let data = coerce(input)?;
        self.transform_array(data.view())
    }

    /// Coerce `input` once, fit on it, then transform it.
    fn fit_transform<'a, X: AsDataset<'a>>(&mut self, input: X) -> Result<Array2<f64>>
    where
        Self: Sized,
    {
        let data = coerce(input)?;
        self.fit_array(data.view())?;
        self.transform_array(data.view())
    }

    /// Coerce `input` and undo the transformation.
    fn inverse_transform<'a, X: AsDataset<'a>>(&self, input: X) -> Result<Array2<f64>>
    where
        Self: Sized,
    {
        let data = coerce(input)?;
        self.inverse_transform_array(data.view())
    }
}
