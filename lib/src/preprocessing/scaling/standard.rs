//! Standard Scaler (Z-score normalization).
//!
//! Transforms features by removing the mean and scaling to unit variance.
//!
//! The standard score of a sample `x` is calculated as:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the mean of the training samples, and `s` is their population
//! standard deviation (divided by `n`, not `n - 1`).
//!
//! # Example
//! ```
//! use feature_scaling::preprocessing::{StandardScaler, Transformer};
//!
//! let mut scaler = StandardScaler::new();
//! let z = scaler.fit_transform(&[[1.0], [2.0], [3.0]])?;
//! assert!((z[[2, 0]] - 1.224744871391589).abs() < 1e-12);
//! # Ok::<(), feature_scaling::preprocessing::PreprocessingError>(())
//! ```

use crate::ops;
use crate::preprocessing::error::{PreprocessingError, Result};
use crate::preprocessing::scaling::DegeneratePolicy;
use crate::preprocessing::state::FitState;
use crate::preprocessing::traits::Transformer;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};
use tracing::debug;

const NAME: &str = "StandardScaler";

/// Configuration for StandardScaler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardScalerConfig {
    /// If true, center the data before scaling.
    pub with_mean: bool,
    /// If true, scale the data to unit variance.
    pub with_std: bool,
    /// Behaviour when a fitted column has zero standard deviation.
    pub degenerate: DegeneratePolicy,
}

impl Default for StandardScalerConfig {
    fn default() -> Self {
        Self {
            with_mean: true,
            with_std: true,
            degenerate: DegeneratePolicy::default(),
        }
    }
}

/// Parameters learned by [`StandardScaler::fit`](Transformer::fit).
#[derive(Clone, Debug, PartialEq)]
pub struct StandardParams {
    /// Mean of each feature.
    pub mean: Array1<f64>,
    /// Population standard deviation of each feature.
    pub std: Array1<f64>,
}

impl StandardParams {
    /// Number of features seen during fit.
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }
}

/// Standardizes each feature to zero mean and unit variance.
#[derive(Clone, Debug, Default)]
pub struct StandardScaler {
    config: StandardScalerConfig,
    state: FitState<StandardParams>,
}

impl StandardScaler {
    /// Create a new StandardScaler with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unfitted scaler from a configuration.
    ///
    /// Every combination of flags is valid, so this never fails today; it
    /// returns `Result` to match [`MinMaxScaler::from_config`](super::MinMaxScaler::from_config).
    pub fn from_config(config: StandardScalerConfig) -> Result<Self> {
        Ok(Self {
            config,
            state: FitState::Unfitted,
        })
    }

    /// Set whether to center data by mean.
    pub fn with_mean(mut self, with_mean: bool) -> Self {
        self.config.with_mean = with_mean;
        self
    }

    /// Set whether to scale data to unit variance.
    pub fn with_std(mut self, with_std: bool) -> Self {
        self.config.with_std = with_std;
        self
    }

    /// Set how zero-variance columns are handled.
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.config.degenerate = policy;
        self
    }

    pub fn config(&self) -> &StandardScalerConfig {
        &self.config
    }

    /// Learned parameters, if fitted.
    pub fn params(&self) -> Option<&StandardParams> {
        self.state.get()
    }

    /// Per-feature mean, if fitted.
    pub fn mean(&self) -> Option<ArrayView1<'_, f64>> {
        self.params().map(|p| p.mean.view())
    }

    /// Per-feature population standard deviation, if fitted.
    pub fn std(&self) -> Option<ArrayView1<'_, f64>> {
        self.params().map(|p| p.std.view())
    }

    fn fitted_for(&self, data: &ArrayView2<'_, f64>) -> Result<&StandardParams> {
        let params = self.state.require(NAME)?;
        if data.ncols() != params.n_features() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: params.n_features(),
                got_features: data.ncols(),
            });
        }
        Ok(params)
    }

    /// Zero-std columns, or none when scaling by std is disabled.
    fn degenerate_columns(&self, params: &StandardParams) -> Vec<usize> {
        if self.config.with_std {
            ops::degenerate_columns(params.std.view())
        } else {
            Vec::new()
        }
    }
}

impl Transformer for StandardScaler {
    fn fit_array(&mut self, data: ArrayView2<'_, f64>) -> Result<()> {
        let (n_samples, n_features) = data.dim();

        if n_samples == 0 {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit StandardScaler on empty data".to_string(),
            ));
        }

        let params = StandardParams {
            mean: ops::col_mean(data),
            std: ops::col_std(data, 0),
        };

        debug!(n_samples, n_features, "StandardScaler fitted");
        self.state.set(params);
        Ok(())
    }

    fn transform_array(&self, data: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        let params = self.fitted_for(&data)?;
        let degenerate = self.degenerate_columns(params);

        if !degenerate.is_empty() && self.config.degenerate == DegeneratePolicy::WholeArray {
            debug!(?degenerate, "zero-variance column, StandardScaler output zeroed");
            return Ok(Array2::zeros(data.raw_dim()));
        }

        let mut result = data.to_owned();

        if self.config.with_mean {
            result = ops::broadcast_sub(result.view(), params.mean.view());
        }

        if self.config.with_std {
            let divisor = params.std.mapv(|s| if s == 0.0 { 1.0 } else { s });
            result = ops::broadcast_div(result.view(), divisor.view());
            for &j in &degenerate {
                result.column_mut(j).fill(0.0);
            }
        }

        Ok(result)
    }

    fn inverse_transform_array(&self, data: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        let params = self.fitted_for(&data)?;
        let degenerate = self.degenerate_columns(params);

        if !degenerate.is_empty() && self.config.degenerate == DegeneratePolicy::WholeArray {
            return Err(PreprocessingError::NotInvertible(format!(
                "columns {:?} have zero variance and every column was zeroed",
                degenerate
            )));
        }

        let mut result = data.to_owned();

        if self.config.with_std {
            result = ops::broadcast_mul(result.view(), params.std.view());
        }

        if self.config.with_mean {
            result = ops::broadcast_add(result.view(), params.mean.view());
        }

        Ok(result)
    }

    fn n_features_in(&self) -> Option<usize> {
        self.params().map(StandardParams::n_features)
    }
}
