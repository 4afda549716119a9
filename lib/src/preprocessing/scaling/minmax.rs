//! Min-Max Scaler.
//!
//! Transforms features by scaling each feature to a given range (default [0, 1]).
//!
//! The transformation is given by:
//! ```text
//! X_scaled = (X - X_min) / (X_max - X_min) * (max - min) + min
//! ```
//!
//! # Example
//! ```
//! use feature_scaling::preprocessing::{MinMaxScaler, Transformer};
//!
//! let mut scaler = MinMaxScaler::new();
//! let scaled = scaler.fit_transform(&[[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]])?;
//! assert_eq!(scaled.row(2).to_vec(), vec![1.0, 1.0]);
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

const NAME: &str = "MinMaxScaler";

/// Configuration for MinMaxScaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinMaxScalerConfig {
    /// Target range `(min, max)` of the scaled features.
    pub feature_range: (f64, f64),
    /// Behaviour when a fitted column has zero range.
    pub degenerate: DegeneratePolicy,
}

impl Default for MinMaxScalerConfig {
    fn default() -> Self {
        Self {
            feature_range: (0.0, 1.0),
            degenerate: DegeneratePolicy::default(),
        }
    }
}

impl MinMaxScalerConfig {
    /// Check that the target range is finite and non-empty.
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = self.feature_range;
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(PreprocessingError::InvalidParameter(format!(
                "feature_range must be finite with min < max, got ({}, {})",
                lo, hi
            )));
        }
        Ok(())
    }
}

/// Parameters learned by [`MinMaxScaler::fit`](Transformer::fit).
#[derive(Clone, Debug, PartialEq)]
pub struct MinMaxParams {
    /// Minimum of each feature.
    pub minimum: Array1<f64>,
    /// Maximum of each feature.
    pub maximum: Array1<f64>,
}

impl MinMaxParams {
    /// `maximum - minimum` for each feature.
    pub fn data_range(&self) -> Array1<f64> {
        &self.maximum - &self.minimum
    }

    /// Number of features seen during fit.
    pub fn n_features(&self) -> usize {
        self.minimum.len()
    }
}

/// Scales each feature into a fixed range using the per-column minimum and
/// maximum seen during fit.
#[derive(Clone, Debug, Default)]
pub struct MinMaxScaler {
    config: MinMaxScalerConfig,
    state: FitState<MinMaxParams>,
}

impl MinMaxScaler {
    /// Create a new MinMaxScaler with default range [0, 1].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unfitted scaler from a validated configuration.
    pub fn from_config(config: MinMaxScalerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: FitState::Unfitted,
        })
    }

    /// Set the target range for scaling.
    ///
    /// Under [`DegeneratePolicy::WholeArray`] the zero fallback still yields
    /// `0.0`, even when `0.0` lies outside `[min, max]`.
    ///
    /// # Errors
    /// `InvalidParameter` unless both bounds are finite and `min < max`.
    pub fn with_range(mut self, min: f64, max: f64) -> Result<Self> {
        self.config.feature_range = (min, max);
        self.config.validate()?;
        Ok(self)
    }

    /// Set how zero-range columns are handled.
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.config.degenerate = policy;
        self
    }

    pub fn config(&self) -> &MinMaxScalerConfig {
        &self.config
    }

    /// Learned parameters, if fitted.
    pub fn params(&self) -> Option<&MinMaxParams> {
        self.state.get()
    }

    /// Per-feature minimum, if fitted.
    pub fn minimum(&self) -> Option<ArrayView1<'_, f64>> {
        self.params().map(|p| p.minimum.view())
    }

    /// Per-feature maximum, if fitted.
    pub fn maximum(&self) -> Option<ArrayView1<'_, f64>> {
        self.params().map(|p| p.maximum.view())
    }

    /// Per-feature range (max - min), if fitted.
    pub fn data_range(&self) -> Option<Array1<f64>> {
        self.params().map(MinMaxParams::data_range)
    }

    fn fitted_for(&self, data: &ArrayView2<'_, f64>) -> Result<&MinMaxParams> {
        let params = self.state.require(NAME)?;
        if data.ncols() != params.n_features() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: params.n_features(),
                got_features: data.ncols(),
            });
        }
        Ok(params)
    }
}

impl Transformer for MinMaxScaler {
    fn fit_array(&mut self, data: ArrayView2<'_, f64>) -> Result<()> {
        let (n_samples, n_features) = data.dim();

        if n_samples == 0 {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit MinMaxScaler on empty data".to_string(),
            ));
        }

        let params = MinMaxParams {
            minimum: ops::col_min(data),
            maximum: ops::col_max(data),
        };

        debug!(n_samples, n_features, "MinMaxScaler fitted");
        self.state.set(params);
        Ok(())
    }

    fn transform_array(&self, data: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        let params = self.fitted_for(&data)?;
        let range = params.data_range();
        let degenerate = ops::degenerate_columns(range.view());

        if !degenerate.is_empty() && self.config.degenerate == DegeneratePolicy::WholeArray {
            debug!(?degenerate, "zero-range column, MinMaxScaler output zeroed");
            return Ok(Array2::zeros(data.raw_dim()));
        }

        // Zero-range columns are overwritten below; divide them by 1.
        let divisor = range.mapv(|r| if r == 0.0 { 1.0 } else { r });
        let centered = ops::broadcast_sub(data, params.minimum.view());
        let mut scaled = ops::broadcast_div(centered.view(), divisor.view());
        for &j in &degenerate {
            scaled.column_mut(j).fill(0.0);
        }

        let (lo, hi) = self.config.feature_range;
        scaled.mapv_inplace(|v| v * (hi - lo) + lo);
        Ok(scaled)
    }

    fn inverse_transform_array(&self, data: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        let params = self.fitted_for(&data)?;
        let range = params.data_range();
        let degenerate = ops::degenerate_columns(range.view());

        if !degenerate.is_empty() && self.config.degenerate == DegeneratePolicy::WholeArray {
            return Err(PreprocessingError::NotInvertible(format!(
                "columns {:?} have zero range and every column was zeroed",
                degenerate
            )));
        }

        // X = (X_scaled - min) / (max - min) * data_range + X_min
        let (lo, hi) = self.config.feature_range;
        let unit = data.mapv(|v| (v - lo) / (hi - lo));
        let spread = ops::broadcast_mul(unit.view(), range.view());
        Ok(ops::broadcast_add(spread.view(), params.minimum.view()))
    }

    fn n_features_in(&self) -> Option<usize> {
        self.params().map(MinMaxParams::n_features)
    }
}
