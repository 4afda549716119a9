//! Scaling transformers for feature normalization.
//!
//! | Transformer | Description |
//! |-------------|-------------|
//! | [`MinMaxScaler`] | Scale each feature to [0, 1] or a custom range |
//! | [`StandardScaler`] | Z-score normalization (mean=0, std=1) |
//!
//! # Degenerate columns
//!
//! A column whose values are all identical has zero range and zero standard
//! deviation, so it cannot be scaled. [`DegeneratePolicy`] selects what
//! happens then. The default, [`DegeneratePolicy::WholeArray`], returns an
//! all-zero array of the input's shape as soon as any fitted column is
//! degenerate, even though the remaining columns could be scaled.
//!
//! # Example
//!
//! ```
//! use feature_scaling::preprocessing::{StandardScaler, Transformer};
//!
//! let mut scaler = StandardScaler::new();
//! scaler.fit(&[[1.0], [2.0], [3.0]])?;
//! let z = scaler.transform(&[[2.0]])?;
//! assert_eq!(z[[0, 0]], 0.0);
//! # Ok::<(), feature_scaling::preprocessing::PreprocessingError>(())
//! ```

pub mod minmax;
pub mod standard;

pub use minmax::{MinMaxParams, MinMaxScaler, MinMaxScalerConfig};
pub use standard::{StandardParams, StandardScaler, StandardScalerConfig};

use serde::{Deserialize, Serialize};

/// How a scaler treats columns with zero range / zero standard deviation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Any degenerate column zeroes the entire output.
    #[default]
    WholeArray,
    /// Only degenerate columns are replaced; the rest are scaled normally.
    PerColumn,
}
