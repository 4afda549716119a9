//! Data preprocessing transformers.
//!
//! Transformers follow a fit/transform contract: `fit` learns per-column
//! statistics from a training dataset, `transform` applies them to any
//! dataset with the same number of columns.
//!
//! # Design
//!
//! - **Explicit state**: each transformer holds a [`FitState`]; using it
//!   before `fit` yields [`PreprocessingError::NotFitted`].
//! - **One coercion point**: every entry point passes its input through
//!   [`coerce`] once, so nested `Vec`s, fixed-size arrays and `ndarray`
//!   arrays are all accepted.
//! - **sklearn-like API**: `fit`, `transform`, `fit_transform`,
//!   `inverse_transform`.
//!
//! # Available Transformers
//!
//! - [`MinMaxScaler`]: Scale to [0, 1] or a custom range
//! - [`StandardScaler`]: Z-score normalization
//!
//! # Example
//!
//! ```
//! use feature_scaling::preprocessing::{MinMaxScaler, Transformer};
//!
//! let mut scaler = MinMaxScaler::new();
//! scaler.fit(&vec![vec![1, 5], vec![1, 10]])?;
//!
//! // Column 0 is constant, so the whole output is zeroed
//! let out = scaler.transform(&[[1, 7]])?;
//! assert_eq!(out.row(0).to_vec(), vec![0.0, 0.0]);
//! # Ok::<(), feature_scaling::preprocessing::PreprocessingError>(())
//! ```

pub mod coerce;
pub mod error;
pub mod scaling;
pub mod state;
pub mod traits;

pub use coerce::{coerce, AsDataset, DatasetElement, DatasetRow};
pub use error::{PreprocessingError, Result};
pub use scaling::{
    DegeneratePolicy, MinMaxParams, MinMaxScaler, MinMaxScalerConfig, StandardParams,
    StandardScaler, StandardScalerConfig,
};
pub use state::FitState;
pub use traits::Transformer;
