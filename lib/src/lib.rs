//! # feature-scaling
//!
//! Column-wise feature scaling for 2D numeric datasets (rows = samples,
//! columns = features).
//!
//! ## Core Design Principles
//!
//! - **Explicit fit state**: scalers are either unfitted or hold the
//!   parameters of their last fit; transforming before fitting is an error,
//!   not a numeric fault.
//! - **Flexible input**: anything that looks like a matrix (`ndarray` arrays,
//!   nested `Vec`s, fixed-size arrays, rows of numeric text) is coerced once
//!   into an `Array2<f64>`.
//! - **Literal degenerate handling**: by default a constant column makes the
//!   whole output zero; per-column handling is opt-in.
//!
//! ## Quick Start
//!
//! ```rust
//! use feature_scaling::preprocessing::{MinMaxScaler, StandardScaler, Transformer};
//!
//! let data = [[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]];
//!
//! let mut minmax = MinMaxScaler::new();
//! let scaled = minmax.fit_transform(&data)?;
//! assert_eq!(scaled.row(1).to_vec(), vec![0.5, 0.5]);
//!
//! let mut standard = StandardScaler::new();
//! let z = standard.fit_transform(&data)?;
//! assert_eq!(z.row(1).to_vec(), vec![0.0, 0.0]);
//! # Ok::<(), feature_scaling::preprocessing::PreprocessingError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `preprocessing`: transformers, input coercion, errors
//! - `ops`: column reductions and row-broadcast arithmetic

/// Column-wise numeric helpers shared by the transformers.
pub mod ops;

/// Data preprocessing transformers.
pub mod preprocessing;

pub use preprocessing::{
    DegeneratePolicy, MinMaxScaler, PreprocessingError, StandardScaler, Transformer,
};
