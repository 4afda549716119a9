//! Benchmark utilities for feature-scaling.
//!
//! - Deterministic synthetic datasets in both array and nested-`Vec` form

pub mod data;

pub use data::{synthetic_matrix, synthetic_rows};
