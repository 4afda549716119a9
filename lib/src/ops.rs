//! Column-wise reductions and row-broadcast arithmetic over 2D arrays.
//!
//! All reductions run along `Axis(0)`: one value per column (feature).
//! Broadcast helpers apply a per-column vector to every row.
//!
//! Callers are expected to reject empty inputs before reducing; on an input
//! with zero rows the reductions return their identity element
//! (`+inf` for min, `-inf` for max, `0.0` for mean and std).

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Minimum of each column.
pub fn col_min(data: ArrayView2<'_, f64>) -> Array1<f64> {
    data.fold_axis(Axis(0), f64::INFINITY, |&acc, &x| acc.min(x))
}

/// Maximum of each column.
pub fn col_max(data: ArrayView2<'_, f64>) -> Array1<f64> {
    data.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &x| acc.max(x))
}

/// Arithmetic mean of each column.
pub fn col_mean(data: ArrayView2<'_, f64>) -> Array1<f64> {
    data.mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(data.ncols()))
}

/// Standard deviation of each column with `ddof` delta degrees of freedom.
///
/// `ddof = 0` gives the population standard deviation (divide by `n`).
pub fn col_std(data: ArrayView2<'_, f64>, ddof: usize) -> Array1<f64> {
    if data.nrows() <= ddof {
        return Array1::zeros(data.ncols());
    }
    data.std_axis(Axis(0), ddof as f64)
}

/// `data[i, j] - v[j]` for every row.
pub fn broadcast_sub(data: ArrayView2<'_, f64>, v: ArrayView1<'_, f64>) -> Array2<f64> {
    &data - &v
}

/// `data[i, j] / v[j]` for every row.
pub fn broadcast_div(data: ArrayView2<'_, f64>, v: ArrayView1<'_, f64>) -> Array2<f64> {
    &data / &v
}

/// `data[i, j] * v[j]` for every row.
pub fn broadcast_mul(data: ArrayView2<'_, f64>, v: ArrayView1<'_, f64>) -> Array2<f64> {
    &data * &v
}

/// `data[i, j] + v[j]` for every row.
pub fn broadcast_add(data: ArrayView2<'_, f64>, v: ArrayView1<'_, f64>) -> Array2<f64> {
    &data + &v
}

/// Indices of the columns whose spread (range or std) is exactly zero.
pub fn degenerate_columns(spread: ArrayView1<'_, f64>) -> Vec<usize> {
    spread
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == 0.0)
        .map(|(j, _)| j)
        .collect()
}
