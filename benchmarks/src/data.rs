//! Deterministic synthetic datasets.
//!
//! Values are produced by a fixed linear congruential sequence so every run
//! benchmarks identical inputs.

use ndarray::Array2;

struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Top 53 bits -> [0, 1)
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// A `(rows, cols)` matrix where column `j` spans roughly `[0, 10^(j % 4 + 1))`.
pub fn synthetic_matrix(rows: usize, cols: usize) -> Array2<f64> {
    let mut rng = Lcg(0x5eed);
    Array2::from_shape_fn((rows, cols), |(_, j)| {
        rng.next_f64() * 10f64.powi((j % 4) as i32 + 1)
    })
}

/// The same data as [`synthetic_matrix`] as nested rows.
pub fn synthetic_rows(rows: usize, cols: usize) -> Vec<Vec<f64>> {
    synthetic_matrix(rows, cols)
        .rows()
        .into_iter()
        .map(|row| row.to_vec())
        .collect()
}
