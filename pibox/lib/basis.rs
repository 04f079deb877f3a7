//! Normalized particle-in-a-box eigenfunctions.

use ndarray as nd;
use crate::config::Grid;

/// Normalized eigenfunctions of the infinite square well over `[0, L]`,
///
/// ```text
/// φ_n(ξ) = √(2/L) sin(n π ξ / L)
/// ```
///
/// with local coordinate ξ = x − xmin and quantum number n = 1, …, size. The
/// normalization constant √(2/L) and spatial frequency π/L are computed once
/// at construction and reused for every evaluation. Sampling is exact
/// trigonometric evaluation, never interpolation.
#[derive(Copy, Clone, Debug)]
pub struct Basis {
    // √(2/L)
    norm: f64,
    // π/L
    freq: f64,
    // number of basis functions
    size: usize,
}

impl Basis {
    /// Create a basis of `size` functions for a box of width `l`.
    pub fn new(l: f64, size: usize) -> Self {
        Self {
            norm: (2.0 / l).sqrt(),
            freq: std::f64::consts::PI / l,
            size,
        }
    }

    /// Get the number of basis functions.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.size }

    /// Evaluate φ_n at the local coordinate `xi`, for quantum number
    /// `n = 1, …, size`.
    pub fn eval(&self, n: usize, xi: f64) -> f64 {
        self.norm * (n as f64 * self.freq * xi).sin()
    }

    /// Sample φ_n over a grid, subtracting `xmin` to obtain the local
    /// coordinate.
    pub fn sample(&self, n: usize, grid: &Grid, xmin: f64) -> nd::Array1<f64> {
        grid.get_x().mapv(|xk| self.eval(n, xk - xmin))
    }

    /// Sample every basis function over a grid; row `n − 1` holds φ_n.
    pub fn sample_all(&self, grid: &Grid, xmin: f64) -> nd::Array2<f64> {
        let mut table: nd::Array2<f64>
            = nd::Array2::zeros((self.size, grid.len()));
        for (k, mut row) in table.rows_mut().into_iter().enumerate() {
            row.assign(&self.sample(k + 1, grid, xmin));
        }
        table
    }
}
