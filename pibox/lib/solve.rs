//! Diagonalization of the assembled Hamiltonian and the end-to-end solver
//! pipeline.
//!
//! A run is a single linear pass, `Config` → grid → Hamiltonian →
//! eigendecomposition; there are no retries or checkpoints, and any failure
//! aborts the run with no partial output.

use ndarray as nd;
use ndarray_linalg::{ self as la, EighInto };
use crate::{
    basis::Basis,
    config::{ Config, Grid },
    error::{ NonFiniteError, SolveError },
    hamiltonian,
};

pub type SolveResult<T> = Result<T, SolveError>;

/// Diagonalize a real symmetric matrix: eigenvalues in ascending order, the
/// eigenvector for eigenvalue `i` in column `i` with unit 2-norm.
///
/// Columns are mutually orthogonal for exactly symmetric input; within a
/// degenerate subspace any orthonormal basis may come back. Fails with
/// [`SolveError::NonFinite`] if the matrix contains a non-finite entry and
/// with [`SolveError::Linalg`] if the factorization does not converge.
pub fn eigh_ascending(H: nd::Array2<f64>)
    -> SolveResult<(nd::Array1<f64>, nd::Array2<f64>)>
{
    NonFiniteError::check_matrix(&H)?;
    let (evals, evecs): (nd::Array1<f64>, nd::Array2<f64>)
        = H.eigh_into(la::UPLO::Lower)?;
    Ok((evals, evecs))
}

/// Complete solution of a single run.
///
/// Energies are ascending; column `v` of the coefficient matrix holds the
/// expansion of state `v` over the box basis. Each column has unit norm and
/// columns are mutually orthogonal within floating precision; the overall
/// sign of a column follows the LAPACK convention and is not otherwise
/// constrained.
#[derive(Clone, Debug)]
pub struct Solution {
    // quadrature grid of the run
    grid: Grid,
    // basis the coefficient columns refer to
    basis: Basis,
    // lower window bound, origin of the basis' local coordinate
    xmin: f64,
    // ascending eigenvalues
    energies: nd::Array1<f64>,
    // eigenvector columns
    coeffs: nd::Array2<f64>,
}

impl Solution {
    /// Get a reference to the quadrature grid.
    pub fn get_grid(&self) -> &Grid { &self.grid }

    /// Get a reference to the ascending eigenvalues.
    pub fn get_energies(&self) -> &nd::Array1<f64> { &self.energies }

    /// Get a reference to the eigenvector matrix (column per state).
    pub fn get_coeffs(&self) -> &nd::Array2<f64> { &self.coeffs }

    /// Get the number of states (the basis size).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.energies.len() }

    /// Get the energy of state `v`.
    pub fn energy(&self, v: usize) -> f64 { self.energies[v] }

    /// Reconstruct the real-space wavefunction of state `v` on the grid,
    /// `ψ_v(x_k) = Σ_j c_jv φ_{j+1}(x_k − xmin)`.
    pub fn eigenfunction(&self, v: usize) -> nd::Array1<f64> {
        let phi = self.basis.sample_all(&self.grid, self.xmin);
        phi.t().dot(&self.coeffs.column(v))
    }
}

/// Master pipeline: build the grid, assemble `H = K + P`, diagonalize.
pub fn solve(cfg: &Config) -> SolveResult<Solution> {
    let grid = Grid::from_config(cfg);
    let H = hamiltonian::assemble(cfg, &grid)?;
    let (energies, coeffs) = eigh_ascending(H)?;
    Ok(Solution {
        basis: Basis::new(cfg.width(), cfg.get_nbasis()),
        xmin: cfg.get_xmin(),
        grid,
        energies,
        coeffs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eigh_orders_ascending_with_orthonormal_columns() {
        let H = nd::array![[2.0, 1.0], [1.0, 2.0]];
        let (evals, evecs) = eigh_ascending(H).unwrap();
        assert!((evals[0] - 1.0).abs() < 1e-12);
        assert!((evals[1] - 3.0).abs() < 1e-12);
        let c0 = evecs.column(0);
        let c1 = evecs.column(1);
        assert!((c0.dot(&c0) - 1.0).abs() < 1e-12, "columns have unit norm");
        assert!((c1.dot(&c1) - 1.0).abs() < 1e-12, "columns have unit norm");
        assert!(c0.dot(&c1).abs() < 1e-12, "columns are orthogonal");
    }

    #[test]
    fn eigh_rejects_non_finite_input() {
        let H = nd::array![[1.0, f64::NAN], [f64::NAN, 1.0]];
        let res = eigh_ascending(H);
        assert!(matches!(res, Err(SolveError::NonFinite(_))));
    }
}
