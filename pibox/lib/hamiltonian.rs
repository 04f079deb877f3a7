//! Assembly of the projected Hamiltonian matrix.
//!
//! The Hamiltonian splits as `H = K + P`: an exact diagonal kinetic-energy
//! term plus a numerically-integrated potential-energy term `⟨φ_i|V|φ_j⟩`.
//! `K` is diagonal because the box functions are eigenfunctions of the
//! kinetic operator. `P` is integrated on the upper triangle only and
//! mirrored once every upper-triangle cell is in place, so `H` is symmetric
//! by construction and needs no extra symmetrization pass.

use ndarray as nd;
use rayon::prelude::*;
use crate::{
    basis::Basis,
    config::{ Config, Grid },
    error::NonFiniteError,
    potential::Potential,
    solve::SolveResult,
    utils::simpson,
};

/// Exact diagonal kinetic-energy matrix, `K[n][n] = kepf (n+1)²` for
/// `n = 0, …, nbasis−1`.
///
/// The prefactor `kepf` folds in ħ, the particle mass, the box width, and the
/// output energy unit; see [`units`][crate::units] for constructors. No
/// quadrature is involved and every off-diagonal element is exactly zero.
pub fn kinetic_matrix(nbasis: usize, kepf: f64) -> nd::Array2<f64> {
    let diag: nd::Array1<f64>
        = (1..=nbasis).map(|n| kepf * (n * n) as f64).collect();
    nd::Array2::from_diag(&diag)
}

/// Potential-energy matrix `P[i][j] = ⟨φ_i|V|φ_j⟩`, integrated over the grid
/// with composite Simpson's rule.
///
/// The potential is sampled once over the grid; a non-finite sample aborts
/// assembly with [`SolveError::NonFinite`][crate::error::SolveError]. The
/// pair quadratures for `j ≥ i` are independent and run on the rayon thread
/// pool, each filling its own upper-triangle cell; the lower triangle is
/// mirrored afterwards, making the result exactly symmetric.
///
/// Quadrature accuracy requires the grid to resolve the fastest basis
/// oscillation (spatial frequency ≈ `nbasis π / L`); choosing an adequate
/// `ngrid` is the caller's responsibility.
pub fn potential_matrix(grid: &Grid, basis: &Basis, potential: &Potential)
    -> SolveResult<nd::Array2<f64>>
{
    let V: nd::Array1<f64> = grid.get_x().mapv(|xk| potential.eval(xk));
    NonFiniteError::check_samples(grid.get_x(), &V)?;
    let xmin = grid.get_x()[0];
    let phi: nd::Array2<f64> = basis.sample_all(grid, xmin);
    let dx = grid.get_dx();
    let n = basis.len();
    let pairs: Vec<(usize, usize)>
        = (0..n).flat_map(|i| (i..n).map(move |j| (i, j))).collect();
    let elems: Vec<f64>
        = pairs.par_iter()
        .map(|&(i, j)| {
            let y: nd::Array1<f64>
                = phi.row(i).iter().zip(&V).zip(phi.row(j))
                .map(|((pik, Vk), pjk)| pik * Vk * pjk)
                .collect();
            simpson(&y, dx)
        })
        .collect();
    let mut P: nd::Array2<f64> = nd::Array2::zeros((n, n));
    for (&(i, j), &pij) in pairs.iter().zip(&elems) {
        P[[i, j]] = pij;
        P[[j, i]] = pij;
    }
    Ok(P)
}

/// Assemble `H = K + P` for a configuration over its grid, elementwise.
pub fn assemble(cfg: &Config, grid: &Grid) -> SolveResult<nd::Array2<f64>> {
    let basis = Basis::new(cfg.width(), cfg.get_nbasis());
    let mut H = kinetic_matrix(cfg.get_nbasis(), cfg.get_kepf());
    H += &potential_matrix(grid, &basis, cfg.get_potential())?;
    Ok(H)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;

    fn setup(potential: Potential, nbasis: usize) -> (Config, Grid, Basis) {
        let cfg = Config::new(0.0, 2.0, 501, nbasis, 1.0, 1.0, potential);
        let grid = Grid::from_config(&cfg);
        let basis = Basis::new(cfg.width(), cfg.get_nbasis());
        (cfg, grid, basis)
    }

    fn pot_matrix(cfg: &Config, grid: &Grid, basis: &Basis)
        -> nd::Array2<f64>
    {
        potential_matrix(grid, basis, cfg.get_potential()).unwrap()
    }

    #[test]
    fn kinetic_is_diagonal_and_quadratic() {
        let kepf = 3.5;
        let K = kinetic_matrix(4, kepf);
        for i in 0..4 {
            for j in 0..4 {
                if i == j {
                    let expected = kepf * ((i + 1) * (i + 1)) as f64;
                    assert_eq!(K[[i, i]], expected);
                } else {
                    assert_eq!(K[[i, j]], 0.0, "off-diagonal must be exactly 0");
                }
            }
        }
    }

    #[test]
    fn potential_matrix_is_exactly_symmetric() {
        let (cfg, grid, basis)
            = setup(Potential::Morse { de: 10.0, alpha: 1.3, re: 0.7 }, 6);
        let P = pot_matrix(&cfg, &grid, &basis);
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(
                    P[[i, j]], P[[j, i]],
                    "P[{i}][{j}] must equal P[{j}][{i}] exactly"
                );
            }
        }
    }

    #[test]
    fn box_potential_gives_zero_matrix() {
        let (cfg, grid, basis) = setup(Potential::Box, 5);
        let P = pot_matrix(&cfg, &grid, &basis);
        assert!(P.iter().all(|&pij| pij == 0.0));
    }

    // constant shift: basis orthonormality makes ⟨φ_i|c|φ_j⟩ = c δ_ij up to
    // quadrature error
    #[test]
    fn constant_potential_is_near_identity_times_shift() {
        let shift = 7.25;
        let (cfg, grid, basis) = setup(Potential::custom(move |_| shift), 4);
        let P = pot_matrix(&cfg, &grid, &basis);
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { shift } else { 0.0 };
                assert!(
                    (P[[i, j]] - expected).abs() < 1e-5 * shift,
                    "P[{i}][{j}] = {}, expected {expected}", P[[i, j]]
                );
            }
        }
    }

    #[test]
    fn non_finite_sample_aborts_assembly() {
        let (cfg, grid, _) = setup(
            Potential::custom(|x| if x > 1.0 { f64::NAN } else { 0.0 }), 3);
        let res = assemble(&cfg, &grid);
        assert!(
            matches!(res, Err(SolveError::NonFinite(_))),
            "NaN potential sample must abort with NonFinite"
        );
    }
}
