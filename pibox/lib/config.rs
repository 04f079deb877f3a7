//! Run configuration and the quadrature grid.
//!
//! A [`Config`] is validated once at construction and immutable afterwards;
//! degenerate inputs are rewritten by deterministic correction rules rather
//! than rejected, so configuration can never fail. The corrections are part of
//! the contract: equal bounds widen to a unit interval, inverted bounds swap,
//! the grid size is floored at 3 and forced odd (composite Simpson integration
//! needs an odd sample count), and the basis size is floored at 1.

use log::debug;
use ndarray as nd;
use crate::{ MIN_NBASIS, MIN_NGRID, potential::Potential, units };

/// Validated inputs for a single bound-state calculation.
#[derive(Clone, Debug)]
pub struct Config {
    // window bounds, corrected
    xmin: f64,
    xmax: f64,
    // quadrature sample count, odd and ≥ 3
    ngrid: usize,
    // basis size, ≥ 1
    nbasis: usize,
    // particle mass; informational once `kepf` is fixed
    mass: f64,
    // kinetic prefactor C in K[n][n] = C (n+1)², fixes the output energy unit
    kepf: f64,
    // potential-energy curve
    potential: Potential,
}

impl Config {
    /// Create a new `Config` with an explicit kinetic prefactor, applying the
    /// correction rules to the window and sizes.
    pub fn new(
        xmin: f64,
        xmax: f64,
        ngrid: usize,
        nbasis: usize,
        mass: f64,
        kepf: f64,
        potential: Potential,
    ) -> Self {
        let (xmin, xmax)
            = if xmax == xmin {
                debug!("config: degenerate window widened to [{xmin}, {}]",
                    xmin + 1.0);
                (xmin, xmin + 1.0)
            } else if xmax < xmin {
                debug!("config: inverted window swapped to [{xmax}, {xmin}]");
                (xmax, xmin)
            } else {
                (xmin, xmax)
            };
        let mut ngrid = ngrid.max(MIN_NGRID);
        if ngrid % 2 == 0 {
            ngrid += 1;
            debug!("config: even grid size bumped to {ngrid}");
        }
        let nbasis = nbasis.max(MIN_NBASIS);
        Self { xmin, xmax, ngrid, nbasis, mass, kepf, potential }
    }

    /// Create a new `Config` in the wavenumber unit system: coordinates in Å,
    /// `mass` in kg, energies in cm⁻¹. The kinetic prefactor is derived from
    /// the corrected window width.
    pub fn wavenumber(
        xmin: f64,
        xmax: f64,
        ngrid: usize,
        nbasis: usize,
        mass: f64,
        potential: Potential,
    ) -> Self {
        let mut cfg = Self::new(xmin, xmax, ngrid, nbasis, mass, 0.0, potential);
        cfg.kepf = units::kinetic_prefactor_wavenumber(mass, cfg.width());
        cfg
    }

    /// Create a new `Config` in natural units (ħ = 1); the kinetic prefactor
    /// is `π²/(2 m L²)` for the corrected window width `L`.
    pub fn natural(
        xmin: f64,
        xmax: f64,
        ngrid: usize,
        nbasis: usize,
        mass: f64,
        potential: Potential,
    ) -> Self {
        let mut cfg = Self::new(xmin, xmax, ngrid, nbasis, mass, 0.0, potential);
        cfg.kepf = units::kinetic_prefactor_natural(mass, cfg.width());
        cfg
    }

    /// Get the corrected lower window bound.
    pub fn get_xmin(&self) -> f64 { self.xmin }

    /// Get the corrected upper window bound.
    pub fn get_xmax(&self) -> f64 { self.xmax }

    /// Get the corrected quadrature sample count.
    pub fn get_ngrid(&self) -> usize { self.ngrid }

    /// Get the corrected basis size.
    pub fn get_nbasis(&self) -> usize { self.nbasis }

    /// Get the particle mass.
    pub fn get_mass(&self) -> f64 { self.mass }

    /// Get the kinetic prefactor.
    pub fn get_kepf(&self) -> f64 { self.kepf }

    /// Get a reference to the potential curve.
    pub fn get_potential(&self) -> &Potential { &self.potential }

    /// Get the corrected window width `L = xmax − xmin`.
    pub fn width(&self) -> f64 { self.xmax - self.xmin }
}

/// Evenly spaced quadrature grid over the corrected window, endpoints
/// inclusive.
///
/// Arrays borrowed from this type are guaranteed to be strictly increasing
/// with uniform spacing and an odd length of at least 3.
#[derive(Clone, Debug)]
pub struct Grid {
    // coordinate array
    x: nd::Array1<f64>,
    // grid spacing
    dx: f64,
}

impl Grid {
    /// Build the grid for a configuration. Created once per run.
    pub fn from_config(cfg: &Config) -> Self {
        let x: nd::Array1<f64>
            = nd::Array1::linspace(cfg.xmin, cfg.xmax, cfg.ngrid);
        let dx = x[1] - x[0];
        Self { x, dx }
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the number of grid points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.x.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(cfg: &Config) -> Grid { Grid::from_config(cfg) }

    #[test]
    fn grid_is_odd_increasing_and_spans_window() {
        let cfg = Config::new(
            -1.0, 2.0, 10, 4, 1.0, 1.0, Potential::Box);
        let grid = grid_of(&cfg);
        assert_eq!(grid.len(), 11, "even grid size is bumped by one");
        assert!(grid.len() % 2 == 1);
        assert!(
            grid.get_x().iter().zip(grid.get_x().iter().skip(1))
                .all(|(a, b)| a < b),
            "grid must be strictly increasing"
        );
        assert_eq!(grid.get_x()[0], -1.0);
        assert_eq!(grid.get_x()[grid.len() - 1], 2.0);
    }

    #[test]
    fn inverted_window_is_swapped() {
        let cfg = Config::new(5.0, 1.0, 11, 2, 1.0, 1.0, Potential::Box);
        assert_eq!(cfg.get_xmin(), 1.0);
        assert_eq!(cfg.get_xmax(), 5.0);
        let grid = grid_of(&cfg);
        assert_eq!(grid.get_x()[0], 1.0);
        assert_eq!(grid.get_x()[grid.len() - 1], 5.0);
    }

    #[test]
    fn degenerate_window_is_widened() {
        let cfg = Config::new(2.0, 2.0, 11, 2, 1.0, 1.0, Potential::Box);
        assert_eq!(cfg.get_xmin(), 2.0);
        assert_eq!(cfg.get_xmax(), 3.0);
    }

    #[test]
    fn sizes_are_floored() {
        let cfg = Config::new(0.0, 1.0, 0, 0, 1.0, 1.0, Potential::Box);
        assert_eq!(cfg.get_ngrid(), 3);
        assert_eq!(cfg.get_nbasis(), 1);
    }

    #[test]
    fn wavenumber_prefactor_uses_corrected_width() {
        // window swaps to [0, 2]; the prefactor must see L = 2, not −2
        let mass = crate::units::mu;
        let cfg = Config::wavenumber(2.0, 0.0, 11, 2, mass, Potential::Box);
        let expected = crate::units::kinetic_prefactor_wavenumber(mass, 2.0);
        assert_eq!(cfg.get_kepf(), expected);
    }
}
