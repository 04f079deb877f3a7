//! Model potential-energy curves.
//!
//! Each curve is a pure, stateless scalar function of the coordinate. Known
//! model forms carry their parameters as variant fields; arbitrary
//! caller-supplied curves go through [`Potential::Custom`].

use std::fmt;
use std::sync::Arc;
use crate::units;

/// Potential-energy curve selector.
#[derive(Clone)]
pub enum Potential {
    /// Flat box interior, `V ≡ 0`.
    Box,
    /// Harmonic well `p (x − re)²` with the prefactor pre-scaled to output
    /// energy units.
    Harmonic {
        /// Energy prefactor `p`.
        prefactor: f64,
        /// Equilibrium coordinate.
        re: f64,
    },
    /// Quartic-perturbed harmonic well `a x² + b x⁴`.
    Anharmonic {
        /// Quadratic coefficient `a`.
        quadratic: f64,
        /// Quartic coefficient `b`.
        quartic: f64,
    },
    /// Morse curve `De (1 − exp(−α (x − re)))²`.
    Morse {
        /// Dissociation energy `De`.
        de: f64,
        /// Range parameter `α` (inverse length).
        alpha: f64,
        /// Equilibrium coordinate.
        re: f64,
    },
    /// Symmetric double well `x⁴ − 18 x² + 81` (minima at ±3).
    DoubleWell,
    /// Arbitrary caller-supplied curve.
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl Potential {
    /// Harmonic well in wavenumber units: force constant `fk` in N/m,
    /// coordinate in Å, energies in cm⁻¹.
    pub fn harmonic_wavenumber(fk: f64, re: f64) -> Self {
        let prefactor
            = units::joules_to_wavenumber(0.5 * fk * units::m_per_A.powi(2));
        Self::Harmonic { prefactor, re }
    }

    /// Morse curve in wavenumber units: dissociation energy `de` in cm⁻¹,
    /// force constant `fk` in N/m, coordinate in Å.
    ///
    /// The range parameter is fixed by matching the curvature at the minimum,
    /// `α = √(k / 2 De)` after unit conversion.
    pub fn morse_wavenumber(de: f64, fk: f64, re: f64) -> Self {
        let alpha
            = (fk / 2.0 / (de * units::h * units::c * 100.0)).sqrt()
            * units::m_per_A;
        Self::Morse { de, alpha, re }
    }

    /// Wrap an arbitrary function as a potential curve.
    pub fn custom<F>(f: F) -> Self
    where F: Fn(f64) -> f64 + Send + Sync + 'static
    {
        Self::Custom(Arc::new(f))
    }

    /// Evaluate the curve at a coordinate.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Box => 0.0,
            Self::Harmonic { prefactor, re }
                => prefactor * (x - re).powi(2),
            Self::Anharmonic { quadratic, quartic }
                => quadratic * x.powi(2) + quartic * x.powi(4),
            Self::Morse { de, alpha, re }
                => de * (1.0 - (-alpha * (x - re)).exp()).powi(2),
            Self::DoubleWell
                => x.powi(4) - 18.0 * x.powi(2) + 81.0,
            Self::Custom(f) => f(x),
        }
    }

    /// Return `true` if `self` is `Box`.
    pub fn is_box(&self) -> bool { matches!(self, Self::Box) }

    /// Return `true` if `self` is `Custom`.
    pub fn is_custom(&self) -> bool { matches!(self, Self::Custom(_)) }
}

impl fmt::Debug for Potential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Box => write!(f, "Box"),
            Self::Harmonic { prefactor, re }
                => write!(f, "Harmonic {{ prefactor: {prefactor}, re: {re} }}"),
            Self::Anharmonic { quadratic, quartic }
                => write!(
                    f,
                    "Anharmonic {{ quadratic: {quadratic}, quartic: {quartic} }}",
                ),
            Self::Morse { de, alpha, re }
                => write!(f, "Morse {{ de: {de}, alpha: {alpha}, re: {re} }}"),
            Self::DoubleWell => write!(f, "DoubleWell"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn morse_minimum_and_asymptote() {
        let de = 37778.617;
        let v = Potential::morse_wavenumber(de, 774.7188418117737 * 0.75, 0.96966);
        assert!(v.eval(0.96966).abs() < 1e-9, "Morse curve vanishes at re");
        let far = v.eval(1e3);
        assert!(
            (far - de).abs() / de < 1e-6,
            "Morse curve approaches De far from re; got {far}"
        );
    }

    #[test]
    fn harmonic_is_symmetric_about_re() {
        let v = Potential::harmonic_wavenumber(500.0, 1.2);
        let (l, r) = (v.eval(0.9), v.eval(1.5));
        assert!(
            (l - r).abs() < 1e-9,
            "harmonic well symmetric about re; got {l} and {r}"
        );
    }

    #[test]
    fn custom_curve_passes_through() {
        let v = Potential::custom(|x| 3.0 * x);
        assert_eq!(v.eval(2.0), 6.0);
        assert!(v.is_custom());
    }
}
