#![allow(non_upper_case_globals)]

//! Physical constants and conversion helpers for the wavenumber (cm⁻¹) unit
//! system conventional in vibrational spectroscopy.
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// speed of light in vacuum (m s^-1)
pub const c: f64 = 2.99792458e8;
//             +/- 0 (exact)

/// Avogadro's number
pub const NA: f64 = 6.02214076e23;
//              +/- 0 (exact)

/// Boltzmann's constant (J K^-1)
pub const kB: f64 = 1.380649e-23;
//              +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// proton mass (kg)
pub const mp: f64 = 1.67262192369e-27;
//              +/- 0.00000000051e-27

/// unified atomic mass unit (kg)
pub const mu: f64 = 1.66053906660e-27;
//              +/- 0.00000000050e-27

/// meters per Ångström
pub const m_per_A: f64 = 1e-10;

/// Convert an energy in joules to wavenumbers (cm⁻¹).
pub fn joules_to_wavenumber(energy: f64) -> f64 {
    energy / (h * c * 100.0)
}

/// Kinetic-energy prefactor for a particle-in-a-box basis, in wavenumbers.
///
/// For a box of width `l` Ångströms holding a particle of mass `mass`
/// kilograms, the kinetic operator is diagonal in the box basis with
/// eigenvalues `C n²`, n = 1, 2, …; this is `C` expressed in cm⁻¹:
/// ```text
///      ħ² π²
/// C = ------- / (h c · 100)
///     2 m L²
/// ```
pub fn kinetic_prefactor_wavenumber(mass: f64, l: f64) -> f64 {
    let l_m = l * m_per_A;
    joules_to_wavenumber(hbar * hbar * PI * PI / (2.0 * mass * l_m * l_m))
}

/// Kinetic-energy prefactor for a particle-in-a-box basis in natural units
/// (ħ = 1), `C = π²/(2 m L²)`, with `l` in the same length unit as the
/// coordinate grid.
pub fn kinetic_prefactor_natural(mass: f64, l: f64) -> f64 {
    PI * PI / (2.0 * mass * l * l)
}

/// Angular frequency √(k/m) of a harmonic oscillator with force constant `fk`
/// (N/m) and mass `mass` (kg).
pub fn angular_frequency(fk: f64, mass: f64) -> f64 {
    (fk / mass).sqrt()
}

/// Harmonic level spacing ħ√(k/m) in wavenumbers, for `fk` in N/m and `mass`
/// in kg.
pub fn harmonic_wavenumber(fk: f64, mass: f64) -> f64 {
    joules_to_wavenumber(hbar * angular_frequency(fk, mass))
}
