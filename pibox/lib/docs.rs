//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [The box basis](#the-box-basis)
//! - [Matrix elements](#matrix-elements)
//! - [Units](#units)
//!
//! # Background
//! Bound states of a particle moving in a conservative one-dimensional
//! potential are eigenpairs of the Hamiltonian operator
//! ```text
//!       ħ²  ∂²
//! H = - -- --- + V(x)
//!       2m ∂x²
//! ```
//! Rather than integrating the differential equation directly, the operator
//! is projected onto a finite orthonormal basis {φ_n} (a Galerkin
//! projection), turning the eigenproblem into a dense, real, symmetric matrix
//! eigenproblem
//! ```text
//! H_ij = ⟨φ_i| H |φ_j⟩,    H c_v = E_v c_v
//! ```
//! whose eigenvalues approximate the lowest bound-state energies and whose
//! eigenvector columns hold expansion coefficients of the stationary
//! wavefunctions,
//! ```text
//! ψ_v(x) = Σ_j c_jv φ_j(x)
//! ```
//! Since the Hamiltonian is Hermitian and all quantities here are real, the
//! matrix is symmetric, its eigenvalues are real, and eigenvectors belonging
//! to distinct eigenvalues are orthogonal.
//!
//! # The box basis
//! The basis used here comprises the eigenfunctions of the infinite square
//! well ("particle in a box") spanning the computation window
//! [xmin, xmax], with width L = xmax − xmin and local coordinate
//! ξ = x − xmin:
//! ```text
//! φ_n(ξ) = √(2/L) sin(n π ξ / L),    n = 1, 2, …
//! ```
//! These are orthonormal and vanish at the window edges, which imposes
//! hard-wall boundary conditions on every computed state: the window must be
//! chosen wide enough that the states of interest have negligible amplitude
//! at the walls.
//!
//! Two properties make this basis convenient:
//! - the functions are exact eigenfunctions of the kinetic operator, so the
//!   kinetic block of the matrix is diagonal with entries `C n²`, computed in
//!   closed form with no quadrature;
//! - they oscillate at the known spatial frequency `n π / L`, so the grid
//!   density required to integrate potential matrix elements accurately is
//!   predictable in advance (several points per half-period of the fastest
//!   retained function).
//!
//! # Matrix elements
//! The potential block
//! ```text
//! P_ij = ⟨φ_i| V |φ_j⟩ = ∫ φ_i(ξ) V(x) φ_j(ξ) dx
//! ```
//! has no closed form for an arbitrary V, and is integrated numerically with
//! composite Simpson's rule over an evenly spaced grid of odd size:
//! ```text
//! ∫ y dx ≈ (Δx/3) (y_0 + 4 y_1 + 2 y_2 + … + 4 y_{n−2} + y_{n−1})
//! ```
//! Simpson's rule is exact through cubics on each panel pair and converges as
//! O(Δx⁴) for smooth integrands. Because `P_ij = P_ji`, only the upper
//! triangle is integrated and the lower triangle is mirrored, halving the
//! quadrature work.
//!
//! # Units
//! The library is agnostic to the energy unit: the caller fixes it through
//! the kinetic prefactor `C` (see [`units`][crate::units]). The default
//! choice in this domain is the spectroscopic wavenumber (cm⁻¹), obtained by
//! dividing energies in joules by `h c · 100`; with coordinates in Ångströms
//! and masses in kilograms,
//! ```text
//!      ħ² π²          1
//! C = ------- · -----------
//!     2 m L²     h c · 100
//! ```
//! reproduces vibrational term values directly comparable to spectroscopic
//! data.
