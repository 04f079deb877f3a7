#![allow(dead_code, non_snake_case)]

//! Computes bound-state energy levels and stationary wavefunctions of a
//! particle in an arbitrary one-dimensional potential by Galerkin projection
//! onto a finite basis of particle-in-a-box eigenfunctions, as used to model
//! the vibrational structure of diatomic systems.
//!
//! The calculation is a two-stage numerical method:
//! - assembly of a finite symmetric Hamiltonian matrix from an exact diagonal
//!   kinetic-energy term and potential matrix elements integrated with
//!   composite Simpson's rule over an evenly spaced grid;
//! - dense symmetric eigendecomposition of the assembled matrix, yielding
//!   ascending eigenvalues and orthonormal eigenvector columns.
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod config;
pub mod potential;
pub mod basis;
pub mod hamiltonian;
pub mod solve;
pub mod utils;

pub mod docs;

pub(crate) const MIN_NGRID: usize = 3;
pub(crate) const MIN_NBASIS: usize = 1;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
