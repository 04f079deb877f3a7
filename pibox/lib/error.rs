//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;
use crate::{ Arr1, Arr2 };

/// Returned when a non-finite value is encountered where the numerics require
/// finite input.
#[derive(Debug, Error)]
#[error("encountered non-finite value {value} at x = {x}")]
pub struct NonFiniteError {
    /// Coordinate at which the value was produced.
    pub x: f64,
    /// The offending value.
    pub value: f64,
}

impl NonFiniteError {
    pub(crate) fn check_samples<S, T>(x: &Arr1<S>, v: &Arr1<T>)
        -> Result<(), Self>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        match x.iter().zip(v).find(|(_, vk)| !vk.is_finite()) {
            Some((&xk, &vk)) => Err(Self { x: xk, value: vk }),
            None => Ok(()),
        }
    }

    pub(crate) fn check_matrix<S>(m: &Arr2<S>)
        -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        match m.iter().find(|mk| !mk.is_finite()) {
            Some(&mk) => Err(Self { x: f64::NAN, value: mk }),
            None => Ok(()),
        }
    }
}

/// Returned from Hamiltonian assembly and diagonalization.
///
/// This is the single failure mode of a run; deterministic input corrections
/// (swapped bounds, even grid sizes) are applied silently and never surface
/// here.
#[derive(Debug, Error)]
pub enum SolveError {
    /// [`NonFiniteError`]
    #[error("non-finite sample: {0}")]
    NonFinite(#[from] NonFiniteError),

    /// [`LinalgError`]
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}
