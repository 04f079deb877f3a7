//! Miscellaneous tools.

use ndarray as nd;
use ndarray_linalg::Scalar;
use num_traits::{ One, Zero };
use crate::Arr1;

/// Integrate using composite Simpson's rule (weights 1, 4, 2, …, 4, 1 scaled
/// by `dx/3`).
///
/// Assumes `y` is sampled over even intervals of width `dx`.
///
/// *Panics if `y` does not have an odd length of at least 3*.
pub fn simpson<S, A>(y: &Arr1<S>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = y.len();
    assert!(
        n >= 3 && n % 2 == 1,
        "simpson requires an odd number of samples, at least 3; got {n}",
    );
    let two = A::one() + A::one();
    let three = two + A::one();
    let four = two + two;
    let inner = y.iter().skip(1).take(n - 2).enumerate()
        .fold(A::zero(), |acc, (k, yk)| {
            let w = if k % 2 == 0 { four } else { two };
            acc + w * *yk
        });
    (dx / three) * (y[0] + inner + y[n - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    // composite Simpson is exact for cubics
    #[test]
    fn simpson_exact_on_cubic() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0, 5);
        let dx = x[1] - x[0];
        let y = x.mapv(|xk| xk.powi(3));
        let integral = simpson(&y, dx);
        assert!(
            (integral - 4.0).abs() < 1e-12,
            "∫₀² x³ dx = 4; got {integral}"
        );
    }

    #[test]
    fn simpson_constant() {
        let y: nd::Array1<f64> = nd::Array1::from_elem(101, 2.5);
        let integral = simpson(&y, 0.01);
        assert!(
            (integral - 2.5).abs() < 1e-12,
            "constant 2.5 over unit interval should integrate to 2.5; got {integral}"
        );
    }

    #[test]
    #[should_panic]
    fn simpson_rejects_even_sample_count() {
        let y: nd::Array1<f64> = nd::Array1::zeros(4);
        simpson(&y, 0.1);
    }
}
