//! Vector kernels shared by the solvers
//!
//! Plain loops over `ndarray` storage. They are small enough that the compiler
//! vectorizes them; no BLAS binding is needed at the sizes a dense Jacobi
//! sweep is used for.

use crate::traits::RealField;
use ndarray::Array1;

/// Compute vector 2-norm: ||x||_2 = sqrt(Σ x_i^2)
#[inline]
pub fn vector_norm<T: RealField>(x: &Array1<T>) -> T {
    vector_norm_sqr(x).sqrt()
}

/// Compute vector norm squared: ||x||_2^2 = Σ x_i^2
#[inline]
pub fn vector_norm_sqr<T: RealField>(x: &Array1<T>) -> T {
    let mut sum = T::zero();
    for xi in x.iter() {
        sum += *xi * *xi;
    }
    sum
}

/// Compute ||x - y||_2 without materializing the difference
///
/// Any non-finite component makes the result non-finite.
#[inline]
pub fn difference_norm<T: RealField>(x: &Array1<T>, y: &Array1<T>) -> T {
    assert_eq!(x.len(), y.len(), "Vector lengths must match for difference");
    let mut sum = T::zero();
    for (xi, yi) in x.iter().zip(y.iter()) {
        let d = *xi - *yi;
        sum += d * d;
    }
    sum.sqrt()
}

/// Compute max_i |x_i - y_i|
///
/// Returns NaN if any component difference is NaN.
#[inline]
pub fn max_abs_difference<T: RealField>(x: &Array1<T>, y: &Array1<T>) -> T {
    assert_eq!(x.len(), y.len(), "Vector lengths must match for difference");
    let mut max = T::zero();
    for (xi, yi) in x.iter().zip(y.iter()) {
        let d = (*xi - *yi).abs();
        if d.is_nan() {
            return d;
        }
        if d > max {
            max = d;
        }
    }
    max
}
