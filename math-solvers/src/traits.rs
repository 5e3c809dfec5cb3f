//! Core traits for linear algebra operations
//!
//! This module defines the abstractions shared by the solvers:
//! - [`RealField`]: Trait for the real scalar types a system can be built from
//! - [`LinearOperator`]: Trait for matrix-like objects that can perform matrix-vector products

use ndarray::{Array1, Array2};
use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types that can be used in the solvers.
///
/// Only IEEE-754 semantics are relied upon: a division by zero yields an
/// infinity or NaN and that value propagates through later arithmetic.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for heat problems)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + Display + 'static
{
    /// Default convergence tolerance for iterative solvers
    fn default_tolerance() -> Self;

    /// Magnitude below which a pivot is treated as zero
    fn pivot_threshold() -> Self;

    /// Lossy conversion used for diagnostics and error payloads
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl RealField for f64 {
    #[inline]
    fn default_tolerance() -> Self {
        1e-6
    }

    #[inline]
    fn pivot_threshold() -> Self {
        1e-30
    }
}

impl RealField for f32 {
    #[inline]
    fn default_tolerance() -> Self {
        1e-5
    }

    #[inline]
    fn pivot_threshold() -> Self {
        1e-30
    }
}

/// Trait for linear operators (matrices) that can perform matrix-vector products.
pub trait LinearOperator<T: RealField>: Send + Sync {
    /// Number of rows in the operator
    fn num_rows(&self) -> usize;

    /// Number of columns in the operator
    fn num_cols(&self) -> usize;

    /// Apply the operator: y = A * x
    fn apply(&self, x: &Array1<T>) -> Array1<T>;

    /// Check if the operator is square
    fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }
}

impl<T: RealField> LinearOperator<T> for Array2<T> {
    fn num_rows(&self) -> usize {
        self.nrows()
    }

    fn num_cols(&self) -> usize {
        self.ncols()
    }

    fn apply(&self, x: &Array1<T>) -> Array1<T> {
        self.dot(x)
    }
}
