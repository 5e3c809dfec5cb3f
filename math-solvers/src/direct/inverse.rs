//! Direct solve through an explicit inverse
//!
//! `x = A⁻¹ b` costs O(n³) against O(n²) per Jacobi sweep, so it serves as a
//! reference solution for small systems rather than as the primary path.
//! The inverse is only trusted when the 1-norm condition number
//! `κ₁ = ||A||₁ ||A⁻¹||₁` stays below the configured limit.

use super::lu::lu_factorize;
use crate::error::{Result, SolverError};
use crate::system::LinearSystem;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Inverse solver configuration
#[derive(Debug, Clone)]
pub struct InverseConfig<R> {
    /// Largest acceptable 1-norm condition number
    pub max_condition: R,
}

impl Default for InverseConfig<f64> {
    fn default() -> Self {
        Self {
            max_condition: 1e12,
        }
    }
}

impl Default for InverseConfig<f32> {
    fn default() -> Self {
        Self {
            max_condition: 1e6,
        }
    }
}

/// Inverse solver result
#[derive(Debug, Clone)]
pub struct InverseSolution<T: RealField> {
    /// Solution vector
    pub x: Array1<T>,
    /// Estimated 1-norm condition number of A
    pub condition: T,
}

/// Invert a square matrix
pub fn invert<T: RealField>(a: &Array2<T>) -> Result<Array2<T>> {
    lu_factorize(a)?.inverse()
}

/// Matrix 1-norm: largest absolute column sum
pub fn norm_one<T: RealField>(a: &Array2<T>) -> T {
    a.columns()
        .into_iter()
        .map(|col| col.iter().fold(T::zero(), |acc, v| acc + v.abs()))
        .fold(T::zero(), |acc, s| if s > acc || s.is_nan() { s } else { acc })
}

/// Solve Ax = b as x = A⁻¹ b
///
/// # Errors
/// * [`SolverError::SingularMatrix`] if a pivot vanishes
/// * [`SolverError::IllConditioned`] if the condition estimate exceeds
///   `config.max_condition` or is not finite
pub fn inverse_solve<T: RealField>(
    system: &LinearSystem<T>,
    config: &InverseConfig<T>,
) -> Result<InverseSolution<T>> {
    let a = system.matrix();
    let a_inv = invert(a)?;

    let condition = norm_one(a) * norm_one(&a_inv);
    if !condition.is_finite() || condition > config.max_condition {
        log::warn!(
            "Inverse rejected: condition number {:.3e} (limit {:.3e})",
            condition.to_f64_lossy(),
            config.max_condition.to_f64_lossy()
        );
        return Err(SolverError::IllConditioned {
            condition: condition.to_f64_lossy(),
            limit: config.max_condition.to_f64_lossy(),
        });
    }

    let x = a_inv.dot(system.rhs());
    log::debug!(
        "Inverse solve: n = {}, condition = {:.3e}",
        system.dim(),
        condition.to_f64_lossy()
    );

    Ok(InverseSolution { x, condition })
}
