//! Error types for the linear solvers.
//!
//! Every failure carries enough structured detail (tolerance, iteration
//! budget, offending dimensions) for the caller to decide whether to retry
//! with different parameters or fall back to another solver.

use thiserror::Error;

/// Errors that can occur while solving a linear system.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The iterative solver exhausted its sweep budget.
    #[error(
        "Jacobi iteration did not converge within {max_iterations} iterations \
         (tolerance {tolerance:e}, last update norm {last_update:e})"
    )]
    NonConvergence {
        /// Tolerance the run was configured with
        tolerance: f64,
        /// Number of sweeps performed
        max_iterations: usize,
        /// Norm of the difference between the last two iterates
        last_update: f64,
    },

    /// The matrix has no inverse (a pivot vanished during factorization).
    #[error("matrix is singular or nearly singular")]
    SingularMatrix,

    /// The matrix is invertible but its condition number is too large to trust the inverse.
    #[error("matrix is ill-conditioned: condition number {condition:e} exceeds limit {limit:e}")]
    IllConditioned {
        /// Estimated 1-norm condition number
        condition: f64,
        /// Configured limit
        limit: f64,
    },

    /// Inconsistent lengths between the matrix, the right-hand side or the initial guess.
    #[error("{context} dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Which operand had the wrong size
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// The system has no unknowns.
    #[error("linear system is empty")]
    EmptySystem,

    /// A diagonal entry is zero (only reported when diagonal checking is enabled).
    #[error("zero diagonal entry at row {row}")]
    SingularDiagonal {
        /// Row of the offending diagonal entry
        row: usize,
    },

    /// Solver configuration is invalid.
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Returns `true` if the iterative solver ran out of sweeps.
    pub fn is_convergence_error(&self) -> bool {
        matches!(self, SolverError::NonConvergence { .. })
    }

    /// Returns `true` if this is a dimension-related error.
    ///
    /// This includes `DimensionMismatch` and `EmptySystem`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            SolverError::DimensionMismatch { .. } | SolverError::EmptySystem
        )
    }

    /// Returns `true` if the matrix itself cannot be solved reliably.
    ///
    /// This includes `SingularMatrix`, `IllConditioned` and `SingularDiagonal`.
    pub fn is_singular_error(&self) -> bool {
        matches!(
            self,
            SolverError::SingularMatrix
                | SolverError::IllConditioned { .. }
                | SolverError::SingularDiagonal { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SolverError::DimensionMismatch {
            context: "right-hand side",
            expected: 4,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "right-hand side dimension mismatch: expected 4, got 3"
        );
    }

    #[test]
    fn test_non_convergence_display() {
        let err = SolverError::NonConvergence {
            tolerance: 1e-6,
            max_iterations: 1000,
            last_update: 0.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("1000"));
        assert!(msg.contains("1e-6"));
    }

    #[test]
    fn test_is_convergence_error() {
        let conv = SolverError::NonConvergence {
            tolerance: 1e-6,
            max_iterations: 1,
            last_update: f64::NAN,
        };
        assert!(conv.is_convergence_error());
        assert!(!SolverError::SingularMatrix.is_convergence_error());
    }

    #[test]
    fn test_is_dimension_error() {
        assert!(SolverError::EmptySystem.is_dimension_error());
        assert!(!SolverError::SingularDiagonal { row: 0 }.is_dimension_error());
    }

    #[test]
    fn test_is_singular_error() {
        let ill = SolverError::IllConditioned {
            condition: 1e14,
            limit: 1e12,
        };
        assert!(ill.is_singular_error());
        assert!(SolverError::SingularDiagonal { row: 2 }.is_singular_error());
        assert!(!SolverError::EmptySystem.is_singular_error());
    }
}
