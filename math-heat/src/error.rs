//! Error types for heat-distribution problems.

use solvers::SolverError;
use thiserror::Error;

/// Errors that can occur while setting up or solving a heat problem.
#[derive(Debug, Error)]
pub enum HeatError {
    /// The linear solver failed.
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// Grid side is zero or too large for a dense system.
    #[error(
        "invalid grid size: {size} (must be between 1 and {max})",
        max = crate::grid::MAX_GRID_SIZE
    )]
    InvalidGridSize {
        /// The invalid size
        size: usize,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for heat operations.
pub type Result<T> = std::result::Result<T, HeatError>;

impl HeatError {
    /// Returns `true` if the iterative solver ran out of sweeps.
    pub fn is_convergence_error(&self) -> bool {
        matches!(self, HeatError::Solver(e) if e.is_convergence_error())
    }

    /// Returns `true` if this is a configuration-related error.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            HeatError::InvalidGridSize { .. } | HeatError::InvalidConfig(_) | HeatError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HeatError::InvalidGridSize { size: 0 };
        assert_eq!(err.to_string(), "invalid grid size: 0 (must be between 1 and 100)");
    }

    #[test]
    fn test_solver_error_is_transparent() {
        let err: HeatError = SolverError::SingularMatrix.into();
        assert_eq!(err.to_string(), SolverError::SingularMatrix.to_string());
        assert!(!err.is_convergence_error());
    }

    #[test]
    fn test_is_convergence_error() {
        let err: HeatError = SolverError::NonConvergence {
            tolerance: 1e-6,
            max_iterations: 10,
            last_update: 1.0,
        }
        .into();
        assert!(err.is_convergence_error());
        assert!(!err.is_config_error());
    }
}
