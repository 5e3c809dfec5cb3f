//! Jacobi iterative solver
//!
//! Classical Jacobi relaxation for dense systems. Every sweep computes a new
//! iterate entirely from the previous one:
//!
//! ```text
//! x_new[i] = (b[i] - Σ_{j≠i} A[i][j] * x[j]) / A[i][i]
//! ```
//!
//! The previous iterate is never updated in place; doing so would turn the
//! method into Gauss-Seidel. Convergence is declared when the Euclidean norm
//! of `x_new - x` drops strictly below the tolerance.
//!
//! Strict diagonal dominance of `A` is sufficient for convergence from any
//! initial guess.
//!
//! # Zero diagonal entries
//!
//! A nonzero diagonal is a precondition. By default it is not checked: the
//! division produces an infinity or NaN, the update norm becomes non-finite,
//! never passes the tolerance test, and the run ends with
//! [`SolverError::NonConvergence`]. Setting
//! [`JacobiConfig::check_diagonal`] (see [`JacobiConfig::strict`]) rejects
//! such systems up front with [`SolverError::SingularDiagonal`].

use super::trace::IterationTrace;
use crate::error::{Result, SolverError};
use crate::system::LinearSystem;
use crate::traits::RealField;
use crate::vector_ops::difference_norm;
use ndarray::{Array1, ArrayView1};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Systems at least this large sweep their rows in parallel when the `rayon` feature is on
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 1000;

/// Jacobi solver configuration
#[derive(Debug, Clone)]
pub struct JacobiConfig<R> {
    /// Maximum number of sweeps
    pub max_iterations: usize,
    /// Convergence threshold on ||x_new - x||_2
    pub tolerance: R,
    /// Record every iterate in an [`IterationTrace`]
    pub capture_trace: bool,
    /// Reject systems with a zero diagonal entry before iterating
    pub check_diagonal: bool,
    /// Log progress every N sweeps (0 = no output)
    pub print_interval: usize,
}

impl<R: RealField> Default for JacobiConfig<R> {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: R::default_tolerance(),
            capture_trace: false,
            check_diagonal: false,
            print_interval: 0,
        }
    }
}

impl<R: RealField> JacobiConfig<R> {
    /// Default configuration with diagonal checking enabled
    pub fn strict() -> Self {
        Self {
            check_diagonal: true,
            ..Default::default()
        }
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: R) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the sweep budget
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Enable iterate recording
    pub fn with_trace(mut self) -> Self {
        self.capture_trace = true;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.tolerance > R::zero()) || !self.tolerance.is_finite() {
            return Err(SolverError::InvalidConfig(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Jacobi solver result
#[derive(Debug, Clone)]
pub struct JacobiSolution<T: RealField> {
    /// Solution vector (the converging iterate)
    pub x: Array1<T>,
    /// Number of sweeps performed, including the converging one
    pub iterations: usize,
    /// Norm of the last update ||x_k - x_{k-1}||_2
    pub update_norm: T,
    /// Every iterate, oldest first, when `capture_trace` was set
    pub trace: Option<IterationTrace<T>>,
}

/// Solve Ax = b with Jacobi iteration
///
/// # Arguments
/// * `system` - The linear system
/// * `x0` - Initial guess (zero vector when `None`)
/// * `config` - Solver configuration
///
/// # Errors
/// * [`SolverError::DimensionMismatch`] if `x0` has the wrong length
/// * [`SolverError::InvalidConfig`] for a zero sweep budget or a bad tolerance
/// * [`SolverError::SingularDiagonal`] with `check_diagonal` and a zero pivot
/// * [`SolverError::NonConvergence`] once `max_iterations` sweeps are spent
pub fn jacobi<T: RealField>(
    system: &LinearSystem<T>,
    x0: Option<&Array1<T>>,
    config: &JacobiConfig<T>,
) -> Result<JacobiSolution<T>> {
    config.validate()?;

    let n = system.dim();
    let mut x = match x0 {
        Some(x0) => {
            system.check_vector("initial guess", x0)?;
            x0.clone()
        }
        None => Array1::zeros(n),
    };

    if config.check_diagonal {
        if let Some(row) = system.zero_diagonal_row() {
            return Err(SolverError::SingularDiagonal { row });
        }
    }

    let mut trace = config
        .capture_trace
        .then(|| IterationTrace::with_capacity(n, config.max_iterations));

    log::debug!(
        "Jacobi: n = {}, tolerance = {:e}, max_iterations = {}, trace = {}",
        n,
        config.tolerance.to_f64_lossy(),
        config.max_iterations,
        config.capture_trace
    );

    let mut last_update = T::infinity();
    for k in 0..config.max_iterations {
        let x_new = sweep(system, &x);
        let update = difference_norm(&x_new, &x);

        if let Some(trace) = trace.as_mut() {
            trace.push(x_new.clone());
        }

        if config.print_interval > 0 && (k + 1) % config.print_interval == 0 {
            log::info!(
                "Jacobi iteration {}: update norm = {:.6e}",
                k + 1,
                update.to_f64_lossy()
            );
        }

        if update < config.tolerance {
            log::debug!(
                "Jacobi converged after {} iterations (update norm {:.3e})",
                k + 1,
                update.to_f64_lossy()
            );
            return Ok(JacobiSolution {
                x: x_new,
                iterations: k + 1,
                update_norm: update,
                trace,
            });
        }

        x = x_new;
        last_update = update;
    }

    log::warn!(
        "Jacobi did not converge in {} iterations (last update norm {:.3e})",
        config.max_iterations,
        last_update.to_f64_lossy()
    );
    Err(SolverError::NonConvergence {
        tolerance: config.tolerance.to_f64_lossy(),
        max_iterations: config.max_iterations,
        last_update: last_update.to_f64_lossy(),
    })
}

/// One Jacobi sweep: a fresh iterate computed from the frozen previous one
fn sweep<T: RealField>(system: &LinearSystem<T>, x: &Array1<T>) -> Array1<T> {
    #[cfg(feature = "rayon")]
    {
        if x.len() >= PARALLEL_THRESHOLD {
            return sweep_parallel(system, x);
        }
    }
    sweep_sequential(system, x)
}

fn sweep_sequential<T: RealField>(system: &LinearSystem<T>, x: &Array1<T>) -> Array1<T> {
    let b = system.rhs();
    Array1::from_shape_fn(x.len(), |i| row_update(i, system.row(i), b[i], x))
}

#[cfg(feature = "rayon")]
fn sweep_parallel<T: RealField>(system: &LinearSystem<T>, x: &Array1<T>) -> Array1<T> {
    let b = system.rhs();
    let values: Vec<T> = (0..x.len())
        .into_par_iter()
        .map(|i| row_update(i, system.row(i), b[i], x))
        .collect();
    Array1::from_vec(values)
}

#[inline]
fn row_update<T: RealField>(i: usize, row: ArrayView1<'_, T>, b_i: T, x: &Array1<T>) -> T {
    let mut sigma = T::zero();
    for (j, (&a_ij, &x_j)) in row.iter().zip(x.iter()).enumerate() {
        if j != i {
            sigma += a_ij * x_j;
        }
    }
    (b_i - sigma) / row[i]
}
