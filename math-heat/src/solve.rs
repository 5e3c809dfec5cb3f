//! Solvers for the steady-state heat problem
//!
//! Assembles the five-point system and hands it to the linear solvers of the
//! `math-heat-solvers` crate.
//!
//! # Solver Types
//!
//! - **Jacobi**: iterative, can record every iterate for animation
//! - **Direct**: x = A⁻¹ b, exact up to rounding, O(n³) in the number of points

use crate::error::Result;
use crate::field::{TemperatureField, frames_from_trace};
use crate::grid::HeatProblem;
use crate::stencil::assemble;
use serde::{Deserialize, Serialize};
use solvers::vector_ops::max_abs_difference;
use solvers::{InverseConfig, JacobiConfig, inverse_solve, jacobi};
use std::fmt;
use std::time::Instant;

/// Type of solver to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverType {
    /// Jacobi iteration
    #[default]
    Jacobi,
    /// Direct solve through the matrix inverse
    Direct,
}

impl fmt::Display for SolverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverType::Jacobi => write!(f, "jacobi"),
            SolverType::Direct => write!(f, "direct"),
        }
    }
}

/// Solver configuration
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Solver type to use
    pub solver_type: SolverType,
    /// Jacobi configuration (used for the iterative solver)
    pub jacobi: JacobiConfig<f64>,
    /// Inverse configuration (used for the direct solver)
    pub inverse: InverseConfig<f64>,
    /// Verbosity level (0 = quiet, 1 = summary)
    pub verbosity: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            solver_type: SolverType::Jacobi,
            jacobi: JacobiConfig::default(),
            inverse: InverseConfig::default(),
            verbosity: 0,
        }
    }
}

/// Solution of a heat problem
#[derive(Debug, Clone)]
pub struct HeatSolution {
    /// Steady-state temperatures
    pub field: TemperatureField,
    /// Solver that produced it
    pub solver_type: SolverType,
    /// Number of sweeps (0 for the direct solver)
    pub iterations: usize,
    /// Residual norm ||A x - b||_2 of the returned solution
    pub residual: f64,
    /// Field after every sweep, oldest first, when trace capture was requested
    pub frames: Option<Vec<TemperatureField>>,
}

/// Jacobi and direct solutions side by side
#[derive(Debug, Clone)]
pub struct CrossCheck {
    /// Iterative solution
    pub jacobi: HeatSolution,
    /// Direct solution
    pub direct: HeatSolution,
    /// max |T_jacobi - T_direct| over all grid points
    pub max_abs_difference: f64,
}

/// Solve a heat problem
///
/// # Arguments
/// * `problem` - Grid size and boundary temperatures
/// * `config` - Solver configuration
pub fn solve(problem: &HeatProblem, config: &SolverConfig) -> Result<HeatSolution> {
    let start = Instant::now();
    let system = assemble(problem)?;
    let size = problem.size();

    let result = match config.solver_type {
        SolverType::Jacobi => {
            let solution = jacobi(&system, None, &config.jacobi)?;
            let frames = match &solution.trace {
                Some(trace) => Some(frames_from_trace(trace, size)?),
                None => None,
            };
            HeatSolution {
                residual: system.residual_norm(&solution.x)?,
                field: TemperatureField::from_solution(size, &solution.x)?,
                solver_type: SolverType::Jacobi,
                iterations: solution.iterations,
                frames,
            }
        }
        SolverType::Direct => {
            let solution = inverse_solve(&system, &config.inverse)?;
            HeatSolution {
                residual: system.residual_norm(&solution.x)?,
                field: TemperatureField::from_solution(size, &solution.x)?,
                solver_type: SolverType::Direct,
                iterations: 0,
                frames: None,
            }
        }
    };

    if config.verbosity > 0 {
        log::info!(
            "[heat] {}x{} grid, {} solver: {} iters, residual {:.2e}, time {:.1}ms",
            size,
            size,
            config.solver_type,
            result.iterations,
            result.residual,
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    Ok(result)
}

/// Solve with both Jacobi and the direct solver and compare
pub fn cross_check(problem: &HeatProblem, config: &SolverConfig) -> Result<CrossCheck> {
    let jacobi_solution = solve(
        problem,
        &SolverConfig {
            solver_type: SolverType::Jacobi,
            ..config.clone()
        },
    )?;
    let direct_solution = solve(
        problem,
        &SolverConfig {
            solver_type: SolverType::Direct,
            ..config.clone()
        },
    )?;

    let max_abs_difference = max_abs_difference(
        &jacobi_solution.field.to_vector(),
        &direct_solution.field.to_vector(),
    );
    log::debug!("[heat] cross-check: max |jacobi - direct| = {max_abs_difference:.3e}");

    Ok(CrossCheck {
        jacobi: jacobi_solution,
        direct: direct_solution,
        max_abs_difference,
    })
}
