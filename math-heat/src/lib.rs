//! Steady-state heat distribution on a square plate
//!
//! The plate is discretised into a `size × size` grid of interior points whose
//! four sides are held at fixed temperatures. Each interior temperature is the
//! mean of its four neighbours, which gives a linear system assembled with the
//! five-point stencil and solved with the `math-heat-solvers` crate.
//!
//! This crate provides:
//!
//! - Grid and boundary definitions
//! - Five-point stencil assembly
//! - Jacobi and direct solve drivers, with per-sweep frames for animation
//! - JSON configuration loading/saving
//! - Output JSON formatting
//!
//! # Example
//!
//! ```
//! use math_heat::{BoundaryTemperatures, HeatProblem, SolverConfig, solve};
//!
//! let problem = HeatProblem::new(4, BoundaryTemperatures::new(100.0, 0.0, 0.0, 0.0)).unwrap();
//! let solution = solve(&problem, &SolverConfig::default()).unwrap();
//!
//! // Points next to the heated left side are the warmest in their row
//! assert!(solution.field.values[[1, 0]] > solution.field.values[[1, 3]]);
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod grid;
pub mod output;
pub mod solve;
pub mod stencil;

pub use config::{
    GridConfig, HeatConfig, MetadataConfig, SolverSection, create_default_config,
    print_config_summary,
};
pub use error::{HeatError, Result};
pub use field::{TemperatureField, frames_from_trace};
pub use grid::{BoundaryTemperatures, HeatProblem, MAX_GRID_SIZE};
pub use output::create_output_json;
pub use solve::{CrossCheck, HeatSolution, SolverConfig, SolverType, cross_check, solve};
pub use stencil::{assemble, neighbour_matrix};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
