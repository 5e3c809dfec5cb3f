//! JSON configuration for heat simulations

use crate::error::{HeatError, Result};
use crate::grid::{BoundaryTemperatures, HeatProblem};
use crate::solve::{SolverConfig, SolverType};
use serde::{Deserialize, Serialize};
use solvers::{InverseConfig, JacobiConfig};
use std::fs;
use std::path::Path;

/// Complete simulation configuration loaded from JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeatConfig {
    /// Grid configuration
    #[serde(default)]
    pub grid: GridConfig,
    /// Boundary temperatures
    #[serde(default)]
    pub boundary: BoundaryTemperatures,
    /// Solver configuration
    #[serde(default)]
    pub solver: SolverSection,
    /// Simulation metadata
    #[serde(default)]
    pub metadata: MetadataConfig,
}

/// Grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Points per side
    #[serde(default = "default_size")]
    pub size: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
        }
    }
}

fn default_size() -> usize {
    10
}

/// Solver section of the configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverSection {
    /// Solver method ("jacobi" or "direct")
    #[serde(default)]
    pub method: SolverType,
    /// Convergence tolerance for Jacobi
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Sweep budget for Jacobi
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Record every Jacobi iterate
    #[serde(default)]
    pub capture_trace: bool,
    /// Reject zero diagonal entries before iterating
    #[serde(default)]
    pub strict_diagonal: bool,
    /// Largest acceptable condition number for the direct solver
    #[serde(default = "default_max_condition")]
    pub max_condition: f64,
}

impl Default for SolverSection {
    fn default() -> Self {
        Self {
            method: SolverType::Jacobi,
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            capture_trace: false,
            strict_diagonal: false,
            max_condition: default_max_condition(),
        }
    }
}

fn default_tolerance() -> f64 {
    1e-6
}

fn default_max_iterations() -> usize {
    1000
}

fn default_max_condition() -> f64 {
    1e12
}

/// Simulation metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Simulation description
    #[serde(default)]
    pub description: String,
    /// Author name
    #[serde(default)]
    pub author: String,
}

impl HeatConfig {
    /// Load configuration from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save configuration to JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Convert to a validated problem
    pub fn to_problem(&self) -> Result<HeatProblem> {
        HeatProblem::new(self.grid.size, self.boundary)
    }

    /// Convert to solver configuration
    pub fn to_solver_config(&self) -> Result<SolverConfig> {
        let s = &self.solver;
        if s.max_iterations == 0 {
            return Err(HeatError::InvalidConfig(
                "solver.max_iterations must be at least 1".to_string(),
            ));
        }
        if !(s.tolerance > 0.0) || !s.tolerance.is_finite() {
            return Err(HeatError::InvalidConfig(format!(
                "solver.tolerance must be positive and finite, got {}",
                s.tolerance
            )));
        }
        if !(s.max_condition > 0.0) || !s.max_condition.is_finite() {
            return Err(HeatError::InvalidConfig(format!(
                "solver.max_condition must be positive and finite, got {}",
                s.max_condition
            )));
        }

        Ok(SolverConfig {
            solver_type: s.method,
            jacobi: JacobiConfig {
                max_iterations: s.max_iterations,
                tolerance: s.tolerance,
                capture_trace: s.capture_trace,
                check_diagonal: s.strict_diagonal,
                print_interval: 0,
            },
            inverse: InverseConfig {
                max_condition: s.max_condition,
            },
            verbosity: 0,
        })
    }
}

/// Default configuration: 10×10 grid, left side at 100, other sides at 0
pub fn create_default_config() -> HeatConfig {
    HeatConfig {
        metadata: MetadataConfig {
            description: "Left side heated, other sides cold".to_string(),
            author: String::new(),
        },
        ..Default::default()
    }
}

/// Print configuration summary
pub fn print_config_summary(config: &HeatConfig) {
    let b = &config.boundary;
    println!("=== Heat Simulation Configuration ===");
    if !config.metadata.description.is_empty() {
        println!("Description: {}", config.metadata.description);
    }
    println!(
        "Grid: {}x{} ({} unknowns)",
        config.grid.size,
        config.grid.size,
        config.grid.size.saturating_mul(config.grid.size)
    );
    println!(
        "Boundary: left={}, up={}, right={}, down={}",
        b.left, b.up, b.right, b.down
    );
    match config.solver.method {
        SolverType::Jacobi => println!(
            "Solver: jacobi (tolerance {:e}, max {} iterations{})",
            config.solver.tolerance,
            config.solver.max_iterations,
            if config.solver.capture_trace {
                ", trace"
            } else {
                ""
            }
        ),
        SolverType::Direct => println!(
            "Solver: direct (max condition {:e})",
            config.solver.max_condition
        ),
    }
    println!();
}
