//! Steady-state heat simulator
//!
//! Solves for the temperature of every interior point of a square plate whose
//! four sides are held at fixed temperatures. Each interior point settles at
//! the mean of its four neighbours.
//!
//! Usage:
//!   cargo run --release --bin heat-simulator -- --size 20 --left 100
//!   cargo run --release --bin heat-simulator -- --config plate.json --output result.json
//!   cargo run --release --bin heat-simulator -- --help

use clap::{Parser, ValueEnum};
use math_heat::{
    HeatConfig, HeatSolution, SolverType, create_default_config, create_output_json,
    cross_check, print_config_summary, solve,
};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "heat-simulator")]
#[command(about = "Steady-state heat distribution on a square grid")]
struct Args {
    /// Path to JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output JSON file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Points per side of the grid
    #[arg(long)]
    size: Option<usize>,

    /// Temperature along the left side
    #[arg(long)]
    left: Option<f64>,

    /// Temperature along the upper side
    #[arg(long)]
    up: Option<f64>,

    /// Temperature along the right side
    #[arg(long)]
    right: Option<f64>,

    /// Temperature along the lower side
    #[arg(long)]
    down: Option<f64>,

    /// Override solver method
    #[arg(short, long)]
    solver: Option<CliSolverType>,

    /// Jacobi convergence tolerance
    #[arg(long)]
    tolerance: Option<f64>,

    /// Jacobi sweep budget
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Record the field after every Jacobi sweep
    #[arg(long)]
    trace: bool,

    /// Reject zero diagonal entries before iterating
    #[arg(long)]
    strict: bool,

    /// Solve with both Jacobi and the direct solver and compare
    #[arg(long)]
    cross_check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliSolverType {
    Jacobi,
    Direct,
}

impl From<CliSolverType> for SolverType {
    fn from(value: CliSolverType) -> Self {
        match value {
            CliSolverType::Jacobi => SolverType::Jacobi,
            CliSolverType::Direct => SolverType::Direct,
        }
    }
}

/// Apply command-line overrides on top of the loaded configuration
fn apply_overrides(config: &mut HeatConfig, args: &Args) {
    if let Some(size) = args.size {
        config.grid.size = size;
    }
    if let Some(left) = args.left {
        config.boundary.left = left;
    }
    if let Some(up) = args.up {
        config.boundary.up = up;
    }
    if let Some(right) = args.right {
        config.boundary.right = right;
    }
    if let Some(down) = args.down {
        config.boundary.down = down;
    }
    if let Some(solver) = args.solver {
        config.solver.method = solver.into();
    }
    if let Some(tolerance) = args.tolerance {
        config.solver.tolerance = tolerance;
    }
    if let Some(max_iterations) = args.max_iterations {
        config.solver.max_iterations = max_iterations;
    }
    if args.trace {
        config.solver.capture_trace = true;
    }
    if args.strict {
        config.solver.strict_diagonal = true;
    }
}

fn print_grid(solution: &HeatSolution) {
    let field = &solution.field;
    println!("Temperature grid ({}x{}):", field.size, field.size);
    for row in field.values.rows() {
        let line: Vec<String> = row.iter().map(|t| format!("{t:8.3}")).collect();
        println!("{}", line.join(" "));
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let mut config = if let Some(config_path) = &args.config {
        println!("Loading configuration from: {}", config_path.display());
        HeatConfig::from_file(config_path)?
    } else {
        println!("No configuration file specified, using default plate");
        create_default_config()
    };
    apply_overrides(&mut config, &args);

    print_config_summary(&config);

    let problem = config.to_problem()?;
    let mut solver_config = config.to_solver_config()?;
    if args.verbose {
        solver_config.verbosity = 1;
        solver_config.jacobi.print_interval = 100;
    }

    let start = Instant::now();
    let solution = if args.cross_check {
        let check = cross_check(&problem, &solver_config)?;
        println!(
            "Cross-check: jacobi {} iterations, max |jacobi - direct| = {:.3e}",
            check.jacobi.iterations, check.max_abs_difference
        );
        match config.solver.method {
            SolverType::Jacobi => check.jacobi,
            SolverType::Direct => check.direct,
        }
    } else {
        solve(&problem, &solver_config)?
    };
    let elapsed = start.elapsed();

    println!(
        "Solved with {} in {:.1}ms: {} iterations, residual {:.3e}",
        solution.solver_type,
        elapsed.as_secs_f64() * 1000.0,
        solution.iterations,
        solution.residual
    );
    println!(
        "Temperature range: {:.3} .. {:.3} (mean {:.3})\n",
        solution.field.min(),
        solution.field.max(),
        solution.field.mean()
    );
    print_grid(&solution);

    if let Some(output) = &args.output {
        let output_data =
            create_output_json(&config, &solution, &solution.solver_type.to_string());
        println!("Saving results to: {}", output.display());
        fs::write(output, serde_json::to_string_pretty(&output_data)?)?;
    }
    println!("Done!");

    Ok(())
}
