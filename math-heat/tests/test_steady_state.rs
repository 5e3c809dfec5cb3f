//! Steady-state validation on the heated plate
//!
//! Checks physical properties of the solution that hold for any grid size:
//! monotone decay away from the heated side, mirror symmetry, the maximum
//! principle and linearity in the boundary temperatures.

use approx::assert_abs_diff_eq;
use math_heat::{
    BoundaryTemperatures, HeatError, HeatProblem, SolverConfig, SolverType, TemperatureField,
    assemble, cross_check, solve,
};
use solvers::{JacobiConfig, SolverError};

fn solve_field(
    size: usize,
    boundary: BoundaryTemperatures,
    solver_type: SolverType,
) -> TemperatureField {
    let problem = HeatProblem::new(size, boundary).unwrap();
    let config = SolverConfig {
        solver_type,
        jacobi: JacobiConfig::default().with_tolerance(1e-10),
        ..Default::default()
    };
    solve(&problem, &config).unwrap().field
}

#[test]
fn test_left_heated_rows_decrease() {
    let boundary = BoundaryTemperatures::new(100.0, 0.0, 0.0, 0.0);

    for solver_type in [SolverType::Jacobi, SolverType::Direct] {
        let field = solve_field(10, boundary, solver_type);
        println!("\n=== 10x10 plate, left at 100 ({solver_type}) ===");
        for row in field.values.rows() {
            println!("{:?}", row.iter().map(|t| format!("{t:.2}")).collect::<Vec<_>>());
        }

        for r in 0..10 {
            for c in 0..9 {
                let here = field.values[[r, c]];
                let next = field.values[[r, c + 1]];
                assert!(
                    here >= next - 1e-9,
                    "{solver_type}: row {r} increases at column {c}: {here} -> {next}"
                );
            }
        }
    }
}

#[test]
fn test_up_down_symmetry() {
    let size = 9;
    let boundary = BoundaryTemperatures::new(100.0, 0.0, 0.0, 0.0);
    let field = solve_field(size, boundary, SolverType::Jacobi);

    for r in 0..size {
        for c in 0..size {
            assert_abs_diff_eq!(
                field.values[[r, c]],
                field.values[[size - 1 - r, c]],
                epsilon = 1e-7
            );
        }
    }
}

#[test]
fn test_maximum_principle() {
    let boundary = BoundaryTemperatures::new(80.0, -20.0, 35.0, 10.0);
    let field = solve_field(12, boundary, SolverType::Direct);

    assert!(field.min() >= boundary.min());
    assert!(field.max() <= boundary.max());
    // Strictly inside for a non-uniform boundary
    assert!(field.min() > boundary.min());
    assert!(field.max() < boundary.max());
}

#[test]
fn test_rotations_sum_to_uniform() {
    // The four single-side problems add up to a uniformly heated plate
    let size = 7;
    let sides = [
        BoundaryTemperatures::new(100.0, 0.0, 0.0, 0.0),
        BoundaryTemperatures::new(0.0, 100.0, 0.0, 0.0),
        BoundaryTemperatures::new(0.0, 0.0, 100.0, 0.0),
        BoundaryTemperatures::new(0.0, 0.0, 0.0, 100.0),
    ];

    let fields: Vec<_> = sides
        .iter()
        .map(|&b| solve_field(size, b, SolverType::Direct))
        .collect();

    for r in 0..size {
        for c in 0..size {
            let sum: f64 = fields.iter().map(|f| f.values[[r, c]]).sum();
            assert_abs_diff_eq!(sum, 100.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_jacobi_matches_direct() {
    let problem = HeatProblem::new(10, BoundaryTemperatures::new(100.0, 0.0, 0.0, 0.0)).unwrap();
    let config = SolverConfig {
        jacobi: JacobiConfig::default().with_tolerance(1e-9),
        ..Default::default()
    };

    let check = cross_check(&problem, &config).unwrap();
    println!(
        "Jacobi: {} iterations, max difference to direct {:.3e}",
        check.jacobi.iterations, check.max_abs_difference
    );
    assert!(check.max_abs_difference < 1e-6);
    assert!(check.direct.residual < 1e-9);
}

#[test]
fn test_assembled_system_is_dominant_on_edges() {
    let problem = HeatProblem::new(5, BoundaryTemperatures::default()).unwrap();
    let system = assemble(&problem).unwrap();

    assert_eq!(system.dim(), 25);
    assert!(system.zero_diagonal_row().is_none());
    // Interior rows are only weakly dominant
    assert!(!system.is_diagonally_dominant());
}

#[test]
fn test_single_point_grid() {
    let boundary = BoundaryTemperatures::new(10.0, 20.0, 30.0, 40.0);
    let field = solve_field(1, boundary, SolverType::Jacobi);
    assert_abs_diff_eq!(field.values[[0, 0]], 25.0, epsilon = 1e-9);
}

#[test]
fn test_trace_frames_warm_up() {
    let problem = HeatProblem::new(6, BoundaryTemperatures::new(100.0, 0.0, 0.0, 0.0)).unwrap();
    let config = SolverConfig {
        jacobi: JacobiConfig::default().with_trace(),
        ..Default::default()
    };
    let solution = solve(&problem, &config).unwrap();
    let frames = solution.frames.unwrap();

    // Starting from zero with non-negative boundaries, every sweep warms the plate
    for pair in frames.windows(2) {
        assert!(pair[1].mean() >= pair[0].mean());
    }
    assert_eq!(frames.last(), Some(&solution.field));
}

#[test]
fn test_invalid_grid_size() {
    let err = HeatProblem::new(0, BoundaryTemperatures::default()).unwrap_err();
    assert!(matches!(err, HeatError::InvalidGridSize { size: 0 }));
}

#[test]
fn test_non_convergence_reported() {
    let problem = HeatProblem::new(8, BoundaryTemperatures::default()).unwrap();
    let config = SolverConfig {
        jacobi: JacobiConfig::default().with_max_iterations(2),
        ..Default::default()
    };
    let err = solve(&problem, &config).unwrap_err();
    assert!(matches!(
        err,
        HeatError::Solver(SolverError::NonConvergence {
            max_iterations: 2,
            ..
        })
    ));
}
