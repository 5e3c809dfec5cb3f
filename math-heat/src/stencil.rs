//! Five-point finite-difference stencil
//!
//! The steady-state heat equation on a uniform grid says every point holds
//! the mean of its four neighbours:
//!
//! ```text
//! 4 T[p] - T[left] - T[up] - T[right] - T[down] = 0
//! ```
//!
//! Neighbours that fall outside the grid are fixed boundary temperatures and
//! move to the right-hand side. Points are numbered row-major,
//! `p = size * row + col`.

use crate::error::Result;
use crate::grid::HeatProblem;
use ndarray::{Array1, Array2};
use solvers::LinearSystem;

/// Adjacency matrix of the grid and the boundary contributions
///
/// `matrix[p][q] = 1` when `q` is an in-grid neighbour of `p`. For each
/// missing neighbour the temperature of that side is added to `rhs[p]`, so a
/// corner point receives two boundary temperatures and a 1×1 grid all four.
pub fn neighbour_matrix(problem: &HeatProblem) -> (Array2<f64>, Array1<f64>) {
    let size = problem.size();
    let n = problem.num_points();
    let boundary = problem.boundary();

    let mut matrix = Array2::zeros((n, n));
    let mut rhs = Array1::zeros(n);

    for row in 0..size {
        for col in 0..size {
            let p = problem.index(row, col);

            if col > 0 {
                matrix[[p, p - 1]] = 1.0;
            } else {
                rhs[p] += boundary.left;
            }

            if row > 0 {
                matrix[[p, p - size]] = 1.0;
            } else {
                rhs[p] += boundary.up;
            }

            if col + 1 < size {
                matrix[[p, p + 1]] = 1.0;
            } else {
                rhs[p] += boundary.right;
            }

            if row + 1 < size {
                matrix[[p, p + size]] = 1.0;
            } else {
                rhs[p] += boundary.down;
            }
        }
    }

    (matrix, rhs)
}

/// Assemble the system `(4 I - N) T = rhs`
///
/// The matrix is weakly diagonally dominant, strictly so on rows touching the
/// boundary, and irreducible; Jacobi iteration converges on it.
pub fn assemble(problem: &HeatProblem) -> Result<LinearSystem<f64>> {
    let (neighbours, rhs) = neighbour_matrix(problem);
    let n = problem.num_points();
    let matrix = Array2::<f64>::eye(n) * 4.0 - neighbours;
    Ok(LinearSystem::new(matrix, rhs)?)
}
