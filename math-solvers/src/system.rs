//! Dense linear system `A x = b`
//!
//! The dimensions are validated once, when the system is built. Solvers
//! borrow the system immutably and never check the shapes again.

use crate::error::{Result, SolverError};
use crate::traits::{LinearOperator, RealField};
use crate::vector_ops::vector_norm;
use ndarray::{Array1, Array2, ArrayView1};

/// A square dense system `A x = b`
#[derive(Debug, Clone)]
pub struct LinearSystem<T: RealField> {
    matrix: Array2<T>,
    rhs: Array1<T>,
}

impl<T: RealField> LinearSystem<T> {
    /// Build a system, checking `A.rows == A.cols == b.len() > 0`
    pub fn new(matrix: Array2<T>, rhs: Array1<T>) -> Result<Self> {
        let n = matrix.nrows();
        if n == 0 && matrix.ncols() == 0 && rhs.is_empty() {
            return Err(SolverError::EmptySystem);
        }
        if matrix.ncols() != n {
            return Err(SolverError::DimensionMismatch {
                context: "matrix columns",
                expected: n,
                got: matrix.ncols(),
            });
        }
        if rhs.len() != n {
            return Err(SolverError::DimensionMismatch {
                context: "right-hand side",
                expected: n,
                got: rhs.len(),
            });
        }
        Ok(Self { matrix, rhs })
    }

    /// Number of unknowns
    pub fn dim(&self) -> usize {
        self.rhs.len()
    }

    /// Coefficient matrix A
    pub fn matrix(&self) -> &Array2<T> {
        &self.matrix
    }

    /// Right-hand side b
    pub fn rhs(&self) -> &Array1<T> {
        &self.rhs
    }

    /// Diagonal of A
    pub fn diagonal(&self) -> Array1<T> {
        self.matrix.diag().to_owned()
    }

    /// Row i of A
    pub fn row(&self, i: usize) -> ArrayView1<'_, T> {
        self.matrix.row(i)
    }

    /// First row with an exactly zero diagonal entry, if any
    pub fn zero_diagonal_row(&self) -> Option<usize> {
        self.matrix.diag().iter().position(|d| d.is_zero())
    }

    /// Strict row diagonal dominance: |A_ii| > Σ_{j≠i} |A_ij| for every row
    pub fn is_diagonally_dominant(&self) -> bool {
        self.matrix.outer_iter().enumerate().all(|(i, row)| {
            let off_diag = row
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(T::zero(), |acc, (_, a)| acc + a.abs());
            row[i].abs() > off_diag
        })
    }

    /// Residual vector r = A x - b
    pub fn residual(&self, x: &Array1<T>) -> Result<Array1<T>> {
        self.check_vector("solution", x)?;
        Ok(&self.matrix.apply(x) - &self.rhs)
    }

    /// Residual norm ||A x - b||_2
    pub fn residual_norm(&self, x: &Array1<T>) -> Result<T> {
        Ok(vector_norm(&self.residual(x)?))
    }

    /// Check that a vector has one entry per unknown
    pub(crate) fn check_vector(&self, context: &'static str, v: &Array1<T>) -> Result<()> {
        if v.len() != self.dim() {
            return Err(SolverError::DimensionMismatch {
                context,
                expected: self.dim(),
                got: v.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_new_valid() {
        let system = LinearSystem::new(array![[2.0_f64, 1.0], [1.0, 3.0]], array![1.0, 2.0])
            .expect("valid system");
        assert_eq!(system.dim(), 2);
        assert_eq!(system.diagonal(), array![2.0, 3.0]);
    }

    #[test]
    fn test_empty_rejected() {
        let result = LinearSystem::<f64>::new(Array2::zeros((0, 0)), Array1::zeros(0));
        assert!(matches!(result, Err(SolverError::EmptySystem)));
    }

    #[test]
    fn test_non_square_rejected() {
        let result = LinearSystem::new(Array2::<f64>::zeros((2, 3)), Array1::zeros(2));
        assert!(matches!(
            result,
            Err(SolverError::DimensionMismatch {
                expected: 2,
                got: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_rhs_mismatch_rejected() {
        let result = LinearSystem::new(Array2::<f64>::eye(3), Array1::zeros(4));
        let err = result.unwrap_err();
        assert!(err.is_dimension_error());
        assert!(err.to_string().contains("right-hand side"));
    }

    #[test]
    fn test_diagonal_dominance() {
        let dominant =
            LinearSystem::new(array![[4.0_f64, -1.0], [-1.0, 4.0]], array![0.0, 0.0]).unwrap();
        assert!(dominant.is_diagonally_dominant());

        // Equality is not strict dominance
        let weak = LinearSystem::new(array![[1.0_f64, -1.0], [-1.0, 1.0]], array![0.0, 0.0])
            .unwrap();
        assert!(!weak.is_diagonally_dominant());
    }

    #[test]
    fn test_zero_diagonal_row() {
        let system =
            LinearSystem::new(array![[1.0_f64, 2.0], [3.0, 0.0]], array![1.0, 1.0]).unwrap();
        assert_eq!(system.zero_diagonal_row(), Some(1));
    }

    #[test]
    fn test_residual() {
        let system =
            LinearSystem::new(array![[2.0_f64, 0.0], [0.0, 4.0]], array![2.0, 4.0]).unwrap();
        let r = system.residual(&array![1.0, 1.0]).unwrap();
        assert_relative_eq!(r[0], 0.0);
        assert_relative_eq!(r[1], 0.0);
        assert!(system.residual(&array![1.0]).is_err());
    }
}
