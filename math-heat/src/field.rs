//! Temperature field on the grid
//!
//! Solution vectors are row-major: entry `size * row + col` is the grid point
//! at (row, col), row 0 along the upper side and column 0 along the left.

use crate::error::{HeatError, Result};
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use solvers::IterationTrace;

/// Temperatures at every grid point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureField {
    /// Points per side
    pub size: usize,
    /// `size × size` temperatures
    pub values: Array2<f64>,
}

impl TemperatureField {
    /// Reshape a row-major solution vector of length `size²`
    pub fn from_solution(size: usize, solution: &Array1<f64>) -> Result<Self> {
        if solution.len() != size * size {
            return Err(HeatError::InvalidConfig(format!(
                "solution has {} entries, expected {} for a {size}×{size} grid",
                solution.len(),
                size * size
            )));
        }
        let values = Array2::from_shape_fn((size, size), |(row, col)| solution[size * row + col]);
        Ok(Self { size, values })
    }

    /// Temperature at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied()
    }

    /// One grid row, left to right
    pub fn row(&self, row: usize) -> ArrayView1<'_, f64> {
        self.values.row(row)
    }

    /// Flatten back to the row-major solution vector
    pub fn to_vector(&self) -> Array1<f64> {
        self.values.iter().copied().collect()
    }

    /// Lowest temperature
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Highest temperature
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Mean temperature
    pub fn mean(&self) -> f64 {
        self.values.mean().unwrap_or(f64::NAN)
    }

    /// Rows as nested vectors, for JSON output
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values.outer_iter().map(|r| r.to_vec()).collect()
    }
}

/// One field per recorded iterate, oldest first
pub fn frames_from_trace(
    trace: &IterationTrace<f64>,
    size: usize,
) -> Result<Vec<TemperatureField>> {
    trace
        .iter()
        .map(|iterate| TemperatureField::from_solution(size, iterate))
        .collect()
}
