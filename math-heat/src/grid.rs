//! Square grid with fixed (Dirichlet) temperatures on its four sides

use crate::error::{HeatError, Result};
use serde::{Deserialize, Serialize};

/// Temperatures held fixed along each side of the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryTemperatures {
    /// Left side (column -1)
    pub left: f64,
    /// Upper side (row -1)
    pub up: f64,
    /// Right side (column `size`)
    pub right: f64,
    /// Lower side (row `size`)
    pub down: f64,
}

impl BoundaryTemperatures {
    /// Create boundary temperatures in (left, up, right, down) order
    pub fn new(left: f64, up: f64, right: f64, down: f64) -> Self {
        Self {
            left,
            up,
            right,
            down,
        }
    }

    /// Same temperature on every side
    pub fn uniform(t: f64) -> Self {
        Self::new(t, t, t, t)
    }

    /// Lowest boundary temperature
    pub fn min(&self) -> f64 {
        self.left.min(self.up).min(self.right).min(self.down)
    }

    /// Highest boundary temperature
    pub fn max(&self) -> f64 {
        self.left.max(self.up).max(self.right).max(self.down)
    }

    fn validate(&self) -> Result<()> {
        for (side, t) in [
            ("left", self.left),
            ("up", self.up),
            ("right", self.right),
            ("down", self.down),
        ] {
            if !t.is_finite() {
                return Err(HeatError::InvalidConfig(format!(
                    "{side} boundary temperature must be finite, got {t}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for BoundaryTemperatures {
    fn default() -> Self {
        Self::new(100.0, 0.0, 0.0, 0.0)
    }
}

/// Largest supported grid side
///
/// The system is dense with `size⁴` entries: at this size the matrix is
/// 10⁴ × 10⁴, 800 MB of `f64`.
pub const MAX_GRID_SIZE: usize = 100;

/// Steady-state heat problem on a `size × size` grid of unknowns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatProblem {
    size: usize,
    boundary: BoundaryTemperatures,
}

impl HeatProblem {
    /// Create a problem; `size` must be in `1..=MAX_GRID_SIZE` and temperatures finite
    pub fn new(size: usize, boundary: BoundaryTemperatures) -> Result<Self> {
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(HeatError::InvalidGridSize { size });
        }
        boundary.validate()?;
        Ok(Self { size, boundary })
    }

    /// Points per side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of unknowns (`size²`)
    pub fn num_points(&self) -> usize {
        self.size * self.size
    }

    /// Boundary temperatures
    pub fn boundary(&self) -> &BoundaryTemperatures {
        &self.boundary
    }

    /// Row-major index of grid point (row, col)
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        self.size * row + col
    }
}
