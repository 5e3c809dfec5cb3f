//! Direct solvers for linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`lu_solve`]: LU decomposition with partial pivoting
//! - [`inverse_solve`]: x = A⁻¹ b with a conditioning guard, used as a
//!   reference for the iterative solver

mod inverse;
mod lu;

pub use inverse::{InverseConfig, InverseSolution, invert, inverse_solve, norm_one};
pub use lu::{LuFactorization, lu_factorize, lu_solve};
