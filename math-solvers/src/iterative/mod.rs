//! Iterative solvers for linear systems
//!
//! - [`jacobi`]: Jacobi relaxation, optionally recording every iterate in an
//!   [`IterationTrace`]

mod jacobi;
mod trace;

pub use jacobi::{JacobiConfig, JacobiSolution, jacobi};
pub use trace::IterationTrace;
