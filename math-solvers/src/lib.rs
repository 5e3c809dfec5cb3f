//! Dense linear solvers for steady-state heat problems
//!
//! This crate solves `A x = b` for small dense systems, primarily with Jacobi
//! iteration, and provides a direct solve through the matrix inverse that is
//! used to cross-check the iterative result.
//!
//! # Features
//!
//! - **Iterative Solver**: Jacobi relaxation with an optional per-iteration trace
//! - **Direct Solvers**: LU decomposition with partial pivoting, explicit inverse
//! - **Generic Scalar Types**: Works with f64 and f32
//! - **`rayon` feature**: row-parallel sweeps for large systems
//!
//! # Example
//!
//! ```
//! use math_heat_solvers::{JacobiConfig, LinearSystem, jacobi};
//! use ndarray::array;
//!
//! let a = array![[4.0_f64, -1.0], [-1.0, 4.0]];
//! let b = array![3.0_f64, 3.0];
//! let system = LinearSystem::new(a, b)?;
//!
//! let solution = jacobi(&system, None, &JacobiConfig::default().with_trace())?;
//! assert!((solution.x[0] - 1.0).abs() < 1e-5);
//! assert_eq!(solution.trace.map(|t| t.len()), Some(solution.iterations));
//! # Ok::<(), math_heat_solvers::SolverError>(())
//! ```

pub mod direct;
pub mod error;
pub mod iterative;
pub mod system;
pub mod traits;
pub mod vector_ops;

// Re-export main types
pub use error::{Result, SolverError};
pub use system::LinearSystem;
pub use traits::{LinearOperator, RealField};

// Re-export iterative solvers
pub use iterative::{IterationTrace, JacobiConfig, JacobiSolution, jacobi};

// Re-export direct solvers
pub use direct::{
    InverseConfig, InverseSolution, LuFactorization, inverse_solve, invert, lu_factorize,
    lu_solve,
};
