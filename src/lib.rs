//! Step-traced Gaussian elimination for dense linear systems
//!
//! This crate solves `A x = b` over the reals and keeps a human-readable
//! record of every row operation performed along the way, so a caller can
//! replay the elimination step by step.
//!
//! # Features
//!
//! - **Partial pivoting**: largest-magnitude pivot selection in each column
//! - **Classification**: unique / infinite / no-solution / singular, decided
//!   from the ranks of the coefficient and augmented blocks
//! - **Parametric solutions**: symbolic general solution for underdetermined
//!   systems, with the pivot and free variable partitions
//! - **Elimination trace**: a rounded snapshot of the augmented matrix after
//!   every swap, normalization, and elimination
//!
//! # Example
//!
//! ```
//! use gauss_trace::{solve, Outcome};
//! use ndarray::array;
//!
//! # fn main() -> Result<(), gauss_trace::SolveError> {
//! let a = array![[2.0, 1.0], [1.0, -1.0]];
//! let b = array![3.0, 0.0];
//!
//! let solution = solve(&a, &b)?;
//! match solution.outcome {
//!     Outcome::Unique { values } => assert_eq!(values, vec![1.0, 1.0]),
//!     _ => unreachable!(),
//! }
//! assert!(!solution.steps.is_empty());
//! # Ok(())
//! # }
//! ```

mod parametric;
pub mod solution;
pub mod solver;
pub mod trace;

// Re-export main types
pub use solution::{Outcome, Solution};
pub use solver::{solve, GaussianSolver, SolveError};
pub use trace::{RowOp, Step};
