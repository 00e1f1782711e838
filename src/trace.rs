//! Elimination trace records
//!
//! Every mutation of the augmented matrix appends one [`Step`] to the trace.
//! Steps are observational: they are never read back by the solver, only
//! returned to the caller inside the final [`Solution`](crate::Solution).

use ndarray::{Array1, Array2};
use serde::Serialize;
use std::fmt;

/// Row operation applied to the augmented matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowOp {
    /// Two rows were exchanged to bring the largest pivot candidate up.
    PartialPivot,
    /// The pivot row was scaled so the pivot entry becomes 1.
    Normalization,
    /// A multiple of the pivot row was subtracted from another row.
    Elimination,
}

impl fmt::Display for RowOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RowOp::PartialPivot => "partial pivot",
            RowOp::Normalization => "normalization",
            RowOp::Elimination => "elimination",
        };
        f.write_str(label)
    }
}

/// Snapshot of the augmented matrix taken right after one row operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Which operation produced this state.
    pub operation: RowOp,
    /// Human-readable description (rows are 1-based).
    pub description: String,
    /// Coefficient block, rounded for display.
    pub matrix: Array2<f64>,
    /// Constant column, rounded for display.
    pub rhs: Array1<f64>,
}
