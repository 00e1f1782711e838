//! Gaussian elimination solver
//!
//! Forward elimination with partial pivoting over an augmented matrix
//! `[A | b]`, followed by rank-based classification of the solution space
//! and back-substitution or parametric synthesis as appropriate.
//!
//! A [`GaussianSolver`] is single-shot: it is built from one system,
//! consumed by [`GaussianSolver::solve`], and discarded. The inputs are
//! copied at construction and never mutated.

use log::debug;
use ndarray::{s, Array1, Array2};
use thiserror::Error;

use crate::parametric::format_parametric;
use crate::solution::{Outcome, Solution};
use crate::trace::{RowOp, Step};

/// Fractional digits kept after every arithmetic write to the buffer.
const PRECISION: i32 = 4;

/// Magnitudes below this are treated as exact zeros in every comparison
/// (pivot selection, consistency checks, rank counting, homogeneity).
const ZERO_TOL: f64 = 1e-10;

/// Errors that can occur when building a solver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("matrix has {rows} rows but right-hand side has {rhs_len} entries")]
    DimensionMismatch { rows: usize, rhs_len: usize },
}

/// Round to the fixed precision, collapsing negative zero.
pub(crate) fn round(value: f64) -> f64 {
    let scale = 10f64.powi(PRECISION);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Tolerance-based zero test.
pub(crate) fn is_zero(value: f64) -> bool {
    value.abs() < ZERO_TOL
}

/// Single-shot Gaussian elimination over one augmented matrix.
///
/// Owns the only mutable state of the computation: the `[A | b]` buffer and
/// the step trace. `solve` consumes the solver, so re-solving the same
/// system requires a fresh instance and always starts from the original
/// inputs.
#[derive(Debug, Clone)]
pub struct GaussianSolver {
    augmented: Array2<f64>,
    rows: usize,
    cols: usize,
    homogeneous: bool,
    steps: Vec<Step>,
}

impl GaussianSolver {
    /// Build the augmented matrix from a coefficient matrix and a
    /// right-hand-side vector.
    ///
    /// Fails when the matrix row count and the vector length disagree.
    pub fn new(matrix: &Array2<f64>, rhs: &Array1<f64>) -> Result<Self, SolveError> {
        let rows = matrix.nrows();
        let cols = matrix.ncols();
        if rows != rhs.len() {
            return Err(SolveError::DimensionMismatch {
                rows,
                rhs_len: rhs.len(),
            });
        }

        let mut augmented = Array2::zeros((rows, cols + 1));
        augmented.slice_mut(s![.., ..cols]).assign(matrix);
        augmented.slice_mut(s![.., cols]).assign(rhs);

        let homogeneous = rhs.iter().all(|&v| is_zero(v));

        Ok(Self {
            augmented,
            rows,
            cols,
            homogeneous,
            steps: Vec::new(),
        })
    }

    /// Run forward elimination, classify the system, and produce the result.
    ///
    /// Every path terminates in one of the four [`Outcome`] variants; no
    /// failure is possible past construction.
    pub fn solve(mut self) -> Solution {
        self.forward_eliminate();

        let rank_coeff = self.rank(self.cols);
        let rank_aug = self.rank(self.cols + 1);
        debug!(
            "elimination done: {} rows, {} variables, coefficient rank {}, augmented rank {}",
            self.rows, self.cols, rank_coeff, rank_aug
        );

        let outcome = if rank_coeff < rank_aug {
            Outcome::NoSolution
        } else if rank_coeff == self.cols && rank_coeff == self.rows {
            Outcome::Unique {
                values: self.back_substitute(),
            }
        } else if rank_coeff < self.cols {
            let (pivot_vars, free_vars) = self.pivot_partition();
            let equations = format_parametric(&self.augmented, &pivot_vars, &free_vars);
            Outcome::Infinite {
                equations,
                pivot_vars,
                free_vars,
            }
        } else {
            // rank == variables but more (dependent) equations than variables
            Outcome::Singular
        };

        let explanation = self.explain(rank_coeff, rank_aug, &outcome);
        Solution {
            outcome,
            homogeneous: self.homogeneous,
            steps: self.steps,
            explanation,
        }
    }

    /// Column-by-column elimination with partial pivoting.
    ///
    /// Columns whose pivot candidate is (tolerance-)zero contribute no pivot
    /// and are skipped without advancing the pivot-row cursor.
    fn forward_eliminate(&mut self) {
        let mut pivot_row = 0;

        for col in 0..self.cols {
            if pivot_row >= self.rows {
                break;
            }

            // Largest-magnitude candidate from the cursor down
            let mut max_row = pivot_row;
            for i in pivot_row + 1..self.rows {
                if self.augmented[[i, col]].abs() > self.augmented[[max_row, col]].abs() {
                    max_row = i;
                }
            }
            if is_zero(self.augmented[[max_row, col]]) {
                continue;
            }

            if max_row != pivot_row {
                self.swap_rows(pivot_row, max_row);
                self.record_step(
                    RowOp::PartialPivot,
                    format!("Swap row {} with row {}", pivot_row + 1, max_row + 1),
                );
            }

            let pivot = self.augmented[[pivot_row, col]];
            for j in col..=self.cols {
                self.augmented[[pivot_row, j]] = round(self.augmented[[pivot_row, j]] / pivot);
            }
            self.record_step(
                RowOp::Normalization,
                format!("Row {} divided by {}", pivot_row + 1, round(pivot)),
            );

            for i in 0..self.rows {
                if i == pivot_row || is_zero(self.augmented[[i, col]]) {
                    continue;
                }
                let factor = self.augmented[[i, col]];
                for j in col..=self.cols {
                    self.augmented[[i, j]] =
                        round(self.augmented[[i, j]] - factor * self.augmented[[pivot_row, j]]);
                }
                self.record_step(
                    RowOp::Elimination,
                    format!("Row {} -= {} × row {}", i + 1, round(factor), pivot_row + 1),
                );
            }

            pivot_row += 1;
        }
    }

    /// Count rows with at least one non-zero entry in the first `width`
    /// columns.
    fn rank(&self, width: usize) -> usize {
        (0..self.rows)
            .filter(|&i| (0..width).any(|j| !is_zero(self.augmented[[i, j]])))
            .count()
    }

    /// Back-substitution for the unique case, last row upward.
    fn back_substitute(&self) -> Vec<f64> {
        let mut values = vec![0.0; self.cols];

        for i in (0..self.rows).rev() {
            let pivot_col = (0..=self.cols).find(|&j| !is_zero(self.augmented[[i, j]]));
            let pivot_col = match pivot_col {
                Some(c) if c < self.cols => c,
                _ => continue,
            };

            let mut sum = 0.0;
            for j in pivot_col + 1..self.cols {
                sum += self.augmented[[i, j]] * values[j];
            }
            values[pivot_col] = round(self.augmented[[i, self.cols]] - sum);
        }

        values
    }

    /// Partition the variable indices into pivot and free columns.
    ///
    /// Re-scans left to right with a row cursor: a column is a pivot column
    /// when the cursor row has a non-zero entry there.
    fn pivot_partition(&self) -> (Vec<usize>, Vec<usize>) {
        let mut pivot_vars = Vec::new();
        let mut free_vars = Vec::new();
        let mut row = 0;

        for col in 0..self.cols {
            if row < self.rows && !is_zero(self.augmented[[row, col]]) {
                pivot_vars.push(col);
                row += 1;
            } else {
                free_vars.push(col);
            }
        }

        (pivot_vars, free_vars)
    }

    /// Natural-language summary built from the same counters used to
    /// classify, so text and verdict cannot disagree.
    fn explain(&self, rank_coeff: usize, rank_aug: usize, outcome: &Outcome) -> String {
        let mut text = format!(
            "System of {} equations in {} variables\n",
            self.rows, self.cols
        );
        text.push_str(if self.homogeneous {
            "- homogeneous system\n"
        } else {
            "- non-homogeneous system\n"
        });
        text.push_str(&format!(
            "- coefficient rank {}, augmented rank {}\n",
            rank_coeff, rank_aug
        ));

        match outcome {
            Outcome::NoSolution => {
                text.push_str("\n→ inconsistent system (no solution)\n");
                text.push_str("A row reduced to 0 = c with c non-zero.");
            }
            Outcome::Unique { .. } => {
                text.push_str("\n→ consistent system with a unique solution\n");
                text.push_str(if self.homogeneous {
                    "Only the trivial solution (every variable is zero)."
                } else {
                    "Every variable has a pivot."
                });
            }
            Outcome::Infinite { free_vars, .. } => {
                text.push_str("\n→ consistent underdetermined system (infinitely many solutions)\n");
                let names: Vec<String> =
                    free_vars.iter().map(|&v| format!("x{}", v + 1)).collect();
                text.push_str(&format!("Free variables: {}", names.join(", ")));
                if self.homogeneous {
                    text.push_str("\nHomogeneous system with non-trivial solutions.");
                }
            }
            Outcome::Singular => {
                text.push_str("\n→ rank-deficient system (singular)\n");
                text.push_str("Dependent equations remain after elimination.");
            }
        }

        text
    }

    fn record_step(&mut self, operation: RowOp, description: String) {
        let matrix = self.augmented.slice(s![.., ..self.cols]).mapv(round);
        let rhs = self.augmented.slice(s![.., self.cols]).mapv(round);
        self.steps.push(Step {
            operation,
            description,
            matrix,
            rhs,
        });
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for j in 0..=self.cols {
            self.augmented.swap([a, j], [b, j]);
        }
    }
}

/// Solve `A x = b`, tracing every elimination step.
///
/// This is a convenience function that builds a [`GaussianSolver`] and
/// consumes it in one call.
pub fn solve(matrix: &Array2<f64>, rhs: &Array1<f64>) -> Result<Solution, SolveError> {
    Ok(GaussianSolver::new(matrix, rhs)?.solve())
}
