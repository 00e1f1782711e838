//! Parametric solution formatting
//!
//! Pure presentation over the reduced augmented matrix: turns the pivot and
//! free variable partitions into symbolic equations like
//! `x1 = 2 + (-1)·t0`. Kept separate from the elimination and classification
//! logic so it can be tested against literal strings.

use ndarray::Array2;

use crate::solver::{is_zero, round};

/// Build one equation per pivot variable, then one trivial equation per free
/// variable (`x{i} = t{k}`).
///
/// The i-th pivot variable is paired with row i of the reduced matrix;
/// each free column contributes a signed term with its negated, rounded
/// coefficient, suppressed when it rounds to zero.
pub(crate) fn format_parametric(
    augmented: &Array2<f64>,
    pivot_vars: &[usize],
    free_vars: &[usize],
) -> Vec<String> {
    let cols = augmented.ncols() - 1;
    let mut equations = Vec::with_capacity(pivot_vars.len() + free_vars.len());

    for (row, &pivot) in pivot_vars.iter().enumerate() {
        let mut expr = format!("{}", round(augmented[[row, cols]]));
        for (k, &free) in free_vars.iter().enumerate() {
            let coef = round(-augmented[[row, free]]);
            if !is_zero(coef) {
                expr.push_str(&format!(" + ({})·t{}", coef, k));
            }
        }
        equations.push(format!("x{} = {}", pivot + 1, expr));
    }

    for (k, &free) in free_vars.iter().enumerate() {
        equations.push(format!("x{} = t{}", free + 1, k));
    }

    equations
}
