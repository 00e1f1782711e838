//! Solver result types
//!
//! A [`Solution`] is the terminal value of one elimination run: the outcome
//! classification, the full step trace, and a natural-language explanation
//! built from the same rank counters used to classify.

use serde::Serialize;

use crate::trace::Step;

/// Classification of the solution space, tagged `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Outcome {
    /// Exactly one solution; one value per variable.
    Unique { values: Vec<f64> },
    /// Infinitely many solutions, given in parametric form.
    ///
    /// `pivot_vars` and `free_vars` partition the variable index range:
    /// every index in `[0, variables)` appears in exactly one of the two.
    Infinite {
        equations: Vec<String>,
        pivot_vars: Vec<usize>,
        free_vars: Vec<usize>,
    },
    /// Inconsistent system: a row reduced to `0 = c` with `c` non-zero.
    NoSolution,
    /// Rank-deficient fallback that fits none of the cases above.
    Singular,
}

/// Result of solving a linear system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    #[serde(flatten)]
    pub outcome: Outcome,
    /// True iff every right-hand-side entry was (tolerance-)zero.
    pub homogeneous: bool,
    /// Ordered trace of every row operation performed.
    pub steps: Vec<Step>,
    /// Natural-language summary of counts, ranks, and the verdict.
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_type_tags() {
        let tag = |outcome: &Outcome| {
            serde_json::to_value(outcome).unwrap()["type"]
                .as_str()
                .unwrap()
                .to_owned()
        };

        assert_eq!(tag(&Outcome::Unique { values: vec![1.0] }), "unique");
        assert_eq!(tag(&Outcome::NoSolution), "no-solution");
        assert_eq!(tag(&Outcome::Singular), "singular");
        assert_eq!(
            tag(&Outcome::Infinite {
                equations: vec![],
                pivot_vars: vec![],
                free_vars: vec![],
            }),
            "infinite"
        );
    }

    #[test]
    fn test_solution_flattens_outcome() {
        let solution = Solution {
            outcome: Outcome::Unique { values: vec![2.0] },
            homogeneous: false,
            steps: vec![],
            explanation: String::new(),
        };

        let json = serde_json::to_value(&solution).unwrap();
        assert_eq!(json["type"], "unique");
        assert_eq!(json["values"], serde_json::json!([2.0]));
        assert_eq!(json["homogeneous"], false);
    }
}
