//! Fixpoint iteration for recursively defined species, cycle index side.

use species_algebra::{FixpointSolver, Species, SpeciesError};

use crate::series::CycleIndex;

/// Resolves T = rhs(T) by iteration from the zero series.
///
/// The convergence argument is the same as for the EGF solver, but per
/// degree block: a singleton-guarded equation fixes one further block per
/// round. Cycle index blocks are much heavier than single coefficients,
/// which is why the default precision here is lower than the EGF one.
pub struct IterativeSolver {
    label: String,
}

impl IterativeSolver {
    /// Creates a solver; the label names the defining equation in errors.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl FixpointSolver<CycleIndex> for IterativeSolver {
    fn solve(
        &self,
        rhs: &dyn Fn(&CycleIndex) -> CycleIndex,
        precision: usize,
    ) -> Result<CycleIndex, SpeciesError> {
        let mut current = CycleIndex::zero();
        for _ in 0..=precision + 2 {
            let next = rhs(&current);
            if next.eq_prefix(&current, precision) {
                return Ok(next);
            }
            current = next;
        }
        Err(SpeciesError::FixpointDiverged {
            expr: self.label.clone(),
            bound: precision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use species_algebra::rec;

    use crate::series::DEFAULT_REC_PRECISION;

    #[test]
    fn test_rooted_trees_unlabeled() {
        // T = X · E(T); unlabeled rooted trees on 1..6 nodes.
        let solver = IterativeSolver::new("T = X * E(T)");
        let trees = rec(
            &solver,
            &|t: &CycleIndex| CycleIndex::singleton().mul(&CycleIndex::set().compose(t)),
            7,
        )
        .expect("rooted trees converge");
        let ogf = trees.to_ogf();
        let unlabeled: Vec<i64> = (0..7)
            .map(|n| ogf.count(n).to_i64().expect("count fits in i64"))
            .collect();
        assert_eq!(unlabeled, vec![0, 1, 1, 2, 4, 9, 20]);
    }

    #[test]
    fn test_rooted_trees_labeled() {
        let solver = IterativeSolver::new("T = X * E(T)");
        let trees = rec(
            &solver,
            &|t: &CycleIndex| CycleIndex::singleton().mul(&CycleIndex::set().compose(t)),
            DEFAULT_REC_PRECISION,
        )
        .expect("rooted trees converge");
        let egf = trees.to_egf();
        let labeled: Vec<i64> = (0..6)
            .map(|n| egf.labeled_count(n).to_i64().expect("count fits in i64"))
            .collect();
        assert_eq!(labeled, vec![0, 1, 2, 9, 64, 625]);
    }

    #[test]
    fn test_unguarded_equation_diverges() {
        let solver = IterativeSolver::new("T = T + X");
        let result = rec(&solver, &|t: &CycleIndex| t.add(&CycleIndex::singleton()), 4);
        assert_eq!(
            result.err(),
            Some(SpeciesError::FixpointDiverged {
                expr: "T = T + X".into(),
                bound: 4,
            })
        );
    }
}
