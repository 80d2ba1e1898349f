//! Fixpoint iteration for recursively defined species, EGF-side.

use species_algebra::{FixpointSolver, Species, SpeciesError};

use crate::egf::Egf;

/// Resolves T = rhs(T) by iteration from the zero series.
///
/// For a well-founded defining equation (every recursive occurrence
/// guarded by at least one singleton factor) each round fixes one further
/// coefficient, so the leading `precision` coefficients stabilize within
/// `precision` rounds plus slack. Equations that keep perturbing low
/// coefficients never stabilize and are reported as divergent.
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

impl FixpointSolver<Egf> for IterativeSolver {
    fn solve(&self, rhs: &dyn Fn(&Egf) -> Egf, precision: usize) -> Result<Egf, SpeciesError> {
        let mut current = Egf::zero();
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
