//! The fixpoint solver interface for recursively defined species.
//!
//! Interpreting a self-referential species expression T = rhs(T) is a
//! nonlinear iteration (Newton-Raphson over the series algebra) and is a
//! genuinely separate concern from the algebra itself. The core only
//! depends on this interface; a solver is injected by the caller.

use thiserror::Error;

use crate::Species;

/// Errors surfaced by the species algebra.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpeciesError {
    /// The fixpoint solver found no decomposition of the defining equation
    /// within its iteration bound.
    ///
    /// This is a recoverable caller error, distinct from the valid answer
    /// "the species has no structures" (which is the zero series).
    #[error("recursive species `{expr}` did not converge within {bound} terms")]
    FixpointDiverged {
        /// A rendering of the offending defining expression.
        expr: String,
        /// The precision bound the solver was allowed.
        bound: usize,
    },
}

/// Resolves a recursively defined species T = rhs(T) up to the requested
/// precision (number of accurate leading terms).
pub trait FixpointSolver<S: Species> {
    /// Finds a series T with T = rhs(T) accurate to `precision` terms.
    ///
    /// # Errors
    ///
    /// Returns [`SpeciesError::FixpointDiverged`] if the defining equation
    /// admits no decomposition of the form T = X·R(T) within the bound.
    fn solve(&self, rhs: &dyn Fn(&S) -> S, precision: usize) -> Result<S, SpeciesError>;
}

/// Interprets a recursively defined species under an injected solver.
///
/// # Errors
///
/// Propagates [`SpeciesError::FixpointDiverged`] from the solver.
pub fn rec<S: Species>(
    solver: &dyn FixpointSolver<S>,
    rhs: &dyn Fn(&S) -> S,
    precision: usize,
) -> Result<S, SpeciesError> {
    solver.solve(rhs, precision)
}
