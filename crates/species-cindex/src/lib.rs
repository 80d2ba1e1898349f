//! # species-cindex
//!
//! Cycle index series: the interpretation of the species algebra that
//! tracks structure counts per permutation cycle type, refining both
//! generating functions at once.
//!
//! A [`CycleIndex`] is a multivariate formal power series in x₁, x₂, ...
//! stored as sparse degree blocks of [`Monomial`]s, produced lazily and
//! memoized. All species operators act block-by-block, including
//! partitional composition and functor composition; the exponential and
//! ordinary generating functions fall out by variable substitution.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod compose;
mod extract;
mod functor;

pub mod monomial;
pub mod series;
pub mod solver;

pub use monomial::Monomial;
pub use series::{CycleIndex, DEFAULT_REC_PRECISION};
pub use solver::IterativeSolver;
