//! # species-algebra
//!
//! The abstract operation set of combinatorial species.
//!
//! A species expression is built polymorphically over the [`Species`]
//! trait; evaluating the same expression under different implementations
//! yields different structural invariants (a cycle index series, an
//! exponential generating function). The [`derived`] module collects the
//! species that are pure formula rewrites over the primitives.
//!
//! Recursively defined species are resolved by an injected
//! [`FixpointSolver`]; the solver is a separate numeric concern and stays
//! behind an interface.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod derived;
pub mod solver;
pub mod species;

pub use solver::{rec, FixpointSolver, SpeciesError};
pub use species::Species;
