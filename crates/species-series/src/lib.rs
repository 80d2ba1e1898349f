//! # species-series
//!
//! Univariate formal power series and the labeled interpretation of the
//! species algebra.
//!
//! This crate provides:
//! - [`PowerSeries`]: an unbounded, lazily produced, memoized coefficient
//!   sequence
//! - [`Egf`]: the exponential generating function interpretation of
//!   [`species_algebra::Species`], counting labeled structures
//! - [`Ogf`]: ordinary generating functions with exact integer extraction
//!
//! Every operation is demand-driven: requesting a coefficient forces only
//! the finite prefix it depends on.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod egf;
pub mod ogf;
pub mod power_series;
pub mod solver;

#[cfg(test)]
mod proptests;

pub use egf::Egf;
pub use ogf::Ogf;
pub use solver::IterativeSolver;
pub use power_series::{PowerSeries, SeriesCoeff};
