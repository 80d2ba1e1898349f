//! # Species
//!
//! Exact enumerative combinatorics through the algebra of combinatorial
//! species.
//!
//! A species expression is written once against the [`Species`] trait and
//! interpreted under interchangeable backends:
//!
//! - **Cycle index series**: per-cycle-type structure counts, the finest
//!   invariant, from which both generating functions are extracted
//! - **Exponential generating functions**: labeled structure counts only,
//!   at a fraction of the cost
//!
//! All arithmetic is exact (big rationals) and all series are lazy:
//! requesting a count forces only the finite prefix it depends on.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use species::prelude::*;
//!
//! // An octopus is a cycle of non-empty linear orders.
//! let octopi: CycleIndex = derived::octopi();
//! let labeled = octopi.to_egf().labeled_count(4); // 90
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use species_algebra as algebra;
pub use species_cindex as cindex;
pub use species_integers as integers;
pub use species_partitions as partitions;
pub use species_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use species_algebra::{derived, rec, FixpointSolver, Species, SpeciesError};
    pub use species_cindex::{CycleIndex, Monomial};
    pub use species_integers::{Integer, Rational};
    pub use species_partitions::{aut, ez_coeff, int_partitions, CycleType};
    pub use species_series::{Egf, Ogf, PowerSeries};
}
