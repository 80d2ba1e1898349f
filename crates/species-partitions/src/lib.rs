//! # species-partitions
//!
//! Integer partitions viewed as permutation cycle types.
//!
//! This crate provides the leaf combinatorics under the cycle index
//! algebra:
//! - [`CycleType`]: the cycle structure of a permutation
//! - [`int_partitions`]: enumeration of all partitions of n
//! - [`aut`] / [`ez_coeff`]: automorphism counts of a cycle type
//! - [`CycleType::power`]: the cycle type of a power of a permutation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod automorphism;
pub mod cycle_type;
pub mod enumerate;

#[cfg(test)]
mod proptests;

pub use automorphism::{aut, ez_coeff};
pub use cycle_type::CycleType;
pub use enumerate::int_partitions;
