//! # species-integers
//!
//! Exact arithmetic for the species library.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//! - Integers kept in factored form (`Factored`), with the number-theoretic
//!   helpers (`euler_phi`, `mobius`, `divisors`) that cycle index
//!   computations lean on
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Automorphism counts are kept as factorizations until a caller actually
//!   needs the expanded value or its reciprocal

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod factored;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use factored::{divisors, euler_phi, mobius, Factored};
pub use integer::Integer;
pub use rational::Rational;
