//! Derived species: formula-level combinations of the primitives.
//!
//! Nothing here introduces a new algorithm; each species is a rewrite into
//! the primitive operation set and works under any [`Species`]
//! implementation.

use crate::Species;

/// Drops the structure on the empty label set.
#[must_use]
pub fn non_empty<S: Species>(s: &S) -> S {
    s.of_size(|n| n > 0)
}

/// Linear orders: L = C'.
#[must_use]
pub fn lists<S: Species>() -> S {
    S::cycle().differentiate()
}

/// A label set with one distinguished element: X · E.
#[must_use]
pub fn elements<S: Species>() -> S {
    S::singleton().mul(&S::set())
}

/// Octopi: a cycle of non-empty linear orders, C ∘ L⁺.
#[must_use]
pub fn octopi<S: Species>() -> S {
    S::cycle().compose(&non_empty(&lists::<S>()))
}

/// Set partitions: E ∘ E⁺.
#[must_use]
pub fn partitions<S: Species>() -> S {
    S::set().compose(&non_empty(&S::set()))
}

/// Permutations: E ∘ C, a set of cycles.
#[must_use]
pub fn permutations<S: Species>() -> S {
    S::set().compose(&S::cycle())
}

/// Subsets: E · E, the chosen part and its complement.
#[must_use]
pub fn subsets<S: Species>() -> S {
    S::set().mul(&S::set())
}

/// Ballots (ordered set partitions): L ∘ E⁺.
#[must_use]
pub fn ballots<S: Species>() -> S {
    lists::<S>().compose(&non_empty(&S::set()))
}
