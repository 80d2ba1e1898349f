//! Automorphism counts of cycle types.

use species_integers::{Factored, Rational};

use crate::CycleType;

/// The order of the automorphism group of any permutation with the given
/// cycle type: Π over (length, mult) of mult! · length^mult.
///
/// Returned in factored form because callers either take the reciprocal or
/// multiply it straight back into another count. The number of
/// permutations of n elements with this cycle type is n! / aut.
#[must_use]
pub fn aut(cycle_type: &CycleType) -> Factored {
    let mut result = Factored::one();
    for &(length, mult) in cycle_type.pairs() {
        result = result
            .mul(&Factored::factorial(u64::from(mult)))
            .mul(&Factored::of(u64::from(length)).pow(mult));
    }
    result
}

/// The coefficient of the corresponding monomial in the cycle index series
/// of the species of sets: 1 / aut.
#[must_use]
pub fn ez_coeff(cycle_type: &CycleType) -> Rational {
    aut(cycle_type).recip()
}
