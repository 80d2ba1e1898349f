//! Property-based tests for partitions and automorphism counts.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use species_integers::{Integer, Rational};

    use crate::{aut, int_partitions, CycleType};

    fn size() -> impl Strategy<Value = usize> {
        0usize..12
    }

    proptest! {
        #[test]
        fn partitions_sum_to_n(n in size()) {
            for partition in int_partitions(n) {
                prop_assert_eq!(partition.degree(), n);
            }
        }

        #[test]
        fn partitions_are_strictly_ordered_outputs(n in size()) {
            // Generation order is a total order, so no two outputs coincide.
            let partitions = int_partitions(n);
            for window in partitions.windows(2) {
                prop_assert_ne!(&window[0], &window[1]);
            }
        }

        #[test]
        fn cycle_types_partition_the_symmetric_group(n in size()) {
            // Σ over partitions p of n of n! / aut(p) = n!: every permutation
            // has exactly one cycle type.
            let n_factorial = Rational::from_integer(Integer::factorial(n as u64));
            let mut total = Rational::zero();
            for partition in int_partitions(n) {
                total = total + n_factorial.clone() * aut(&partition).recip();
            }
            prop_assert_eq!(total, n_factorial);
        }

        #[test]
        fn power_preserves_degree(n in 1usize..10, m in 1u32..12) {
            for partition in int_partitions(n) {
                prop_assert_eq!(partition.power(m).degree(), n);
            }
        }

        #[test]
        fn power_is_multiplicative_on_exponents(n in 1usize..8, a in 1u32..5, b in 1u32..5) {
            // (σ^a)^b and σ^(a·b) have the same cycle type.
            for partition in int_partitions(n) {
                prop_assert_eq!(partition.power(a).power(b), partition.power(a * b));
            }
        }

        #[test]
        fn identity_power_is_identity(n in 0usize..12, m in 1u32..12) {
            let id = CycleType::identity(n);
            prop_assert_eq!(id.power(m), id);
        }
    }
}
