//! Property-based tests for power series arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use species_integers::Rational;

    use crate::PowerSeries;

    const PREFIX: usize = 8;

    fn small_coeff() -> impl Strategy<Value = Rational> {
        (-50i64..50i64, 1i64..20i64).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn small_series() -> impl Strategy<Value = PowerSeries<Rational>> {
        proptest::collection::vec(small_coeff(), 1..=6).prop_map(PowerSeries::from_coeffs)
    }

    // Series with zero constant term, usable as composition inner series
    fn delta_series() -> impl Strategy<Value = PowerSeries<Rational>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(|mut coeffs| {
            coeffs.insert(0, Rational::from(0));
            PowerSeries::from_coeffs(coeffs)
        })
    }

    proptest! {
        #[test]
        fn series_add_commutative(a in small_series(), b in small_series()) {
            prop_assert!(a.add(&b).eq_prefix(&b.add(&a), PREFIX));
        }

        #[test]
        fn series_mul_commutative(a in small_series(), b in small_series()) {
            prop_assert!(a.mul(&b).eq_prefix(&b.mul(&a), PREFIX));
        }

        #[test]
        fn series_mul_distributes(a in small_series(), b in small_series(), c in small_series()) {
            let lhs = a.mul(&b.add(&c));
            let rhs = a.mul(&b).add(&a.mul(&c));
            prop_assert!(lhs.eq_prefix(&rhs, PREFIX));
        }

        #[test]
        fn series_sub_cancels(a in small_series()) {
            prop_assert!(a.sub(&a).eq_prefix(&PowerSeries::zero(), PREFIX));
        }

        #[test]
        fn compose_with_x_is_identity(a in small_series()) {
            let composed = a.compose(&PowerSeries::x()).unwrap();
            prop_assert!(composed.eq_prefix(&a, PREFIX));
        }

        #[test]
        fn compose_distributes_over_add(a in small_series(), b in small_series(), g in delta_series()) {
            let lhs = a.add(&b).compose(&g).unwrap();
            let rhs = a.compose(&g).unwrap().add(&b.compose(&g).unwrap());
            prop_assert!(lhs.eq_prefix(&rhs, PREFIX));
        }

        #[test]
        fn compose_is_multiplicative(a in small_series(), b in small_series(), g in delta_series()) {
            let lhs = a.mul(&b).compose(&g).unwrap();
            let rhs = a.compose(&g).unwrap().mul(&b.compose(&g).unwrap());
            prop_assert!(lhs.eq_prefix(&rhs, PREFIX));
        }
    }
}
