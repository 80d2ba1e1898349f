//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::factored::{divisors, euler_phi, mobius};
    use crate::{Factored, Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating positive integers
    fn positive_int() -> impl Strategy<Value = u64> {
        1u64..500u64
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (small_int(), 1i64..1000i64)
            .prop_map(|(n, d)| Rational::from_i64(n, d))
            .prop_filter("rational must be non-zero", |r| !r.is_zero())
    }

    proptest! {
        #[test]
        fn rational_add_commutative(a in small_int(), b in small_int(), d in 1i64..100i64) {
            let x = Rational::from_i64(a, d);
            let y = Rational::from_i64(b, d + 1);
            prop_assert_eq!(x.clone() + y.clone(), y + x);
        }

        #[test]
        fn rational_mul_recip_is_one(r in non_zero_rational()) {
            prop_assert!((r.clone() * r.recip()).is_one());
        }

        #[test]
        fn rational_numerator_denominator_coprime(a in small_int(), d in 1i64..1000i64) {
            let r = Rational::from_i64(a, d);
            // Reconstructing from the reported parts must give the value back.
            prop_assert_eq!(Rational::new(r.numerator(), r.denominator()), r);
        }

        #[test]
        fn factored_expand_round_trip(n in positive_int()) {
            prop_assert_eq!(Factored::of(n).expand(), Integer::from_u64(n));
        }

        #[test]
        fn factored_mul_matches_integer_mul(a in positive_int(), b in positive_int()) {
            let product = Factored::of(a).mul(&Factored::of(b));
            prop_assert_eq!(product.expand(), Integer::from_u64(a * b));
        }

        #[test]
        fn phi_divisor_sum(n in positive_int()) {
            // Σ_{d | n} φ(d) = n
            let total: u64 = divisors(n).iter().map(|&d| euler_phi(d)).sum();
            prop_assert_eq!(total, n);
        }

        #[test]
        fn mobius_divisor_sum(n in 2u64..500u64) {
            // Σ_{d | n} μ(d) = 0 for n > 1
            let total: i64 = divisors(n).iter().map(|&d| mobius(d)).sum();
            prop_assert_eq!(total, 0);
        }

        #[test]
        fn divisors_divide(n in positive_int()) {
            for d in divisors(n) {
                prop_assert_eq!(n % d, 0);
            }
        }
    }
}
