//! Generating function extraction.
//!
//! Both counting series of a species fall out of its cycle index by
//! variable substitution: x₁ = x with every other variable zeroed gives
//! the exponential generating function, and xₖ = xᵏ gives the ordinary
//! one. Under the degree-block representation the substitutions are
//! coefficient reads, so the extracted series stay as lazy as the source.

use species_integers::Rational;
use species_partitions::CycleType;
use species_series::{Egf, Ogf, PowerSeries};

use crate::series::CycleIndex;

impl CycleIndex {
    /// The exponential generating function: x₁ = x, xₖ = 0 for k ≥ 2.
    ///
    /// Only the identity monomial of each block survives, and its
    /// coefficient is exactly the EGF coefficient.
    #[must_use]
    pub fn to_egf(&self) -> Egf {
        let source = self.clone();
        Egf::from_series(PowerSeries::from_generator(move |n| {
            source.coefficient(&CycleType::identity(n))
        }))
    }

    /// The ordinary generating function: xₖ = xᵏ.
    ///
    /// Every degree-n monomial collapses to xⁿ, so the OGF coefficient is
    /// the plain sum of the block's coefficients.
    #[must_use]
    pub fn to_ogf(&self) -> Ogf {
        let source = self.clone();
        Ogf::from_series(PowerSeries::from_generator(move |n| {
            source
                .block(n)
                .iter()
                .fold(Rational::from(0), |sum, m| sum + m.coeff().clone())
        }))
    }
}

#[cfg(test)]
mod tests {
    use species_algebra::{derived, Species};
    use species_integers::Integer;

    use crate::series::CycleIndex;

    fn labeled(z: &CycleIndex, k: usize) -> Vec<i64> {
        let egf = z.to_egf();
        (0..k)
            .map(|n| egf.labeled_count(n).to_i64().expect("count fits in i64"))
            .collect()
    }

    fn unlabeled(z: &CycleIndex, k: usize) -> Vec<i64> {
        let ogf = z.to_ogf();
        (0..k)
            .map(|n| ogf.count(n).to_i64().expect("count fits in i64"))
            .collect()
    }

    #[test]
    fn test_set_counts() {
        let e = CycleIndex::set();
        assert_eq!(labeled(&e, 7), vec![1; 7]);
        assert_eq!(unlabeled(&e, 7), vec![1; 7]);
    }

    #[test]
    fn test_cycle_counts() {
        let c = CycleIndex::cycle();
        assert_eq!(labeled(&c, 6), vec![0, 1, 1, 2, 6, 24]);
        assert_eq!(unlabeled(&c, 6), vec![0, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_subsets_counts() {
        let subsets: CycleIndex = derived::subsets();
        assert_eq!(labeled(&subsets, 6), vec![1, 2, 4, 8, 16, 32]);
        // Unlabeled subsets are determined by their size alone.
        assert_eq!(unlabeled(&subsets, 6), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_lists_counts() {
        let lists: CycleIndex = derived::lists();
        assert_eq!(labeled(&lists, 6), vec![1, 1, 2, 6, 24, 120]);
        assert_eq!(unlabeled(&lists, 6), vec![1; 6]);
    }

    #[test]
    fn test_polynomial_species_round_trip() {
        // A species built from singleton, sum and product alone has one
        // rigid monomial per degree; extraction loses nothing.
        let x = CycleIndex::singleton();
        let s = x.add(&x.mul(&x).mul(&x));
        assert_eq!(labeled(&s, 6), vec![0, 1, 0, 6, 0, 0]);
        assert_eq!(unlabeled(&s, 6), vec![0, 1, 0, 1, 0, 0]);
    }

    #[test]
    fn test_ogf_counts_are_integers() {
        // Fractional block coefficients must always cancel in the sum.
        let ogf = CycleIndex::set().mul(&CycleIndex::cycle()).to_ogf();
        for n in 0..8 {
            assert!(ogf.count(n) >= Integer::new(0));
        }
    }
}
