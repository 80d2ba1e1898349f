//! Ordinary generating functions.
//!
//! An OGF Σₙ aₙ xⁿ counts unlabeled structures: aₙ structures on n
//! indistinguishable elements. OGFs arise here by substituting xᵢ = xⁱ
//! into a cycle index series; the substitution is guaranteed to produce
//! integer coefficients, and that guarantee is enforced at extraction.

use species_integers::{Integer, Rational};

use crate::power_series::PowerSeries;

/// An ordinary generating function with exact integer coefficients.
#[derive(Clone)]
pub struct Ogf {
    series: PowerSeries<Rational>,
}

impl Ogf {
    /// Wraps a coefficient series as an OGF.
    #[must_use]
    pub fn from_series(series: PowerSeries<Rational>) -> Self {
        Self { series }
    }

    /// Returns the underlying coefficient series.
    #[must_use]
    pub fn series(&self) -> &PowerSeries<Rational> {
        &self.series
    }

    /// The number of unlabeled structures on n elements.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient does not reduce to an exact integer. A
    /// non-integral coefficient is a representation bug in the producing
    /// series, never a legitimate output.
    #[must_use]
    pub fn count(&self, n: usize) -> Integer {
        self.series.coeff(n).to_integer().unwrap_or_else(|| {
            panic!("internal consistency failure: unlabeled count at degree {n} is non-integral")
        })
    }

    /// The first k unlabeled structure counts.
    #[must_use]
    pub fn counts(&self, k: usize) -> Vec<Integer> {
        (0..k).map(|n| self.count(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        let ogf = Ogf::from_series(PowerSeries::from_coeffs(vec![
            Rational::from(1),
            Rational::from(3),
        ]));
        assert_eq!(ogf.counts(3), vec![Integer::new(1), Integer::new(3), Integer::new(0)]);
    }

    #[test]
    #[should_panic(expected = "internal consistency failure")]
    fn test_non_integral_count_panics() {
        let ogf = Ogf::from_series(PowerSeries::from_coeffs(vec![Rational::from_i64(1, 2)]));
        let _ = ogf.count(0);
    }
}
