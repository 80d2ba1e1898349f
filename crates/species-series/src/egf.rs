//! The exponential generating function interpretation of species.
//!
//! An EGF Σₙ aₙ xⁿ counts labeled structures: there are aₙ·n! structures
//! on a label set of size n. Coefficients are carried as exact rationals;
//! the n! rescaling happens only at the [`Egf::labeled_count`] boundary,
//! where the result is guaranteed (and checked) to be an exact integer.

use species_algebra::Species;
use species_integers::{Integer, Rational};

use crate::power_series::PowerSeries;

/// Default precision bound handed to the fixpoint solver when resolving
/// recursive species under this interpretation. EGF recursion typically
/// needs deeper unrolling than the cycle index variant to stabilize.
pub const DEFAULT_REC_PRECISION: usize = 30;

/// An exponential generating function over exact rationals.
#[derive(Clone)]
pub struct Egf {
    series: PowerSeries<Rational>,
}

impl Egf {
    /// Wraps a coefficient series as an EGF.
    #[must_use]
    pub fn from_series(series: PowerSeries<Rational>) -> Self {
        Self { series }
    }

    /// Returns the underlying coefficient series.
    #[must_use]
    pub fn series(&self) -> &PowerSeries<Rational> {
        &self.series
    }

    /// The raw EGF coefficient at degree n.
    #[must_use]
    pub fn coeff(&self, n: usize) -> Rational {
        self.series.coeff(n)
    }

    /// The number of labeled structures on n labels: n! times the
    /// coefficient at degree n.
    ///
    /// # Panics
    ///
    /// Panics if the rescaled coefficient is not an exact integer; every
    /// operation in the algebra guarantees integrality here, so a
    /// non-integral value is an internal defect, never rounded away.
    #[must_use]
    pub fn labeled_count(&self, n: usize) -> Integer {
        let n_factorial = Rational::from_integer(Integer::factorial(n as u64));
        let scaled = n_factorial * self.coeff(n);
        scaled.to_integer().unwrap_or_else(|| {
            panic!("internal consistency failure: labeled count at degree {n} is non-integral")
        })
    }

    /// The unbounded sequence of labeled structure counts on 0, 1, 2, ...
    /// labels.
    #[must_use]
    pub fn labeled_counts(&self) -> LabeledCounts {
        LabeledCounts {
            egf: self.clone(),
            next: 0,
        }
    }

    /// Compares the first k coefficients of two EGFs.
    #[must_use]
    pub fn eq_prefix(&self, other: &Self, k: usize) -> bool {
        self.series.eq_prefix(&other.series, k)
    }
}

/// Iterator over labeled structure counts; never terminates on its own.
pub struct LabeledCounts {
    egf: Egf,
    next: usize,
}

impl Iterator for LabeledCounts {
    type Item = Integer;

    fn next(&mut self) -> Option<Integer> {
        let count = self.egf.labeled_count(self.next);
        self.next += 1;
        Some(count)
    }
}

impl Species for Egf {
    fn zero() -> Self {
        Self::from_series(PowerSeries::zero())
    }

    fn one() -> Self {
        Self::from_series(PowerSeries::constant(Rational::from(1)))
    }

    fn singleton() -> Self {
        Self::from_series(PowerSeries::x())
    }

    fn set() -> Self {
        // Exactly one set structure per label set: coefficient 1/n!.
        Self::from_series(PowerSeries::from_generator(|n| {
            Rational::from_integer(Integer::factorial(n as u64)).recip()
        }))
    }

    fn cycle() -> Self {
        // (n-1)! cyclic orders on n >= 1 labels: coefficient 1/n.
        Self::from_series(PowerSeries::from_generator(|n| {
            if n == 0 {
                Rational::from(0)
            } else {
                Rational::from_i64(1, i64::try_from(n).expect("degree overflows i64"))
            }
        }))
    }

    fn add(&self, other: &Self) -> Self {
        Self::from_series(self.series.add(&other.series))
    }

    fn mul(&self, other: &Self) -> Self {
        // The Cauchy product of EGFs is the partitional product of the
        // species.
        Self::from_series(self.series.mul(&other.series))
    }

    fn differentiate(&self) -> Self {
        let inner = self.series.clone();
        Self::from_series(PowerSeries::from_generator(move |n| {
            let successor =
                Rational::from_i64(i64::try_from(n + 1).expect("degree overflows i64"), 1);
            successor * inner.coeff(n + 1)
        }))
    }

    fn compose(&self, inner: &Self) -> Self {
        let composed = self
            .series
            .compose(&inner.series)
            .expect("partitional composition requires an inner species with no empty-set structures");
        Self::from_series(composed)
    }

    fn hadamard(&self, other: &Self) -> Self {
        // Pointwise product rescaled by n!: the factorial divided out of
        // each factor must be reintroduced once.
        let lhs = self.series.clone();
        let rhs = other.series.clone();
        Self::from_series(PowerSeries::from_generator(move |n| {
            let n_factorial = Rational::from_integer(Integer::factorial(n as u64));
            lhs.coeff(n) * rhs.coeff(n) * n_factorial
        }))
    }

    fn functor_compose(&self, inner: &Self) -> Self {
        // The coefficient at degree n is f[g'(n)] * g'(n)! / n!, where
        // g'(n) is the number of labeled G-structures on n labels, used as
        // an index into the outer coefficient sequence.
        let f = self.series.clone();
        let g = Self::from_series(inner.series.clone());
        Self::from_series(PowerSeries::from_generator(move |n| {
            let g_count = g.labeled_count(n);
            assert!(
                g_count.signum() >= 0,
                "internal consistency failure: negative structure count at degree {n}"
            );
            let index = g_count
                .to_usize()
                .expect("inner structure count does not fit in usize");
            let g_factorial = Integer::factorial(
                g_count
                    .to_u64()
                    .expect("inner structure count does not fit in u64"),
            );
            let n_factorial = Integer::factorial(n as u64);
            f.coeff(index) * Rational::new(g_factorial, n_factorial)
        }))
    }

    fn of_size<P>(&self, predicate: P) -> Self
    where
        P: Fn(usize) -> bool + Send + Sync + 'static,
    {
        Self::from_series(self.series.filter_degrees(predicate))
    }
}
