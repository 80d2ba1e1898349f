//! Lazily evaluated formal power series with memoization.

use num_traits::{One, Zero};
use parking_lot::Mutex;
use std::ops::{Neg, Sub};
use std::sync::Arc;

/// Coefficient requirements for a power series.
///
/// Satisfied by any exact coefficient ring; the species library
/// instantiates it with `species_integers::Rational`.
pub trait SeriesCoeff:
    Zero + One + Sub<Output = Self> + Neg<Output = Self> + PartialEq + Clone + Send + Sync + 'static
{
}

impl<R> SeriesCoeff for R where
    R: Zero
        + One
        + Sub<Output = R>
        + Neg<Output = R>
        + PartialEq
        + Clone
        + Send
        + Sync
        + 'static
{
}

struct SeriesInner<R> {
    generator: Box<dyn Fn(usize) -> R + Send + Sync>,
    cache: Mutex<Vec<Option<R>>>,
}

/// An unbounded formal power series Σₙ aₙ xⁿ.
///
/// Coefficients are produced on demand by a generator closure and memoized;
/// cloning shares the cache. Requesting coefficient n forces only the
/// finite amount of work that coefficient depends on, so clients may hold
/// series that are conceptually infinite.
pub struct PowerSeries<R> {
    inner: Arc<SeriesInner<R>>,
}

impl<R: std::fmt::Debug> std::fmt::Debug for PowerSeries<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PowerSeries")
            .field("cached", &*self.inner.cache.lock())
            .finish_non_exhaustive()
    }
}

impl<R> Clone for PowerSeries<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: SeriesCoeff> PowerSeries<R> {
    /// Creates a series from a coefficient generator.
    pub fn from_generator<F>(generator: F) -> Self
    where
        F: Fn(usize) -> R + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(SeriesInner {
                generator: Box::new(generator),
                cache: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Creates a series from an explicit coefficient prefix; the tail is
    /// zero.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<R>) -> Self {
        Self::from_generator(move |n| coeffs.get(n).cloned().unwrap_or_else(R::zero))
    }

    /// The zero series.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_generator(|_| R::zero())
    }

    /// The constant series c.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::from_generator(move |n| if n == 0 { c.clone() } else { R::zero() })
    }

    /// The series x.
    #[must_use]
    pub fn x() -> Self {
        Self::from_generator(|n| if n == 1 { R::one() } else { R::zero() })
    }

    /// Returns the coefficient of xⁿ, computing and caching it on first
    /// access.
    #[must_use]
    pub fn coeff(&self, n: usize) -> R {
        {
            let cache = self.inner.cache.lock();
            if let Some(Some(value)) = cache.get(n) {
                return value.clone();
            }
        }
        // Compute outside the lock: the generator may consult other series
        // (or, via composition, earlier coefficients of this one).
        let value = (self.inner.generator)(n);
        let mut cache = self.inner.cache.lock();
        if cache.len() <= n {
            cache.resize(n + 1, None);
        }
        cache[n] = Some(value.clone());
        value
    }

    /// Returns the first k coefficients.
    #[must_use]
    pub fn take(&self, k: usize) -> Vec<R> {
        (0..k).map(|n| self.coeff(n)).collect()
    }

    /// Compares the first k coefficients of two series.
    #[must_use]
    pub fn eq_prefix(&self, other: &Self, k: usize) -> bool {
        (0..k).all(|n| self.coeff(n) == other.coeff(n))
    }

    /// Adds two power series.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let lhs = self.clone();
        let rhs = other.clone();
        Self::from_generator(move |n| lhs.coeff(n) + rhs.coeff(n))
    }

    /// Subtracts two power series.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let lhs = self.clone();
        let rhs = other.clone();
        Self::from_generator(move |n| lhs.coeff(n) - rhs.coeff(n))
    }

    /// Scales a power series by a constant.
    #[must_use]
    pub fn scale(&self, c: R) -> Self {
        let inner = self.clone();
        Self::from_generator(move |n| inner.coeff(n) * c.clone())
    }

    /// Multiplies two power series (Cauchy product).
    ///
    /// (f * g)ₙ = Σᵢ fᵢ · gₙ₋ᵢ
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let lhs = self.clone();
        let rhs = other.clone();
        Self::from_generator(move |n| {
            let mut sum = R::zero();
            for i in 0..=n {
                sum = sum + lhs.coeff(i) * rhs.coeff(n - i);
            }
            sum
        })
    }

    /// Computes the composition f(g(x)).
    ///
    /// Returns `None` unless g(0) = 0, which is required for each result
    /// coefficient to depend on finitely many input coefficients.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Option<Self> {
        if !other.coeff(0).is_zero() {
            return None;
        }
        let f = self.clone();
        let g = other.clone();
        Some(Self::from_generator(move |n| {
            // [xⁿ] f(g) = Σₖ fₖ · [xⁿ] gᵏ; only k ≤ n contributes because
            // g has no constant term.
            let mut result = R::zero();
            for k in 0..=n {
                let f_k = f.coeff(k);
                if f_k.is_zero() {
                    continue;
                }
                result = result + f_k * power_coeff(&g, k, n);
            }
            result
        }))
    }

    /// Zeroes every coefficient whose degree fails the predicate.
    #[must_use]
    pub fn filter_degrees<P>(&self, predicate: P) -> Self
    where
        P: Fn(usize) -> bool + Send + Sync + 'static,
    {
        let inner = self.clone();
        Self::from_generator(move |n| {
            if predicate(n) {
                inner.coeff(n)
            } else {
                R::zero()
            }
        })
    }
}

/// Computes [xⁿ] gᵏ for a series g with g(0) = 0.
fn power_coeff<R: SeriesCoeff>(g: &PowerSeries<R>, k: usize, n: usize) -> R {
    if k == 0 {
        return if n == 0 { R::one() } else { R::zero() };
    }
    if k == 1 {
        return g.coeff(n);
    }
    // [xⁿ] gᵏ = Σᵢ gᵢ · [xⁿ⁻ⁱ] gᵏ⁻¹, starting at i = 1 since g₀ = 0.
    let mut sum = R::zero();
    for i in 1..=n {
        let g_i = g.coeff(i);
        if g_i.is_zero() {
            continue;
        }
        sum = sum + g_i * power_coeff(g, k - 1, n - i);
    }
    sum
}
