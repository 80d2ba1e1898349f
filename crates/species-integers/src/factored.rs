//! Integers kept in factored form, plus small number-theoretic helpers.
//!
//! Automorphism counts of cycle types are products of factorials and prime
//! powers; the routines that consume them immediately take reciprocals or
//! multiply them back together. Keeping the factorization explicit avoids
//! expanding and re-factorizing the same value over and over.

use smallvec::SmallVec;
use std::fmt;

use crate::{Integer, Rational};

/// A positive integer represented by its prime factorization.
///
/// Factors are stored as `(prime, exponent)` pairs with primes strictly
/// increasing and exponents positive. The empty factorization is 1.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Factored {
    factors: SmallVec<[(u64, u32); 8]>,
}

impl Factored {
    /// The factorization of 1.
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// Factorizes a positive integer by trial division.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn of(n: u64) -> Self {
        assert!(n > 0, "cannot factorize zero");
        Self {
            factors: factorize(n),
        }
    }

    /// The factorization of n!, computed by Legendre's formula.
    ///
    /// The exponent of a prime p in n! is Σᵢ floor(n / pⁱ); no factorial is
    /// ever expanded.
    #[must_use]
    pub fn factorial(n: u64) -> Self {
        let mut factors = SmallVec::new();
        for p in primes_up_to(n) {
            let mut exp = 0u32;
            let mut power = p;
            loop {
                exp += u32::try_from(n / power).expect("factorial exponent overflows u32");
                match power.checked_mul(p) {
                    Some(next) if next <= n => power = next,
                    _ => break,
                }
            }
            factors.push((p, exp));
        }
        Self { factors }
    }

    /// Multiplies two factored integers by merging their factor lists.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut factors = SmallVec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.factors.len() && j < other.factors.len() {
            let (p, e) = self.factors[i];
            let (q, f) = other.factors[j];
            match p.cmp(&q) {
                std::cmp::Ordering::Less => {
                    factors.push((p, e));
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    factors.push((q, f));
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    factors.push((p, e + f));
                    i += 1;
                    j += 1;
                }
            }
        }
        factors.extend_from_slice(&self.factors[i..]);
        factors.extend_from_slice(&other.factors[j..]);
        Self { factors }
    }

    /// Raises to a non-negative power by scaling every exponent.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        if exp == 0 {
            return Self::one();
        }
        Self {
            factors: self.factors.iter().map(|&(p, e)| (p, e * exp)).collect(),
        }
    }

    /// Expands the factorization into an `Integer`.
    #[must_use]
    pub fn expand(&self) -> Integer {
        let mut result = Integer::new(1);
        for &(p, e) in &self.factors {
            result = result * Integer::from_u64(p).pow(e);
        }
        result
    }

    /// Returns the reciprocal 1/n as an exact rational.
    #[must_use]
    pub fn recip(&self) -> Rational {
        Rational::new(Integer::new(1), self.expand())
    }

    /// Returns the `(prime, exponent)` pairs.
    #[must_use]
    pub fn factors(&self) -> &[(u64, u32)] {
        &self.factors
    }
}

impl fmt::Display for Factored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factors.is_empty() {
            return write!(f, "1");
        }
        let parts: Vec<String> = self
            .factors
            .iter()
            .map(|&(p, e)| {
                if e == 1 {
                    format!("{p}")
                } else {
                    format!("{p}^{e}")
                }
            })
            .collect();
        write!(f, "{}", parts.join("*"))
    }
}

/// Factorizes a positive integer by trial division.
fn factorize(mut n: u64) -> SmallVec<[(u64, u32); 8]> {
    let mut factors = SmallVec::new();
    let mut p = 2u64;
    while p * p <= n {
        if n % p == 0 {
            let mut e = 0u32;
            while n % p == 0 {
                n /= p;
                e += 1;
            }
            factors.push((p, e));
        }
        p += if p == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push((n, 1));
    }
    factors
}

/// Returns all primes up to and including `n` by sieving.
fn primes_up_to(n: u64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }
    let n = usize::try_from(n).expect("sieve bound does not fit in usize");
    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    is_prime[1] = false;
    let mut p = 2;
    while p * p <= n {
        if is_prime[p] {
            let mut q = p * p;
            while q <= n {
                is_prime[q] = false;
                q += p;
            }
        }
        p += 1;
    }
    is_prime
        .iter()
        .enumerate()
        .filter_map(|(k, &prime)| if prime { Some(k as u64) } else { None })
        .collect()
}

/// Euler's totient φ(n): the count of integers in 1..=n coprime to n.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn euler_phi(n: u64) -> u64 {
    assert!(n > 0, "euler_phi is undefined at zero");
    let mut phi = 1u64;
    for &(p, e) in Factored::of(n).factors() {
        phi *= p.pow(e - 1) * (p - 1);
    }
    phi
}

/// The Möbius function μ(n): 0 if n has a squared prime factor, otherwise
/// (-1)^k where k is the number of prime factors.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn mobius(n: u64) -> i64 {
    assert!(n > 0, "mobius is undefined at zero");
    let factored = Factored::of(n);
    if factored.factors().iter().any(|&(_, e)| e > 1) {
        return 0;
    }
    if factored.factors().len() % 2 == 0 {
        1
    } else {
        -1
    }
}

/// All positive divisors of `n`, in increasing order.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn divisors(n: u64) -> Vec<u64> {
    assert!(n > 0, "divisors is undefined at zero");
    let mut result = vec![1u64];
    for &(p, e) in Factored::of(n).factors() {
        let current = result.clone();
        let mut power = 1u64;
        for _ in 0..e {
            power *= p;
            result.extend(current.iter().map(|d| d * power));
        }
    }
    result.sort_unstable();
    result
}
