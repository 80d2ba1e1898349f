//! Cycle index monomials.
//!
//! A monomial c · x₁^{e₁} x₂^{e₂} ... is a rational coefficient paired
//! with an exponent mapping from variable index (= cycle length) to
//! exponent (= cycle multiplicity). The mapping is exactly a
//! [`CycleType`], so the weighted degree of the monomial is the degree of
//! the cycle type, and zero exponents are never stored.

use std::fmt;

use species_integers::Rational;
use species_partitions::CycleType;

/// One term of a cycle index series.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Monomial {
    coeff: Rational,
    powers: CycleType,
}

impl Monomial {
    /// Creates a monomial from a coefficient and an exponent mapping.
    #[must_use]
    pub fn new(coeff: Rational, powers: CycleType) -> Self {
        Self { coeff, powers }
    }

    /// Creates a constant monomial (empty exponent mapping).
    #[must_use]
    pub fn constant(coeff: Rational) -> Self {
        Self {
            coeff,
            powers: CycleType::empty(),
        }
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coeff(&self) -> &Rational {
        &self.coeff
    }

    /// Returns the exponent mapping.
    #[must_use]
    pub fn powers(&self) -> &CycleType {
        &self.powers
    }

    /// The weighted total degree: Σ index · exponent.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.powers.degree()
    }

    /// Multiplies two monomials: coefficients multiply, exponent mappings
    /// merge by addition.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut pairs: Vec<(u32, u32)> = Vec::new();
        let (a, b) = (self.powers.pairs(), other.powers.pairs());
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => {
                    pairs.push(a[i]);
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    pairs.push(b[j]);
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    pairs.push((a[i].0, a[i].1 + b[j].1));
                    i += 1;
                    j += 1;
                }
            }
        }
        pairs.extend_from_slice(&a[i..]);
        pairs.extend_from_slice(&b[j..]);
        Self {
            coeff: self.coeff.clone() * other.coeff.clone(),
            powers: CycleType::new(pairs),
        }
    }

    /// Scales the coefficient.
    #[must_use]
    pub fn scale(&self, c: &Rational) -> Self {
        Self {
            coeff: self.coeff.clone() * c.clone(),
            powers: self.powers.clone(),
        }
    }

    /// Stretches the exponent mapping for plethystic substitution: every
    /// variable index is multiplied by k, taking the weighted degree from
    /// d to k·d.
    #[must_use]
    pub fn stretch(&self, k: u32) -> Self {
        Self {
            coeff: self.coeff.clone(),
            powers: CycleType::new(
                self.powers
                    .pairs()
                    .iter()
                    .map(|&(length, mult)| (length * k, mult)),
            ),
        }
    }

    /// The partial derivative with respect to x₁, or `None` if x₁ does not
    /// occur.
    #[must_use]
    pub fn d_x1(&self) -> Option<Self> {
        let exponent = self.powers.multiplicity(1);
        if exponent == 0 {
            return None;
        }
        let pairs: Vec<(u32, u32)> = self
            .powers
            .pairs()
            .iter()
            .filter_map(|&(length, mult)| {
                if length == 1 {
                    if mult == 1 {
                        None
                    } else {
                        Some((1, mult - 1))
                    }
                } else {
                    Some((length, mult))
                }
            })
            .collect();
        Some(Self {
            coeff: self.coeff.clone() * Rational::from(i64::from(exponent)),
            powers: CycleType::new(pairs),
        })
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.powers.is_empty() {
            return write!(f, "{}", self.coeff);
        }
        let vars: Vec<String> = self
            .powers
            .pairs()
            .iter()
            .map(|&(length, mult)| {
                if mult == 1 {
                    format!("x{length}")
                } else {
                    format!("x{length}^{mult}")
                }
            })
            .collect();
        write!(f, "{}*{}", self.coeff, vars.join("*"))
    }
}

/// Sorts a term list by exponent mapping, merges duplicates by coefficient
/// addition, and drops terms whose coefficient vanished.
#[must_use]
pub fn normalize(mut terms: Vec<Monomial>) -> Vec<Monomial> {
    terms.sort_by(|a, b| a.powers.cmp(&b.powers));
    let mut result: Vec<Monomial> = Vec::with_capacity(terms.len());
    for term in terms {
        match result.last_mut() {
            Some(last) if last.powers == term.powers => {
                last.coeff = last.coeff.clone() + term.coeff;
            }
            _ => result.push(term),
        }
    }
    result.retain(|m| !m.coeff.is_zero());
    result
}
