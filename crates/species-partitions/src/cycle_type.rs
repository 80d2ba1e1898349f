//! Permutation cycle types.

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// The cycle structure of a permutation, as `(length, multiplicity)` pairs
/// with lengths strictly increasing and multiplicities positive.
///
/// Equivalently an integer partition: a part of size k with multiplicity m
/// stands for m cycles of length k. The degree is the size of the
/// permutation's domain.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct CycleType {
    pairs: SmallVec<[(u32, u32); 4]>,
}

impl CycleType {
    /// Creates a cycle type from `(length, multiplicity)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if lengths are not strictly increasing, if any length is zero,
    /// or if any multiplicity is zero.
    #[must_use]
    pub fn new(pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let pairs: SmallVec<[(u32, u32); 4]> = pairs.into_iter().collect();
        for window in pairs.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "cycle lengths must be strictly increasing"
            );
        }
        for &(length, mult) in &pairs {
            assert!(length > 0, "cycle length must be positive");
            assert!(mult > 0, "cycle multiplicity must be positive");
        }
        Self { pairs }
    }

    /// The cycle type of the permutation of the empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The cycle type of the identity permutation on n elements: n fixed
    /// points.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        if n == 0 {
            Self::empty()
        } else {
            Self::new([(1, u32::try_from(n).expect("degree does not fit in u32"))])
        }
    }

    /// Returns the `(length, multiplicity)` pairs, lengths increasing.
    #[must_use]
    pub fn pairs(&self) -> &[(u32, u32)] {
        &self.pairs
    }

    /// Returns the multiplicity of cycles of the given length.
    #[must_use]
    pub fn multiplicity(&self, length: u32) -> u32 {
        self.pairs
            .iter()
            .find(|&&(l, _)| l == length)
            .map_or(0, |&(_, m)| m)
    }

    /// The size of the underlying domain: Σ length·multiplicity.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.pairs
            .iter()
            .map(|&(l, m)| l as usize * m as usize)
            .sum()
    }

    /// The total number of cycles: Σ multiplicity.
    #[must_use]
    pub fn cycle_count(&self) -> usize {
        self.pairs.iter().map(|&(_, m)| m as usize).sum()
    }

    /// Returns true if this is the empty cycle type.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The cycle type of the m-th power of any permutation with this cycle
    /// type.
    ///
    /// A cycle of length k splits under the m-th power into gcd(m, k)
    /// cycles of length k / gcd(m, k). This identity lets functor
    /// composition probe a series at powered cycle types without ever
    /// materializing a permutation.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero.
    #[must_use]
    pub fn power(&self, m: u32) -> Self {
        assert!(m > 0, "permutation power must be positive");
        let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
        for &(k, c) in &self.pairs {
            let g = gcd(m, k);
            *counts.entry(k / g).or_insert(0) += g * c;
        }
        Self {
            pairs: counts.into_iter().collect(),
        }
    }
}

impl Ord for CycleType {
    /// Weighted degree first, then lexicographic on the pair list. This is
    /// the total order cycle index monomials are kept sorted by.
    fn cmp(&self, other: &Self) -> Ordering {
        self.degree()
            .cmp(&other.degree())
            .then_with(|| self.pairs.cmp(&other.pairs))
    }
}

impl PartialOrd for CycleType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pairs.is_empty() {
            return write!(f, "()");
        }
        let parts: Vec<String> = self
            .pairs
            .iter()
            .map(|&(l, m)| {
                if m == 1 {
                    format!("{l}")
                } else {
                    format!("{l}^{m}")
                }
            })
            .collect();
        write!(f, "({})", parts.join(" "))
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree() {
        let ct = CycleType::new([(1, 2), (3, 1)]);
        assert_eq!(ct.degree(), 5);
        assert_eq!(ct.cycle_count(), 3);
    }

    #[test]
    fn test_identity() {
        assert_eq!(CycleType::identity(0), CycleType::empty());
        assert_eq!(CycleType::identity(4), CycleType::new([(1, 4)]));
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_rejects_unsorted() {
        let _ = CycleType::new([(3, 1), (1, 2)]);
    }

    #[test]
    #[should_panic(expected = "multiplicity must be positive")]
    fn test_rejects_zero_multiplicity() {
        let _ = CycleType::new([(2, 0)]);
    }

    #[test]
    fn test_power_of_transposition() {
        // The square of a 2-cycle is two fixed points.
        let swap = CycleType::new([(2, 1)]);
        assert_eq!(swap.power(2), CycleType::new([(1, 2)]));
    }

    #[test]
    fn test_power_splits_cycles() {
        // A 6-cycle squared gives two 3-cycles; cubed gives three 2-cycles.
        let six = CycleType::new([(6, 1)]);
        assert_eq!(six.power(2), CycleType::new([(3, 2)]));
        assert_eq!(six.power(3), CycleType::new([(2, 3)]));
        assert_eq!(six.power(6), CycleType::new([(1, 6)]));
    }

    #[test]
    fn test_power_preserves_degree() {
        let ct = CycleType::new([(1, 1), (2, 2), (4, 1)]);
        for m in 1..=8 {
            assert_eq!(ct.power(m).degree(), ct.degree());
        }
    }

    #[test]
    fn test_order() {
        // Degree dominates, then the pair list lexicographically.
        let a = CycleType::new([(1, 2)]);
        let b = CycleType::new([(2, 1)]);
        let c = CycleType::new([(3, 1)]);
        assert!(a < b);
        assert!(b < c);
    }
}
