//! The cycle index series type and its primitive operators.

use parking_lot::Mutex;
use std::sync::Arc;

use species_algebra::Species;
use species_integers::{divisors, euler_phi, Integer, Rational};
use species_partitions::{aut, ez_coeff, int_partitions, CycleType};

use crate::monomial::{normalize, Monomial};

/// Default precision bound handed to the fixpoint solver when resolving
/// recursive species under this interpretation.
pub const DEFAULT_REC_PRECISION: usize = 10;

struct CiInner {
    generator: Box<dyn Fn(usize) -> Vec<Monomial> + Send + Sync>,
    cache: Mutex<Vec<Option<Arc<Vec<Monomial>>>>>,
}

/// A cycle index series: a formal power series in the variables x₁, x₂, ...
/// whose coefficient at the monomial of a cycle type, multiplied by the
/// automorphism count of that type, is the number of structures fixed by a
/// permutation of that type.
///
/// The series is conceptually infinite; it is materialized one degree
/// block at a time, on demand, and memoized. Each block is kept sorted by
/// the canonical monomial order (weighted degree, then lexicographic on
/// the exponent mapping) with at most one monomial per exponent mapping,
/// so prefixes are always meaningful and sparse merges stay linear.
pub struct CycleIndex {
    inner: Arc<CiInner>,
}

impl Clone for CycleIndex {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl CycleIndex {
    /// Creates a series from a degree-block generator.
    ///
    /// The generator must produce, for degree n, monomials of weighted
    /// degree exactly n.
    pub fn from_blocks<F>(generator: F) -> Self
    where
        F: Fn(usize) -> Vec<Monomial> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(CiInner {
                generator: Box::new(generator),
                cache: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Returns the degree-n block, computing and caching it on first
    /// access.
    #[must_use]
    pub fn block(&self, n: usize) -> Arc<Vec<Monomial>> {
        {
            let cache = self.inner.cache.lock();
            if let Some(Some(block)) = cache.get(n) {
                return Arc::clone(block);
            }
        }
        // Compute outside the lock: generators consult other series.
        let block = (self.inner.generator)(n);
        debug_assert!(block.iter().all(|m| m.degree() == n));
        let block = Arc::new(block);
        let mut cache = self.inner.cache.lock();
        if cache.len() <= n {
            cache.resize(n + 1, None);
        }
        cache[n] = Some(Arc::clone(&block));
        block
    }

    /// The coefficient of the monomial with the given exponent mapping.
    ///
    /// Mappings absent from the block have coefficient zero.
    #[must_use]
    pub fn coefficient(&self, cycle_type: &CycleType) -> Rational {
        let block = self.block(cycle_type.degree());
        match block.binary_search_by(|m| m.powers().cmp(cycle_type)) {
            Ok(index) => block[index].coeff().clone(),
            Err(_) => Rational::from(0),
        }
    }

    /// The number of structures fixed by a permutation of the given cycle
    /// type: aut(type) times the coefficient at that type.
    #[must_use]
    pub fn fix(&self, cycle_type: &CycleType) -> Rational {
        Rational::from_integer(aut(cycle_type).expand()) * self.coefficient(cycle_type)
    }

    /// Compares the first k degree blocks of two series.
    #[must_use]
    pub fn eq_prefix(&self, other: &Self, k: usize) -> bool {
        (0..k).all(|n| *self.block(n) == *other.block(n))
    }
}

impl Species for CycleIndex {
    fn zero() -> Self {
        Self::from_blocks(|_| Vec::new())
    }

    fn one() -> Self {
        Self::from_blocks(|n| {
            if n == 0 {
                vec![Monomial::constant(Rational::from(1))]
            } else {
                Vec::new()
            }
        })
    }

    fn singleton() -> Self {
        Self::from_blocks(|n| {
            if n == 1 {
                vec![Monomial::new(Rational::from(1), CycleType::new([(1, 1)]))]
            } else {
                Vec::new()
            }
        })
    }

    fn set() -> Self {
        // The degree-n block sums 1/aut(p) over every partition p of n.
        Self::from_blocks(|n| {
            normalize(
                int_partitions(n)
                    .into_iter()
                    .map(|p| Monomial::new(ez_coeff(&p), p))
                    .collect(),
            )
        })
    }

    fn cycle() -> Self {
        // Burnside: the degree-n block is (1/n) Σ_{d | n} φ(d) x_d^{n/d}.
        Self::from_blocks(|n| {
            if n == 0 {
                return Vec::new();
            }
            let n_u64 = n as u64;
            let terms = divisors(n_u64)
                .into_iter()
                .map(|d| {
                    let coeff = Rational::new(
                        Integer::from_u64(euler_phi(d)),
                        Integer::from_u64(n_u64),
                    );
                    let length = u32::try_from(d).expect("cycle length overflows u32");
                    let mult = u32::try_from(n_u64 / d).expect("multiplicity overflows u32");
                    Monomial::new(coeff, CycleType::new([(length, mult)]))
                })
                .collect();
            normalize(terms)
        })
    }

    fn add(&self, other: &Self) -> Self {
        let lhs = self.clone();
        let rhs = other.clone();
        Self::from_blocks(move |n| {
            let mut terms: Vec<Monomial> = lhs.block(n).as_ref().clone();
            terms.extend(rhs.block(n).iter().cloned());
            normalize(terms)
        })
    }

    fn mul(&self, other: &Self) -> Self {
        let lhs = self.clone();
        let rhs = other.clone();
        Self::from_blocks(move |n| {
            let mut terms = Vec::new();
            for i in 0..=n {
                let a = lhs.block(i);
                let b = rhs.block(n - i);
                for ma in a.iter() {
                    for mb in b.iter() {
                        terms.push(ma.mul(mb));
                    }
                }
            }
            normalize(terms)
        })
    }

    fn differentiate(&self) -> Self {
        // Z_{F'} = ∂Z_F/∂x₁; the degree-n block comes from the degree-(n+1)
        // block of the parent.
        let parent = self.clone();
        Self::from_blocks(move |n| {
            normalize(
                parent
                    .block(n + 1)
                    .iter()
                    .filter_map(Monomial::d_x1)
                    .collect(),
            )
        })
    }

    fn compose(&self, inner: &Self) -> Self {
        crate::compose::compose(self, inner)
    }

    fn hadamard(&self, other: &Self) -> Self {
        // Intersect monomials with identical exponent mappings; both blocks
        // are sorted, so this is a linear merge. Matching pairs pick up the
        // automorphism count of the shared cycle type; everything else
        // drops out, which is what makes this a pointwise product of
        // fixed-structure counts.
        let lhs = self.clone();
        let rhs = other.clone();
        Self::from_blocks(move |n| {
            let a = lhs.block(n);
            let b = rhs.block(n);
            let mut terms = Vec::new();
            let (mut i, mut j) = (0, 0);
            while i < a.len() && j < b.len() {
                match a[i].powers().cmp(b[j].powers()) {
                    std::cmp::Ordering::Less => i += 1,
                    std::cmp::Ordering::Greater => j += 1,
                    std::cmp::Ordering::Equal => {
                        let weight = Rational::from_integer(aut(a[i].powers()).expand());
                        let coeff = a[i].coeff().clone() * b[j].coeff().clone() * weight;
                        if !coeff.is_zero() {
                            terms.push(Monomial::new(coeff, a[i].powers().clone()));
                        }
                        i += 1;
                        j += 1;
                    }
                }
            }
            terms
        })
    }

    fn functor_compose(&self, inner: &Self) -> Self {
        crate::functor::functor_compose(self, inner)
    }

    fn of_size<P>(&self, predicate: P) -> Self
    where
        P: Fn(usize) -> bool + Send + Sync + 'static,
    {
        let parent = self.clone();
        Self::from_blocks(move |n| {
            if predicate(n) {
                parent.block(n).as_ref().clone()
            } else {
                Vec::new()
            }
        })
    }

    fn of_size_exactly(&self, n: usize) -> Self {
        self.of_size(move |k| k == n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use species_algebra::derived;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    #[test]
    fn test_singleton_block() {
        let x = CycleIndex::singleton();
        assert!(x.block(0).is_empty());
        assert_eq!(x.block(1).len(), 1);
        assert!(x.block(2).is_empty());
        assert_eq!(x.coefficient(&CycleType::new([(1, 1)])), q(1, 1));
    }

    #[test]
    fn test_set_block_degree_two() {
        // Z_E at degree 2: x1²/2 + x2/2.
        let e = CycleIndex::set();
        assert_eq!(e.coefficient(&CycleType::new([(1, 2)])), q(1, 2));
        assert_eq!(e.coefficient(&CycleType::new([(2, 1)])), q(1, 2));
    }

    #[test]
    fn test_set_fixes_every_permutation_once() {
        // A set structure is fixed by every relabeling.
        let e = CycleIndex::set();
        for n in 0..7 {
            for p in int_partitions(n) {
                assert_eq!(e.fix(&p), q(1, 1));
            }
        }
    }

    #[test]
    fn test_cycle_block_degree_four() {
        // Z_C at degree 4: (x1⁴ + x2² + 2x4)/4.
        let c = CycleIndex::cycle();
        assert_eq!(c.coefficient(&CycleType::new([(1, 4)])), q(1, 4));
        assert_eq!(c.coefficient(&CycleType::new([(2, 2)])), q(1, 4));
        assert_eq!(c.coefficient(&CycleType::new([(4, 1)])), q(1, 2));
        assert_eq!(c.coefficient(&CycleType::new([(1, 2), (2, 1)])), q(0, 1));
    }

    #[test]
    fn test_subsets_block_degree_two() {
        // Z_{E·E} at degree 2: 2x1² + x2.
        let subsets: CycleIndex = derived::subsets();
        assert_eq!(subsets.coefficient(&CycleType::new([(1, 2)])), q(2, 1));
        assert_eq!(subsets.coefficient(&CycleType::new([(2, 1)])), q(1, 1));
    }

    #[test]
    fn test_lists_cycle_index_is_geometric_in_x1() {
        // Z_L = Σₙ x1ⁿ: lists are rigid, only the identity fixes any.
        let lists: CycleIndex = derived::lists();
        for n in 0..8 {
            let block = lists.block(n);
            assert_eq!(block.len(), 1);
            assert_eq!(block[0].coeff(), &q(1, 1));
            assert_eq!(block[0].powers(), &CycleType::identity(n));
        }
    }

    #[test]
    fn test_add_merges_blocks() {
        let s = CycleIndex::singleton().add(&CycleIndex::set());
        assert_eq!(s.coefficient(&CycleType::new([(1, 1)])), q(2, 1));
    }

    #[test]
    fn test_hadamard_set_is_identity() {
        // E × F = F for any F, since E contributes factor 1 to every fix
        // count. Checked against E itself and against cycles.
        let e = CycleIndex::set();
        assert!(e.hadamard(&e).eq_prefix(&e, 7));
        let c = CycleIndex::cycle();
        assert!(e.hadamard(&c).eq_prefix(&c, 7));
    }

    #[test]
    fn test_hadamard_drops_non_matching() {
        // Lists only have identity monomials, cycles at degree >= 2 have
        // more; the Hadamard product keeps the intersection only.
        let lists: CycleIndex = derived::lists();
        let c = CycleIndex::cycle();
        let both = lists.hadamard(&c);
        assert_eq!(both.block(3).len(), 1);
        // Fixed-structure counts multiply: the identity fixes 6 lists and
        // 2 cycles on 3 labels, so fix = 12 and the coefficient is 12/3!.
        assert_eq!(both.coefficient(&CycleType::identity(3)), q(2, 1));
    }

    #[test]
    fn test_differentiate_set_is_set() {
        // E' = E.
        let e = CycleIndex::set();
        assert!(e.differentiate().eq_prefix(&e, 7));
    }

    #[test]
    fn test_of_size_filters_blocks() {
        let even_sets = CycleIndex::set().of_size(|n| n % 2 == 0);
        assert_eq!(even_sets.block(2).len(), 2);
        assert!(even_sets.block(3).is_empty());

        let pairs = CycleIndex::set().of_size_exactly(2);
        assert!(pairs.block(1).is_empty());
        assert_eq!(pairs.block(2).len(), 2);
        assert!(pairs.block(3).is_empty());
    }

    #[test]
    fn test_zero_and_one() {
        let zero = CycleIndex::zero();
        let one = CycleIndex::one();
        assert!(zero.block(0).is_empty());
        assert_eq!(one.block(0).len(), 1);
        assert!(one.block(1).is_empty());

        let e = CycleIndex::set();
        assert!(e.mul(&one).eq_prefix(&e, 6));
        assert!(e.add(&zero).eq_prefix(&e, 6));
        assert!(e.mul(&zero).eq_prefix(&zero, 6));
    }
}
