//! Functor composition of cycle index series.
//!
//! F □ G places an F-structure on the set of all labeled G-structures. A
//! relabeling permutation σ of the n underlying labels induces a
//! permutation of the G-structures; the coefficient of Z_{F□G} at the
//! cycle type of σ is fix_F(induced type) / aut(σ type).
//!
//! The induced cycle type is recovered arithmetically, without ever
//! materializing a structure set: the number of G-structures fixed by σᵈ
//! counts the structures lying on cycles of length dividing d, and Möbius
//! inversion over d isolates the count of exact d-cycles.

use std::collections::BTreeMap;

use species_integers::{divisors, mobius, Rational};
use species_partitions::{ez_coeff, int_partitions, CycleType};

use crate::monomial::{normalize, Monomial};
use crate::series::CycleIndex;

pub(crate) fn functor_compose(outer: &CycleIndex, inner: &CycleIndex) -> CycleIndex {
    let f = outer.clone();
    let g = inner.clone();
    let g_counts = inner.to_egf();
    CycleIndex::from_blocks(move |n| {
        let g_size = g_counts
            .labeled_count(n)
            .to_u64()
            .expect("inner structure count does not fit in u64");
        let mut terms = Vec::new();
        for sigma in int_partitions(n) {
            let image = induced_cycle_type(&g, &sigma, g_size);
            let coeff = f.fix(&image) * ez_coeff(&sigma);
            if coeff.is_zero() {
                continue;
            }
            terms.push(Monomial::new(coeff, sigma));
        }
        normalize(terms)
    })
}

/// The cycle type of the permutation that σ induces on the g_size labeled
/// inner structures, truncated to the actually-available structure count.
///
/// For each candidate cycle length k (ascending), the exact k-cycle count
/// is (1/k) Σ_{d|k} μ(k/d) · fix(σᵈ). When the remaining structures cannot
/// hold every k-cycle, whole cycles are kept while they fit and the last
/// one is shortened to cover exactly the remainder.
fn induced_cycle_type(g: &CycleIndex, sigma: &CycleType, g_size: u64) -> CycleType {
    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    let mut covered: u64 = 0;
    let mut k: u64 = 1;
    while covered < g_size {
        assert!(
            k <= g_size,
            "internal consistency failure: induced permutation covers {covered} of {g_size} structures"
        );
        let mut on_divisor_cycles = Rational::from(0);
        for d in divisors(k) {
            let power = u32::try_from(d).expect("cycle power overflows u32");
            let sign = Rational::from(mobius(k / d));
            on_divisor_cycles = on_divisor_cycles + sign * g.fix(&sigma.power(power));
        }
        let count = (on_divisor_cycles
            * Rational::from_i64(1, i64::try_from(k).expect("cycle length overflows i64")))
        .to_integer()
        .and_then(|c| c.to_u64())
        .unwrap_or_else(|| {
            panic!("internal consistency failure: induced {k}-cycle count is not a natural number")
        });
        if count > 0 {
            let remaining = g_size - covered;
            let width = k.checked_mul(count).expect("cycle coverage overflows u64");
            if width <= remaining {
                add_cycles(&mut counts, k, count);
                covered += width;
            } else {
                let whole = remaining / k;
                let partial = remaining % k;
                if whole > 0 {
                    add_cycles(&mut counts, k, whole);
                }
                if partial > 0 {
                    add_cycles(&mut counts, partial, 1);
                }
                covered = g_size;
            }
        }
        k += 1;
    }
    CycleType::new(counts.into_iter().map(|(length, mult)| {
        (
            length,
            u32::try_from(mult).expect("cycle multiplicity overflows u32"),
        )
    }))
}

fn add_cycles(counts: &mut BTreeMap<u32, u64>, length: u64, count: u64) {
    let length = u32::try_from(length).expect("cycle length overflows u32");
    *counts.entry(length).or_insert(0) += count;
}
