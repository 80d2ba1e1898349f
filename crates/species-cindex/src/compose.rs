//! Partitional composition (plethystic substitution) of cycle index
//! series.
//!
//! Z_{F∘G} substitutes each variable xₖ of the outer series by the
//! stretched inner series Z_G(xₖ, x₂ₖ, x₃ₖ, ...). Because the inner
//! series has no constant term, an outer monomial of weighted degree d
//! only contributes at degrees ≥ d, so each result block depends on
//! finitely many input blocks and the composition stays demand-driven.

use crate::monomial::{normalize, Monomial};
use crate::series::CycleIndex;

/// Degree-truncated series: index = weighted degree, entries normalized.
type Truncated = Vec<Vec<Monomial>>;

pub(crate) fn compose(outer: &CycleIndex, inner: &CycleIndex) -> CycleIndex {
    assert!(
        inner.block(0).is_empty(),
        "partitional composition requires an inner species with no empty-set structures"
    );
    let f = outer.clone();
    let g = inner.clone();
    CycleIndex::from_blocks(move |n| {
        if n == 0 {
            // Only the outer constant survives at degree 0.
            return f.block(0).as_ref().clone();
        }
        let mut terms: Vec<Monomial> = Vec::new();
        for d in 1..=n {
            for mono in f.block(d).iter() {
                let mut acc = unit(n);
                for &(k, mult) in mono.powers().pairs() {
                    let stretched = stretch(&g, k, n);
                    for _ in 0..mult {
                        acc = mul(&acc, &stretched, n);
                    }
                }
                for term in &acc[n] {
                    terms.push(term.scale(mono.coeff()));
                }
            }
        }
        normalize(terms)
    })
}

/// The truncated series 1.
fn unit(n: usize) -> Truncated {
    let mut blocks = vec![Vec::new(); n + 1];
    blocks[0].push(Monomial::constant(species_integers::Rational::from(1)));
    blocks
}

/// The inner series with every variable index multiplied by k, truncated
/// at degree n.
fn stretch(g: &CycleIndex, k: u32, n: usize) -> Truncated {
    let step = k as usize;
    (0..=n)
        .map(|j| {
            if j % step == 0 {
                g.block(j / step).iter().map(|m| m.stretch(k)).collect()
            } else {
                Vec::new()
            }
        })
        .collect()
}

/// Multiplies two truncated series, discarding everything above degree n.
fn mul(a: &Truncated, b: &Truncated, n: usize) -> Truncated {
    (0..=n)
        .map(|m| {
            let mut terms = Vec::new();
            for i in 0..=m {
                for ma in &a[i] {
                    for mb in &b[m - i] {
                        terms.push(ma.mul(mb));
                    }
                }
            }
            normalize(terms)
        })
        .collect()
}
