//! Integer partition enumeration.

use crate::CycleType;

/// Produces every integer partition of `n` as a [`CycleType`].
///
/// Partitions are generated largest-part-first: for each allowed part size
/// k (bounded by the previously chosen part) the multiplicity runs from
/// n div k down to 0, recursing on the remainder with the ceiling lowered
/// to k - 1. Partitioning 0 yields the single empty partition; a positive
/// remainder with ceiling 0 yields nothing.
#[must_use]
pub fn int_partitions(n: usize) -> Vec<CycleType> {
    let n = u32::try_from(n).expect("partition size does not fit in u32");
    let mut out = Vec::new();
    let mut parts: Vec<(u32, u32)> = Vec::new();
    descend(n, n, &mut parts, &mut out);
    out
}

fn descend(remaining: u32, ceiling: u32, parts: &mut Vec<(u32, u32)>, out: &mut Vec<CycleType>) {
    if remaining == 0 {
        // Parts were chosen largest first; CycleType wants them increasing.
        out.push(CycleType::new(parts.iter().rev().copied()));
        return;
    }
    if ceiling == 0 {
        return;
    }
    let k = ceiling.min(remaining);
    for j in (0..=remaining / k).rev() {
        if j > 0 {
            parts.push((k, j));
        }
        descend(remaining - j * k, k - 1, parts, out);
        if j > 0 {
            parts.pop();
        }
    }
}
