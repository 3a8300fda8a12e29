//! Pairwise comparison and the relation sort.
//!
//! The visitation order is a greedy topological selection over the edges
//! the pairwise declarations induce: walk the current order and pick the
//! first entry no unvisited entry must precede, repeatedly. Indifferent
//! pairs keep their current relative order, and cyclic or contradictory
//! declarations are tolerated — when every remaining entry has an
//! unsatisfied predecessor the front one is taken. The result is
//! deterministic for a given input order; which way a contradictory pair
//! resolves is unspecified and carries no meaning.
//!
//! `slice::sort_by` is deliberately not used: declared relations may be
//! one-sided, non-transitive, or mutually contradictory, and `sort_by`
//! documents that it may panic when its comparator is not a total order.
//! A comparison sort also only approximates the declared partial order,
//! while the greedy selection honors every satisfiable `Before` edge even
//! across indifferent neighbors. Observer sets are small; the quadratic
//! edge scan is irrelevant.

use std::mem;
use std::sync::Arc;

use crate::observer::{Observer, ObserverId, Placement};

/// Resolve the relative order of the pair `(a, b)`.
///
/// Ask `a` first; if it has an opinion, use it directly. Otherwise ask `b`
/// about `a` and invert the answer ("b runs after a" means "a runs before
/// b"). If neither side has an opinion the pair is indifferent.
pub fn compare<O: Observer + ?Sized>(a: &O, b: &O) -> Placement {
    match a.placement(b.as_any()) {
        Placement::Indifferent => b.placement(a.as_any()).invert(),
        decided => decided,
    }
}

/// Reorder registry entries by greedy topological selection.
pub(crate) fn sort_entries<O: Observer + ?Sized>(entries: &mut Vec<(ObserverId, Arc<O>)>) {
    let n = entries.len();
    if n < 2 {
        return;
    }

    // must_precede[i][j]: entries[i] resolved `Before` entries[j].
    let mut must_precede = vec![vec![false; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i != j && compare(&*entries[i].1, &*entries[j].1) == Placement::Before {
                must_precede[i][j] = true;
            }
        }
    }

    let mut remaining: Vec<usize> = (0..n).collect();
    let old = mem::take(entries);
    while !remaining.is_empty() {
        let pick = remaining
            .iter()
            .position(|&j| remaining.iter().all(|&i| i == j || !must_precede[i][j]))
            // Cyclic declarations: no entry is unblocked, take the front.
            .unwrap_or(0);
        entries.push(old[remaining.remove(pick)].clone());
    }
}
