// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable merge of declared lists against a position cache.

use core::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::cache::{Position, PositionCache};

/// Output of [`reconcile`]: the view-ready list contents and the rebuilt
/// cache.
#[derive(Clone, Debug)]
pub struct Reconciled<T, I, L> {
    /// Every declared list (empty ones included), in declaration order, with
    /// its items in reconciled order.
    pub lists: IndexMap<L, Vec<T>>,
    /// The rebuilt cache, covering exactly the items present in this call's
    /// input. Entries never leak from one reconciliation to the next.
    pub cache: PositionCache<I, L>,
}

// Effective rank of an item within its effective list. Variant order is
// load-bearing: every `Known` sorts before every `Unknown`, which is the
// "synthetic +infinity" rank for newly appearing items.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Known(usize),
    Unknown(usize),
}

/// Merge freshly declared lists against `cache`, producing a stable order.
///
/// For each item, `identify` yields its identity. Items with a usable cache
/// entry (one whose list is among the declared lists) take their cached
/// `(list, index)` slot; all others are treated as new and rank after every
/// known item of their declaring list, keeping their relative declaration
/// order. Each list group is then renumbered to a contiguous `0..n`, which
/// also clamps any cached index left out of range by removals.
///
/// The same item identity appearing twice across the declared lists violates
/// the identity invariant; the first occurrence in declaration order wins,
/// later ones are dropped from the output and logged at `warn`. The result
/// stays total and deterministic.
///
/// Reconciliation is an idempotent fixed point: feeding back its own cache
/// with unchanged declarations returns the identical order and cache.
pub fn reconcile<T, I, L, F>(
    lists: IndexMap<L, Vec<T>>,
    cache: &PositionCache<I, L>,
    identify: F,
) -> Reconciled<T, I, L>
where
    I: Clone + Eq + Hash,
    L: Clone + Eq + Hash,
    F: Fn(&T) -> I,
{
    // Pre-seed every declared list so empty lists survive into the output
    // and cached entries pointing at undeclared lists read as unknown.
    let mut groups: IndexMap<L, Vec<(Rank, I, T)>> = lists
        .keys()
        .map(|list| (list.clone(), Vec::new()))
        .collect();

    let mut seen: IndexSet<I> = IndexSet::new();
    let mut dropped = 0_usize;
    let mut seq = 0_usize;
    for (declaring, items) in lists {
        for item in items {
            let id = identify(&item);
            if !seen.insert(id.clone()) {
                // Identity invariant violated; first occurrence wins.
                dropped += 1;
                continue;
            }
            let (effective, rank) = match cache.get(&id) {
                Some(pos) if groups.contains_key(&pos.list) => {
                    (pos.list.clone(), Rank::Known(pos.index))
                }
                _ => (declaring.clone(), Rank::Unknown(seq)),
            };
            seq += 1;
            groups
                .get_mut(&effective)
                .expect("effective list is always pre-seeded")
                .push((rank, id, item));
        }
    }
    if dropped > 0 {
        log::warn!("reconcile dropped {dropped} duplicate item identities");
    }

    let mut out_lists: IndexMap<L, Vec<T>> = IndexMap::with_capacity(groups.len());
    let mut out_cache = PositionCache::new();
    for (list, mut entries) in groups {
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        let mut items = Vec::with_capacity(entries.len());
        for (index, (_, id, item)) in entries.into_iter().enumerate() {
            out_cache.insert(
                id,
                Position {
                    list: list.clone(),
                    index,
                },
            );
            items.push(item);
        }
        out_lists.insert(list, items);
    }

    Reconciled {
        lists: out_lists,
        cache: out_cache,
    }
}
