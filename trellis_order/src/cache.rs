// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The position cache: last-observed `(list, index)` slots per item.

use core::hash::Hash;

use indexmap::IndexMap;

/// The logical slot of an item: which list it belongs to and its zero-based
/// rank within that list.
///
/// At any committed state, the indices assigned to one list's items form a
/// contiguous `0..n` permutation with no gaps or duplicates. The
/// [reconciler](crate::reconcile) and [`PositionCache::move_to`] both
/// renumber to maintain this.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position<L> {
    /// The owning list.
    pub list: L,
    /// Zero-based rank within the owning list.
    pub index: usize,
}

/// Mapping from item identity to its last-known [`Position`].
///
/// Starts empty. The [reconciler](crate::reconcile) rebuilds it on every
/// declaration pass; an active drag applies single-item splices via
/// [`Self::move_to`] between passes. Stale entries for items no longer
/// declared anywhere are harmless: the reconciler ignores them, and they are
/// dropped on its next full rebuild.
///
/// Updates are value-in/value-out: [`Self::move_to`] returns a fresh cache,
/// so callers thread snapshots through their update loop and never observe a
/// half-applied state.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "I: serde::Serialize + core::hash::Hash + Eq, L: serde::Serialize",
        deserialize = "I: serde::Deserialize<'de> + core::hash::Hash + Eq, L: serde::Deserialize<'de>"
    ))
)]
pub struct PositionCache<I, L> {
    slots: IndexMap<I, Position<L>>,
}

impl<I, L> Default for PositionCache<I, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Eq + Hash, L: PartialEq> PartialEq for PositionCache<I, L> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<I, L> PositionCache<I, L> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            slots: IndexMap::new(),
        }
    }

    /// Number of cached items.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no item has a cached position.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<I: Clone + Eq + Hash, L: Clone + Eq + Hash> PositionCache<I, L> {
    /// The cached position of `id`, if any.
    pub fn get(&self, id: &I) -> Option<&Position<L>> {
        self.slots.get(id)
    }

    /// True if `id` has a cached position.
    pub fn contains(&self, id: &I) -> bool {
        self.slots.contains_key(id)
    }

    /// Record `pos` for `id`, replacing any previous entry.
    ///
    /// This is the raw write used when rebuilding a cache; it does not
    /// renumber neighbors. Prefer [`Self::move_to`] for moves.
    pub fn insert(&mut self, id: I, pos: Position<L>) {
        self.slots.insert(id, pos);
    }

    /// The ids cached in `list`, sorted by index.
    ///
    /// The sort is stable, so entries with equal indices (possible only in
    /// hand-built caches) keep their map insertion order.
    pub fn ids_in_order(&self, list: &L) -> Vec<I> {
        let mut entries: Vec<(usize, &I)> = self
            .slots
            .iter()
            .filter(|(_, pos)| pos.list == *list)
            .map(|(id, pos)| (pos.index, id))
            .collect();
        entries.sort_by_key(|(index, _)| *index);
        entries.into_iter().map(|(_, id)| id.clone()).collect()
    }

    /// Splice `id` into `list` at `index`, returning the fresh cache and the
    /// slot the item actually landed in.
    ///
    /// The item is removed from its current slot (if it has one), `index` is
    /// clamped into the target list's valid range, and both affected lists
    /// are renumbered to contiguous `0..n`. Moving an item onto its current
    /// slot is the identity.
    ///
    /// An id with no cached position is simply inserted; the engine hits
    /// this when a drag starts before any reconciliation has run.
    pub fn move_to(&self, id: &I, list: &L, index: usize) -> (Self, Position<L>) {
        let mut out = self.clone();

        let mut target = self.ids_in_order(list);
        target.retain(|x| x != id);
        let at = index.min(target.len());
        target.insert(at, id.clone());
        for (i, x) in target.iter().enumerate() {
            out.slots.insert(
                x.clone(),
                Position {
                    list: list.clone(),
                    index: i,
                },
            );
        }

        // Close the gap the item left behind in its source list.
        if let Some(prev) = self.slots.get(id)
            && prev.list != *list
        {
            let mut source = self.ids_in_order(&prev.list);
            source.retain(|x| x != id);
            for (i, x) in source.iter().enumerate() {
                out.slots.insert(
                    x.clone(),
                    Position {
                        list: prev.list.clone(),
                        index: i,
                    },
                );
            }
        }

        let landed = Position {
            list: list.clone(),
            index: at,
        };
        (out, landed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(entries: &[(&'static str, &'static str, usize)]) -> PositionCache<&'static str, &'static str> {
        let mut cache = PositionCache::new();
        for &(id, list, index) in entries {
            cache.insert(id, Position { list, index });
        }
        cache
    }

    #[test]
    fn ids_in_order_sorts_by_index() {
        let cache = seeded(&[("c", "A", 2), ("a", "A", 0), ("b", "A", 1), ("x", "B", 0)]);
        assert_eq!(cache.ids_in_order(&"A"), vec!["a", "b", "c"]);
        assert_eq!(cache.ids_in_order(&"B"), vec!["x"]);
        assert!(cache.ids_in_order(&"missing").is_empty());
    }

    // Moving down: the dragged item lands after the displaced occupant.
    #[test]
    fn move_down_within_list() {
        let cache = seeded(&[("a", "A", 0), ("b", "A", 1), ("c", "A", 2)]);
        let (cache, landed) = cache.move_to(&"a", &"A", 2);
        assert_eq!(landed, Position { list: "A", index: 2 });
        assert_eq!(cache.ids_in_order(&"A"), vec!["b", "c", "a"]);
    }

    // Moving up: the dragged item lands before the displaced occupant.
    #[test]
    fn move_up_within_list() {
        let cache = seeded(&[("a", "A", 0), ("b", "A", 1), ("c", "A", 2)]);
        let (cache, landed) = cache.move_to(&"c", &"A", 0);
        assert_eq!(landed, Position { list: "A", index: 0 });
        assert_eq!(cache.ids_in_order(&"A"), vec!["c", "a", "b"]);
    }

    #[test]
    fn move_across_lists_renumbers_both() {
        let cache = seeded(&[("a", "A", 0), ("b", "A", 1), ("c", "A", 2), ("x", "B", 0)]);
        let (cache, landed) = cache.move_to(&"b", &"B", 0);
        assert_eq!(landed, Position { list: "B", index: 0 });
        assert_eq!(cache.ids_in_order(&"A"), vec!["a", "c"]);
        assert_eq!(cache.ids_in_order(&"B"), vec!["b", "x"]);
        // The gap in A is closed.
        assert_eq!(cache.get(&"c"), Some(&Position { list: "A", index: 1 }));
    }

    #[test]
    fn move_clamps_out_of_range_index() {
        let cache = seeded(&[("a", "A", 0), ("b", "A", 1)]);
        let (cache, landed) = cache.move_to(&"a", &"A", 99);
        assert_eq!(landed.index, 1);
        assert_eq!(cache.ids_in_order(&"A"), vec!["b", "a"]);
    }

    #[test]
    fn move_to_current_slot_is_identity() {
        let cache = seeded(&[("a", "A", 0), ("b", "A", 1)]);
        let (moved, landed) = cache.move_to(&"a", &"A", 0);
        assert_eq!(landed, Position { list: "A", index: 0 });
        assert_eq!(moved, cache);
    }

    // A drag can start before any reconciliation has populated the cache.
    #[test]
    fn move_of_unknown_id_inserts() {
        let cache: PositionCache<&str, &str> = PositionCache::new();
        let (cache, landed) = cache.move_to(&"a", &"B", 5);
        assert_eq!(landed, Position { list: "B", index: 0 });
        assert_eq!(cache.ids_in_order(&"B"), vec!["a"]);
    }

    #[test]
    fn move_into_empty_list() {
        let cache = seeded(&[("a", "A", 0), ("b", "A", 1)]);
        let (cache, landed) = cache.move_to(&"b", &"B", 0);
        assert_eq!(landed, Position { list: "B", index: 0 });
        assert_eq!(cache.ids_in_order(&"A"), vec!["a"]);
        assert_eq!(cache.ids_in_order(&"B"), vec!["b"]);
    }
}
