// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Order: a position cache and a stable order reconciler for
//! drag-and-reorder lists.
//!
//! ## Overview
//!
//! Hosts declare their lists from their own backing stores on every render.
//! While a drag is in flight, those stores have *not* been updated yet, so a
//! naive re-render would snap the dragged item back to its declared slot on
//! every pointer move. This crate is the mechanism by which "where the user
//! dragged it to" survives re-declaration until the host commits:
//!
//! - [`PositionCache`] remembers each item's last observed `(list, index)`
//!   slot, and applies single-item splices ([`PositionCache::move_to`]) when
//!   a drag accepts a reorder.
//! - [`reconcile`] merges freshly declared lists against the cache: cached
//!   positions win over declaration order, newly appearing items append in
//!   declaration order, and every list is renumbered to a contiguous
//!   `0..n`.
//!
//! Both structures are value types: updates return fresh values and never
//! mutate in place across calls, so each step is trivially unit-testable.
//!
//! ## Keys
//!
//! Item and list identifiers are opaque caller-supplied keys (`I`, `L`).
//! Item identity must be unique across *all* lists simultaneously; that is
//! what makes cross-list drags expressible. List declaration order is
//! semantic, which is why the API is built on [`IndexMap`].
//!
//! ## Minimal example
//!
//! ```
//! use trellis_order::{IndexMap, PositionCache, reconcile};
//!
//! let mut lists: IndexMap<&str, Vec<&str>> = IndexMap::new();
//! lists.insert("todo", vec!["a", "b", "c"]);
//! lists.insert("done", vec![]);
//!
//! // First reconciliation: declaration order becomes the committed order.
//! let out = reconcile(lists.clone(), &PositionCache::new(), |it| *it);
//! assert_eq!(out.lists["todo"], vec!["a", "b", "c"]);
//!
//! // A drag splices "a" to the front of "done"...
//! let (cache, landed) = out.cache.move_to(&"a", &"done", 0);
//! assert_eq!((landed.list, landed.index), ("done", 0));
//!
//! // ...and the next reconciliation of the *unchanged* declaration
//! // reflects the move instead of snapping back.
//! let out = reconcile(lists, &cache, |it| *it);
//! assert_eq!(out.lists["todo"], vec!["b", "c"]);
//! assert_eq!(out.lists["done"], vec!["a"]);
//! ```

mod cache;
mod reconcile;

pub use cache::{Position, PositionCache};
pub use reconcile::{Reconciled, reconcile};

// Declared list collections are order-preserving maps; re-export the type so
// hosts don't need their own indexmap dependency for the common case.
pub use indexmap::IndexMap;
