// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reconciliation walkthrough: cached positions beat declaration order.
//!
//! Hosts re-declare their lists from unmodified backing stores on every
//! render; the position cache is what keeps a moved item where the user put
//! it until the host commits the change.
//!
//! Run:
//! - `cargo run -p trellis_demos --example reorder_basics`

use trellis_order::{IndexMap, PositionCache, reconcile};

fn declare() -> IndexMap<&'static str, Vec<&'static str>> {
    let mut lists = IndexMap::new();
    lists.insert("todo", vec!["write", "review", "ship"]);
    lists.insert("done", vec![]);
    lists
}

fn main() {
    env_logger::init();

    // First pass over an empty cache: declaration order is adopted.
    let out = reconcile(declare(), &PositionCache::new(), |it| *it);
    println!("== Initial order ==\n  {:?}", out.lists);
    assert_eq!(out.lists["todo"], vec!["write", "review", "ship"]);

    // A drag splices "ship" to the front of "todo"...
    let (cache, landed) = out.cache.move_to(&"ship", &"todo", 0);
    println!("== After splice ==\n  ship landed at {:?}", landed);

    // ...and re-declaring the unchanged host data now follows the cache.
    let out = reconcile(declare(), &cache, |it| *it);
    println!("== Re-declared order ==\n  {:?}", out.lists);
    assert_eq!(out.lists["todo"], vec!["ship", "write", "review"]);

    // Reconciliation is a fixed point: feeding its own cache back with the
    // same declarations changes nothing.
    let again = reconcile(declare(), &out.cache, |it| *it);
    assert_eq!(again.lists, out.lists);
    assert_eq!(again.cache, out.cache);

    // Cross-list: cache "review" into "done" and the next pass moves it.
    let (cache, _) = out.cache.move_to(&"review", &"done", 0);
    let out = reconcile(declare(), &cache, |it| *it);
    println!("== Cross-list ==\n  {:?}", out.lists);
    assert_eq!(out.lists["todo"], vec!["ship", "write"]);
    assert_eq!(out.lists["done"], vec!["review"]);
}
