// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A complete scripted drag: pointer down, travel, sibling hover, empty-list
//! hover, release.
//!
//! The bounds source here is a static map standing in for the host's layout
//! query; a real host would subscribe to pointer move/up only while
//! `is_dragging` holds and feed the same calls from its event loop.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p trellis_demos --example drag_between_lists`

use kurbo::{Point, Rect};
use trellis_drag::{BoundsSource, DragController, DragEvent, DragState};
use trellis_order::{IndexMap, PositionCache};

// Column A at x 0..120, column B at x 200..320; 28px rows.
struct Layout;

impl BoundsSource<&'static str> for Layout {
    fn bounds_of(&self, item: &&'static str) -> Option<Rect> {
        match *item {
            "alpha" => Some(Rect::new(0.0, 0.0, 120.0, 28.0)),
            "beta" => Some(Rect::new(0.0, 28.0, 120.0, 56.0)),
            "gamma" => Some(Rect::new(0.0, 56.0, 120.0, 84.0)),
            _ => None,
        }
    }
}

fn declare() -> IndexMap<&'static str, Vec<&'static str>> {
    let mut lists = IndexMap::new();
    lists.insert("A", vec!["alpha", "beta", "gamma"]);
    lists.insert("B", vec![]);
    lists
}

fn report(tag: &str, event: &Option<DragEvent<&'static str, &'static str>>) {
    match event {
        Some(ev) => println!("{tag}: {ev:?}"),
        None => println!("{tag}: (no event)"),
    }
}

fn main() {
    env_logger::init();

    let controller = DragController::new(Layout);
    let seeded = controller.renderable_order(declare(), &PositionCache::new(), |it| *it);
    println!("== Initial order ==\n  {:?}", seeded.lists);

    // Grab "alpha" in the middle of its row.
    let u = controller.on_pointer_down(
        DragState::default(),
        seeded.cache,
        "alpha",
        "A",
        0,
        Point::new(60.0, 14.0),
    );
    assert!(controller.is_dragging(&u.state));
    println!(
        "== Clone placement ==\n  {:?}",
        controller.clone_placement(&u.state)
    );

    // Drag down past beta's midpoint: the first reorder.
    let u = controller.on_pointer_move(u.state, u.cache, Point::new(60.0, 46.0));
    let u = controller.on_hover_item(u.state, u.cache, "A", "beta", 1);
    report("hover beta", &u.event);
    assert_eq!(
        u.event,
        Some(DragEvent::Moved {
            item: "alpha",
            list: "A",
            index: 1
        })
    );

    // Swerve right into the empty column.
    let u = controller.on_pointer_move(u.state, u.cache, Point::new(260.0, 46.0));
    let u = controller.on_hover_empty_list(u.state, u.cache, "B");
    report("hover empty B", &u.event);

    // Release: the terminal commit names origin and destination.
    let u = controller.on_pointer_up(u.state, u.cache);
    report("release", &u.event);
    assert_eq!(
        u.event,
        Some(DragEvent::Committed {
            item: "alpha",
            from_list: "A",
            from_index: 0,
            list: "B",
            index: 0
        })
    );
    assert!(!controller.is_dragging(&u.state));

    // The host re-declares its unchanged stores; the committed order holds.
    let out = controller.renderable_order(declare(), &u.cache, |it| *it);
    println!("== Final order ==\n  {:?}", out.lists);
    assert_eq!(out.lists["A"], vec!["beta", "gamma"]);
    assert_eq!(out.lists["B"], vec!["alpha"]);
}
