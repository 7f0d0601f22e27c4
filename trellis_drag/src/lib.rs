// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Drag: a deterministic drag-and-reorder interaction core.
//!
//! ## Overview
//!
//! This crate is the orchestration layer of the Trellis workspace: a pointer
//! state machine plus the glue that turns hover notifications into order
//! changes. It renders nothing and listens to nothing — the host feeds it
//! pointer and hover events and injects a [`BoundsSource`] for layout
//! queries, and it answers with fresh `(state, cache)` snapshots and
//! [`DragEvent`]s.
//!
//! ## Inputs
//!
//! - Pointer down/move/up notifications, delivered by the host's event loop
//!   one at a time (the core is single-threaded and never suspends).
//! - Hover notifications, raised by the rendering layer when the pointer is
//!   over a rendered sibling or an empty list container.
//! - A [`BoundsSource`]: the one injected capability, answering "where is
//!   item X on screen right now", fallibly.
//!
//! ## Outputs
//!
//! - [`DragEvent::Moved`]: advisory, on every accepted reorder mid-drag.
//! - [`DragEvent::Committed`]: terminal, exactly once per completed drag;
//!   the host applies it to its authoritative storage.
//! - A cancelled drag emits nothing and restores the pre-drag order.
//!
//! A hover becomes a move only once the pointer has crossed the target's
//! midpoint in its direction of travel
//! ([`trellis_geometry::side_intersect`]), and the accepted move is spliced
//! into the [`trellis_order::PositionCache`] so re-declarations keep the
//! dragged item where the user put it until commit.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use trellis_drag::{BoundsSource, DragController, DragEvent, DragState};
//! use trellis_order::{IndexMap, PositionCache, reconcile};
//!
//! // Two 100x20 rows; a real host answers this from its live layout.
//! struct Rows;
//! impl BoundsSource<&'static str> for Rows {
//!     fn bounds_of(&self, item: &&'static str) -> Option<Rect> {
//!         match *item {
//!             "a" => Some(Rect::new(0.0, 0.0, 100.0, 20.0)),
//!             "b" => Some(Rect::new(0.0, 20.0, 100.0, 40.0)),
//!             _ => None,
//!         }
//!     }
//! }
//! let controller = DragController::new(Rows);
//!
//! let mut lists: IndexMap<&str, Vec<&str>> = IndexMap::new();
//! lists.insert("todo", vec!["a", "b"]);
//! let seeded = reconcile(lists, &PositionCache::new(), |it| *it);
//!
//! // Grab "a", drag it past "b"'s midpoint, release.
//! let u = controller.on_pointer_down(
//!     DragState::default(),
//!     seeded.cache,
//!     "a",
//!     "todo",
//!     0,
//!     Point::new(50.0, 10.0),
//! );
//! let u = controller.on_pointer_move(u.state, u.cache, Point::new(50.0, 32.0));
//! let u = controller.on_hover_item(u.state, u.cache, "todo", "b", 1);
//! assert!(matches!(u.event, Some(DragEvent::Moved { index: 1, .. })));
//!
//! let u = controller.on_pointer_up(u.state, u.cache);
//! assert!(matches!(
//!     u.event,
//!     Some(DragEvent::Committed { item: "a", from_index: 0, index: 1, .. })
//! ));
//! ```
//!
//! ## Subscription model
//!
//! Hosts open their pointer move/up subscriptions when a drag starts and
//! close them on the transition back to idle; [`DragController::is_dragging`]
//! is the gate. Events that arrive in a state with no matching transition
//! (hovers while idle, a second pointer-down mid-drag) are identity
//! transitions by design — never errors, never queued.

mod controller;
mod state;
mod types;

pub use controller::DragController;
pub use state::{DragState, DraggingItem};
pub use types::{BoundsSource, DragEvent, Update};
