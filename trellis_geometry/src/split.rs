// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle halving and the directional side-intersection predicate.

use kurbo::{Point, Rect};

use crate::travel::travel;

/// A side of an axis-aligned rectangle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The minimum-y edge.
    Top,
    /// The maximum-y edge.
    Bottom,
    /// The minimum-x edge.
    Left,
    /// The maximum-x edge.
    Right,
}

/// Split `rect` at the center line perpendicular to `side` and return the
/// half nearest `side`.
///
/// `Side::Top` yields the top half, `Side::Right` the right half, and so on.
/// The center line belongs to both halves; [`side_intersect`] relies on that
/// inclusiveness so a pointer resting exactly on the midpoint counts as
/// having crossed.
pub fn half_of(side: Side, rect: Rect) -> Rect {
    let c = rect.center();
    match side {
        Side::Top => Rect::new(rect.x0, rect.y0, rect.x1, c.y),
        Side::Bottom => Rect::new(rect.x0, c.y, rect.x1, rect.y1),
        Side::Left => Rect::new(rect.x0, rect.y0, c.x, rect.y1),
        Side::Right => Rect::new(c.x, rect.y0, rect.x1, rect.y1),
    }
}

/// Whether the pointer has crossed into the half of `rect` that lies in its
/// direction of travel.
///
/// Computes [`travel`]`(p1, p2)`; with no motion there is no intersection.
/// Otherwise the direction maps to its same-named side, and the test is
/// whether `p2` lies within [`half_of`] that side, inclusive on all four
/// edges.
///
/// This is the trigger reorder engines use to commit a move: hovering the
/// near half of a sibling does nothing, so small oscillations around a
/// boundary cannot flip the order back and forth.
pub fn side_intersect(p1: Point, p2: Point, rect: Rect) -> bool {
    match travel(p1, p2) {
        None => false,
        Some(dir) => contains_inclusive(half_of(dir.toward(), rect), p2),
    }
}

// Inclusive on all four edges, so midpoints and shared corners count.
#[inline]
fn contains_inclusive(r: Rect, p: Point) -> bool {
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}
