// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dominant-axis classification of pointer travel.

use kurbo::Point;

use crate::split::Side;

/// Cardinal direction of pointer travel.
///
/// Produced by [`travel`] and consumed by
/// [`side_intersect`](crate::side_intersect) to pick the half of a target
/// rectangle that faces the motion.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    /// Toward negative y.
    Up,
    /// Toward positive y.
    Down,
    /// Toward negative x.
    Left,
    /// Toward positive x.
    Right,
}

impl Dir {
    /// The same-named side of a target rectangle for this direction of
    /// travel (`Down` → [`Side::Bottom`], and so on).
    ///
    /// The half nearest that side is the far half along the motion: a
    /// pointer moving `Down` has committed only once it reaches the bottom
    /// half of the target.
    #[inline]
    pub const fn toward(self) -> Side {
        match self {
            Self::Up => Side::Top,
            Self::Down => Side::Bottom,
            Self::Left => Side::Left,
            Self::Right => Side::Right,
        }
    }
}

/// Classify the dominant direction of travel from `p1` to `p2`.
///
/// Returns `None` iff the two samples coincide. Otherwise the axis with the
/// larger absolute delta wins; when the deltas tie exactly, the vertical axis
/// wins. The tie-break is deliberate: list reordering is vertical far more
/// often than horizontal, so a perfect diagonal resolves to `Up`/`Down`.
pub fn travel(p1: Point, p2: Point) -> Option<Dir> {
    let d = p2 - p1;
    if d.x == 0.0 && d.y == 0.0 {
        return None;
    }
    Some(if abs(d.x) > abs(d.y) {
        if d.x > 0.0 { Dir::Right } else { Dir::Left }
    } else if d.y > 0.0 {
        Dir::Down
    } else {
        Dir::Up
    })
}

// f64::abs lives in std; keep the crate no_std-clean.
#[inline]
fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}
