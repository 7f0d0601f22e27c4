// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag state machine: a tagged union and its elementary transitions.

use kurbo::{Point, Rect};
use trellis_order::PositionCache;

/// Everything the engine tracks about an in-flight drag.
///
/// Exists only while a drag is active. All coordinates are viewport-space.
#[derive(Clone, Debug)]
pub struct DraggingItem<I, L> {
    /// Identity of the dragged item.
    pub id: I,
    /// List the drag started from.
    pub from_list: L,
    /// Slot the drag started from.
    pub from_index: usize,
    /// The dragged element's bounds captured at drag start, translated so
    /// the pointer-down point is the local origin. Translating these by the
    /// live pointer ([`Self::placement`]) reconstructs the drag clone's
    /// absolute position.
    pub origin_bounds: Rect,
    /// Latest pointer sample.
    pub current: Point,
    /// Pointer sample before `current`.
    pub previous: Point,
    /// Latched true on the first pointer sample that differs from the one
    /// before it. Gates hover intersection checks, so a plain click with
    /// sub-pixel jitter cannot trigger a spurious reorder.
    pub has_moved: bool,
    /// Cache snapshot taken at drag start; a cancel restores it.
    pub cache_at_start: PositionCache<I, L>,
}

impl<I, L> DraggingItem<I, L> {
    /// Capture a new drag: `bounds` are the dragged element's live bounds
    /// and `pointer` the pointer-down position.
    pub fn begin(
        id: I,
        from_list: L,
        from_index: usize,
        bounds: Rect,
        pointer: Point,
        cache_at_start: PositionCache<I, L>,
    ) -> Self {
        Self {
            id,
            from_list,
            from_index,
            origin_bounds: bounds - pointer.to_vec2(),
            current: pointer,
            previous: pointer,
            has_moved: false,
            cache_at_start,
        }
    }

    /// Record a pointer sample: the old `current` becomes `previous`, and
    /// `has_moved` latches if the two differ.
    pub fn pointer_moved(mut self, pos: Point) -> Self {
        self.previous = self.current;
        self.current = pos;
        self.has_moved |= self.previous != pos;
        self
    }

    /// The drag clone's absolute bounds: origin bounds translated by the
    /// live pointer.
    pub fn placement(&self) -> Rect {
        self.origin_bounds + self.current.to_vec2()
    }
}

/// Whether a drag is in progress, and its payload when it is.
///
/// This is the single source of truth for "is a drag active". It is a
/// host-owned value: the controller consumes one state and returns the
/// next, never holding a reference of its own.
#[derive(Clone, Debug)]
pub enum DragState<I, L> {
    /// No drag in progress.
    Idle,
    /// A drag is active.
    Dragging(DraggingItem<I, L>),
}

impl<I, L> Default for DragState<I, L> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<I, L> DragState<I, L> {
    /// True while a drag is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The in-flight drag payload, if any.
    pub fn dragging(&self) -> Option<&DraggingItem<I, L>> {
        match self {
            Self::Idle => None,
            Self::Dragging(d) => Some(d),
        }
    }
}
