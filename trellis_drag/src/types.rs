// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator contracts and outbound events.

use kurbo::Rect;
use trellis_order::PositionCache;

use crate::state::DragState;

/// Synchronous source of live bounding rectangles, injected by the host.
///
/// The engine never touches a render tree directly; every "where is this
/// item on screen" question goes through this trait. Implementations must
/// reflect live layout at call time and return `None` for items not present
/// in the rendered tree — the engine treats that as "ignore this event",
/// never as an error.
pub trait BoundsSource<I> {
    /// Current screen-space bounds of the element representing `item`, or
    /// `None` if it is not mounted.
    fn bounds_of(&self, item: &I) -> Option<Rect>;
}

/// Outbound event produced by a controller update.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragEvent<I, L> {
    /// Advisory: the dragged item was reordered to a new slot. Fired on
    /// every accepted reorder while the drag is still in flight; hosts may
    /// re-render highlighting from it but must not treat it as final.
    Moved {
        /// The dragged item.
        item: I,
        /// The list it landed in.
        list: L,
        /// The slot it landed in.
        index: usize,
    },
    /// Terminal: fired exactly once per completed drag, on pointer-up. The
    /// host applies this to its own authoritative storage (splice the item
    /// out of `from_list` at `from_index` and into `list` at `index`).
    ///
    /// A drag with no accepted reorder commits onto itself: `from_list` /
    /// `from_index` equal `list` / `index`, which hosts should treat as "no
    /// real change".
    Committed {
        /// The dragged item.
        item: I,
        /// List the drag started from.
        from_list: L,
        /// Slot the drag started from.
        from_index: usize,
        /// List the item ended in.
        list: L,
        /// Slot the item ended in.
        index: usize,
    },
}

/// Result of one controller update: the fresh state pair plus an optional
/// outbound event.
///
/// State and cache are value snapshots; the host threads them into the next
/// update call. Nothing is mutated in place across calls.
#[derive(Clone, Debug)]
pub struct Update<I, L> {
    /// The drag state after the update.
    pub state: DragState<I, L>,
    /// The position cache after the update.
    pub cache: PositionCache<I, L>,
    /// The event this update produced, if any.
    pub event: Option<DragEvent<I, L>>,
}

impl<I, L> Update<I, L> {
    /// An identity transition: state and cache pass through untouched and no
    /// event fires.
    pub(crate) fn unchanged(state: DragState<I, L>, cache: PositionCache<I, L>) -> Self {
        Self {
            state,
            cache,
            event: None,
        }
    }
}
