// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The orchestrating façade: pointer and hover events in, state pairs and
//! order events out.

use core::hash::Hash;
use core::marker::PhantomData;

use kurbo::{Point, Rect};
use trellis_geometry::side_intersect;
use trellis_order::{IndexMap, Position, PositionCache, Reconciled, reconcile};

use crate::state::{DragState, DraggingItem};
use crate::types::{BoundsSource, DragEvent, Update};

/// Drag controller: drives the state machine, applies the directional
/// intersection test to hovers, and splices accepted reorders into the
/// position cache.
///
/// ## Usage
///
/// - Construct with [`DragController::new`] around a [`BoundsSource`]; the
///   controller performs no I/O of its own, so that injected lookup is its
///   only window onto the rendered tree.
/// - Feed pointer and hover notifications through the `on_*` methods. Each
///   takes the current `(DragState, PositionCache)` snapshot and returns an
///   [`Update`] with the fresh pair and an optional [`DragEvent`].
/// - Subscribe to pointer move/up sources only while
///   [`DragController::is_dragging`] holds, and unsubscribe on the
///   transition back to idle.
/// - Render from [`DragController::renderable_order`], and place the
///   floating drag clone with [`DragController::clone_placement`].
///
/// Events arriving in a state with no matching transition (hovers while
/// idle, a second pointer-down mid-drag) are identity transitions, never
/// errors.
pub struct DragController<I, L, B: BoundsSource<I>> {
    bounds: B,
    _phantom: PhantomData<fn() -> (I, L)>,
}

impl<I, L, B: BoundsSource<I>> core::fmt::Debug for DragController<I, L, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragController").finish_non_exhaustive()
    }
}

impl<I, L, B> DragController<I, L, B>
where
    I: Clone + Eq + Hash,
    L: Clone + Eq + Hash,
    B: BoundsSource<I>,
{
    /// Create a controller around the injected bounds lookup.
    pub fn new(bounds: B) -> Self {
        Self {
            bounds,
            _phantom: PhantomData,
        }
    }

    /// Pointer-down on the item at `(list, index)`.
    ///
    /// Starts a drag if none is active and the item's bounds are known.
    /// A failed bounds lookup (the element was unmounted concurrently) and
    /// a pointer-down mid-drag are both no-ops.
    pub fn on_pointer_down(
        &self,
        state: DragState<I, L>,
        cache: PositionCache<I, L>,
        item: I,
        list: L,
        index: usize,
        pointer: Point,
    ) -> Update<I, L> {
        if state.is_dragging() {
            return Update::unchanged(state, cache);
        }
        match self.bounds.bounds_of(&item) {
            Some(bounds) => {
                log::trace!("drag started from index {index}");
                let snapshot = cache.clone();
                let d = DraggingItem::begin(item, list, index, bounds, pointer, snapshot);
                Update {
                    state: DragState::Dragging(d),
                    cache,
                    event: None,
                }
            }
            None => Update::unchanged(state, cache),
        }
    }

    /// Pointer moved to `pos`. Only shifts the tracked samples; reorders
    /// happen on hover notifications.
    pub fn on_pointer_move(
        &self,
        state: DragState<I, L>,
        cache: PositionCache<I, L>,
        pos: Point,
    ) -> Update<I, L> {
        match state {
            DragState::Dragging(d) => Update {
                state: DragState::Dragging(d.pointer_moved(pos)),
                cache,
                event: None,
            },
            DragState::Idle => Update::unchanged(DragState::Idle, cache),
        }
    }

    /// The pointer is over the sibling `item` currently rendered at
    /// `(list, index)`.
    ///
    /// Accepts a reorder when the drag has actually moved, the sibling is
    /// mounted, and the pointer has crossed the sibling's midpoint in its
    /// direction of travel. Hovering the dragged item's own representation
    /// is an identity transition.
    pub fn on_hover_item(
        &self,
        state: DragState<I, L>,
        cache: PositionCache<I, L>,
        list: L,
        item: I,
        index: usize,
    ) -> Update<I, L> {
        match state {
            DragState::Dragging(d) => {
                if !d.has_moved || item == d.id {
                    return Update::unchanged(DragState::Dragging(d), cache);
                }
                match self.bounds.bounds_of(&item) {
                    Some(target) if side_intersect(d.previous, d.current, target) => {
                        self.accept(d, cache, list, index)
                    }
                    _ => Update::unchanged(DragState::Dragging(d), cache),
                }
            }
            DragState::Idle => Update::unchanged(DragState::Idle, cache),
        }
    }

    /// The pointer is over the empty list `list`.
    ///
    /// Accepts a move to its first slot once the drag has actually moved;
    /// an empty target has no sibling midpoint to cross.
    pub fn on_hover_empty_list(
        &self,
        state: DragState<I, L>,
        cache: PositionCache<I, L>,
        list: L,
    ) -> Update<I, L> {
        match state {
            DragState::Dragging(d) => {
                if !d.has_moved {
                    return Update::unchanged(DragState::Dragging(d), cache);
                }
                self.accept(d, cache, list, 0)
            }
            DragState::Idle => Update::unchanged(DragState::Idle, cache),
        }
    }

    /// Pointer released: the drag ends and the terminal
    /// [`DragEvent::Committed`] fires, carrying both the origin and the
    /// final slot.
    pub fn on_pointer_up(
        &self,
        state: DragState<I, L>,
        cache: PositionCache<I, L>,
    ) -> Update<I, L> {
        match state {
            DragState::Dragging(d) => {
                let landed = match cache.get(&d.id) {
                    Some(pos) => pos.clone(),
                    // No reconciliation ever saw this item: it never moved.
                    None => Position {
                        list: d.from_list.clone(),
                        index: d.from_index,
                    },
                };
                log::trace!("drag committed at index {}", landed.index);
                let event = DragEvent::Committed {
                    item: d.id,
                    from_list: d.from_list,
                    from_index: d.from_index,
                    list: landed.list,
                    index: landed.index,
                };
                Update {
                    state: DragState::Idle,
                    cache,
                    event: Some(event),
                }
            }
            DragState::Idle => Update::unchanged(DragState::Idle, cache),
        }
    }

    /// Abandon the drag: back to idle, the cache restored to its drag-start
    /// snapshot, and no event. The cache passed in is discarded.
    pub fn on_cancel(
        &self,
        state: DragState<I, L>,
        cache: PositionCache<I, L>,
    ) -> Update<I, L> {
        match state {
            DragState::Dragging(d) => {
                log::trace!("drag cancelled, cache restored to drag-start snapshot");
                Update {
                    state: DragState::Idle,
                    cache: d.cache_at_start,
                    event: None,
                }
            }
            DragState::Idle => Update::unchanged(DragState::Idle, cache),
        }
    }

    /// Where to render the floating drag clone: the captured origin bounds
    /// translated by the live pointer. `None` while idle.
    pub fn clone_placement(&self, state: &DragState<I, L>) -> Option<Rect> {
        state.dragging().map(DraggingItem::placement)
    }

    /// True while a drag is active. Hosts hold their pointer move/up
    /// subscriptions open exactly while this is true.
    pub fn is_dragging(&self, state: &DragState<I, L>) -> bool {
        state.is_dragging()
    }

    /// The view-ready order for freshly declared lists: delegates to
    /// [`reconcile`].
    pub fn renderable_order<T, F>(
        &self,
        lists: IndexMap<L, Vec<T>>,
        cache: &PositionCache<I, L>,
        identify: F,
    ) -> Reconciled<T, I, L>
    where
        F: Fn(&T) -> I,
    {
        reconcile(lists, cache, identify)
    }

    // Splice the dragged item to `(list, index)` and report a `Moved` when
    // the landed slot differs from the cached one. Repeat hovers inside an
    // already-accepted half stay silent.
    fn accept(
        &self,
        d: DraggingItem<I, L>,
        cache: PositionCache<I, L>,
        list: L,
        index: usize,
    ) -> Update<I, L> {
        let before = cache.get(&d.id).cloned();
        let (cache, landed) = cache.move_to(&d.id, &list, index);
        let event = if before.as_ref() != Some(&landed) {
            log::trace!("reorder accepted at index {}", landed.index);
            Some(DragEvent::Moved {
                item: d.id.clone(),
                list: landed.list,
                index: landed.index,
            })
        } else {
            None
        };
        Update {
            state: DragState::Dragging(d),
            cache,
            event,
        }
    }
}
