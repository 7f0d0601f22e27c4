// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Geometry: pointer travel classification and directional side intersection.
//!
//! ## Overview
//!
//! This crate holds the pure geometric predicates behind drag-and-reorder
//! interactions. Nothing here keeps state; every function maps two pointer
//! samples and a target rectangle to a value.
//!
//! - [`travel`] classifies the dominant direction of motion between two
//!   pointer samples.
//! - [`half_of`] splits a rectangle at its center line and returns the half
//!   nearest a given [`Side`].
//! - [`side_intersect`] combines the two: it answers whether the newer
//!   pointer sample has crossed past the midpoint of the target, *in the
//!   direction of travel*. Reorder engines use this as the trigger for
//!   committing a move, which keeps hovers near a boundary from flickering.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use trellis_geometry::{Dir, side_intersect, travel};
//!
//! let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
//!
//! // Moving rightward, still in the left half: no intersection yet.
//! assert_eq!(travel(Point::new(-5.0, 5.0), Point::new(2.0, 5.0)), Some(Dir::Right));
//! assert!(!side_intersect(Point::new(-5.0, 5.0), Point::new(2.0, 5.0), rect));
//!
//! // Past the horizontal center: the move commits.
//! assert!(side_intersect(Point::new(-5.0, 5.0), Point::new(6.0, 5.0), rect));
//! ```
//!
//! ## Float semantics
//!
//! Coordinates are assumed finite (no NaNs). Degenerate rectangles with zero
//! width or height are legal and represent collapsed elements; their halves
//! are equally degenerate and containment stays inclusive.
//!
//! This crate is `no_std`.

#![no_std]

mod split;
mod travel;

pub use split::{Side, half_of, side_intersect};
pub use travel::{Dir, travel};
