// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pointer --heading-base-level=0

//! Understory Pointer: deterministic, `no_std` pointer routing for retained component trees.
//!
//! ## Overview
//!
//! This crate decides which component of a tree of rectangles receives each
//! touch or mouse event, and keeps track of who captured which gesture so that
//! a press started on one component is released on that same component.
//! It does not lay components out and it does not draw them.
//!
//! ## Capabilities
//!
//! Components are opaque. Each one answers the capability queries on
//! [`Component`](crate::component::Component): it may be a
//! [`TouchHandler`](crate::component::TouchHandler), a
//! [`MouseHandler`](crate::component::MouseHandler), a
//! [`Button`](crate::component::Button), any combination, or none.
//!
//! ## Ordering
//!
//! A [`Container`](crate::container::Container) paints its children in
//! insertion order, so the last child is on top and is offered events first.
//! Hit tests are inclusive on all edges: a point on the border of two adjacent
//! siblings hits both, and the one on top wins.
//!
//! ## Capture
//!
//! - A touch handler that accepts a press captures the touch identifier. A
//!   button under the press becomes pressed and captures it too.
//! - A release with that identifier is delivered to the capturing child no
//!   matter where it happens. Buttons learn whether the release was inside
//!   their frame.
//! - Hosts reuse touch identifiers. A new press with an identifier still
//!   captured by another button clears that stale capture silently.
//! - The mouse works the same way without an identifier.
//!
//! ## Forced release
//!
//! Under the default [`OriginRelease::Forced`](crate::types::OriginRelease::Forced)
//! policy, a release reported at `(0, 0)` is forced: a captured button is told
//! it was released inside its frame. Use
//! [`Container::release_touch`](crate::container::Container::release_touch) to
//! force a release explicitly, or switch the policy to
//! [`OriginRelease::HitTest`](crate::types::OriginRelease::HitTest) to treat the
//! origin like any other coordinate.
//!
//! ## Example
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//!
//! use understory_pointer::component::{Button, Component};
//! use understory_pointer::container::Container;
//! use understory_pointer::geometry::IntRect;
//! use understory_pointer::types::TouchId;
//!
//! struct Tap(Rc<Cell<u32>>);
//!
//! impl Button for Tap {
//!     fn press(&mut self) {}
//!     fn release(&mut self, inside: bool) {
//!         if inside {
//!             self.0.set(self.0.get() + 1);
//!         }
//!     }
//! }
//!
//! impl Component for Tap {
//!     fn as_button(&mut self) -> Option<&mut dyn Button> {
//!         Some(self)
//!     }
//! }
//!
//! let (taps_a, taps_b) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
//! let mut root = Container::with_frame(IntRect::new(0, 0, 200, 100));
//! let a = root.add_child(Tap(taps_a.clone()));
//! let b = root.add_child(Tap(taps_b.clone()));
//!
//! // Normally assigned by a layout pass.
//! root.set_child_bounds(a, IntRect::new(0, 0, 50, 50));
//! root.set_child_bounds(b, IntRect::new(50, 0, 100, 50));
//! root.clear_dirty();
//!
//! // The shared edge at x = 50 belongs to B, which is on top.
//! assert!(root.handle_pressed(TouchId(1), 50, 25));
//! root.handle_released(TouchId(1), 60, 25);
//! assert_eq!((taps_a.get(), taps_b.get()), (0, 1));
//!
//! // Releasing off the button does not count as a tap.
//! assert!(root.handle_pressed(TouchId(1), 25, 25));
//! root.handle_released(TouchId(1), 999, 999);
//! assert_eq!(taps_a.get(), 0);
//! ```
//!
//! ## Logging
//!
//! Captures and releases are reported through the [`log`] facade at `trace`
//! level; stale-capture cleanup and removal of capturing children at `debug`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod component;
pub mod container;
pub mod geometry;
pub mod mouse;
pub mod touch;
pub mod types;

#[cfg(test)]
mod testing;
