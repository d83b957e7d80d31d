// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse dispatch: hover notifications and left-button capture.
//!
//! There is a single mouse, so capture is a per-child flag rather than an
//! identifier. Hover never touches capture state.

use log::trace;

use crate::container::Container;
use crate::geometry::{IntPoint, is_inside};
use crate::types::ReleaseMode;

impl Container {
    /// Offer a cursor move to mouse handlers, topmost first.
    ///
    /// The first handler under the cursor that reports the move as handled
    /// ends the scan. Returns whether any did.
    pub fn handle_mouse_move(&mut self, x: i32, y: i32) -> bool {
        let origin = self.origin();
        for (_, child) in self.slots_top_down() {
            let frame = child.bounds.translate(origin);
            if is_inside(&frame, x, y)
                && let Some(handler) = child.component.as_mouse_handler()
                && handler.move_to(x, y)
            {
                return true;
            }
        }
        false
    }

    /// Offer a left-button press. Returns whether it was consumed.
    ///
    /// The first mouse handler under the cursor that accepts the press, or the
    /// first unpressed button under the cursor, becomes the mouse owner. A
    /// button that is already pressed lets the press through.
    pub fn handle_mouse_pressed(&mut self, x: i32, y: i32) -> bool {
        let origin = self.origin();
        for (id, child) in self.slots_top_down() {
            let frame = child.bounds.translate(origin);
            if !is_inside(&frame, x, y) {
                continue;
            }

            if let Some(handler) = child.component.as_mouse_handler()
                && handler.press_left(x, y)
            {
                trace!("mouse captured by child {}", id.0);
                child.capture.mouse_owner = true;
                return true;
            }

            if !child.capture.button_pressed
                && let Some(button) = child.component.as_button()
            {
                trace!("mouse pressed button {}", id.0);
                child.capture.button_pressed = true;
                child.capture.mouse_owner = true;
                button.press();
                return true;
            }
        }
        false
    }

    /// Deliver a left-button release, treating `(0, 0)` according to
    /// [`Container::origin_release`].
    ///
    /// A nested container owning the mouse applies its own policy.
    pub fn handle_mouse_released(&mut self, x: i32, y: i32) {
        self.route_mouse_release(x, y, ReleaseMode::Policy);
    }

    /// Deliver a left-button release to the children owning the mouse.
    ///
    /// When `forced` is set, a captured button reports the release as inside
    /// its frame regardless of `(x, y)`. Origin policies are not consulted,
    /// and nested containers receive the same `forced` value.
    pub fn release_mouse(&mut self, x: i32, y: i32, forced: bool) {
        self.route_mouse_release(x, y, ReleaseMode::Explicit(forced));
    }

    fn route_mouse_release(&mut self, x: i32, y: i32, mode: ReleaseMode) {
        let forced = mode.is_forced(self.origin_release(), IntPoint::new(x, y));
        let origin = self.origin();
        for (id, child) in self.slots_top_down() {
            if child.capture.mouse_owner {
                if let Some(nested) = child.component.as_container() {
                    child.capture.mouse_owner = false;
                    trace!("mouse released into nested child {}", id.0);
                    nested.route_mouse_release(x, y, mode);
                } else if let Some(handler) = child.component.as_mouse_handler() {
                    child.capture.mouse_owner = false;
                    trace!("mouse released on child {}", id.0);
                    handler.release_left(x, y);
                }
            }

            if child.capture.button_pressed
                && child.capture.mouse_owner
                && let Some(button) = child.component.as_button()
            {
                child.capture.button_pressed = false;
                child.capture.mouse_owner = false;
                let inside = forced || is_inside(&child.bounds.translate(origin), x, y);
                trace!("mouse released button {} (inside: {inside})", id.0);
                button.release(inside);
            }
        }
    }
}
