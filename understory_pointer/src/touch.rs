// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch dispatch: press capture, release routing, and stale-capture cleanup.
//!
//! ## Press
//!
//! Children are visited topmost first, each hit-tested against its effective
//! frame.
//!
//! - A [`TouchHandler`](crate::component::TouchHandler) that accepts the press
//!   captures the touch and ends the scan.
//! - A [`Button`](crate::component::Button) under the point consumes the press,
//!   becoming pressed (and capturing the touch) unless it already was. The scan
//!   continues so that lower buttons still holding the same identifier from an
//!   earlier gesture drop that stale capture. No callback fires for the drop.
//!
//! ## Release
//!
//! A release is delivered to every child capturing its identifier. Buttons are
//! told whether the release counts as inside their frame: always for a forced
//! release, otherwise by the inclusive hit test.

use log::{debug, trace};

use crate::container::Container;
use crate::geometry::{IntPoint, is_inside};
use crate::types::{ReleaseMode, TouchId};

impl Container {
    /// Offer a touch press to the children. Returns whether it was consumed.
    pub fn handle_pressed(&mut self, touch: TouchId, x: i32, y: i32) -> bool {
        let origin = self.origin();
        let mut consumed = false;
        for (id, child) in self.slots_top_down() {
            let frame = child.bounds.translate(origin);

            if !consumed
                && is_inside(&frame, x, y)
                && let Some(handler) = child.component.as_touch_handler()
                && handler.press(touch, x, y)
            {
                trace!("touch {} captured by child {}", touch.0, id.0);
                child.capture.touch = Some(touch);
                consumed = true;
                break;
            }

            if let Some(button) = child.component.as_button() {
                if !consumed && is_inside(&frame, x, y) {
                    if !child.capture.button_pressed {
                        trace!("touch {} pressed button {}", touch.0, id.0);
                        child.capture.button_pressed = true;
                        child.capture.touch = Some(touch);
                        button.press();
                    }
                    consumed = true;
                } else if child.capture.touch == Some(touch) {
                    debug!("dropping stale capture of touch {} on child {}", touch.0, id.0);
                    child.capture.touch = None;
                }
            }
        }
        consumed
    }

    /// Deliver a touch release, treating `(0, 0)` according to
    /// [`Container::origin_release`].
    ///
    /// A nested container on the capture path applies its own policy.
    pub fn handle_released(&mut self, touch: TouchId, x: i32, y: i32) {
        self.route_touch_release(touch, x, y, ReleaseMode::Policy);
    }

    /// Deliver a touch release to whichever children capture `touch`.
    ///
    /// When `forced` is set, captured buttons report the release as inside
    /// their frame regardless of `(x, y)`. Origin policies are not consulted,
    /// and nested containers receive the same `forced` value.
    pub fn release_touch(&mut self, touch: TouchId, x: i32, y: i32, forced: bool) {
        self.route_touch_release(touch, x, y, ReleaseMode::Explicit(forced));
    }

    fn route_touch_release(&mut self, touch: TouchId, x: i32, y: i32, mode: ReleaseMode) {
        let forced = mode.is_forced(self.origin_release(), IntPoint::new(x, y));
        let origin = self.origin();
        for (id, child) in self.slots_top_down() {
            if child.capture.touch == Some(touch) {
                if let Some(nested) = child.component.as_container() {
                    trace!("touch {} released into nested child {}", touch.0, id.0);
                    nested.route_touch_release(touch, x, y, mode);
                    child.capture.touch = None;
                } else if let Some(handler) = child.component.as_touch_handler() {
                    trace!("touch {} released on child {}", touch.0, id.0);
                    handler.release(touch, x, y);
                    child.capture.touch = None;
                }
            }

            if child.capture.touch == Some(touch)
                && child.capture.button_pressed
                && let Some(button) = child.component.as_button()
            {
                child.capture.button_pressed = false;
                child.capture.touch = None;
                let inside = forced || is_inside(&child.bounds.translate(origin), x, y);
                trace!("touch {} released button {} (inside: {inside})", touch.0, id.0);
                button.release(inside);
            }
        }
    }
}
