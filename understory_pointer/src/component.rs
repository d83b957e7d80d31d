// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component capabilities.
//!
//! ## Overview
//!
//! A component is opaque to the router. It opts into input by answering the
//! capability queries on [`Component`]; each query returns the component viewed
//! through one capability trait, or `None` when it does not have that
//! capability. Any subset is allowed, including none or all three.
//!
//! ```
//! use understory_pointer::component::{Button, Component};
//!
//! struct Toggle {
//!     on: bool,
//! }
//!
//! impl Button for Toggle {
//!     fn press(&mut self) {}
//!     fn release(&mut self, inside: bool) {
//!         if inside {
//!             self.on = !self.on;
//!         }
//!     }
//! }
//!
//! impl Component for Toggle {
//!     fn as_button(&mut self) -> Option<&mut dyn Button> {
//!         Some(self)
//!     }
//! }
//! ```

use crate::container::Container;
use crate::types::{Capabilities, TouchId};

/// Receives identified touch presses and releases.
pub trait TouchHandler {
    /// A touch began inside this component's frame.
    ///
    /// Return `true` to consume the press and capture `touch`; the matching
    /// release is then delivered here wherever it happens.
    fn press(&mut self, touch: TouchId, x: i32, y: i32) -> bool;

    /// A touch captured by this component ended at `(x, y)`.
    fn release(&mut self, touch: TouchId, x: i32, y: i32);
}

/// Receives mouse movement and left-button presses and releases.
pub trait MouseHandler {
    /// The cursor moved to `(x, y)` inside this component's frame.
    ///
    /// Return `true` to stop other components underneath from seeing the move.
    fn move_to(&mut self, x: i32, y: i32) -> bool;

    /// The left button went down inside this component's frame.
    ///
    /// Return `true` to consume the press and own the mouse gesture.
    fn press_left(&mut self, x: i32, y: i32) -> bool;

    /// The left button went up while this component owns the mouse gesture.
    fn release_left(&mut self, x: i32, y: i32);
}

/// A pressable control driven by the router's press/release bookkeeping.
pub trait Button {
    /// The button became pressed.
    fn press(&mut self);

    /// The button was released; `inside` tells whether the release counts as
    /// happening inside its frame.
    fn release(&mut self, inside: bool);
}

/// An element of the component tree.
///
/// All methods have defaults answering "no such capability".
pub trait Component {
    /// View this component as a [`TouchHandler`].
    fn as_touch_handler(&mut self) -> Option<&mut dyn TouchHandler> {
        None
    }

    /// View this component as a [`MouseHandler`].
    fn as_mouse_handler(&mut self) -> Option<&mut dyn MouseHandler> {
        None
    }

    /// View this component as a [`Button`].
    fn as_button(&mut self) -> Option<&mut dyn Button> {
        None
    }

    /// View this component as a nested [`Container`], so layout passes can
    /// reach its frame and children.
    fn as_container(&mut self) -> Option<&mut Container> {
        None
    }

    /// The capability set derived from the queries above.
    fn capabilities(&mut self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::TOUCH, self.as_touch_handler().is_some());
        caps.set(Capabilities::MOUSE, self.as_mouse_handler().is_some());
        caps.set(Capabilities::BUTTON, self.as_button().is_some());
        caps
    }
}
