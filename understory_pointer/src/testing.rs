// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording test doubles shared by the unit tests.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::component::{Button, Component, MouseHandler, TouchHandler};
use crate::container::Container;
use crate::geometry::IntRect;
use crate::types::{Capabilities, ChildId, OriginRelease, TouchId};

/// One callback observed on a [`Probe`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    TouchPress(&'static str, TouchId, i32, i32),
    TouchRelease(&'static str, TouchId, i32, i32),
    MouseMove(&'static str, i32, i32),
    MousePress(&'static str, i32, i32),
    MouseRelease(&'static str, i32, i32),
    ButtonPress(&'static str),
    ButtonRelease(&'static str, bool),
}

pub(crate) type Log = Rc<RefCell<Vec<Call>>>;

pub(crate) fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Drain everything recorded so far.
pub(crate) fn take(log: &Log) -> Vec<Call> {
    core::mem::take(&mut *log.borrow_mut())
}

/// A component exposing a chosen capability set and recording every callback.
pub(crate) struct Probe {
    name: &'static str,
    log: Log,
    caps: Capabilities,
    accepts: bool,
}

impl Probe {
    fn new(name: &'static str, log: &Log, caps: Capabilities) -> Self {
        Self {
            name,
            log: log.clone(),
            caps,
            accepts: true,
        }
    }

    pub(crate) fn button(name: &'static str, log: &Log) -> Self {
        Self::new(name, log, Capabilities::BUTTON)
    }

    pub(crate) fn touch(name: &'static str, log: &Log) -> Self {
        Self::new(name, log, Capabilities::TOUCH)
    }

    pub(crate) fn mouse(name: &'static str, log: &Log) -> Self {
        Self::new(name, log, Capabilities::MOUSE)
    }

    pub(crate) fn touch_button(name: &'static str, log: &Log) -> Self {
        Self::new(name, log, Capabilities::TOUCH | Capabilities::BUTTON)
    }

    pub(crate) fn mouse_button(name: &'static str, log: &Log) -> Self {
        Self::new(name, log, Capabilities::MOUSE | Capabilities::BUTTON)
    }

    /// Report presses and moves as not handled.
    pub(crate) fn declining(mut self) -> Self {
        self.accepts = false;
        self
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }
}

impl TouchHandler for Probe {
    fn press(&mut self, touch: TouchId, x: i32, y: i32) -> bool {
        self.record(Call::TouchPress(self.name, touch, x, y));
        self.accepts
    }

    fn release(&mut self, touch: TouchId, x: i32, y: i32) {
        self.record(Call::TouchRelease(self.name, touch, x, y));
    }
}

impl MouseHandler for Probe {
    fn move_to(&mut self, x: i32, y: i32) -> bool {
        self.record(Call::MouseMove(self.name, x, y));
        self.accepts
    }

    fn press_left(&mut self, x: i32, y: i32) -> bool {
        self.record(Call::MousePress(self.name, x, y));
        self.accepts
    }

    fn release_left(&mut self, x: i32, y: i32) {
        self.record(Call::MouseRelease(self.name, x, y));
    }
}

impl Button for Probe {
    fn press(&mut self) {
        self.record(Call::ButtonPress(self.name));
    }

    fn release(&mut self, inside: bool) {
        self.record(Call::ButtonRelease(self.name, inside));
    }
}

impl Component for Probe {
    fn as_touch_handler(&mut self) -> Option<&mut dyn TouchHandler> {
        if self.caps.contains(Capabilities::TOUCH) {
            Some(self)
        } else {
            None
        }
    }

    fn as_mouse_handler(&mut self) -> Option<&mut dyn MouseHandler> {
        if self.caps.contains(Capabilities::MOUSE) {
            Some(self)
        } else {
            None
        }
    }

    fn as_button(&mut self) -> Option<&mut dyn Button> {
        if self.caps.contains(Capabilities::BUTTON) {
            Some(self)
        } else {
            None
        }
    }
}

/// Root at (0,0)-(200,200) holding one nested container at (100,100)-(200,200)
/// whose button sits at (100,100)-(110,110) in root space.
pub(crate) fn nested_button(policy: OriginRelease) -> (Container, ChildId, Log) {
    let log = new_log();
    let mut root = Container::with_frame(IntRect::new(0, 0, 200, 200));
    let inner_id = root.add_child(Container::with_frame(IntRect::new(100, 100, 200, 200)));
    root.set_child_bounds(inner_id, IntRect::new(100, 100, 200, 200));
    if let Some(inner) = root.child_container_mut(inner_id) {
        inner.set_origin_release(policy);
        let btn = inner.add_child(Probe::button("nested", &log));
        inner.set_child_bounds(btn, IntRect::new(0, 0, 10, 10));
    }
    (root, inner_id, log)
}

/// Container at (0,0)-(200,100) with button A at (0,0)-(50,50) and button B,
/// added after A, at (50,0)-(100,50).
pub(crate) fn two_buttons() -> (Container, ChildId, ChildId, Log) {
    let log = new_log();
    let mut c = Container::with_frame(IntRect::new(0, 0, 200, 100));
    let a = c.add_child(Probe::button("a", &log));
    let b = c.add_child(Probe::button("b", &log));
    c.set_child_bounds(a, IntRect::new(0, 0, 50, 50));
    c.set_child_bounds(b, IntRect::new(50, 0, 100, 50));
    c.clear_dirty();
    (c, a, b, log)
}
