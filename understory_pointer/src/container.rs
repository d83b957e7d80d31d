// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container implementation: child slots, frames, and capture bookkeeping.
//!
//! ## Overview
//!
//! A [`Container`] owns an ordered list of child slots. Insertion order is
//! paint order, back-to-front, so the last child added is drawn on top and is
//! offered pointer events first.
//!
//! Each slot records the child's bounds in the container's local space, the
//! capabilities the child exposed when it was added, and its capture state.
//! The dispatch algorithms live in [`touch`](crate::touch) and
//! [`mouse`](crate::mouse).
//!
//! ## Layout
//!
//! Containers do not lay anything out. An external layout pass assigns the
//! container's frame with [`Container::set_frame`] and each child's bounds with
//! [`Container::set_child_bounds`], then calls [`Container::clear_dirty`].
//! Dispatch never consults the dirty flag.
//!
//! ## Removal
//!
//! [`Container::remove_child`] leaves a tombstone in place of the slot. The
//! remaining children keep their [`ChildId`]s and their relative z-order, and a
//! removed id never starts referring to a later child.

use alloc::boxed::Box;
use alloc::vec::Vec;

use log::debug;

use crate::component::{Component, MouseHandler, TouchHandler};
use crate::geometry::{IntPoint, IntRect};
use crate::types::{Capabilities, CaptureState, ChildId, OriginRelease, PointerEvent, TouchId};

/// Per-child bookkeeping owned by its container.
pub(crate) struct Child {
    pub(crate) bounds: IntRect,
    pub(crate) component: Box<dyn Component>,
    pub(crate) caps: Capabilities,
    pub(crate) capture: CaptureState,
}

impl core::fmt::Debug for Child {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Child")
            .field("bounds", &self.bounds)
            .field("caps", &self.caps)
            .field("capture", &self.capture)
            .finish_non_exhaustive()
    }
}

/// A node of the component tree that routes pointer events to its children.
///
/// ## Usage
///
/// - Add children with [`Container::add_child`]; later children are on top.
/// - Let the layout pass assign [`Container::set_frame`] and
///   [`Container::set_child_bounds`].
/// - Feed host events through [`Container::dispatch`] or the individual
///   `handle_*` methods.
///
/// A `Container` is itself a [`Component`] with touch and mouse capabilities,
/// so containers nest.
pub struct Container {
    frame: IntRect,
    slots: Vec<Option<Child>>, // tombstoned on removal
    dirty: bool,
    origin_release: OriginRelease,
}

impl core::fmt::Debug for Container {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Container")
            .field("frame", &self.frame)
            .field("dirty", &self.dirty)
            .field("origin_release", &self.origin_release)
            .field("slots_total", &self.slots.len())
            .field("children_alive", &self.len())
            .finish_non_exhaustive()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    /// Create an empty container with a zero frame.
    pub fn new() -> Self {
        Self {
            frame: IntRect::ZERO,
            slots: Vec::new(),
            dirty: false,
            origin_release: OriginRelease::default(),
        }
    }

    /// Create an empty container with the given frame.
    pub fn with_frame(frame: IntRect) -> Self {
        let mut c = Self::new();
        c.set_frame(frame);
        c
    }

    /// This container's frame in its parent's coordinate space.
    pub fn frame(&self) -> IntRect {
        self.frame
    }

    /// Set the frame and mark the container for re-layout.
    pub fn set_frame(&mut self, frame: IntRect) {
        self.frame = frame;
        self.dirty = true;
    }

    /// Whether bounds are stale and the layout pass should run again.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag once layout has been applied.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// How releases reported at `(0, 0)` are treated by this container.
    pub fn origin_release(&self) -> OriginRelease {
        self.origin_release
    }

    /// Set the policy for releases reported at `(0, 0)`.
    ///
    /// Nested containers keep their own policy.
    pub fn set_origin_release(&mut self, policy: OriginRelease) {
        self.origin_release = policy;
    }

    /// Append a child on top of the existing ones.
    ///
    /// The child starts with zero bounds and no capture.
    pub fn add_child<C: Component + 'static>(&mut self, child: C) -> ChildId {
        self.add_boxed_child(Box::new(child))
    }

    /// Append an already boxed child on top of the existing ones.
    pub fn add_boxed_child(&mut self, mut component: Box<dyn Component>) -> ChildId {
        let caps = component.capabilities();
        let id = ChildId::from_idx(self.slots.len());
        self.slots.push(Some(Child {
            bounds: IntRect::ZERO,
            component,
            caps,
            capture: CaptureState::default(),
        }));
        self.dirty = true;
        id
    }

    /// Remove a child, returning its component.
    ///
    /// Any capture the child held is dropped without notifying it. Returns
    /// `None` if `id` is unknown or already removed.
    pub fn remove_child(&mut self, id: ChildId) -> Option<Box<dyn Component>> {
        let child = self.slots.get_mut(id.idx())?.take()?;
        if !child.capture.is_idle() {
            debug!("removed child {} while capturing {:?}", id.0, child.capture);
        }
        self.dirty = true;
        Some(child.component)
    }

    /// Whether `id` refers to a live child of this container.
    pub fn is_alive(&self, id: ChildId) -> bool {
        self.slot(id).is_some()
    }

    /// Number of live children.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether the container has no live children.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Live children in paint order, back-to-front.
    pub fn child_ids(&self) -> impl DoubleEndedIterator<Item = ChildId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|_| ChildId::from_idx(i)))
    }

    /// The child's bounds in this container's local space.
    pub fn child_bounds(&self, id: ChildId) -> Option<IntRect> {
        self.slot(id).map(|c| c.bounds)
    }

    /// Assign the child's bounds, returning the previous ones.
    ///
    /// Marks the container dirty. Returns `None` (and does nothing) for a
    /// stale id.
    pub fn set_child_bounds(&mut self, id: ChildId, bounds: IntRect) -> Option<IntRect> {
        let child = self.slot_mut(id)?;
        let old = core::mem::replace(&mut child.bounds, bounds);
        self.dirty = true;
        Some(old)
    }

    /// The child's effective frame: its bounds translated by this container's
    /// current frame origin. This is the rectangle hit tests use.
    pub fn child_frame(&self, id: ChildId) -> Option<IntRect> {
        let origin = self.origin();
        self.slot(id).map(|c| c.bounds.translate(origin))
    }

    /// The child component.
    pub fn child(&self, id: ChildId) -> Option<&dyn Component> {
        self.slot(id).map(|c| c.component.as_ref())
    }

    /// The child component, mutably.
    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut dyn Component> {
        let child = self.slot_mut(id)?;
        Some(child.component.as_mut())
    }

    /// The child as a nested container, if it is one.
    pub fn child_container_mut(&mut self, id: ChildId) -> Option<&mut Self> {
        self.slot_mut(id)?.component.as_container()
    }

    /// Capabilities recorded when the child was added.
    pub fn capabilities(&self, id: ChildId) -> Option<Capabilities> {
        self.slot(id).map(|c| c.caps)
    }

    /// Snapshot of the child's capture state.
    pub fn capture(&self, id: ChildId) -> Option<CaptureState> {
        self.slot(id).map(|c| c.capture)
    }

    /// The child currently capturing `touch`, if any.
    pub fn touch_owner(&self, touch: TouchId) -> Option<ChildId> {
        self.child_ids()
            .find(|&id| self.slot(id).is_some_and(|c| c.capture.touch == Some(touch)))
    }

    /// Route one host event. Returns whether it was consumed.
    ///
    /// Releases are delivered unconditionally and always return `false`.
    pub fn dispatch(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::TouchPressed { id, pos } => self.handle_pressed(id, pos.x, pos.y),
            PointerEvent::TouchReleased { id, pos } => {
                self.handle_released(id, pos.x, pos.y);
                false
            }
            PointerEvent::MouseMoved { pos } => self.handle_mouse_move(pos.x, pos.y),
            PointerEvent::MousePressed { pos } => self.handle_mouse_pressed(pos.x, pos.y),
            PointerEvent::MouseReleased { pos } => {
                self.handle_mouse_released(pos.x, pos.y);
                false
            }
        }
    }

    /// Origin used to translate child bounds into hit-test space.
    pub(crate) fn origin(&self) -> IntPoint {
        self.frame.min()
    }

    /// Live slots with their ids, topmost first.
    pub(crate) fn slots_top_down(&mut self) -> impl Iterator<Item = (ChildId, &mut Child)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .rev()
            .filter_map(|(i, s)| s.as_mut().map(|c| (ChildId::from_idx(i), c)))
    }

    fn slot(&self, id: ChildId) -> Option<&Child> {
        self.slots.get(id.idx())?.as_ref()
    }

    fn slot_mut(&mut self, id: ChildId) -> Option<&mut Child> {
        self.slots.get_mut(id.idx())?.as_mut()
    }
}

impl Component for Container {
    fn as_touch_handler(&mut self) -> Option<&mut dyn TouchHandler> {
        Some(self)
    }

    fn as_mouse_handler(&mut self) -> Option<&mut dyn MouseHandler> {
        Some(self)
    }

    fn as_container(&mut self) -> Option<&mut Self> {
        Some(self)
    }
}

impl TouchHandler for Container {
    fn press(&mut self, touch: TouchId, x: i32, y: i32) -> bool {
        self.handle_pressed(touch, x, y)
    }

    fn release(&mut self, touch: TouchId, x: i32, y: i32) {
        self.handle_released(touch, x, y);
    }
}

impl MouseHandler for Container {
    fn move_to(&mut self, x: i32, y: i32) -> bool {
        self.handle_mouse_move(x, y)
    }

    fn press_left(&mut self, x: i32, y: i32) -> bool {
        self.handle_mouse_pressed(x, y)
    }

    fn release_left(&mut self, x: i32, y: i32) {
        self.handle_mouse_released(x, y);
    }
}
