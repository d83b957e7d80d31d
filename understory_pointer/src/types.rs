// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for pointer routing: identifiers, capability flags, policies, and events.
//!
//! ## Overview
//!
//! These types describe the inputs to a [`Container`](crate::container::Container)
//! and the bookkeeping it exposes for diagnostics.

use crate::geometry::IntPoint;

/// Host-assigned identifier of a touch contact.
///
/// Hosts reuse identifiers across gestures; a press that arrives with an
/// identifier still captured elsewhere in a container triggers stale-capture
/// cleanup on that other child.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TouchId(pub u64);

/// Handle of a child slot inside one [`Container`](crate::container::Container).
///
/// Ids are slot indices in insertion order. Removed slots are tombstoned and
/// never reused, so a `ChildId` either refers to the child it was issued for or
/// to nothing at all.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ChildId(pub(crate) u32);

impl ChildId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "ChildId uses 32-bit indices by design."
    )]
    pub(crate) const fn from_idx(idx: usize) -> Self {
        Self(idx as u32)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Position of this child in paint order (back-to-front).
    pub const fn index(self) -> u32 {
        self.0
    }
}

bitflags::bitflags! {
    /// Input capabilities a component exposes.
    ///
    /// Recorded once when a child is added, from the answers of
    /// [`Component::as_touch_handler`](crate::component::Component::as_touch_handler),
    /// [`Component::as_mouse_handler`](crate::component::Component::as_mouse_handler), and
    /// [`Component::as_button`](crate::component::Component::as_button).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        /// Receives identified touch press/release.
        const TOUCH  = 0b0000_0001;
        /// Receives mouse move and left-button press/release.
        const MOUSE  = 0b0000_0010;
        /// Behaves as a pressable button.
        const BUTTON = 0b0000_0100;
    }
}

/// How a release reported exactly at the origin `(0, 0)` is treated.
///
/// Hosts built around the legacy convention signal a forced, cancelling
/// release by reporting it at `(0, 0)`. A forced release tells a captured
/// button that it was released inside its frame no matter where it is.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OriginRelease {
    /// A release at `(0, 0)` is forced (legacy behavior).
    #[default]
    Forced,
    /// The origin is an ordinary coordinate and is hit-tested like any other.
    HitTest,
}

impl OriginRelease {
    /// Whether a release at `pt` counts as forced under this policy.
    pub const fn is_forced(self, pt: IntPoint) -> bool {
        match self {
            Self::Forced => pt.is_origin(),
            Self::HitTest => false,
        }
    }
}

/// Where a release's forced flag comes from as it travels down nested
/// containers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum ReleaseMode {
    /// Each container applies its own [`OriginRelease`] to the position.
    Policy,
    /// Fixed by the caller for every container on the path.
    Explicit(bool),
}

impl ReleaseMode {
    /// Whether the release is forced for a container with `policy`.
    pub(crate) const fn is_forced(self, policy: OriginRelease, pt: IntPoint) -> bool {
        match self {
            Self::Policy => policy.is_forced(pt),
            Self::Explicit(forced) => forced,
        }
    }
}

/// Snapshot of the capture state held by one child slot.
///
/// Returned by [`Container::capture`](crate::container::Container::capture).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CaptureState {
    /// Touch identifier this child currently captures, if any.
    pub touch: Option<TouchId>,
    /// Whether the child's button capability is currently pressed.
    pub button_pressed: bool,
    /// Whether the child currently owns the mouse gesture.
    pub mouse_owner: bool,
}

impl CaptureState {
    /// True when the slot takes part in no gesture.
    pub const fn is_idle(&self) -> bool {
        self.touch.is_none() && !self.button_pressed && !self.mouse_owner
    }
}

/// A discrete pointer event supplied by the host.
///
/// Coordinates are in the receiving container's parent coordinate space.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointerEvent {
    /// A touch contact began.
    TouchPressed {
        /// Contact identifier.
        id: TouchId,
        /// Contact position.
        pos: IntPoint,
    },
    /// A touch contact ended.
    TouchReleased {
        /// Contact identifier.
        id: TouchId,
        /// Position where the contact ended.
        pos: IntPoint,
    },
    /// The mouse moved.
    MouseMoved {
        /// New cursor position.
        pos: IntPoint,
    },
    /// The left mouse button went down.
    MousePressed {
        /// Cursor position.
        pos: IntPoint,
    },
    /// The left mouse button went up.
    MouseReleased {
        /// Cursor position.
        pos: IntPoint,
    },
}
