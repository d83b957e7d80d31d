// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer geometry: points, rectangles, and the inclusive hit test.
//!
//! ## Overview
//!
//! Pointer coordinates arrive from the host as integers, and frames assigned by
//! the layout pass are integer rectangles. Hit testing is inclusive on every
//! edge, so a point lying on the shared edge of two adjacent siblings is inside
//! both; the container's z-order then decides which one receives the event.
//!
//! With the `kurbo` feature enabled, [`IntRect`] and [`IntPoint`] convert to and
//! from Kurbo types so that float-based layout solvers can feed the router.

/// A point in integer pointer coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntPoint {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl IntPoint {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this point is exactly the origin.
    pub const fn is_origin(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

/// Axis-aligned integer rectangle described by its minimum and maximum corners.
///
/// Both corners are part of the rectangle. Callers are expected to keep
/// `min ≤ max` on each axis; [`IntRect::new`] checks this in debug builds.
///
/// Arithmetic saturates at the `i32` limits, so a frame pushed past them is
/// clamped to the edge of the coordinate space in debug and release builds
/// alike.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    /// Minimum x (left).
    pub min_x: i32,
    /// Minimum y (top).
    pub min_y: i32,
    /// Maximum x (right).
    pub max_x: i32,
    /// Maximum y (bottom).
    pub max_y: i32,
}

impl IntRect {
    /// The empty rectangle anchored at the origin.
    pub const ZERO: Self = Self {
        min_x: 0,
        min_y: 0,
        max_x: 0,
        max_y: 0,
    };

    /// Create a rectangle from its min/max corners.
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        debug_assert!(
            min_x <= max_x && min_y <= max_y,
            "IntRect corners must satisfy min <= max"
        );
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(x, y, x.saturating_add(w), y.saturating_add(h))
    }

    /// The minimum corner.
    pub const fn min(&self) -> IntPoint {
        IntPoint::new(self.min_x, self.min_y)
    }

    /// The maximum corner.
    pub const fn max(&self) -> IntPoint {
        IntPoint::new(self.max_x, self.max_y)
    }

    /// Width (`max_x - min_x`).
    pub const fn width(&self) -> i32 {
        self.max_x.saturating_sub(self.min_x)
    }

    /// Height (`max_y - min_y`).
    pub const fn height(&self) -> i32 {
        self.max_y.saturating_sub(self.min_y)
    }

    /// Translate both corners by `offset`.
    #[must_use]
    pub const fn translate(&self, offset: IntPoint) -> Self {
        Self {
            min_x: self.min_x.saturating_add(offset.x),
            min_y: self.min_y.saturating_add(offset.y),
            max_x: self.max_x.saturating_add(offset.x),
            max_y: self.max_y.saturating_add(offset.y),
        }
    }

    /// Whether the rectangle contains `pt`, edges and corners included.
    pub const fn contains(&self, pt: IntPoint) -> bool {
        is_inside(self, pt.x, pt.y)
    }
}

/// Inclusive hit test: true iff `min ≤ (x, y) ≤ max` on both axes.
#[inline]
pub const fn is_inside(rect: &IntRect, x: i32, y: i32) -> bool {
    rect.min_x <= x && x <= rect.max_x && rect.min_y <= y && y <= rect.max_y
}

#[cfg(feature = "kurbo")]
mod kurbo_interop {
    use super::{IntPoint, IntRect};

    impl From<IntPoint> for kurbo::Point {
        fn from(pt: IntPoint) -> Self {
            Self::new(f64::from(pt.x), f64::from(pt.y))
        }
    }

    impl From<IntRect> for kurbo::Rect {
        fn from(r: IntRect) -> Self {
            Self::new(
                f64::from(r.min_x),
                f64::from(r.min_y),
                f64::from(r.max_x),
                f64::from(r.max_y),
            )
        }
    }

    impl IntPoint {
        /// Round a Kurbo point to the nearest integer coordinates.
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Float-to-int casts saturate; pointer coordinates fit in i32."
        )]
        pub fn from_kurbo(pt: kurbo::Point) -> Self {
            let pt = pt.round();
            Self::new(pt.x as i32, pt.y as i32)
        }
    }

    impl IntRect {
        /// Convert a Kurbo rectangle from a float layout pass into integer
        /// coordinates.
        ///
        /// The rectangle is normalized first (so inverted input still satisfies
        /// `min ≤ max`) and each edge is rounded to the nearest integer.
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Float-to-int casts saturate; layout frames fit in i32."
        )]
        pub fn from_kurbo(rect: kurbo::Rect) -> Self {
            let r = rect.abs().round();
            Self::new(r.x0 as i32, r.y0 as i32, r.x1 as i32, r.y1 as i32)
        }
    }
}
