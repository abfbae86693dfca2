// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned rectangles with a bottom-up y axis.

use crate::scalar::{Scalar, max_t, min_t};

/// Rectangle spanning `left..right` horizontally and `bottom..top` vertically.
///
/// Unlike `kurbo::Rect`, the y axis grows upwards: `bottom <= top` for a
/// well-formed rectangle. This is the convention of texture atlases and of
/// the box packer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    /// Minimum x.
    pub left: T,
    /// Minimum y.
    pub bottom: T,
    /// Maximum x.
    pub right: T,
    /// Maximum y.
    pub top: T,
}

impl<T> Rect<T> {
    /// Create a rectangle from its edges.
    pub const fn new(left: T, bottom: T, right: T, top: T) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }
}

impl<T: Scalar> Rect<T> {
    /// The rectangle `(0, 0)..(width, height)`.
    pub fn from_size(width: T, height: T) -> Self {
        Self::new(T::ZERO, T::ZERO, width, height)
    }

    /// The rectangle at `(x, y)` with the given size.
    pub fn from_origin_size(x: T, y: T, width: T, height: T) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// `right - left`.
    pub fn width(&self) -> T {
        self.right - self.left
    }

    /// `top - bottom`.
    pub fn height(&self) -> T {
        self.top - self.bottom
    }

    /// Grow to include the point `(x, y)`.
    pub fn insert_point(&mut self, x: T, y: T) {
        self.left = min_t(self.left, x);
        self.right = max_t(self.right, x);
        self.bottom = min_t(self.bottom, y);
        self.top = max_t(self.top, y);
    }

    /// Move by `(dx, dy)`.
    pub fn translate(&mut self, dx: T, dy: T) {
        self.left += dx;
        self.right += dx;
        self.bottom += dy;
        self.top += dy;
    }

    /// Move so that the lower-left corner lands on `(x, y)`.
    pub fn set_origin(&mut self, x: T, y: T) {
        self.translate(x - self.left, y - self.bottom);
    }

    /// Shrink to the part inside `bounds`.
    pub fn clamp_into(&mut self, bounds: &Self) {
        self.left = max_t(self.left, bounds.left);
        self.right = min_t(self.right, bounds.right);
        self.bottom = max_t(self.bottom, bounds.bottom);
        self.top = min_t(self.top, bounds.top);
    }

    /// Whether the interiors overlap; touching edges do not count.
    pub fn intersects(&self, other: &Self) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.top > other.bottom
            && self.bottom < other.top
    }

    /// This rectangle grown by `margin` on every side.
    pub fn expanded(&self, margin: T) -> Self {
        Self::new(
            self.left - margin,
            self.bottom - margin,
            self.right + margin,
            self.top + margin,
        )
    }

    /// Whether `(x, y)` lies inside or on the boundary.
    pub fn contains_point(&self, x: T, y: T) -> bool {
        x >= self.left && x <= self.right && y >= self.bottom && y <= self.top
    }

    /// Whether `other` lies completely inside.
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.bottom >= self.bottom
            && other.top <= self.top
    }
}

impl<T: Copy + Into<f64>> From<Rect<T>> for kurbo::Rect {
    fn from(r: Rect<T>) -> Self {
        Self::new(r.left.into(), r.bottom.into(), r.right.into(), r.top.into())
    }
}

impl From<kurbo::Rect> for Rect<f64> {
    /// Converts from kurbo's `(x0, y0, x1, y1)`; the rectangle is normalized
    /// so that `left <= right` and `bottom <= top`.
    fn from(r: kurbo::Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}
