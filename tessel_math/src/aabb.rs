// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes in 3D.

use crate::interval::Interval;
use crate::plane::Plane3;
#[cfg(not(feature = "std"))]
use crate::scalar::Real;
use crate::vector::Vector3;

bitflags::bitflags! {
    /// Half spaces of a plane that a volume reaches into.
    ///
    /// A volume that straddles the plane reports both flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Side: u8 {
        /// Some part lies where the plane equation is negative.
        const NEGATIVE = 0b0000_0001;
        /// Some part lies where the plane equation is positive.
        const POSITIVE = 0b0000_0010;
        /// The volume straddles the plane.
        const SPANNING = Self::NEGATIVE.bits() | Self::POSITIVE.bits();
    }
}

/// Axis-aligned box `[min, max]`.
///
/// The default box is empty: its lower bounds are `f32::MAX` and its upper
/// bounds `-f32::MAX`, so inserting a first point collapses it onto that point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb3 {
    /// Lower corner.
    pub min: Vector3<f32>,
    /// Upper corner.
    pub max: Vector3<f32>,
}

impl Default for Aabb3 {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Aabb3 {
    /// The box that contains nothing.
    pub const EMPTY: Self = Self {
        min: Vector3::new(f32::MAX, f32::MAX, f32::MAX),
        max: Vector3::new(-f32::MAX, -f32::MAX, -f32::MAX),
    };

    /// Create a box from its corners.
    pub const fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// The cube `[-half_extent, half_extent]³`.
    pub fn from_half_extent(half_extent: f32) -> Self {
        Self::new(Vector3::splat(-half_extent), Vector3::splat(half_extent))
    }

    /// The degenerate box containing just `point`.
    pub const fn from_point(point: Vector3<f32>) -> Self {
        Self::new(point, point)
    }

    /// The smallest box containing all `points`; empty for no points.
    pub fn from_points(points: impl IntoIterator<Item = Vector3<f32>>) -> Self {
        let mut b = Self::EMPTY;
        b.insert_points(points);
        b
    }

    /// Whether any range is inverted.
    pub fn is_empty(&self) -> bool {
        self.max.x < self.min.x || self.max.y < self.min.y || self.max.z < self.min.z
    }

    /// Grow to contain `point`.
    pub fn insert_point(&mut self, point: Vector3<f32>) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow to contain every point.
    pub fn insert_points(&mut self, points: impl IntoIterator<Item = Vector3<f32>>) {
        for p in points {
            self.insert_point(p);
        }
    }

    /// Grow to contain `other`.
    pub fn insert_aabb(&mut self, other: &Self) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Whether `point` lies inside or on the boundary.
    pub fn contains(&self, point: Vector3<f32>) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Offset from the closest point of the box to `point` (zero inside).
    pub fn arvo_vector(&self, point: Vector3<f32>) -> Vector3<f32> {
        let mut result = Vector3::ZERO;
        for i in 0..3 {
            if point[i] < self.min[i] {
                result[i] = point[i] - self.min[i];
            } else if point[i] > self.max[i] {
                result[i] = point[i] - self.max[i];
            }
        }
        result
    }

    /// Squared Euclidean distance to `point` (Arvo's algorithm).
    pub fn square_distance(&self, point: Vector3<f32>) -> f32 {
        self.arvo_vector(point).squared()
    }

    /// Euclidean distance to `point`.
    pub fn distance(&self, point: Vector3<f32>) -> f32 {
        self.square_distance(point).sqrt()
    }

    /// Center point.
    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    /// Corner `index`; bit `n` of the index selects the upper bound on axis `n`.
    pub fn corner(&self, index: usize) -> Vector3<f32> {
        let mut result = self.min;
        for axis in 0..3 {
            if index & (1 << axis) != 0 {
                result[axis] = self.max[axis];
            }
        }
        result
    }

    /// Octant `index` of an octree-like split at `pivot`; bit `n` of the index
    /// selects the upper half on axis `n`.
    pub fn octant(&self, index: usize, pivot: Vector3<f32>) -> Self {
        let mut result = Self::new(self.min, pivot);
        for axis in 0..3 {
            if index & (1 << axis) != 0 {
                result.min[axis] = pivot[axis];
                result.max[axis] = self.max[axis];
            }
        }
        result
    }

    /// Extent of the box projected onto `direction`, ordered.
    pub fn project(&self, direction: Vector3<f32>) -> Interval<f32> {
        self.span(direction, 0.0)
    }

    /// Which sides of `plane` the box reaches into.
    ///
    /// Touching the plane from one side does not count as spanning.
    pub fn classify(&self, plane: &Plane3) -> Side {
        let Interval { left, right } = self.span(plane.normal, plane.d);
        if left * right < 0.0 {
            Side::SPANNING
        } else if right > 0.0 {
            Side::POSITIVE
        } else {
            Side::NEGATIVE
        }
    }

    /// Range of `direction · p + offset` over the box.
    fn span(&self, direction: Vector3<f32>, offset: f32) -> Interval<f32> {
        let mut lo = offset;
        let mut hi = offset;
        for i in 0..3 {
            let (near, far) = if direction[i] < 0.0 {
                (self.max[i], self.min[i])
            } else {
                (self.min[i], self.max[i])
            };
            lo += near * direction[i];
            hi += far * direction[i];
        }
        Interval::new(lo, hi)
    }

    /// Grow by `delta` in every direction.
    pub fn expand(&mut self, delta: Vector3<f32>) {
        self.min -= delta;
        self.max += delta;
    }

    /// This box grown by `delta` in every direction.
    pub fn expanded(mut self, delta: Vector3<f32>) -> Self {
        self.expand(delta);
        self
    }

    /// Shrink to the intersection with `other`; may become empty.
    pub fn intersect(&mut self, other: &Self) {
        self.min = self.min.max(other.min);
        self.max = self.max.min(other.max);
    }

    /// Move by `delta`.
    pub fn translate(&mut self, delta: Vector3<f32>) {
        self.min += delta;
        self.max += delta;
    }
}
