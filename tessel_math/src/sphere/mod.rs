// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circumscribed and minimal enclosing spheres in `D` dimensions.
//!
//! [`Equisphere`] is the incremental building block: it keeps the smallest
//! sphere through a stack of affinely independent support points.
//! [`MinimalBall`] drives it with Welzl's move-to-front recursion to find the
//! smallest ball enclosing a whole point set.
//!
//! Both work on coordinate arrays; [`EuclideanPoint`] adapts the point types
//! callers already use.

mod ball;
mod equisphere;

pub use ball::{MinimalBall, minimal_sphere};
pub use equisphere::Equisphere;

use crate::scalar::Real;
use crate::vector::{Vector2, Vector3};

/// A point with `D` real coordinates.
pub trait EuclideanPoint<const D: usize>: Copy {
    /// Coordinate type.
    type Scalar: Real;

    /// Coordinate along `axis`, which is below `D`.
    fn coord(&self, axis: usize) -> Self::Scalar;

    /// Build a point from its coordinates.
    fn from_coords(coords: [Self::Scalar; D]) -> Self;

    /// All coordinates in axis order.
    fn to_coords(&self) -> [Self::Scalar; D] {
        core::array::from_fn(|axis| self.coord(axis))
    }
}

impl<T: Real, const D: usize> EuclideanPoint<D> for [T; D] {
    type Scalar = T;

    fn coord(&self, axis: usize) -> T {
        self[axis]
    }

    fn from_coords(coords: [T; D]) -> Self {
        coords
    }

    fn to_coords(&self) -> [T; D] {
        *self
    }
}

impl<T: Real> EuclideanPoint<2> for Vector2<T> {
    type Scalar = T;

    fn coord(&self, axis: usize) -> T {
        self[axis]
    }

    fn from_coords(coords: [T; 2]) -> Self {
        coords.into()
    }
}

impl<T: Real> EuclideanPoint<3> for Vector3<T> {
    type Scalar = T;

    fn coord(&self, axis: usize) -> T {
        self[axis]
    }

    fn from_coords(coords: [T; 3]) -> Self {
        coords.into()
    }
}

impl EuclideanPoint<2> for kurbo::Point {
    type Scalar = f64;

    fn coord(&self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => panic!("axis {axis} out of range for a 2D point"),
        }
    }

    fn from_coords([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Squared Euclidean distance between two coordinate arrays.
pub(crate) fn square_distance<T: Real, const D: usize>(a: &[T; D], b: &[T; D]) -> T {
    let mut sum = T::ZERO;
    for (x, y) in a.iter().zip(b) {
        let d = *x - *y;
        sum += d * d;
    }
    sum
}
