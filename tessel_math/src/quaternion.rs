// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation quaternions.

use core::ops::{Add, Div, Mul, MulAssign, Neg, Sub};

use crate::scalar::{Real, clamp_absolute, fuzzy_equals};
use crate::vector::Vector3;

/// A quaternion `w + xi + yj + zk`, used to represent rotations.
///
/// Rotations are unit quaternions. Composition follows the Hamilton product:
/// `a * b` applies `b` first, then `a`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternion {
    /// Real part.
    pub w: f32,
    /// `i` coefficient.
    pub x: f32,
    /// `j` coefficient.
    pub y: f32,
    /// `k` coefficient.
    pub z: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Create a quaternion from its components.
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Rotation by `angle` radians around the unit-length `axis`.
    pub fn from_axis_angle(angle: f32, axis: Vector3<f32>) -> Self {
        let half = angle * 0.5;
        let s = half.sin();
        Self::new(half.cos(), axis.x * s, axis.y * s, axis.z * s)
    }

    /// Axis and angle (in radians) of a unit quaternion.
    ///
    /// For (near) identity rotations the returned axis is not normalized.
    pub fn to_axis_angle(self) -> (Vector3<f32>, f32) {
        let angle = 2.0 * clamp_absolute(self.w, 1.0).acos();
        let sine = (1.0 - self.w * self.w).max(0.0).sqrt();
        let factor = if sine.abs() < 1e-4 { 1.0 } else { 1.0 / sine };
        (
            Vector3::new(self.x * factor, self.y * factor, self.z * factor),
            angle,
        )
    }

    /// Rotation with the smallest angle that maps the unit vector `a` onto the
    /// unit vector `b`.
    pub fn shortest_arc(a: Vector3<f32>, b: Vector3<f32>) -> Self {
        let cos = a.dot(b);
        if fuzzy_equals(cos, 1.0, f32::DEFAULT_EPSILON) {
            return Self::IDENTITY;
        }
        if fuzzy_equals(cos, -1.0, f32::DEFAULT_EPSILON) {
            // Opposite vectors: any perpendicular axis works.
            let axis = a.construct_perpendicular().normalized();
            return Self::from_axis_angle(core::f32::consts::PI, axis);
        }
        Self::from_axis_angle(clamp_absolute(cos, 1.0).acos(), a.cross(b).normalized())
    }

    /// Four-dimensional dot product.
    pub fn dot(self, other: Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared norm.
    pub fn squared(self) -> f32 {
        self.dot(self)
    }

    /// Norm.
    pub fn magnitude(self) -> f32 {
        self.squared().sqrt()
    }

    /// The conjugate `w - xi - yj - zk`.
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// This quaternion scaled to unit norm.
    pub fn normalized(self) -> Self {
        let s = self.squared();
        if s == 1.0 { self } else { self / s.sqrt() }
    }

    /// Multiplicative inverse, the conjugate divided by the squared norm.
    pub fn inverse(self) -> Self {
        self.conjugate() / self.squared()
    }

    /// Rotate `v` by this unit quaternion.
    pub fn transform(self, v: Vector3<f32>) -> Vector3<f32> {
        let Self { w, x, y, z } = self;
        Vector3::new(
            (1.0 - 2.0 * (y * y + z * z)) * v.x
                + 2.0 * (x * y - z * w) * v.y
                + 2.0 * (x * z + y * w) * v.z,
            2.0 * (x * y + z * w) * v.x
                + (1.0 - 2.0 * (x * x + z * z)) * v.y
                + 2.0 * (y * z - x * w) * v.z,
            2.0 * (x * z - y * w) * v.x
                + 2.0 * (y * z + x * w) * v.y
                + (1.0 - 2.0 * (x * x + y * y)) * v.z,
        )
    }

    /// The rotated x axis.
    pub fn x_axis(self) -> Vector3<f32> {
        let Self { w, x, y, z } = self;
        Vector3::new(
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y + w * z),
            2.0 * (x * z - w * y),
        )
    }

    /// The rotated y axis.
    pub fn y_axis(self) -> Vector3<f32> {
        let Self { w, x, y, z } = self;
        Vector3::new(
            2.0 * (x * y - w * z),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z + w * x),
        )
    }

    /// The rotated z axis.
    pub fn z_axis(self) -> Vector3<f32> {
        let Self { w, x, y, z } = self;
        Vector3::new(
            2.0 * (x * z + w * y),
            2.0 * (y * z - w * x),
            1.0 - 2.0 * (x * x + y * y),
        )
    }

    /// Append a rotation by `angle` around `axis` (applied first) and renormalize.
    pub fn rotate(&mut self, angle: f32, axis: Vector3<f32>) {
        *self = (*self * Self::from_axis_angle(angle, axis)).normalized();
    }

    /// Normalized linear interpolation along the shorter arc.
    pub fn nlerp(self, other: Self, x: f32) -> Self {
        let other = if self.dot(other) < 0.0 { -other } else { other };
        (self * (1.0 - x) + other * x).normalized()
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// Falls back to [`Quaternion::nlerp`] when the inputs (almost) coincide.
    pub fn slerp(self, other: Self, x: f32) -> Self {
        let mut cos = self.dot(other);
        let mut other = other;
        if cos < 0.0 {
            cos = -cos;
            other = -other;
        }
        if fuzzy_equals(cos, 1.0, f32::DEFAULT_EPSILON) {
            return (self * (1.0 - x) + other * x).normalized();
        }

        let theta = clamp_absolute(cos, 1.0).acos();
        let sin_theta = theta.sin();
        let m = ((1.0 - x) * theta).sin() / sin_theta;
        let n = (x * theta).sin() / sin_theta;
        self * m + other * n
    }

    /// The rotation `r` with `r * self == other`, flipped onto the shorter arc.
    pub fn short_rotation(self, other: Self) -> Self {
        let result = other * self.inverse();
        if self.dot(other) < 0.0 { -result } else { result }
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Quaternion {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        self * (1.0 / rhs)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}
