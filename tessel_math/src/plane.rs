// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planes and view frusta.

use crate::aabb::{Aabb3, Side};
use crate::error::{MathError, Result};
use crate::matrix::{Matrix3, Matrix4};
use crate::vector::{Vector3, Vector4};

/// The points `p` with `normal · p + d = 0`.
///
/// The normal need not be unit length; [`Plane3::distance`] is a true
/// Euclidean distance only for normalized planes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Plane3 {
    /// Normal vector, pointing into the positive half space.
    pub normal: Vector3<f32>,
    /// Offset; `-d` is the distance of the plane to the origin along a unit normal.
    pub d: f32,
}

impl Plane3 {
    /// Create a plane from its equation.
    pub const fn new(normal: Vector3<f32>, d: f32) -> Self {
        Self { normal, d }
    }

    /// The plane through `point` with the given `normal`.
    pub fn from_point_normal(point: Vector3<f32>, normal: Vector3<f32>) -> Self {
        Self::new(normal, -normal.dot(point))
    }

    /// The plane through three counter-clockwise points; the normal follows the
    /// right-hand rule and is not normalized.
    pub fn from_points(p0: Vector3<f32>, p1: Vector3<f32>, p2: Vector3<f32>) -> Self {
        Self::from_point_normal(p0, (p1 - p0).cross(p2 - p0))
    }

    /// Signed distance of `point`, scaled by the normal's length.
    pub fn distance(&self, point: Vector3<f32>) -> f32 {
        self.normal.dot(point) + self.d
    }

    /// The same plane with the half spaces exchanged.
    pub fn flipped(self) -> Self {
        Self::new(-self.normal, -self.d)
    }

    /// Multiply the equation by `factor`.
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.normal * factor, self.d * factor)
    }

    /// The Hessian normal form of this plane.
    pub fn normalized(self, epsilon: f32) -> Result<Self> {
        let length = self.normal.magnitude();
        if length < epsilon {
            return Err(MathError::DegeneratePlane {
                length: f64::from(length),
                epsilon: f64::from(epsilon),
            });
        }
        Ok(self.scaled(1.0 / length))
    }

    /// Pull a plane given in the target space of `m` back into its source space.
    ///
    /// The result contains exactly the points `p` whose image `m · p` lies on
    /// `self`.
    pub fn pull_back(&self, m: &Matrix4) -> Self {
        let h = m.transpose() * self.normal.extend(self.d);
        Self::new(h.truncate(), h.w)
    }

    /// The common point of three planes, or `None` when two of them are
    /// (nearly) parallel.
    pub fn intersect_three(a: &Self, b: &Self, c: &Self) -> Option<Vector3<f32>> {
        let normals = Matrix3::from_rows([a.normal, b.normal, c.normal]);
        let inverse = normals.inverse(1e-12)?;
        Some(inverse * Vector3::new(-a.d, -b.d, -c.d))
    }
}

/// Index of each side in [`Frustum::planes`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrustumSide {
    /// `x = -w` in clip space.
    Left = 0,
    /// `x = w` in clip space.
    Right = 1,
    /// `y = -w` in clip space.
    Bottom = 2,
    /// `y = w` in clip space.
    Top = 3,
    /// `z = -w` in clip space.
    Near = 4,
    /// `z = w` in clip space.
    Far = 5,
}

/// Six normalized planes bounding a view volume, all facing inwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frustum {
    /// Planes in [`FrustumSide`] order.
    pub planes: [Plane3; 6],
}

impl Frustum {
    /// Extract the frustum of a combined `projection * modelview` matrix
    /// (OpenGL clip conventions).
    ///
    /// Fails if the matrix collapses one of the clip planes.
    pub fn from_matrix(m: &Matrix4) -> Result<Self> {
        const CLIP: [Vector4<f32>; 6] = [
            Vector4::new(1.0, 0.0, 0.0, 1.0),
            Vector4::new(-1.0, 0.0, 0.0, 1.0),
            Vector4::new(0.0, 1.0, 0.0, 1.0),
            Vector4::new(0.0, -1.0, 0.0, 1.0),
            Vector4::new(0.0, 0.0, 1.0, 1.0),
            Vector4::new(0.0, 0.0, -1.0, 1.0),
        ];
        let mut planes = [Plane3::default(); 6];
        for (plane, clip) in planes.iter_mut().zip(CLIP) {
            let clip = Plane3::new(clip.truncate(), clip.w);
            *plane = clip.pull_back(m).normalized(f32::EPSILON)?;
        }
        Ok(Self { planes })
    }

    /// The plane on the given side.
    pub fn plane(&self, side: FrustumSide) -> &Plane3 {
        &self.planes[side as usize]
    }

    /// The eight corners: near plane first, each face ordered
    /// left-bottom, right-bottom, right-top, left-top.
    ///
    /// `None` if any three of the planes fail to meet in a point.
    pub fn corners(&self) -> Option<[Vector3<f32>; 8]> {
        use FrustumSide::*;
        let order = [
            (Left, Bottom, Near),
            (Right, Bottom, Near),
            (Right, Top, Near),
            (Left, Top, Near),
            (Left, Bottom, Far),
            (Right, Bottom, Far),
            (Right, Top, Far),
            (Left, Top, Far),
        ];
        let mut corners = [Vector3::ZERO; 8];
        for (corner, (a, b, c)) in corners.iter_mut().zip(order) {
            *corner = Plane3::intersect_three(self.plane(a), self.plane(b), self.plane(c))?;
        }
        Some(corners)
    }

    /// Whether `point` lies inside or on the boundary.
    pub fn contains(&self, point: Vector3<f32>) -> bool {
        self.planes.iter().all(|p| p.distance(point) >= 0.0)
    }

    /// Coarse visibility of a box.
    ///
    /// [`Side::NEGATIVE`] means the box is completely outside one of the planes,
    /// [`Side::POSITIVE`] that it is inside all of them; anything else
    /// reports [`Side::SPANNING`]. Boxes near a frustum corner may be reported
    /// as spanning although they are outside.
    pub fn classify(&self, aabb: &Aabb3) -> Side {
        let mut inside = true;
        for plane in &self.planes {
            let side = aabb.classify(plane);
            if side == Side::NEGATIVE {
                return Side::NEGATIVE;
            }
            inside &= side == Side::POSITIVE;
        }
        if inside { Side::POSITIVE } else { Side::SPANNING }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_point_eq(a: Vector3<f32>, b: Vector3<f32>, epsilon: f32) {
        assert!(a.distance(b) <= epsilon, "{a:?} != {b:?}");
    }

    #[test]
    fn construction_and_distance() {
        let p = Plane3::from_points(
            Vector3::new(0.0, 0.0, 2.0),
            Vector3::new(1.0, 0.0, 2.0),
            Vector3::new(0.0, 1.0, 2.0),
        );
        assert_eq!(p.normal, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(p.d, -2.0);
        assert_eq!(p.distance(Vector3::new(5.0, 5.0, 5.0)), 3.0);
        assert_eq!(p.flipped().distance(Vector3::new(5.0, 5.0, 5.0)), -3.0);
    }

    #[test]
    fn hessian_normal_form() {
        let p = Plane3::new(Vector3::new(0.0, 3.0, 4.0), 10.0).normalized(1e-6).unwrap();
        assert_abs_diff_eq!(p.normal.magnitude(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.d, 2.0, epsilon = 1e-6);

        let degenerate = Plane3::new(Vector3::ZERO, 1.0).normalized(1e-6);
        assert!(matches!(degenerate, Err(MathError::DegeneratePlane { .. })));
    }

    #[test]
    fn three_planes_meet_in_a_point() {
        let x = Plane3::new(Vector3::new(1.0, 0.0, 0.0), -1.0);
        let y = Plane3::new(Vector3::new(0.0, 1.0, 0.0), -2.0);
        let z = Plane3::new(Vector3::new(0.0, 0.0, 1.0), -3.0);
        assert_point_eq(
            Plane3::intersect_three(&x, &y, &z).unwrap(),
            Vector3::new(1.0, 2.0, 3.0),
            1e-6,
        );
        let parallel = Plane3::new(Vector3::new(1.0, 0.0, 0.0), 4.0);
        assert!(Plane3::intersect_three(&x, &parallel, &z).is_none());
    }

    #[test]
    fn pull_back_through_translation() {
        // Plane z = 0 in the target space of a +5 z translation is z = -5 in the source.
        let m = Matrix4::translation(Vector3::new(0.0, 0.0, 5.0));
        let p = Plane3::new(Vector3::new(0.0, 0.0, 1.0), 0.0).pull_back(&m);
        assert_abs_diff_eq!(p.distance(Vector3::new(0.0, 0.0, -5.0)), 0.0);
    }

    #[test]
    fn orthographic_frustum_matches_its_box() {
        use crate::interval::Interval;
        let m = Matrix4::orthographic(
            Interval::new(-2.0, 2.0),
            Interval::new(-1.0, 1.0),
            Interval::new(1.0, 10.0),
        );
        let f = Frustum::from_matrix(&m).unwrap();
        assert!(f.contains(Vector3::new(0.0, 0.0, -5.0)));
        assert!(!f.contains(Vector3::new(0.0, 0.0, 5.0)));
        assert!(!f.contains(Vector3::new(3.0, 0.0, -5.0)));

        let corners = f.corners().unwrap();
        assert_point_eq(corners[0], Vector3::new(-2.0, -1.0, -1.0), 1e-5);
        assert_point_eq(corners[6], Vector3::new(2.0, 1.0, -10.0), 1e-5);
    }

    #[test]
    fn perspective_frustum_classifies_boxes() {
        let m = Matrix4::perspective(core::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
        let f = Frustum::from_matrix(&m).unwrap();

        let inside = Aabb3::new(Vector3::new(-1.0, -1.0, -10.0), Vector3::new(1.0, 1.0, -5.0));
        assert_eq!(f.classify(&inside), Side::POSITIVE);

        let behind = Aabb3::new(Vector3::new(-1.0, -1.0, 1.0), Vector3::new(1.0, 1.0, 5.0));
        assert_eq!(f.classify(&behind), Side::NEGATIVE);

        let crossing = Aabb3::new(Vector3::new(-1.0, -1.0, -200.0), Vector3::new(1.0, 1.0, -50.0));
        assert_eq!(f.classify(&crossing), Side::SPANNING);

        // 90° field of view: the near corners sit at (±1, ±1, -1).
        let corners = f.corners().unwrap();
        assert_point_eq(corners[2], Vector3::new(1.0, 1.0, -1.0), 1e-4);
        assert_abs_diff_eq!(f.plane(FrustumSide::Near).distance(Vector3::new(0.0, 0.0, -2.0)), 1.0, epsilon = 1e-5);
    }
}
