// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::Matrix3;
use super::matrix3::rotation_to_quaternion;
use crate::interval::Interval;
use crate::quaternion::Quaternion;
use crate::scalar::fuzzy_zero;
#[cfg(not(feature = "std"))]
use crate::scalar::Real;
use crate::vector::{Vector3, Vector4};

/// A 4x4 matrix for homogeneous transforms and projections.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4 {
    data: [f32; 16],
}

square_matrix!(Matrix4, 4, 16, Vector4);

impl Matrix4 {
    /// Translation by `offset`.
    pub fn translation(offset: Vector3<f32>) -> Self {
        let mut m = Self::IDENTITY;
        m.data[12] = offset.x;
        m.data[13] = offset.y;
        m.data[14] = offset.z;
        m
    }

    /// Non-uniform scaling.
    pub fn scale(factors: Vector3<f32>) -> Self {
        Matrix3::scale(factors).into()
    }

    /// Rotation by `angle` radians around the x axis.
    pub fn rotation_x(angle: f32) -> Self {
        Matrix3::rotation_x(angle).into()
    }

    /// Rotation by `angle` radians around the y axis.
    pub fn rotation_y(angle: f32) -> Self {
        Matrix3::rotation_y(angle).into()
    }

    /// Rotation by `angle` radians around the z axis.
    pub fn rotation_z(angle: f32) -> Self {
        Matrix3::rotation_z(angle).into()
    }

    /// Rotation by `angle` radians around the unit-length `axis`.
    pub fn from_axis_angle(angle: f32, axis: Vector3<f32>) -> Self {
        Quaternion::from_axis_angle(angle, axis).into()
    }

    /// Right-handed perspective projection onto OpenGL clip space.
    ///
    /// `fovy` is the vertical field of view in radians; `near` and `far` are
    /// positive distances along the negative z axis.
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fovy * 0.5).tan();
        let d = near - far;
        Self::from_rows([
            Vector4::new(f / aspect, 0.0, 0.0, 0.0),
            Vector4::new(0.0, f, 0.0, 0.0),
            Vector4::new(0.0, 0.0, (far + near) / d, 2.0 * far * near / d),
            Vector4::new(0.0, 0.0, -1.0, 0.0),
        ])
    }

    /// Orthographic projection of the given box onto OpenGL clip space.
    ///
    /// `depth` holds the near and far distances along the negative z axis.
    pub fn orthographic(width: Interval<f32>, height: Interval<f32>, depth: Interval<f32>) -> Self {
        let axis = |i: Interval<f32>| {
            let extent = i.right - i.left;
            (2.0 / extent, -(i.right + i.left) / extent)
        };
        let (sx, tx) = axis(width);
        let (sy, ty) = axis(height);
        let (sz, tz) = axis(depth);
        Self::from_rows([
            Vector4::new(sx, 0.0, 0.0, tx),
            Vector4::new(0.0, sy, 0.0, ty),
            Vector4::new(0.0, 0.0, -sz, tz),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        ])
    }

    /// The upper-left 3x3 block.
    pub fn upper_left(&self) -> Matrix3 {
        Matrix3::from_cols([
            self.col(0).truncate(),
            self.col(1).truncate(),
            self.col(2).truncate(),
        ])
    }

    /// Transform a point (`w = 1`), ignoring the projective row.
    pub fn transform_point(&self, p: Vector3<f32>) -> Vector3<f32> {
        (*self * p.extend(1.0)).truncate()
    }

    /// Transform a direction (`w = 0`).
    pub fn transform_vector(&self, v: Vector3<f32>) -> Vector3<f32> {
        (*self * v.extend(0.0)).truncate()
    }

    /// Transform a point and divide by the resulting `w`.
    pub fn project_point(&self, p: Vector3<f32>) -> Vector3<f32> {
        let h = *self * p.extend(1.0);
        h.truncate() / h.w
    }

    /// Determinant.
    pub fn determinant(&self) -> f32 {
        let (s, c) = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Inverse, or `None` when the determinant is within `epsilon` of zero.
    pub fn inverse(&self, epsilon: f32) -> Option<Self> {
        let (s, c) = self.minors();
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
        if fuzzy_zero(det, epsilon) {
            return None;
        }
        let inv = 1.0 / det;
        let a = |r: usize, col: usize| self[(r, col)];

        let rows = [
            Vector4::new(
                a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3],
                -a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3],
                a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3],
                -a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3],
            ),
            Vector4::new(
                -a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1],
                a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1],
                -a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1],
                a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1],
            ),
            Vector4::new(
                a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0],
                -a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0],
                a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0],
                -a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0],
            ),
            Vector4::new(
                -a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0],
                a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0],
                -a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0],
                a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0],
            ),
        ];
        Some(Self::from_rows(rows) * inv)
    }

    /// 2x2 minors of the top two rows (`s`) and the bottom two rows (`c`),
    /// shared by the Laplace expansion of the determinant and the inverse.
    fn minors(&self) -> ([f32; 6], [f32; 6]) {
        let a = |r: usize, col: usize| self[(r, col)];
        let s = [
            a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
            a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2),
            a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3),
            a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2),
            a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3),
            a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3),
        ];
        let c = [
            a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1),
            a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2),
            a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3),
            a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2),
            a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3),
            a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3),
        ];
        (s, c)
    }

    /// Inverse of a rigid transform (rotation plus translation).
    ///
    /// Transposes the rotation block and rotates the negated translation back;
    /// wrong for anything with scale, shear or projection.
    pub fn inverse_orthogonal(&self) -> Self {
        let t = self.col(3).truncate();
        let rt = self.upper_left().transpose();
        let mut m = Self::from(rt);
        let back = rt * -t;
        m.data[12] = back.x;
        m.data[13] = back.y;
        m.data[14] = back.z;
        m
    }

    /// The unit quaternion of the rotation block.
    pub fn to_quaternion(&self) -> Quaternion {
        let d = &self.data;
        rotation_to_quaternion(
            [d[0], d[5], d[10]],
            [d[6] - d[9], d[8] - d[2], d[1] - d[4]],
        )
    }
}

impl From<Matrix3> for Matrix4 {
    fn from(m: Matrix3) -> Self {
        Self::from_cols([
            m.col(0).extend(0.0),
            m.col(1).extend(0.0),
            m.col(2).extend(0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        ])
    }
}

impl From<Quaternion> for Matrix4 {
    fn from(q: Quaternion) -> Self {
        Matrix3::from(q).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::assert_matrix_eq;
    use approx::assert_abs_diff_eq;

    fn rows(values: [f32; 16]) -> Matrix4 {
        let r = |i: usize| Vector4::new(values[i], values[i + 1], values[i + 2], values[i + 3]);
        Matrix4::from_rows([r(0), r(4), r(8), r(12)])
    }

    #[test]
    fn determinant_of_permutation_and_tridiagonal() {
        let m = rows([
            0.0, 0.0, 3.0, 0.0, //
            4.0, 0.0, 0.0, 0.0, //
            0.0, 2.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        assert_abs_diff_eq!(m.determinant(), 24.0, epsilon = 1e-4);

        let n = rows([
            2.0, 1.0, 0.0, 0.0, //
            1.0, 2.0, 1.0, 0.0, //
            0.0, 1.0, 2.0, 1.0, //
            0.0, 0.0, 1.0, 2.0,
        ]);
        assert_abs_diff_eq!(n.determinant(), 5.0, epsilon = 1e-4);
    }

    #[test]
    fn inverse_multiplies_to_identity() {
        let m = rows([
            2.0, 1.0, 0.0, 3.0, //
            1.0, 2.0, 1.0, 0.0, //
            0.0, -1.0, 2.0, 1.0, //
            4.0, 0.0, 1.0, 2.0,
        ]);
        let inv = m.inverse(1e-6).unwrap();
        assert_matrix_eq((m * inv).as_cols_array(), Matrix4::IDENTITY.as_cols_array(), 1e-5);
        assert_matrix_eq((inv * m).as_cols_array(), Matrix4::IDENTITY.as_cols_array(), 1e-5);
        assert!(Matrix4::scale(Vector3::new(1.0, 1.0, 0.0)).inverse(1e-6).is_none());
    }

    #[test]
    fn rigid_inverse_matches_general_inverse() {
        let m = Matrix4::translation(Vector3::new(3.0, -2.0, 5.0))
            * Matrix4::from_axis_angle(0.9, Vector3::new(0.6, 0.0, 0.8));
        assert_matrix_eq(
            m.inverse_orthogonal().as_cols_array(),
            m.inverse(1e-6).unwrap().as_cols_array(),
            1e-5,
        );
        let p = Vector3::new(1.0, 2.0, 3.0);
        let back = m.inverse_orthogonal().transform_point(m.transform_point(p));
        assert_abs_diff_eq!(back.distance(p), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn translation_moves_points_not_vectors() {
        let m = Matrix4::translation(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_point(Vector3::ZERO), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_vector(Vector3::new(1.0, 0.0, 0.0)), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let m = Matrix4::perspective(core::f32::consts::FRAC_PI_2, 1.5, 1.0, 100.0);
        let near = m.project_point(Vector3::new(0.0, 0.0, -1.0));
        let far = m.project_point(Vector3::new(0.0, 0.0, -100.0));
        assert_abs_diff_eq!(near.z, -1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(far.z, 1.0, epsilon = 1e-4);
        // 90° vertical field of view: the top edge at distance 1 is y = 1.
        assert_abs_diff_eq!(m.project_point(Vector3::new(0.0, 1.0, -1.0)).y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn orthographic_maps_box_to_unit_cube() {
        let m = Matrix4::orthographic(
            Interval::new(0.0, 800.0),
            Interval::new(0.0, 600.0),
            Interval::new(-1.0, 1.0),
        );
        let lo = m.transform_point(Vector3::new(0.0, 0.0, 1.0));
        let hi = m.transform_point(Vector3::new(800.0, 600.0, -1.0));
        assert_abs_diff_eq!(lo.x, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(lo.y, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(lo.z, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hi.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hi.y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hi.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn rotation_block_converts_to_quaternion() {
        let q = Quaternion::from_axis_angle(0.4, Vector3::new(0.0, 0.0, 1.0));
        let back = Matrix4::from(q).to_quaternion();
        assert_abs_diff_eq!(back.dot(q), 1.0, epsilon = 1e-6);
        assert_eq!(Matrix4::from(q).upper_left(), Matrix3::from(q));
    }
}
