// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::quaternion::Quaternion;
use crate::scalar::fuzzy_zero;
#[cfg(not(feature = "std"))]
use crate::scalar::Real;
use crate::vector::Vector3;

/// A 3x3 matrix, typically a rotation or a linear basis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3 {
    data: [f32; 9],
}

square_matrix!(Matrix3, 3, 9, Vector3);

impl Matrix3 {
    /// Rotation by `angle` radians around the x axis.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Self::from_rows([
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, c, -s),
            Vector3::new(0.0, s, c),
        ])
    }

    /// Rotation by `angle` radians around the y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Self::from_rows([
            Vector3::new(c, 0.0, s),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(-s, 0.0, c),
        ])
    }

    /// Rotation by `angle` radians around the z axis.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Self::from_rows([
            Vector3::new(c, -s, 0.0),
            Vector3::new(s, c, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ])
    }

    /// Rotation by `angle` radians around the unit-length `axis`.
    pub fn from_axis_angle(angle: f32, axis: Vector3<f32>) -> Self {
        Quaternion::from_axis_angle(angle, axis).into()
    }

    /// Non-uniform scaling.
    pub fn scale(factors: Vector3<f32>) -> Self {
        Self::from_cols_array([
            factors.x, 0.0, 0.0, //
            0.0, factors.y, 0.0, //
            0.0, 0.0, factors.z,
        ])
    }

    /// Determinant, the triple product of the columns.
    pub fn determinant(&self) -> f32 {
        self.col(0).dot(self.col(1).cross(self.col(2)))
    }

    /// Inverse, or `None` when the determinant is within `epsilon` of zero.
    pub fn inverse(&self, epsilon: f32) -> Option<Self> {
        let (a, b, c) = (self.col(0), self.col(1), self.col(2));
        let bc = b.cross(c);
        let det = a.dot(bc);
        if fuzzy_zero(det, epsilon) {
            return None;
        }
        let inv = 1.0 / det;
        Some(Self::from_rows([bc * inv, c.cross(a) * inv, a.cross(b) * inv]))
    }

    /// The unit quaternion of a rotation matrix.
    ///
    /// The result is meaningless if the matrix is not orthonormal.
    pub fn to_quaternion(&self) -> Quaternion {
        let m = |r: usize, c: usize| self[(r, c)];
        rotation_to_quaternion(
            [m(0, 0), m(1, 1), m(2, 2)],
            [m(2, 1) - m(1, 2), m(0, 2) - m(2, 0), m(1, 0) - m(0, 1)],
        )
    }
}

/// Quaternion from the diagonal and the antisymmetric differences of a rotation.
pub(super) fn rotation_to_quaternion(diagonal: [f32; 3], signs: [f32; 3]) -> Quaternion {
    let [d0, d1, d2] = diagonal;
    let half_sqrt = |v: f32| v.max(0.0).sqrt() * 0.5;
    Quaternion::new(
        half_sqrt(1.0 + d0 + d1 + d2),
        half_sqrt(1.0 + d0 - d1 - d2).copysign(signs[0]),
        half_sqrt(1.0 - d0 + d1 - d2).copysign(signs[1]),
        half_sqrt(1.0 - d0 - d1 + d2).copysign(signs[2]),
    )
}

impl From<Quaternion> for Matrix3 {
    fn from(q: Quaternion) -> Self {
        Self::from_cols([q.x_axis(), q.y_axis(), q.z_axis()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::assert_matrix_eq;
    use approx::assert_abs_diff_eq;

    #[test]
    fn axis_rotations_match_quaternions() {
        let angle = 0.8;
        let pairs = [
            (Matrix3::rotation_x(angle), Vector3::new(1.0, 0.0, 0.0)),
            (Matrix3::rotation_y(angle), Vector3::new(0.0, 1.0, 0.0)),
            (Matrix3::rotation_z(angle), Vector3::new(0.0, 0.0, 1.0)),
        ];
        for (m, axis) in pairs {
            assert_matrix_eq(
                m.as_cols_array(),
                Matrix3::from_axis_angle(angle, axis).as_cols_array(),
                1e-6,
            );
        }
    }

    #[test]
    fn quaternion_round_trip() {
        let q = Quaternion::from_axis_angle(2.0, Vector3::new(-0.36, 0.48, 0.8));
        let back = Matrix3::from(q).to_quaternion();
        assert_abs_diff_eq!(back.dot(q), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn inverse_of_rotation_is_transpose() {
        let m = Matrix3::from_axis_angle(1.1, Vector3::new(0.0, 0.6, 0.8));
        let inv = m.inverse(1e-6).unwrap();
        assert_matrix_eq(inv.as_cols_array(), m.transpose().as_cols_array(), 1e-5);
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn general_inverse() {
        let m = Matrix3::from_rows([
            Vector3::new(2.0, 0.0, 1.0),
            Vector3::new(1.0, 3.0, 0.0),
            Vector3::new(0.0, 1.0, 4.0),
        ]);
        assert_abs_diff_eq!(m.determinant(), 25.0, epsilon = 1e-5);
        let product = m * m.inverse(1e-6).unwrap();
        assert_matrix_eq(product.as_cols_array(), Matrix3::IDENTITY.as_cols_array(), 1e-5);
        assert!(Matrix3::scale(Vector3::new(1.0, 0.0, 1.0)).inverse(1e-6).is_none());
    }
}
