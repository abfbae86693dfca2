// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::scalar::fuzzy_zero;
#[cfg(not(feature = "std"))]
use crate::scalar::Real;
use crate::vector::Vector2;

/// A 2x2 matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix2 {
    data: [f32; 4],
}

square_matrix!(Matrix2, 2, 4, Vector2);

impl Matrix2 {
    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Self::from_rows([Vector2::new(c, -s), Vector2::new(s, c)])
    }

    /// Non-uniform scaling.
    pub fn scale(factors: Vector2<f32>) -> Self {
        Self::from_rows([Vector2::new(factors.x, 0.0), Vector2::new(0.0, factors.y)])
    }

    /// Determinant.
    pub fn determinant(&self) -> f32 {
        let [a, c, b, d] = self.data;
        a * d - b * c
    }

    /// Inverse, or `None` when the determinant is within `epsilon` of zero.
    pub fn inverse(&self, epsilon: f32) -> Option<Self> {
        let det = self.determinant();
        if fuzzy_zero(det, epsilon) {
            return None;
        }
        let [a, c, b, d] = self.data;
        let inv = 1.0 / det;
        Some(Self::from_cols_array([d * inv, -c * inv, -b * inv, a * inv]))
    }
}
