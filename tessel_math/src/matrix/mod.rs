// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Square `f32` matrices stored in column-major order.
//!
//! Constructors take rows ([`Matrix3::from_rows`]) or columns
//! ([`Matrix3::from_cols`]); element access is `m[(row, col)]`. The flat
//! column-major storage is exposed through `as_cols_array` for uploading to
//! graphics APIs.

macro_rules! square_matrix {
    ($name:ident, $n:literal, $len:literal, $vector:ident) => {
        impl $name {
            /// The identity matrix.
            pub const IDENTITY: Self = Self::from_diagonal(1.0);

            /// A matrix with `value` on the diagonal and zeros elsewhere.
            pub const fn from_diagonal(value: f32) -> Self {
                let mut data = [0.0; $len];
                let mut i = 0;
                while i < $n {
                    data[i * $n + i] = value;
                    i += 1;
                }
                Self { data }
            }

            /// Create a matrix from its flat column-major storage.
            pub const fn from_cols_array(data: [f32; $len]) -> Self {
                Self { data }
            }

            /// The flat column-major storage.
            pub const fn as_cols_array(&self) -> &[f32; $len] {
                &self.data
            }

            /// Create a matrix from its rows.
            pub fn from_rows(rows: [$vector<f32>; $n]) -> Self {
                let mut data = [0.0; $len];
                for (r, row) in rows.iter().enumerate() {
                    for c in 0..$n {
                        data[c * $n + r] = row[c];
                    }
                }
                Self { data }
            }

            /// Create a matrix from its columns.
            pub fn from_cols(cols: [$vector<f32>; $n]) -> Self {
                let mut data = [0.0; $len];
                for (c, col) in cols.iter().enumerate() {
                    for r in 0..$n {
                        data[c * $n + r] = col[r];
                    }
                }
                Self { data }
            }

            /// Column `c`.
            pub fn col(&self, c: usize) -> $vector<f32> {
                let mut v = $vector::<f32>::ZERO;
                for r in 0..$n {
                    v[r] = self[(r, c)];
                }
                v
            }

            /// Row `r`.
            pub fn row(&self, r: usize) -> $vector<f32> {
                let mut v = $vector::<f32>::ZERO;
                for c in 0..$n {
                    v[c] = self[(r, c)];
                }
                v
            }

            /// The transposed matrix.
            pub fn transpose(&self) -> Self {
                let mut data = [0.0; $len];
                for c in 0..$n {
                    for r in 0..$n {
                        data[r * $n + c] = self.data[c * $n + r];
                    }
                }
                Self { data }
            }

            /// `transpose(self) * v`, without building the transpose.
            pub fn transpose_mul(&self, v: $vector<f32>) -> $vector<f32> {
                let mut out = $vector::<f32>::ZERO;
                for c in 0..$n {
                    out[c] = self.col(c).dot(v);
                }
                out
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl core::ops::Index<(usize, usize)> for $name {
            type Output = f32;

            fn index(&self, (row, col): (usize, usize)) -> &f32 {
                assert!(row < $n && col < $n, "matrix index ({row}, {col}) out of range");
                &self.data[col * $n + row]
            }
        }

        impl core::ops::IndexMut<(usize, usize)> for $name {
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
                assert!(row < $n && col < $n, "matrix index ({row}, {col}) out of range");
                &mut self.data[col * $n + row]
            }
        }

        impl core::ops::Mul for $name {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                let mut data = [0.0; $len];
                for c in 0..$n {
                    for r in 0..$n {
                        let mut acc = 0.0;
                        for k in 0..$n {
                            acc += self.data[k * $n + r] * rhs.data[c * $n + k];
                        }
                        data[c * $n + r] = acc;
                    }
                }
                Self { data }
            }
        }

        impl core::ops::MulAssign for $name {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl core::ops::Mul<$vector<f32>> for $name {
            type Output = $vector<f32>;

            fn mul(self, v: $vector<f32>) -> $vector<f32> {
                let mut out = $vector::<f32>::ZERO;
                for r in 0..$n {
                    out[r] = self.row(r).dot(v);
                }
                out
            }
        }

        impl core::ops::Mul<f32> for $name {
            type Output = Self;

            fn mul(mut self, rhs: f32) -> Self {
                for value in &mut self.data {
                    *value *= rhs;
                }
                self
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;

            fn add(mut self, rhs: Self) -> Self {
                for (value, other) in self.data.iter_mut().zip(rhs.data) {
                    *value += other;
                }
                self
            }
        }
    };
}

// Declared after the macro so they can expand it.
mod matrix2;
mod matrix3;
mod matrix4;

pub use matrix2::Matrix2;
pub use matrix3::Matrix3;
pub use matrix4::Matrix4;

#[cfg(test)]
pub(crate) fn assert_matrix_eq<const L: usize>(a: &[f32; L], b: &[f32; L], epsilon: f32) {
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!(
            (x - y).abs() <= epsilon,
            "element {i} differs: {x} vs {y} (a = {a:?}, b = {b:?})"
        );
    }
}
