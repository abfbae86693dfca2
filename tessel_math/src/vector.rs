// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-size vectors.
//!
//! [`Vector2`], [`Vector3`] and [`Vector4`] share one component-wise API
//! (operators, dot products, min/max) generated by a macro; the
//! dimension-specific operations such as [`Vector3::cross`] live in their
//! own impl blocks.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::scalar::{Real, Scalar, max_t, min_t};

macro_rules! vector_type {
    (
        $(#[$meta:meta])*
        $name:ident, $n:literal, $($idx:literal => $field:ident),+
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name<T> {
            $(
                #[doc = concat!("The `", stringify!($field), "` component.")]
                pub $field: T,
            )+
        }

        impl<T> $name<T> {
            /// Create a vector from its components.
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T: Copy> $name<T> {
            /// A vector with every component set to `value`.
            pub fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }

            /// The components as an array.
            pub fn to_array(self) -> [T; $n] {
                [$(self.$field),+]
            }

            /// Apply `f` to every component.
            pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> $name<U> {
                $name { $($field: f(self.$field)),+ }
            }
        }

        impl<T: Scalar> $name<T> {
            /// The zero vector.
            pub const ZERO: Self = Self { $($field: T::ZERO),+ };

            /// Dot product.
            pub fn dot(self, other: Self) -> T {
                let mut acc = T::ZERO;
                $(acc += self.$field * other.$field;)+
                acc
            }

            /// Squared length, `self · self`.
            pub fn squared(self) -> T {
                self.dot(self)
            }

            /// Sum of the components.
            pub fn sum(self) -> T {
                let mut acc = T::ZERO;
                $(acc += self.$field;)+
                acc
            }

            /// Component-wise product.
            pub fn component_mul(self, other: Self) -> Self {
                Self { $($field: self.$field * other.$field),+ }
            }

            /// Component-wise minimum.
            pub fn min(self, other: Self) -> Self {
                Self { $($field: min_t(self.$field, other.$field)),+ }
            }

            /// Component-wise maximum.
            pub fn max(self, other: Self) -> Self {
                Self { $($field: max_t(self.$field, other.$field)),+ }
            }
        }

        impl<T: Real> $name<T> {
            /// Euclidean length.
            pub fn magnitude(self) -> T {
                self.squared().sqrt()
            }

            /// This vector scaled to unit length.
            ///
            /// The zero vector has no direction; normalizing it yields NaNs.
            pub fn normalized(self) -> Self {
                self / self.magnitude()
            }

            /// This vector scaled to unit length, or an error when its length
            /// is below `epsilon`.
            pub fn try_normalized(self, epsilon: T) -> crate::error::Result<Self> {
                let length = self.magnitude();
                if length < epsilon {
                    return Err(crate::error::MathError::ZeroLength {
                        length: length.to_f64(),
                    });
                }
                Ok(self / length)
            }

            /// Largest absolute component (the maximum norm).
            pub fn max_norm(self) -> T {
                let mut acc = T::ZERO;
                $(acc = max_t(acc, self.$field.abs());)+
                acc
            }

            /// Euclidean distance to `other`.
            pub fn distance(self, other: Self) -> T {
                (other - self).magnitude()
            }

            /// Linear interpolation, `self` at `x = 0` and `other` at `x = 1`.
            pub fn lerp(self, other: Self, x: T) -> Self {
                self + (other - self) * x
            }
        }

        impl<T> From<[T; $n]> for $name<T> {
            fn from([$($field),+]: [T; $n]) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T> From<$name<T>> for [T; $n] {
            fn from(v: $name<T>) -> Self {
                [$(v.$field),+]
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!("index {index} out of range for {}", stringify!($name)),
                }
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => panic!("index {index} out of range for {}", stringify!($name)),
                }
            }
        }

        impl<T: Scalar> Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Scalar> Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: Scalar> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: Scalar> Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: Scalar> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl<T: Scalar> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl<T: Scalar> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field *= rhs;)+
            }
        }

        impl<T: Scalar> DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                $(self.$field /= rhs;)+
            }
        }

        impl<T: Neg<Output = T>> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl Mul<$name<f32>> for f32 {
            type Output = $name<f32>;

            fn mul(self, rhs: $name<f32>) -> $name<f32> {
                rhs * self
            }
        }

        impl Mul<$name<f64>> for f64 {
            type Output = $name<f64>;

            fn mul(self, rhs: $name<f64>) -> $name<f64> {
                rhs * self
            }
        }
    };
}

vector_type!(
    /// Two-component vector.
    Vector2, 2, 0 => x, 1 => y
);
vector_type!(
    /// Three-component vector.
    Vector3, 3, 0 => x, 1 => y, 2 => z
);
vector_type!(
    /// Four-component vector, typically homogeneous coordinates or RGBA.
    Vector4, 4, 0 => x, 1 => y, 2 => z, 3 => w
);

impl<T: Scalar + Neg<Output = T>> Vector2<T> {
    /// Determinant of the 2x2 matrix `[self, other]`, the z component of the
    /// 3D cross product.
    ///
    /// Positive when `other` is counter-clockwise from `self`.
    pub fn det(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// This vector rotated by 90° counter-clockwise.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl<T: Real> Vector2<T> {
    /// Unit vector at `angle` radians from the x axis.
    pub fn from_angle(angle: T) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Angle from the x axis, in radians.
    pub fn angle(self) -> T {
        self.y.atan2(self.x)
    }
}

impl<T: Copy> Vector2<T> {
    /// Append a third component.
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }
}

impl<T: Scalar> Vector3<T> {
    /// Cross product.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl<T: Copy> Vector3<T> {
    /// Append a fourth component.
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Drop the z component.
    pub fn truncate(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

impl<T: Real> Vector3<T> {
    /// Some vector perpendicular to `self`, with the same maximum norm.
    ///
    /// The largest component is swapped with its cyclic successor, which is
    /// negated; the remaining component becomes zero.
    pub fn construct_perpendicular(self) -> Self {
        let mut p = 0;
        let mut largest = self.x.abs();
        for i in 1..3 {
            let value = self[i].abs();
            if largest < value {
                largest = value;
                p = i;
            }
        }
        let q = (p + 1) % 3;

        let mut result = Self::ZERO;
        result[p] = -self[q];
        result[q] = self[p];
        result
    }
}

impl<T: Copy> Vector4<T> {
    /// Drop the w component.
    pub fn truncate(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<kurbo::Point> for Vector2<f64> {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2<f64>> for kurbo::Point {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<kurbo::Vec2> for Vector2<f64> {
    fn from(v: kurbo::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2<f64>> for kurbo::Vec2 {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arithmetic_is_component_wise() {
        let a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 5, 6);
        assert_eq!(a + b, Vector3::new(5, 7, 9));
        assert_eq!(b - a, Vector3::splat(3));
        assert_eq!(a * 2, Vector3::new(2, 4, 6));
        assert_eq!(-a, Vector3::new(-1, -2, -3));
        assert_eq!(a.dot(b), 32);
        assert_eq!(a.component_mul(b), Vector3::new(4, 10, 18));
        assert_eq!(a.min(Vector3::new(0, 9, 3)), Vector3::new(0, 2, 3));
        assert_eq!(a.max(Vector3::new(0, 9, 3)), Vector3::new(1, 9, 3));
        assert_eq!(a.sum(), 6);

        let mut c = a;
        c += b;
        c -= a;
        c *= 3;
        assert_eq!(c, Vector3::new(12, 15, 18));
        assert_eq!(2.0_f32 * Vector2::new(1.0, 2.0), Vector2::new(2.0, 4.0));
    }

    #[test]
    fn indexing_matches_fields() {
        let mut v = Vector4::new(1, 2, 3, 4);
        assert_eq!(v[3], 4);
        v[0] = 9;
        assert_eq!(v.x, 9);
        assert_eq!(v.to_array(), [9, 2, 3, 4]);
        assert_eq!(Vector4::from([9, 2, 3, 4]), v);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn indexing_past_the_end_panics() {
        let v = Vector2::new(1, 2);
        let _out_of_range = v[2];
    }

    #[test]
    fn cross_product_follows_right_hand_rule() {
        let x = Vector3::new(1.0_f32, 0.0, 0.0);
        let y = Vector3::new(0.0_f32, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(Vector2::new(1, 0).det(Vector2::new(0, 1)), 1);
    }

    #[test]
    fn lengths_and_normalization() {
        let v = Vector3::new(3.0_f64, 0.0, 4.0);
        assert_relative_eq!(v.magnitude(), 5.0);
        assert_relative_eq!(v.normalized().magnitude(), 1.0);
        assert!(matches!(
            Vector3::new(0.0, 1e-9, 0.0).try_normalized(1e-6),
            Err(crate::error::MathError::ZeroLength { .. })
        ));
        assert!(v.try_normalized(1e-6).is_ok());
        assert_relative_eq!(v.max_norm(), 4.0);
        assert_relative_eq!(v.distance(Vector3::ZERO), 5.0);
        assert_eq!(Vector2::new(0.0, 2.0).lerp(Vector2::new(2.0, 0.0), 0.5), Vector2::splat(1.0));
    }

    #[test]
    fn perpendicular_vectors_are_orthogonal() {
        for v in [
            Vector3::new(1.0_f32, 2.0, 3.0),
            Vector3::new(-7.0, 0.5, 0.0),
            Vector3::new(0.0, 0.0, -1.0),
        ] {
            let p = v.construct_perpendicular();
            assert_relative_eq!(p.dot(v), 0.0);
            assert_relative_eq!(p.max_norm(), v.max_norm());
        }
        let v = Vector2::new(2.0_f32, 1.0);
        assert_eq!(v.perpendicular().dot(v), 0.0);
    }

    #[test]
    fn angles_and_kurbo_interop() {
        let v = Vector2::from_angle(core::f64::consts::FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0);
        assert_relative_eq!(v.angle(), core::f64::consts::FRAC_PI_2);

        let p: kurbo::Point = Vector2::new(1.5, -2.0).into();
        assert_eq!(p, kurbo::Point::new(1.5, -2.0));
        assert_eq!(Vector2::from(kurbo::Vec2::new(3.0, 4.0)), Vector2::new(3.0, 4.0));
    }
}
