// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar traits and small numeric helpers.
//!
//! [`Scalar`] covers anything the component-wise types (vectors, rectangles,
//! intervals) need: the four arithmetic operators and an ordering.
//! [`Real`] adds the floating point functions, dispatched to `std` or to
//! `libm` depending on the enabled feature.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Numeric type usable as a vector or rectangle component.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Lowest finite value.
    const MIN: Self;
    /// Largest finite value.
    const MAX: Self;
}

macro_rules! impl_scalar {
    ($($ty:ident => $zero:literal, $one:literal);* $(;)?) => {
        $(
            impl Scalar for $ty {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
                const MIN: Self = $ty::MIN;
                const MAX: Self = $ty::MAX;
            }
        )*
    };
}

impl_scalar! {
    i32 => 0, 1;
    i64 => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}

/// Floating point scalar (`f32` or `f64`).
pub trait Real: Scalar + Neg<Output = Self> {
    /// Two.
    const TWO: Self;
    /// One half.
    const HALF: Self;
    /// Archimedes' constant.
    const PI: Self;
    /// Tolerance used by the fuzzy comparisons when the caller has no better value.
    const DEFAULT_EPSILON: Self;

    /// Lossy conversion from `f64`.
    fn from_f64(value: f64) -> Self;
    /// Lossless widening to `f64`.
    fn to_f64(self) -> f64;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Sine, in radians.
    fn sin(self) -> Self;
    /// Cosine, in radians.
    fn cos(self) -> Self;
    /// Tangent, in radians.
    fn tan(self) -> Self;
    /// Arc cosine, in radians.
    fn acos(self) -> Self;
    /// Four-quadrant arc tangent of `self / x`.
    fn atan2(self, x: Self) -> Self;
    /// Magnitude of `self` with the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;
    /// Largest integer not greater than `self`.
    fn floor(self) -> Self;
}

macro_rules! float_fn {
    ($ty:ident, $std:ident, $libm:ident, $($arg:expr),+) => {{
        #[cfg(feature = "std")]
        {
            $ty::$std($($arg),+)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::$libm($($arg),+)
        }
    }};
}

macro_rules! impl_real {
    (
        $ty:ident, |$v:ident| $from_f64:expr, |$w:ident| $to_f64:expr,
        $sqrt:ident, $fabs:ident, $sin:ident, $cos:ident, $tan:ident,
        $acos:ident, $atan2:ident, $copysign:ident, $floor:ident
    ) => {
        impl Real for $ty {
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = core::$ty::consts::PI;
            const DEFAULT_EPSILON: Self = 1e-6;

            #[inline]
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Narrowing to f32 is the purpose of this conversion."
            )]
            fn from_f64($v: f64) -> Self {
                $from_f64
            }

            #[inline]
            fn to_f64(self) -> f64 {
                let $w = self;
                $to_f64
            }

            #[inline]
            fn sqrt(self) -> Self {
                float_fn!($ty, sqrt, $sqrt, self)
            }

            #[inline]
            fn abs(self) -> Self {
                float_fn!($ty, abs, $fabs, self)
            }

            #[inline]
            fn sin(self) -> Self {
                float_fn!($ty, sin, $sin, self)
            }

            #[inline]
            fn cos(self) -> Self {
                float_fn!($ty, cos, $cos, self)
            }

            #[inline]
            fn tan(self) -> Self {
                float_fn!($ty, tan, $tan, self)
            }

            #[inline]
            fn acos(self) -> Self {
                float_fn!($ty, acos, $acos, self)
            }

            #[inline]
            fn atan2(self, x: Self) -> Self {
                float_fn!($ty, atan2, $atan2, self, x)
            }

            #[inline]
            fn copysign(self, sign: Self) -> Self {
                float_fn!($ty, copysign, $copysign, self, sign)
            }

            #[inline]
            fn floor(self) -> Self {
                float_fn!($ty, floor, $floor, self)
            }
        }
    };
}

impl_real!(
    f32, |v| v as f32, |w| f64::from(w),
    sqrtf, fabsf, sinf, cosf, tanf, acosf, atan2f, copysignf, floorf
);
impl_real!(
    f64, |v| v, |w| w,
    sqrt, fabs, sin, cos, tan, acos, atan2, copysign, floor
);

/// The smaller of two partially ordered values; `a` wins ties and NaNs.
#[inline]
pub fn min_t<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// The larger of two partially ordered values; `a` wins ties and NaNs.
#[inline]
pub fn max_t<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// `value * value`.
#[inline]
pub fn square<T: Scalar>(value: T) -> T {
    value * value
}

/// Whether `|value| < epsilon`.
#[inline]
pub fn fuzzy_zero<T: Real>(value: T, epsilon: T) -> bool {
    value.abs() < epsilon
}

/// Whether `|a - b| < epsilon`.
#[inline]
pub fn fuzzy_equals<T: Real>(a: T, b: T, epsilon: T) -> bool {
    (a - b).abs() < epsilon
}

/// Linear interpolation, `a` at `x = 0` and `b` at `x = 1`.
#[inline]
pub fn lerp<T: Scalar>(a: T, b: T, x: T) -> T {
    a + (b - a) * x
}

/// Clamp `value` into `[-limit, limit]`.
#[inline]
pub fn clamp_absolute<T: Scalar + Neg<Output = T>>(value: T, limit: T) -> T {
    if value < -limit {
        -limit
    } else if value > limit {
        limit
    } else {
        value
    }
}

/// Clamp `value` into `[0, 1]`.
#[inline]
pub fn saturate<T: Scalar>(value: T) -> T {
    if value < T::ZERO {
        T::ZERO
    } else {
        min_t(value, T::ONE)
    }
}

/// Hermite step: 0 below `edge0`, 1 above `edge1`, `x²(3 - 2x)` in between.
pub fn smoothstep<T: Real>(edge0: T, edge1: T, x: T) -> T {
    // Early outs also cover `edge0 == edge1`.
    if x <= edge0 {
        return T::ZERO;
    }
    if x >= edge1 {
        return T::ONE;
    }
    let x = (x - edge0) / (edge1 - edge0);
    x * x * (T::TWO + T::ONE - T::TWO * x)
}

/// Convert degrees to radians.
#[inline]
pub fn to_radians<T: Real>(degrees: T) -> T {
    degrees * (T::PI / T::from_f64(180.0))
}

/// Convert radians to degrees.
#[inline]
pub fn to_degrees<T: Real>(radians: T) -> T {
    radians * (T::from_f64(180.0) / T::PI)
}

/// Whether `value` is a positive power of two.
#[inline]
pub const fn is_pow2(value: i64) -> bool {
    value > 0 && (value & (value - 1)) == 0
}

/// Real roots of a quadratic equation, ascending.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum QuadraticRoots<T> {
    /// No real solution (or a degenerate equation without any unknown).
    None,
    /// A double root, or the root of a degenerate linear equation.
    One(T),
    /// Two distinct roots with `.0 < .1`.
    Two(T, T),
}

impl<T: Copy> QuadraticRoots<T> {
    /// Number of distinct roots.
    pub const fn count(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Two(..) => 2,
        }
    }

    /// The smallest root, if any.
    pub const fn first(&self) -> Option<T> {
        match *self {
            Self::None => None,
            Self::One(x) | Self::Two(x, _) => Some(x),
        }
    }
}

/// Solve `a·x² + b·x + c = 0`.
///
/// Coefficients within `epsilon` of zero are treated as zero, so an
/// (almost) vanishing `a` falls back to the linear equation `b·x + c = 0`.
/// A discriminant within `epsilon` of zero yields a double root.
pub fn solve_quadratic<T: Real>(a: T, b: T, c: T, epsilon: T) -> QuadraticRoots<T> {
    if fuzzy_zero(a, epsilon) {
        if fuzzy_zero(b, epsilon) {
            return QuadraticRoots::None;
        }
        return QuadraticRoots::One(-c / b);
    }

    let four = T::TWO * T::TWO;
    let discriminant = b * b - four * a * c;
    if discriminant <= -epsilon {
        return QuadraticRoots::None;
    }
    let two_a = T::TWO * a;
    if discriminant <= epsilon {
        return QuadraticRoots::One(-b / two_a);
    }

    let r = discriminant.sqrt();
    let x0 = (-b + r) / two_a;
    let x1 = (-b - r) / two_a;
    if x0 > x1 {
        QuadraticRoots::Two(x1, x0)
    } else {
        QuadraticRoots::Two(x0, x1)
    }
}

/// Polynomial interpolation schemes.
pub mod interpolate {
    use super::{Scalar, lerp};

    /// Linear interpolation between `a` and `b`.
    #[inline]
    pub fn linear<T: Scalar>(a: T, b: T, x: T) -> T {
        lerp(a, b, x)
    }

    /// Cubic interpolation between `b` (`x = 0`) and `c` (`x = 1`), using the
    /// outer samples `a` and `d` for the slopes.
    pub fn cubic<T: Scalar>(a: T, b: T, c: T, d: T, x: T) -> T {
        let p = (d - c) - (a - b);
        let q = (a - b) - p;
        ((p * x + q) * x + (c - a)) * x + b
    }

    /// Bicubic interpolation over a 4x4 grid of samples, indexed `grid[column][row]`.
    ///
    /// The interpolated cell spans columns 1..2 and rows 1..2.
    pub fn bicubic<T: Scalar>(grid: &[[T; 4]; 4], x: T, y: T) -> T {
        let column = |c: &[T; 4]| cubic(c[0], c[1], c[2], c[3], y);
        cubic(
            column(&grid[0]),
            column(&grid[1]),
            column(&grid[2]),
            column(&grid[3]),
            x,
        )
    }
}
