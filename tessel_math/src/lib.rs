// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessel Math: a small 2D/3D math toolkit built around bounding spheres.
//!
//! - [`Equisphere`]: incremental solver for the sphere through up to `D + 1`
//!   affinely independent points, with push/pop of support points.
//! - [`MinimalBall`] and [`minimal_sphere`]: smallest enclosing ball of a point
//!   set (Welzl's algorithm, move-to-front variant) in any dimension.
//! - Fixed-size [`Vector2`]/[`Vector3`]/[`Vector4`], column-major
//!   [`Matrix2`]/[`Matrix3`]/[`Matrix4`] and unit [`Quaternion`]s.
//! - [`Plane3`], [`Frustum`], [`Aabb3`] and [`Rect`] with the usual queries.
//! - [`hull::gift_wrap`] for planar convex hulls, plus scalar helpers such as
//!   [`solve_quadratic`] and the [`interpolate`] kernels.
//!
//! Points enter the sphere solvers through [`EuclideanPoint`], which is
//! implemented for coordinate arrays, the vectors of this crate and
//! `kurbo::Point`.
//!
//! # Example
//!
//! ```rust
//! use tessel_math::{MinimalBall, Vector3};
//!
//! let mut points = vec![
//!     Vector3::new(1.0_f64, 0.0, 0.0),
//!     Vector3::new(-1.0, 0.0, 0.0),
//!     Vector3::new(0.0, 0.5, 0.0),
//!     Vector3::new(0.0, 0.0, -0.25),
//! ];
//! let ball = MinimalBall::<_, 3>::new(&mut points, 1e-12);
//! assert!((ball.radius() - 1.0).abs() < 1e-12);
//! assert!(ball.center().magnitude() < 1e-12);
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library's float functions.
//! - `libm`: use `libm` instead, for `no_std` targets.
//!
//! This crate uses `alloc` and is `no_std` without the `std` feature.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("tessel_math requires either the `std` or `libm` feature");

pub mod aabb;
pub mod error;
pub mod hull;
pub mod interval;
pub mod matrix;
pub mod plane;
pub mod quaternion;
pub mod rect;
pub mod scalar;
pub mod sphere;
pub mod vector;

pub use aabb::{Aabb3, Side};
pub use error::{MathError, Result};
pub use interval::Interval;
pub use matrix::{Matrix2, Matrix3, Matrix4};
pub use plane::{Frustum, FrustumSide, Plane3};
pub use quaternion::Quaternion;
pub use rect::Rect;
pub use scalar::{QuadraticRoots, Real, Scalar, interpolate, solve_quadratic};
pub use sphere::{Equisphere, EuclideanPoint, MinimalBall, minimal_sphere};
pub use vector::{Vector2, Vector3, Vector4};
