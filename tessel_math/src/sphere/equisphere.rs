// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use super::square_distance;
use crate::scalar::Real;

/// The smallest sphere through a stack of support points.
///
/// Points are pushed one at a time and stay on the boundary of the sphere.
/// Each push extends an orthogonal basis of the support points' affine hull
/// (Gärtner's incremental scheme), so pushing and popping are `O(D²)` and the
/// centers and squared radii of all prefixes stay available for popping.
///
/// At most `D + 1` points can be supported. A push is rejected when the
/// stack is full or when the new point is (nearly) affinely dependent on the
/// current support points, judged by `epsilon` relative to the squared radius.
#[derive(Clone, Debug)]
pub struct Equisphere<T, const D: usize> {
    epsilon: T,
    support_count: usize,
    /// The first support point; every other point is stored relative to it.
    initial: [T; D],
    /// `centers[k]` and `square_radii[k]` describe the sphere through the
    /// first `k + 1` support points.
    centers: Vec<[T; D]>,
    square_radii: Vec<T>,
    /// Orthogonalized offsets of the support points after the first.
    basis: Vec<[T; D]>,
    /// `2 |basis[k]|²`.
    z: Vec<T>,
    /// Step taken along `basis[k]` when its point was pushed.
    f: Vec<T>,
    /// Gram-Schmidt coefficients, strictly upper triangular and packed by
    /// column.
    a: Vec<T>,
}

/// Packed position of the coefficient of `basis[row]` in point `col + 1`.
fn packed(row: usize, col: usize) -> usize {
    debug_assert!(row < col, "only the strict upper triangle is stored");
    col * (col - 1) / 2 + row
}

fn dot<T: Real, const D: usize>(a: &[T; D], b: &[T; D]) -> T {
    let mut sum = T::ZERO;
    for (x, y) in a.iter().zip(b) {
        sum += *x * *y;
    }
    sum
}

impl<T: Real, const D: usize> Equisphere<T, D> {
    /// Create an empty solver.
    ///
    /// `epsilon` bounds how flat the simplex of support points may become
    /// before a push is rejected.
    pub fn new(epsilon: T) -> Self {
        Self {
            epsilon,
            support_count: 0,
            initial: [T::ZERO; D],
            centers: vec![[T::ZERO; D]; D + 1],
            square_radii: vec![T::ZERO; D + 1],
            basis: vec![[T::ZERO; D]; D],
            z: vec![T::ZERO; D],
            f: vec![T::ZERO; D],
            a: vec![T::ZERO; D * D.saturating_sub(1) / 2],
        }
    }

    /// The tolerance passed to [`Equisphere::new`].
    pub fn epsilon(&self) -> T {
        self.epsilon
    }

    /// Number of points currently on the stack.
    pub fn support_count(&self) -> usize {
        self.support_count
    }

    /// Whether no further point can be pushed.
    pub fn is_full(&self) -> bool {
        self.support_count == D + 1
    }

    /// Add `point` to the support set.
    ///
    /// Returns `false` and leaves the solver untouched if the stack is full or
    /// if `point` is too close to the affine hull of the current support
    /// points.
    pub fn push(&mut self, point: [T; D]) -> bool {
        let m = self.support_count;
        if m == 0 {
            self.initial = point;
            self.centers[0] = point;
            self.square_radii[0] = T::ZERO;
            self.support_count = 1;
            return true;
        }
        if m == D + 1 {
            log::trace!("equisphere rejects a point: {m} supports already");
            return false;
        }

        let k = m - 1;
        let mut q: [T; D] = core::array::from_fn(|axis| point[axis] - self.initial[axis]);

        // Remove the components along the existing basis.
        for i in 0..k {
            let coefficient = T::TWO / self.z[i] * dot(&self.basis[i], &q);
            for (qj, bj) in q.iter_mut().zip(&self.basis[i]) {
                *qj -= coefficient * *bj;
            }
            self.a[packed(i, k)] = coefficient;
        }

        let z = T::TWO * dot(&q, &q);
        if z <= self.epsilon * self.square_radii[k] {
            log::trace!("equisphere rejects an affinely dependent point");
            return false;
        }

        let e = square_distance(&point, &self.centers[k]) - self.square_radii[k];
        let f = e / z;

        let previous = self.centers[k];
        self.centers[m] = core::array::from_fn(|axis| previous[axis] + f * q[axis]);
        self.square_radii[m] = self.square_radii[k] + e * f * T::HALF;
        self.basis[k] = q;
        self.z[k] = z;
        self.f[k] = f;
        self.support_count = m + 1;
        true
    }

    /// Remove the most recently pushed point.
    ///
    /// Popping an empty solver is a logic error; it is caught in debug builds
    /// and ignored otherwise.
    pub fn pop(&mut self) {
        debug_assert!(self.support_count > 0, "pop from an empty equisphere");
        self.support_count = self.support_count.saturating_sub(1);
    }

    /// Forget all support points.
    pub fn clear(&mut self) {
        self.support_count = 0;
    }

    /// Center of the current sphere; the origin when no point is supported.
    pub fn center(&self) -> [T; D] {
        match self.support_count {
            0 => [T::ZERO; D],
            m => self.centers[m - 1],
        }
    }

    /// Squared radius of the current sphere; `-1` when no point is supported,
    /// so that no point is inside.
    pub fn squared_radius(&self) -> T {
        match self.support_count {
            0 => -T::ONE,
            m => self.square_radii[m - 1],
        }
    }

    /// Affine weights of the center with respect to the support points.
    ///
    /// The weights sum to one and reproduce the center as the weighted sum of
    /// the support points, in push order. They are all non-negative exactly
    /// when the center lies in the convex hull of the support points.
    pub fn barycentric_weights(&self) -> Vec<T> {
        let m = self.support_count;
        if m == 0 {
            return Vec::new();
        }

        // The center is `initial + Σ f[i] basis[i]`; rewrite the basis in terms
        // of the raw offsets `support[i + 1] - initial`.
        let mut lambda = self.f[..m - 1].to_vec();
        for i in (0..m - 1).rev() {
            let li = lambda[i];
            for row in 0..i {
                lambda[row] -= self.a[packed(row, i)] * li;
            }
        }

        let mut weights = Vec::with_capacity(m);
        let rest = lambda.iter().fold(T::ONE, |acc, l| acc - *l);
        weights.push(rest);
        weights.extend(lambda);
        weights
    }
}
