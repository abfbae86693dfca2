// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar convex hulls.

use core::ops::Neg;

use crate::scalar::Scalar;
use crate::vector::Vector2;

/// Compute the convex hull of `points` in place (Jarvis march).
///
/// On return the first `n` elements, where `n` is the returned count, are the
/// hull vertices in counter-clockwise order starting at the lexicographically
/// smallest point. The remaining elements are the interior points in
/// unspecified order. Runs in `O(n·h)` for `h` hull vertices.
pub fn gift_wrap<T: Scalar + Neg<Output = T>>(points: &mut [Vector2<T>]) -> usize {
    let count = points.len();
    if count < 3 {
        return count;
    }

    let mut start = 0;
    for i in 1..count {
        let (p, s) = (points[i], points[start]);
        if p.x < s.x || (p.x == s.x && p.y < s.y) {
            start = i;
        }
    }
    points.swap(start, 0);

    for j in 0..count - 1 {
        // Pick the candidate that has no other point to its right.
        let mut next = if j == 0 { 1 } else { 0 };
        for i in 0..count {
            if i == j || i == next {
                continue;
            }
            let pivot = points[j];
            if (points[next] - pivot).det(points[i] - pivot) < T::ZERO {
                next = i;
            }
        }
        if next == 0 {
            return j + 1;
        }
        points.swap(next, j + 1);
    }
    count
}

/// Whether `point` is inside the counter-clockwise convex polygon `hull`,
/// keeping a margin: each edge's `det(edge, point - start)` must reach
/// `threshold` (use zero to accept points on the boundary).
pub fn convex_hull_contains<T: Scalar + Neg<Output = T>>(
    hull: &[Vector2<T>],
    point: Vector2<T>,
    threshold: T,
) -> bool {
    let n = hull.len();
    (0..n).all(|i| {
        let a = hull[i];
        let b = hull[(i + 1) % n];
        (b - a).det(point - a) >= threshold
    })
}
