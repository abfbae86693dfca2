// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use super::{Equisphere, EuclideanPoint, square_distance};
use crate::scalar::{Real, Scalar};
use crate::vector::Vector3;

/// The smallest ball enclosing a point set.
///
/// Computed with Welzl's randomized algorithm in its move-to-front form:
/// points found outside the current ball are pushed as support points of an
/// [`Equisphere`] and moved to the front of the input, so later rounds see
/// the important points first. Expected running time is linear in the number
/// of points for a fixed dimension.
#[derive(Copy, Clone, Debug)]
pub struct MinimalBall<P: EuclideanPoint<D>, const D: usize> {
    center: P,
    square_radius: P::Scalar,
}

impl<P: EuclideanPoint<D>, const D: usize> MinimalBall<P, D> {
    /// Compute the minimal ball of `points`, reordering them in place.
    ///
    /// `epsilon` is handed to the [`Equisphere`] and decides when a candidate
    /// support point is too close to being affinely dependent.
    /// The ball of no points is the origin with radius zero.
    pub fn new(points: &mut [P], epsilon: P::Scalar) -> Self {
        let mut builder = Builder {
            solver: Equisphere::new(epsilon),
            center: [P::Scalar::ZERO; D],
            square_radius: -P::Scalar::ONE,
        };
        let end = points.len();
        builder.move_to_front(points, end);

        let square_radius = if points.is_empty() {
            P::Scalar::ZERO
        } else {
            builder.square_radius
        };
        log::trace!(
            "minimal ball of {} points has squared radius {square_radius:?}",
            points.len()
        );
        Self {
            center: P::from_coords(builder.center),
            square_radius,
        }
    }

    /// Compute the minimal ball of `points` without touching the input order.
    pub fn from_points(points: impl IntoIterator<Item = P>, epsilon: P::Scalar) -> Self {
        let mut points: Vec<P> = points.into_iter().collect();
        Self::new(&mut points, epsilon)
    }

    /// Center of the ball.
    pub fn center(&self) -> P {
        self.center
    }

    /// Squared radius of the ball.
    pub fn square_radius(&self) -> P::Scalar {
        self.square_radius
    }

    /// Radius of the ball.
    pub fn radius(&self) -> P::Scalar {
        self.square_radius.sqrt()
    }

    /// Whether `point` lies inside or on the boundary.
    pub fn contains(&self, point: &P) -> bool {
        square_distance(&self.center.to_coords(), &point.to_coords()) <= self.square_radius
    }
}

struct Builder<T, const D: usize> {
    solver: Equisphere<T, D>,
    center: [T; D],
    square_radius: T,
}

impl<T: Real, const D: usize> Builder<T, D> {
    fn contains(&self, point: &[T; D]) -> bool {
        square_distance(&self.center, point) - self.square_radius <= T::ZERO
    }

    fn record(&mut self) {
        self.center = self.solver.center();
        self.square_radius = self.solver.squared_radius();
    }

    /// Grow the recorded ball until it covers `points[..end]`.
    fn move_to_front<P: EuclideanPoint<D, Scalar = T>>(&mut self, points: &mut [P], end: usize) {
        if self.solver.is_full() {
            self.record();
            return;
        }

        for i in 0..end {
            let point = points[i].to_coords();
            if !self.contains(&point) && self.solver.push(point) {
                self.record();
                self.move_to_front(points, i);
                self.solver.pop();
                points[..=i].rotate_right(1);
            }
        }
    }
}

/// Minimal enclosing sphere of 3D points as `(center, square_radius)`.
///
/// The points are reordered. Empty input yields the origin with radius zero.
pub fn minimal_sphere(points: &mut [Vector3<f32>]) -> (Vector3<f32>, f32) {
    let ball = MinimalBall::<_, 3>::new(points, 1e-15);
    (ball.center(), ball.square_radius())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::to_radians;
    use crate::vector::Vector2;
    use approx::assert_abs_diff_eq;

    fn polar_to_model(latitude: f32, longitude: f32) -> Vector3<f32> {
        let (latitude, longitude) = (to_radians(latitude), to_radians(longitude));
        Vector3::new(
            latitude.cos() * longitude.cos(),
            latitude.sin() * longitude.cos(),
            longitude.sin(),
        )
    }

    fn random_direction(rng: &mut fastrand::Rng) -> Vector3<f32> {
        polar_to_model(rng.f32() * 360.0 - 180.0, rng.f32() * 180.0 - 90.0)
    }

    /// How far the farthest point pokes out of the ball.
    fn distance_to_sphere(points: &[Vector3<f32>], center: Vector3<f32>, square_radius: f32) -> f32 {
        let farthest = points
            .iter()
            .map(|p| (center - *p).squared())
            .fold(0.0, f32::max);
        (farthest.sqrt() - square_radius.sqrt()).max(0.0)
    }

    #[test]
    fn unit_ball_around_inner_points() {
        let mut rng = fastrand::Rng::with_seed(5489);
        let mut points = vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, -1.0, 0.0),
        ];
        for _ in 0..32 {
            let scale = rng.f32();
            points.push(random_direction(&mut rng) * scale);
        }

        let ball = MinimalBall::<_, 3>::new(&mut points, 1e-15);
        assert_abs_diff_eq!(ball.square_radius(), 1.0, epsilon = 1e-3);
        assert!(ball.center().squared() < 1e-3, "center {:?}", ball.center());
        assert!(distance_to_sphere(&points, ball.center(), ball.square_radius()) < 1e-3);
    }

    #[test]
    fn random_clusters_stay_within_their_generating_sphere() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut points = vec![Vector3::ZERO; 64];

        for _ in 0..16 {
            let center = Vector3::new(
                rng.f32() * 200.0 - 100.0,
                rng.f32() * 200.0 - 100.0,
                rng.f32() * 200.0 - 100.0,
            );
            let radius = 1.0 + rng.f32() * 2.0;
            let boundary = rng.usize(2..5);
            for (j, p) in points.iter_mut().enumerate() {
                let scale = if j < boundary { 1.0 } else { rng.f32() };
                *p = center + random_direction(&mut rng) * (scale * radius);
            }
            rng.shuffle(&mut points);

            let (found_center, found_square_radius) = minimal_sphere(&mut points);
            // The generating sphere is an upper bound, not necessarily the minimum.
            assert!(
                found_square_radius <= radius * radius + 1e-3,
                "{found_square_radius} exceeds {}",
                radius * radius
            );
            assert!(distance_to_sphere(&points, found_center, found_square_radius) < 1e-3);
        }
    }

    #[test]
    fn input_order_does_not_change_the_ball() {
        let mut rng = fastrand::Rng::with_seed(2024);
        let coord = |rng: &mut fastrand::Rng| rng.f64() * 20.0 - 10.0;

        let cloud: Vec<[f64; 3]> = (0..40)
            .map(|_| [coord(&mut rng), coord(&mut rng), coord(&mut rng)])
            .collect();
        let collinear: Vec<[f64; 3]> = (0..25)
            .map(|_| {
                let t = coord(&mut rng);
                [1.0 + 2.0 * t, -3.0 + t, 0.5 - t]
            })
            .collect();
        let coplanar: Vec<[f64; 3]> = (0..30)
            .map(|_| {
                let (u, v) = (coord(&mut rng), coord(&mut rng));
                [u + v, u - v, 4.0]
            })
            .collect();
        let corners = [
            [1.0, 2.0, 3.0],
            [-4.0, 0.0, 1.0],
            [2.0, -5.0, 0.0],
            [0.0, 1.0, -6.0],
        ];
        let duplicates: Vec<[f64; 3]> = (0..48).map(|i| corners[i % 4]).collect();

        for (name, points) in [
            ("cloud", cloud),
            ("collinear", collinear),
            ("coplanar", coplanar),
            ("duplicates", duplicates),
        ] {
            let mut shuffled = points.clone();
            let reference = MinimalBall::<[f64; 3], 3>::from_points(points, 1e-12);
            for _ in 0..10 {
                rng.shuffle(&mut shuffled);
                let ball = MinimalBall::<[f64; 3], 3>::from_points(shuffled.iter().copied(), 1e-12);
                assert_abs_diff_eq!(
                    ball.square_radius(),
                    reference.square_radius(),
                    epsilon = 1e-9
                );
                for axis in 0..3 {
                    assert_abs_diff_eq!(
                        ball.center()[axis],
                        reference.center()[axis],
                        epsilon = 1e-9
                    );
                }
                for p in &shuffled {
                    assert!(
                        square_distance(p, &ball.center()) <= ball.square_radius() + 1e-9,
                        "{name}: {p:?} is outside the ball"
                    );
                }
            }
        }
    }

    #[test]
    fn degenerate_inputs() {
        let mut none: [Vector3<f32>; 0] = [];
        assert_eq!(minimal_sphere(&mut none), (Vector3::ZERO, 0.0));

        let mut one = [Vector3::new(3.0, -2.0, 1.0)];
        assert_eq!(minimal_sphere(&mut one), (Vector3::new(3.0, -2.0, 1.0), 0.0));

        let mut copies = [Vector3::new(1.0, 1.0, 1.0); 5];
        let (center, square_radius) = minimal_sphere(&mut copies);
        assert_eq!(center, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(square_radius, 0.0);
    }

    #[test]
    fn works_for_planar_point_types() {
        let points = [
            kurbo::Point::new(0.0, 0.0),
            kurbo::Point::new(4.0, 0.0),
            kurbo::Point::new(2.0, 1.0),
            kurbo::Point::new(2.0, -1.0),
        ];
        let ball = MinimalBall::<_, 2>::from_points(points, 1e-12);
        assert_abs_diff_eq!(ball.center().x, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ball.center().y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ball.radius(), 2.0, epsilon = 1e-9);
        assert!(ball.contains(&kurbo::Point::new(2.0, 1.5)));
        assert!(!ball.contains(&kurbo::Point::new(2.0, 2.5)));

        let mut square: Vec<Vector2<f64>> =
            [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)]
                .into_iter()
                .map(|(x, y)| Vector2::new(x, y))
                .collect();
        let ball = MinimalBall::<_, 2>::new(&mut square, 1e-12);
        assert_abs_diff_eq!(ball.square_radius(), 0.5, epsilon = 1e-12);
        assert!(!ball.contains(&Vector2::new(1.0, 1.5)));

        let arrays = MinimalBall::<[f64; 1], 1>::from_points([[3.0], [-1.0], [0.5]], 1e-12);
        assert_eq!(arrays.center(), [1.0]);
        assert_eq!(arrays.square_radius(), 4.0);
    }
}
