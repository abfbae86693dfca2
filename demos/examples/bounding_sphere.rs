// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding spheres.
//!
//! Circumscribe a triangle with the equisphere solver, then find minimal
//! enclosing circles and balls for kurbo points and a 3D cloud.
//!
//! Run:
//! - `cargo run -p tessel_demos --example bounding_sphere`

use kurbo::Point;
use tessel_math::{Equisphere, MinimalBall, Vector3, minimal_sphere};

fn main() {
    // The circumcircle of a triangle touches all three corners.
    let mut solver = Equisphere::<f64, 2>::new(1e-15);
    for p in [[0.0, 0.0], [4.0, 0.0], [2.0, 0.5]] {
        assert!(solver.push(p), "corners are affinely independent");
    }
    let [cx, cy] = solver.center();
    println!(
        "circumcircle: center ({cx}, {cy}), radius {}",
        solver.squared_radius().sqrt()
    );
    // An obtuse triangle's circumcenter lies outside it: one weight is negative.
    println!("barycentric weights: {:?}", solver.barycentric_weights());

    // The minimal enclosing circle of the same triangle only needs the long side.
    let mut corners = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 0.5)];
    let circle = MinimalBall::<_, 2>::new(&mut corners, 1e-15);
    println!(
        "enclosing circle: center {:?}, radius {}",
        circle.center(),
        circle.radius()
    );
    assert!(circle.radius() < solver.squared_radius().sqrt());
    assert!(circle.contains(&Point::new(2.0, 0.5)));

    // A helix of points in 3D.
    let mut helix: Vec<Vector3<f32>> = (0..200_u16)
        .map(|i| {
            let t = f32::from(i) * 0.1;
            Vector3::new(t.cos() * 3.0, t.sin() * 3.0, t * 0.5)
        })
        .collect();
    let (center, square_radius) = minimal_sphere(&mut helix);
    println!(
        "helix ball: center ({:.3}, {:.3}, {:.3}), radius {:.3}",
        center.x,
        center.y,
        center.z,
        square_radius.sqrt()
    );
    for p in &helix {
        assert!(
            (*p - center).squared() <= square_radius * (1.0 + 1e-4),
            "{p:?} is outside the ball"
        );
    }
}
