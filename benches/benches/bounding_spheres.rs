// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tessel_math::{Equisphere, MinimalBall, Vector2, Vector3};

fn random_in_unit_ball(rng: &mut fastrand::Rng) -> Vector3<f32> {
    loop {
        let p = Vector3::new(rng.f32(), rng.f32(), rng.f32()) * 2.0 - Vector3::splat(1.0);
        if p.squared() <= 1.0 {
            return p;
        }
    }
}

fn gen_ball_points(count: usize, seed: u64) -> Vec<Vector3<f32>> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count).map(|_| random_in_unit_ball(&mut rng)).collect()
}

fn gen_circle_points(count: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| Vector2::from_angle(rng.f64() * core::f64::consts::TAU) * (50.0 + rng.f64()))
        .collect()
}

fn bench_minimal_ball(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimal_ball_3d");
    for &n in &[64_usize, 1024, 16384] {
        let points = gen_ball_points(n, 0x5eed);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("unit_ball_n{n}"), |b| {
            b.iter_batched(
                || points.clone(),
                |mut points| {
                    let ball = MinimalBall::<_, 3>::new(&mut points, 1e-15);
                    black_box(ball.square_radius());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();

    // Points near a circle: many are support candidates, the worst case for
    // move-to-front.
    let mut group = c.benchmark_group("minimal_ball_2d");
    let points = gen_circle_points(4096, 7);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("ring_n4096", |b| {
        b.iter_batched(
            || points.clone(),
            |mut points| black_box(MinimalBall::<_, 2>::new(&mut points, 1e-12).center()),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_equisphere(c: &mut Criterion) {
    let tetrahedron = [
        [1.0_f64, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ];
    c.bench_function("equisphere_push_pop_3d", |b| {
        let mut solver = Equisphere::<f64, 3>::new(1e-15);
        b.iter(|| {
            for p in tetrahedron {
                solver.push(black_box(p));
            }
            let r = solver.squared_radius();
            while solver.support_count() > 0 {
                solver.pop();
            }
            black_box(r)
        });
    });
}

criterion_group!(benches, bench_minimal_ball, bench_equisphere);
criterion_main!(benches);
