// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tessel_collections::{IndexMap, RleVec};
use tessel_pack::BoxPacker;

fn gen_sizes(count: usize, max: i32, seed: u64) -> Vec<(i32, i32)> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| (rng.i32(1..=max), rng.i32(1..=max)))
        .collect()
}

fn bench_box_packer(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_packer");
    for &n in &[256_usize, 2048] {
        let sizes = gen_sizes(n, 48, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("pack_grow_n{n}"), |b| {
            b.iter_batched(
                || BoxPacker::new(512, 512, 1),
                |mut packer| {
                    for &(w, h) in &sizes {
                        while packer.try_pack(w, h).is_none() {
                            let (pw, ph) = (packer.width(), packer.height());
                            packer
                                .enlarge(pw + pw / 2, ph + ph / 2)
                                .expect("enlarging never shrinks");
                        }
                    }
                    black_box(packer.width());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_containers(c: &mut Criterion) {
    let mut group = c.benchmark_group("containers");

    let runs: RleVec<u32> = (0..1024_u32).map(|i| (i, 1 + (i as usize % 64))).collect();
    group.throughput(Throughput::Elements(runs.len() as u64));
    group.bench_function("rle_iterate", |b| {
        b.iter(|| black_box(runs.iter().copied().map(u64::from).sum::<u64>()));
    });
    group.bench_function("rle_nth_stride_1000", |b| {
        b.iter(|| {
            let mut it = runs.iter();
            let mut acc = 0_u32;
            while let Some(v) = it.nth(999) {
                acc = acc.wrapping_add(*v);
            }
            black_box(acc)
        });
    });

    let keys: Vec<usize> = gen_sizes(4096, 1 << 14, 9).into_iter().map(|(k, _)| k as usize).collect();
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("index_map_insert_lookup", |b| {
        b.iter(|| {
            let mut map = IndexMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            black_box(keys.iter().filter(|&&k| map.contains_key(k + 1)).count())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_box_packer, bench_containers);
criterion_main!(benches);
