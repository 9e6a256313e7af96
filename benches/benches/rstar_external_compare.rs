// Copyright 2025 the Octree Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use octree_index::{Octree, OctreeConfig, Point3};

use rstar::RTree;

const EXTENT: f64 = 1000.0;

fn gen_lattice_points(n: usize) -> Vec<Point3> {
    let step = EXTENT / n as f64;
    let mut out = Vec::with_capacity(n * n * n);
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                out.push(Point3::new(
                    (x as f64 + 0.5) * step,
                    (y as f64 + 0.5) * step,
                    (z as f64 + 0.5) * step,
                ));
            }
        }
    }
    out
}

fn to_rstar_points(v: &[Point3]) -> Vec<[f64; 3]> {
    v.iter().map(|p| p.to_array()).collect()
}

fn bench_rstar_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare");
    for &n in &[16usize, 32] {
        let points = gen_lattice_points(n);
        let query = Point3::new(EXTENT * 0.4, EXTENT * 0.55, EXTENT * 0.5);
        let radius = EXTENT * 0.1;
        group.throughput(Throughput::Elements(points.len() as u64));

        group.bench_function(format!("octree_build_query_n{}", n), |b| {
            b.iter_batched(
                || {
                    let config = OctreeConfig::new().with_capacity(8);
                    Octree::with_config(Point3::ORIGIN, Point3::new(EXTENT, EXTENT, EXTENT), config)
                        .expect("valid config")
                },
                |mut tree| {
                    for p in &points {
                        let _ = tree.insert(*p);
                    }
                    let hits = tree.radius_query(query, radius).map_or(0, |v| v.len());
                    black_box(hits);
                    black_box(tree.nearest_neighbor(query).ok());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let mut tree = RTree::new();
                    for p in pts {
                        tree.insert(p);
                    }
                    let q = query.to_array();
                    let hits = tree.locate_within_distance(q, radius * radius).count();
                    black_box(hits);
                    black_box(tree.nearest_neighbor(&q).copied());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_external_compare);
criterion_main!(benches);
