// Copyright 2025 the Octree Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use octree_index::{Octree, OctreeConfig, Point3};

const EXTENT: f64 = 1000.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn next_point(&mut self, extent: f64) -> Point3 {
        Point3::new(
            self.next_f64() * extent,
            self.next_f64() * extent,
            self.next_f64() * extent,
        )
    }
}

fn gen_uniform_points(count: usize) -> Vec<Point3> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count).map(|_| rng.next_point(EXTENT)).collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point3> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let c = rng.next_point(EXTENT - spread);
        for _ in 0..per_cluster {
            let o = rng.next_point(spread);
            out.push(Point3::new(c.x + o.x, c.y + o.y, c.z + o.z));
        }
    }
    out
}

fn build(points: &[Point3], capacity: usize) -> Octree {
    let config = OctreeConfig::new().with_capacity(capacity);
    let mut tree = Octree::with_config(Point3::ORIGIN, Point3::new(EXTENT, EXTENT, EXTENT), config)
        .expect("valid config");
    tree.extend(points.iter().copied());
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[1_000usize, 10_000, 50_000] {
        let points = gen_uniform_points(n);
        group.throughput(Throughput::Elements(n as u64));
        for &capacity in &[2usize, 8, 32] {
            group.bench_function(format!("uniform_n{}_cap{}", n, capacity), |b| {
                b.iter_batched(
                    || {
                        let config = OctreeConfig::new().with_capacity(capacity);
                        Octree::with_config(
                            Point3::ORIGIN,
                            Point3::new(EXTENT, EXTENT, EXTENT),
                            config,
                        )
                        .expect("valid config")
                    },
                    |mut tree| {
                        for p in &points {
                            let _ = tree.insert(*p);
                        }
                        black_box(tree.len());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    let points = gen_clustered_points(32, 256, 5.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("clustered_cap8", |b| {
        b.iter_batched(
            || build(&[], 8),
            |mut tree| {
                for p in &points {
                    let _ = tree.insert(*p);
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    let points = gen_uniform_points(10_000);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("uniform_n10000_cap8", |b| {
        b.iter_batched(
            || build(&points, 8),
            |mut tree| {
                for p in &points {
                    let _ = tree.remove(*p);
                }
                black_box(tree.is_empty());
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let points = gen_uniform_points(50_000);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let queries: Vec<Point3> = (0..256).map(|_| rng.next_point(EXTENT)).collect();
    group.throughput(Throughput::Elements(queries.len() as u64));
    for &capacity in &[2usize, 8, 32] {
        let tree = build(&points, capacity);
        group.bench_function(format!("search_cap{}", capacity), |b| {
            b.iter(|| {
                let found = points[..queries.len()]
                    .iter()
                    .filter(|p| tree.search(**p))
                    .count();
                black_box(found);
            })
        });
        for &radius in &[10.0_f64, 50.0] {
            group.bench_function(format!("radius{}_cap{}", radius, capacity), |b| {
                b.iter(|| {
                    let mut hits = 0;
                    for q in &queries {
                        hits += tree.radius_query(*q, radius).map_or(0, |v| v.len());
                    }
                    black_box(hits);
                })
            });
        }
        group.bench_function(format!("nearest_cap{}", capacity), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.nearest_neighbor(*q).ok());
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_remove, bench_queries);
criterion_main!(benches);
