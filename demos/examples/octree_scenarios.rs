// Copyright 2025 the Octree Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octree scenarios.
//!
//! Walk through membership, removal, radius, and nearest-neighbor queries on two
//! small point sets. Set `RUST_LOG=debug` to watch leaves split and merge.
//!
//! Run:
//! - `cargo run -p octree_demos --example octree_scenarios`

use octree_index::{Octree, Point3};

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    membership();
    proximity();
}

fn membership() {
    println!("-- membership --");
    let mut tree = Octree::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
    for p in [[1.0, 1.0, 1.0], [2.0, 2.0, 2.0], [3.0, 3.0, 3.0]] {
        let p = Point3::from(p);
        println!("insert {p}: {}", tree.insert(p));
    }

    let first = Point3::new(1.0, 1.0, 1.0);
    println!("search {first}: {}", tree.search(first));
    println!("remove {first}: {}", tree.remove(first));
    println!("search {first}: {}", tree.search(first));
    for p in tree.points() {
        println!("still indexed: {p}");
    }
}

fn proximity() {
    println!("-- proximity --");
    let mut tree = Octree::new(Point3::new(0.0, 0.0, 0.0), Point3::new(20.0, 20.0, 20.0));
    tree.extend(
        [
            [1.0, 1.0, 1.0],
            [5.0, 5.0, 5.0],
            [7.0, 8.0, 9.0],
            [10.0, 10.0, 10.0],
            [15.0, 15.0, 15.0],
            [18.0, 18.0, 18.0],
            [3.0, 4.0, 3.0],
        ]
        .map(Point3::from),
    );

    let q = Point3::new(6.0, 6.0, 6.0);
    match tree.radius_query(q, 5.0) {
        Ok(hits) => {
            println!("{} points within 5 of {q}:", hits.len());
            for p in hits {
                println!("  {p} (distance {:.3})", p.distance(q));
            }
        }
        Err(err) => println!("radius query failed: {err}"),
    }
    match tree.nearest_neighbor_with_distance(q) {
        Ok((p, d)) => println!("nearest to {q}: {p} (distance {d:.3})"),
        Err(err) => println!("nearest neighbor failed: {err}"),
    }
    if let Err(err) = tree.radius_query(q, -1.0) {
        println!("negative radius: {err}");
    }
    println!("{:?}", tree.stats());
}
