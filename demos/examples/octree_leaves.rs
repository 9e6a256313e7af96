// Copyright 2025 the Octree Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octree leaves.
//!
//! Insert a handful of points, then print every leaf cube with its depth and
//! points, the way a viewer would draw the subdivision one color per level.
//!
//! Run:
//! - `cargo run -p octree_demos --example octree_leaves`

use octree_index::{Octree, Point3};

const COLORS: [&str; 8] = [
    "blue", "green", "red", "yellow", "purple", "orange", "cyan", "magenta",
];

fn main() {
    env_logger::init();

    let mut tree = Octree::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
    tree.extend(
        [
            [5.0, 5.0, 5.0],
            [1.0, 1.0, 1.0],
            [1.5, 1.2, 1.1],
            [2.0, 1.0, 1.5],
            [8.0, 2.0, 9.0],
            [9.5, 9.5, 9.5],
        ]
        .map(Point3::from),
    );

    for leaf in tree.leaves().filter(|l| !l.points.is_empty()) {
        let indent = "  ".repeat(leaf.depth as usize);
        println!(
            "{indent}[{}] depth {} cube {} .. {}",
            COLORS[leaf.depth as usize % COLORS.len()],
            leaf.depth,
            leaf.cube.min(),
            leaf.cube.max(),
        );
        for p in leaf.points {
            println!("{indent}  * {p}");
        }
    }

    let stats = tree.stats();
    println!(
        "{} points in {} leaves under {} internal nodes, depth {}",
        stats.points, stats.leaves, stats.internal_nodes, stats.depth
    );

    tree.clear();
    println!("after clear: {:?}", tree.stats());
}
