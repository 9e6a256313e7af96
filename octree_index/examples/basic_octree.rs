// Copyright 2025 the Octree Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Octree Index: insert, search, remove, and query.

use octree_index::{Octree, Point3};

fn main() {
    let mut tree = Octree::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
    for p in [[1.0, 1.0, 1.0], [2.0, 2.0, 2.0], [3.0, 3.0, 3.0]] {
        tree.insert(p.into());
    }
    println!("stats after inserts: {:?}", tree.stats());

    let p = Point3::new(1.0, 1.0, 1.0);
    println!("search {p}: {}", tree.search(p));
    println!("remove {p}: {}", tree.remove(p));
    println!("search {p}: {}", tree.search(p));

    // Query around a point
    let q = Point3::new(2.5, 2.5, 2.5);
    println!("within 1.0 of {q}: {:?}", tree.radius_query(q, 1.0));
    println!("nearest to {q}: {:?}", tree.nearest_neighbor(q));
}
