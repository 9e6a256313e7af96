// Copyright 2025 the Octree Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octree configuration.
//!
//! Load an `OctreeConfig` from a RON file (or use a built-in one), fill a tree
//! with a lattice of points, and report its shape.
//!
//! Run:
//! - `cargo run -p octree_demos --example octree_config`
//! - `cargo run -p octree_demos --example octree_config -- path/to/config.ron`

use std::process::ExitCode;

use octree_index::{Octree, OctreeConfig, Point3};

const BUILTIN: &str = "(capacity: 4, max_depth: 12, bounds_policy: Reject)";

fn load_config() -> Result<OctreeConfig, String> {
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?,
        None => BUILTIN.to_owned(),
    };
    ron::from_str(&text).map_err(|e| format!("invalid config: {e}"))
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("using {config:?}");

    let mut tree = match Octree::with_config(Point3::ORIGIN, Point3::new(16.0, 16.0, 16.0), config)
    {
        Ok(tree) => tree,
        Err(err) => {
            log::error!("cannot build octree: {err}");
            return ExitCode::FAILURE;
        }
    };

    for x in 0..8 {
        for y in 0..8 {
            for z in 0..8 {
                let p = Point3::new(f64::from(x) * 2.0, f64::from(y) * 2.0, f64::from(z) * 2.0);
                if let Err(err) = tree.try_insert(p) {
                    log::warn!("skipped: {err}");
                }
            }
        }
    }
    // Outside the volume: refused under the default policy.
    if let Err(err) = tree.try_insert(Point3::new(40.0, 0.0, 0.0)) {
        println!("refused: {err}");
    }

    let stats = tree.stats();
    println!("{stats:?}");
    let q = Point3::new(7.3, 7.9, 8.1);
    println!("nearest to {q}: {:?}", tree.nearest_neighbor(q));
    println!(
        "points within 2.5 of {q}: {}",
        tree.radius_query(q, 2.5).map_or(0, |v| v.len())
    );
    ExitCode::SUCCESS
}
