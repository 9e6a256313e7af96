// Copyright 2025 the Octree Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Branch-and-bound traversals and read-only walks over the node tree.
//!
//! Both range and nearest-neighbor searches prune with the same test: a node is
//! skipped when the distance from its center to the query exceeds the radius of
//! the sphere circumscribing its cube plus the search radius. The sphere contains
//! the whole cube, so the test never drops a qualifying point; it only visits
//! some nodes a tighter cube test would skip. Leaves always re-check exact
//! distances, so the pruning never changes results.
//!
//! The two sides of the test are rounded differently, and child centers drift
//! from their exact values as they are derived level by level, so the reach is
//! widened by a slack proportional to the magnitudes involved. A point at exactly
//! `radius` on a cube corner must never be pruned away.
//!
//! The test is only sound while every point lies inside the cube of the leaf that
//! stores it. Callers pass `prune = false` when that may not hold.

use alloc::vec::Vec;

use crate::node::{Kind, Node};
use crate::types::{Cube, Point3};

/// Relative widening of the pruning reach.
///
/// Covers a few ulps of distance rounding plus one ulp of center drift per level
/// down to [`OctreeConfig::MAX_DEPTH_LIMIT`](crate::OctreeConfig::MAX_DEPTH_LIMIT).
const PRUNE_SLACK: f64 = 512.0 * f64::EPSILON;

#[inline]
fn magnitude(p: Point3) -> f64 {
    p.x.abs().max(p.y.abs()).max(p.z.abs())
}

#[inline]
fn out_of_reach(node: &Node, query: Point3, radius: f64) -> bool {
    let center = node.cube.center;
    let reach = node.cube.bounding_radius() + radius;
    let scale = reach + magnitude(center) + magnitude(query);
    center.distance(query) > reach + scale * PRUNE_SLACK
}

/// Append every stored point within `radius` of `query` to `out`.
pub(crate) fn within_radius(
    node: &Node,
    query: Point3,
    radius: f64,
    prune: bool,
    out: &mut Vec<Point3>,
) {
    if prune && out_of_reach(node, query, radius) {
        return;
    }
    match &node.kind {
        Kind::Leaf(points) => out.extend(
            points
                .iter()
                .copied()
                .filter(|p| p.distance(query) <= radius),
        ),
        Kind::Internal(children) => {
            for child in children.iter().flatten() {
                within_radius(child, query, radius, prune, out);
            }
        }
    }
}

/// Best candidate found so far by [`nearest`].
#[derive(Copy, Clone, Debug)]
pub(crate) struct Nearest {
    pub(crate) point: Option<Point3>,
    pub(crate) distance: f64,
}

impl Nearest {
    pub(crate) const fn none() -> Self {
        Self {
            point: None,
            distance: f64::INFINITY,
        }
    }
}

/// Update `best` with the closest stored point to `query`.
///
/// Only a strictly smaller distance replaces the current best and children are
/// visited in slot order, so among equidistant points the first one reached wins.
pub(crate) fn nearest(node: &Node, query: Point3, prune: bool, best: &mut Nearest) {
    if prune && out_of_reach(node, query, best.distance) {
        return;
    }
    match &node.kind {
        Kind::Leaf(points) => {
            for p in points {
                let d = p.distance(query);
                if d < best.distance {
                    best.distance = d;
                    best.point = Some(*p);
                }
            }
        }
        Kind::Internal(children) => {
            for child in children.iter().flatten() {
                nearest(child, query, prune, best);
            }
        }
    }
}

/// A leaf visited by [`Leaves`].
#[derive(Copy, Clone, Debug)]
pub struct LeafView<'a> {
    /// Region covered by the leaf.
    pub cube: Cube,
    /// Depth of the leaf; the root is at depth `0`.
    pub depth: u32,
    /// Points stored in the leaf, in no particular order.
    pub points: &'a [Point3],
}

/// Depth-first iterator over the leaves of an octree, children in slot order.
///
/// Created by [`Octree::leaves`](crate::Octree::leaves).
#[derive(Clone)]
pub struct Leaves<'a> {
    stack: Vec<(&'a Node, u32)>,
}

impl<'a> Leaves<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        let mut stack = Vec::with_capacity(16);
        stack.push((root, 0));
        Self { stack }
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = LeafView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth)) = self.stack.pop() {
            match &node.kind {
                Kind::Leaf(points) => {
                    return Some(LeafView {
                        cube: node.cube,
                        depth,
                        points,
                    });
                }
                Kind::Internal(children) => {
                    // Reverse so slot 0 is popped first.
                    for child in children.iter().rev().flatten() {
                        self.stack.push((child.as_ref(), depth + 1));
                    }
                }
            }
        }
        None
    }
}

impl core::fmt::Debug for Leaves<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Leaves")
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}

/// Node counts gathered by [`Octree::stats`](crate::Octree::stats).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OctreeStats {
    /// Stored points.
    pub points: usize,
    /// Leaf nodes, including empty ones.
    pub leaves: usize,
    /// Internal nodes.
    pub internal_nodes: usize,
    /// Depth of the deepest node; `0` for a lone root.
    pub depth: u32,
}

pub(crate) fn stats(root: &Node) -> OctreeStats {
    let mut stats = OctreeStats::default();
    let mut stack = alloc::vec![(root, 0_u32)];
    while let Some((node, depth)) = stack.pop() {
        stats.depth = stats.depth.max(depth);
        match &node.kind {
            Kind::Leaf(points) => {
                stats.leaves += 1;
                stats.points += points.len();
            }
            Kind::Internal(children) => {
                stats.internal_nodes += 1;
                for child in children.iter().flatten() {
                    stack.push((child.as_ref(), depth + 1));
                }
            }
        }
    }
    stats
}
