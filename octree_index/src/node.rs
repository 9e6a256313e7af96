// Copyright 2025 the Octree Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octree nodes: the split/merge state machine and point routing.

use alloc::boxed::Box;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::octant::Octant;
use crate::types::{Cube, Point3};

/// Child slots of an internal node, indexed by [`Octant::index`].
pub(crate) type Children = [Option<Box<Node>>; Octant::COUNT];

/// Split parameters shared by every node of a tree.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Limits {
    pub(crate) capacity: usize,
    pub(crate) max_depth: u32,
}

pub(crate) enum Kind {
    /// Unordered points. At most `capacity` of them unless the leaf sits at the depth cap.
    Leaf(Vec<Point3>),
    /// No points of its own; absent slots are empty octants.
    Internal(Children),
}

pub(crate) struct Node {
    pub(crate) cube: Cube,
    pub(crate) kind: Kind,
}

impl Node {
    /// New empty leaf covering `cube`.
    pub(crate) const fn new(cube: Cube) -> Self {
        Self {
            cube,
            kind: Kind::Leaf(Vec::new()),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.kind, Kind::Leaf(_))
    }

    fn is_empty_leaf(&self) -> bool {
        matches!(&self.kind, Kind::Leaf(points) if points.is_empty())
    }

    /// Insert `p` into this subtree. Returns `false` if an equal point is already stored.
    ///
    /// `depth` is the depth of `self`; the root is at depth `0`.
    pub(crate) fn insert(&mut self, p: Point3, depth: u32, limits: Limits) -> bool {
        let cube = self.cube;
        match &mut self.kind {
            Kind::Leaf(points) => {
                if points.contains(&p) {
                    return false;
                }
                points.push(p);
                if points.len() > limits.capacity {
                    if depth < limits.max_depth {
                        self.split(depth, limits);
                    } else {
                        debug!(
                            "leaf at depth {depth} holds {} points, past capacity {} (depth cap)",
                            points.len(),
                            limits.capacity
                        );
                    }
                }
                true
            }
            Kind::Internal(children) => {
                let octant = cube.octant_of(p);
                trace!("routing {p} to octant {} at depth {depth}", octant.index());
                children[octant.index()]
                    .get_or_insert_with(|| Box::new(Self::new(cube.child(octant))))
                    .insert(p, depth + 1, limits)
            }
        }
    }

    /// Turn this leaf into an internal node with all eight children allocated,
    /// then redistribute its points among them.
    fn split(&mut self, depth: u32, limits: Limits) {
        let cube = self.cube;
        let points = match core::mem::replace(&mut self.kind, Kind::Leaf(Vec::new())) {
            Kind::Leaf(points) => points,
            internal @ Kind::Internal(_) => {
                self.kind = internal;
                return;
            }
        };
        debug!(
            "splitting leaf at {} (half size {}, depth {depth}) with {} points",
            cube.center,
            cube.half_size,
            points.len()
        );
        let mut children: Children =
            core::array::from_fn(|i| Some(Box::new(Self::new(cube.child(Octant::from_index(i))))));
        for p in points {
            if let Some(child) = children[cube.octant_of(p).index()].as_mut() {
                child.insert(p, depth + 1, limits);
            }
        }
        self.kind = Kind::Internal(children);
    }

    /// Remove `p` from this subtree. Returns `false` if it was not stored.
    ///
    /// Children left as empty leaves are dropped. Once every slot is absent or
    /// an empty leaf, this node collapses back into an empty leaf.
    pub(crate) fn remove(&mut self, p: Point3) -> bool {
        let cube = self.cube;
        match &mut self.kind {
            Kind::Leaf(points) => match points.iter().position(|q| *q == p) {
                Some(i) => {
                    points.swap_remove(i);
                    true
                }
                None => false,
            },
            Kind::Internal(children) => {
                let slot = &mut children[cube.octant_of(p).index()];
                let Some(child) = slot.as_mut() else {
                    return false;
                };
                if !child.remove(p) {
                    return false;
                }
                if child.is_empty_leaf() {
                    *slot = None;
                }
                if children
                    .iter()
                    .all(|c| c.as_ref().is_none_or(|c| c.is_empty_leaf()))
                {
                    debug!(
                        "merging node at {} (half size {}) back into a leaf",
                        cube.center, cube.half_size
                    );
                    self.kind = Kind::Leaf(Vec::new());
                }
                true
            }
        }
    }

    /// Whether `p` is stored in this subtree.
    pub(crate) fn search(&self, p: Point3) -> bool {
        let mut node = self;
        loop {
            match &node.kind {
                Kind::Leaf(points) => return points.contains(&p),
                Kind::Internal(children) => match &children[node.cube.octant_of(p).index()] {
                    Some(child) => node = child.as_ref(),
                    None => return false,
                },
            }
        }
    }
}
