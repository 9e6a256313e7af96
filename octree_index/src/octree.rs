// Copyright 2025 the Octree Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Octree` API.

use alloc::vec::Vec;
use core::fmt::Debug;

use log::warn;

use crate::config::{BoundsPolicy, OctreeConfig};
use crate::error::{ConfigError, InsertError, QueryError};
use crate::node::{Limits, Node};
use crate::query::{self, Leaves, Nearest, OctreeStats};
use crate::types::{Aabb3D, Cube, Point3};

/// A dynamic point octree over a cubical volume.
///
/// The root cube is centered on the volume given at construction and its
/// half-size covers the largest of the three extents. Leaves split once they
/// hold more than [`OctreeConfig::capacity`] points; internal nodes collapse
/// back into leaves once all of their children are empty.
pub struct Octree {
    root: Node,
    bounds: Aabb3D,
    config: OctreeConfig,
    len: usize,
    /// Stored points outside `bounds`, only possible under `BoundsPolicy::Accept`.
    outliers: usize,
}

impl Octree {
    /// Create an empty octree covering the box with corners `inf` and `sup`,
    /// using the default [`OctreeConfig`].
    ///
    /// The corners may be given in any order and may coincide. They must be
    /// finite; debug builds assert this. Release builds do not check, and a
    /// NaN or infinite corner yields a volume whose containment test is
    /// meaningless, so inserts may be refused with [`InsertError::OutOfBounds`].
    /// Use [`Octree::with_config`] to get a [`ConfigError::NonFiniteBounds`]
    /// instead.
    pub fn new(inf: Point3, sup: Point3) -> Self {
        debug_assert!(
            inf.is_finite() && sup.is_finite(),
            "octree volume corners must be finite"
        );
        Self::build(inf, sup, OctreeConfig::default())
    }

    /// Create an empty octree with an explicit configuration.
    pub fn with_config(inf: Point3, sup: Point3, config: OctreeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        for corner in [inf, sup] {
            if !corner.is_finite() {
                return Err(ConfigError::NonFiniteBounds(corner));
            }
        }
        Ok(Self::build(inf, sup, config))
    }

    fn build(inf: Point3, sup: Point3, config: OctreeConfig) -> Self {
        let bounds = Aabb3D::from_corners(inf, sup);
        Self {
            root: Node::new(Cube::enclosing(&bounds)),
            bounds,
            config,
            len: 0,
            outliers: 0,
        }
    }

    fn limits(&self) -> Limits {
        Limits {
            capacity: self.config.capacity,
            max_depth: self.config.max_depth,
        }
    }

    /// Insert a point. Returns `false` if it was not stored.
    ///
    /// The usual reason is an exact duplicate. Non-finite points and, under
    /// [`BoundsPolicy::Reject`], points outside the volume are refused as well;
    /// [`Octree::try_insert`] tells these cases apart.
    pub fn insert(&mut self, point: Point3) -> bool {
        self.try_insert(point).is_ok()
    }

    /// Insert a point, reporting why it was refused.
    pub fn try_insert(&mut self, point: Point3) -> Result<(), InsertError> {
        if !point.is_finite() {
            return Err(InsertError::NonFinite(point));
        }
        let inside = self.bounds.contains(point);
        if !inside && self.config.bounds_policy == BoundsPolicy::Reject {
            return Err(InsertError::OutOfBounds(point));
        }
        let limits = self.limits();
        if !self.root.insert(point, 0, limits) {
            return Err(InsertError::Duplicate(point));
        }
        self.len += 1;
        if !inside {
            self.outliers += 1;
            warn!(
                "accepted {point} outside the indexed volume; queries skip pruning while {} such points are stored",
                self.outliers
            );
        }
        Ok(())
    }

    /// Remove a point. Returns `false` if it was not stored.
    pub fn remove(&mut self, point: Point3) -> bool {
        if !self.root.remove(point) {
            return false;
        }
        self.len -= 1;
        if !self.bounds.contains(point) {
            self.outliers -= 1;
        }
        true
    }

    /// Whether a point with exactly these coordinates is stored.
    pub fn search(&self, point: Point3) -> bool {
        self.root.search(point)
    }

    /// Alias of [`Octree::search`].
    pub fn contains(&self, point: Point3) -> bool {
        self.search(point)
    }

    /// All stored points at distance `<= radius` from `query`, in no particular order.
    ///
    /// Fails with [`QueryError::InvalidRadius`] for a negative or NaN radius
    /// and with [`QueryError::NonFiniteQuery`] for a non-finite query point.
    pub fn radius_query(&self, query: Point3, radius: f64) -> Result<Vec<Point3>, QueryError> {
        if radius.is_nan() || radius < 0.0 {
            return Err(QueryError::InvalidRadius(radius));
        }
        if !query.is_finite() {
            return Err(QueryError::NonFiniteQuery(query));
        }
        let mut out = Vec::new();
        query::within_radius(&self.root, query, radius, self.prunes(), &mut out);
        Ok(out)
    }

    /// The stored point closest to `query`.
    ///
    /// When several points are equally close, the first one met in traversal
    /// order (children in slot order `0..8`) is returned. Fails with
    /// [`QueryError::Empty`] if nothing is stored.
    pub fn nearest_neighbor(&self, query: Point3) -> Result<Point3, QueryError> {
        self.nearest_neighbor_with_distance(query).map(|(p, _)| p)
    }

    /// Like [`Octree::nearest_neighbor`], also returning the distance to the point.
    pub fn nearest_neighbor_with_distance(
        &self,
        query: Point3,
    ) -> Result<(Point3, f64), QueryError> {
        if !query.is_finite() {
            return Err(QueryError::NonFiniteQuery(query));
        }
        let mut best = Nearest::none();
        query::nearest(&self.root, query, self.prunes(), &mut best);
        best.point
            .map(|p| (p, best.distance))
            .ok_or(QueryError::Empty)
    }

    fn prunes(&self) -> bool {
        self.outliers == 0
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no points are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every point, leaving an empty root leaf over the same volume.
    pub fn clear(&mut self) {
        self.root = Node::new(self.root.cube);
        self.len = 0;
        self.outliers = 0;
    }

    /// The normalized `(inf, sup)` corners of the indexed volume.
    pub fn bounds(&self) -> (Point3, Point3) {
        (self.bounds.min, self.bounds.max)
    }

    /// The cube covered by the root node.
    pub fn root_cube(&self) -> Cube {
        self.root.cube
    }

    /// The configuration this octree was built with.
    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    /// Iterate over the leaves, depth-first with children in slot order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves::new(&self.root)
    }

    /// Iterate over every stored point, in leaf traversal order.
    pub fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.leaves().flat_map(|leaf| leaf.points.iter().copied())
    }

    /// Node and point counts.
    pub fn stats(&self) -> OctreeStats {
        query::stats(&self.root)
    }
}

impl Debug for Octree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Octree")
            .field("bounds", &self.bounds)
            .field("root_cube", &self.root.cube)
            .field("root_is_leaf", &self.root.is_leaf())
            .field("len", &self.len)
            .field("outliers", &self.outliers)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Extend<Point3> for Octree {
    fn extend<I: IntoIterator<Item = Point3>>(&mut self, iter: I) {
        for p in iter {
            let _ = self.insert(p);
        }
    }
}
