// Copyright 2025 the Octree Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Expected outcomes (duplicates, absent points, empty results) are reported as
//! plain booleans or empty collections. These types cover the cases where a
//! caller asked for more detail, or passed an argument that can never be valid.

use crate::types::Point3;

/// Reasons an insertion was refused by [`Octree::try_insert`](crate::Octree::try_insert).
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum InsertError {
    /// A point with exactly the same coordinates is already stored.
    #[error("point {0} is already indexed")]
    Duplicate(Point3),
    /// The point lies outside the indexed volume and the bounds policy rejects it.
    #[error("point {0} lies outside the indexed volume")]
    OutOfBounds(Point3),
    /// At least one coordinate is NaN or infinite.
    #[error("point {0} has a non-finite coordinate")]
    NonFinite(Point3),
}

/// Errors returned by the query operations.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// The radius was negative or NaN.
    #[error("query radius must be a non-negative number, got {0}")]
    InvalidRadius(f64),
    /// The query point has a NaN or infinite coordinate.
    #[error("query point {0} has a non-finite coordinate")]
    NonFiniteQuery(Point3),
    /// No points are indexed, so there is no nearest neighbor.
    #[error("no points indexed")]
    Empty,
}

/// Errors detected when building an [`Octree`](crate::Octree) from an [`OctreeConfig`](crate::OctreeConfig).
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Leaves must be able to hold at least one point.
    #[error("leaf capacity must be at least 1")]
    ZeroCapacity,
    /// The depth cap exceeds what the recursive operations support.
    #[error("max depth {max_depth} exceeds the supported limit of {limit}")]
    MaxDepthTooLarge {
        /// Requested depth cap.
        max_depth: u32,
        /// Largest accepted depth cap.
        limit: u32,
    },
    /// A corner of the indexed volume has a NaN or infinite coordinate.
    #[error("volume corner {0} has a non-finite coordinate")]
    NonFiniteBounds(Point3),
}
