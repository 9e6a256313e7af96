// Copyright 2025 the Octree Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning knobs for an [`Octree`](crate::Octree).

use crate::error::ConfigError;

/// What to do with points outside the volume the octree was built for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundsPolicy {
    /// Refuse out-of-volume points.
    #[default]
    Reject,
    /// Store out-of-volume points anyway.
    ///
    /// Such points are routed by the usual octant test but may sit outside the
    /// cube of the node holding them. While any are stored, queries visit every
    /// node instead of pruning by cube bounds, so results stay exact.
    Accept,
}

/// Configuration for an [`Octree`](crate::Octree).
///
/// ```
/// use octree_index::{BoundsPolicy, OctreeConfig};
///
/// let config = OctreeConfig::new()
///     .with_capacity(8)
///     .with_max_depth(16)
///     .with_bounds_policy(BoundsPolicy::Accept);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OctreeConfig {
    /// Maximum number of points a leaf holds before it splits.
    pub capacity: usize,
    /// Depth at which leaves stop splitting. The root is at depth `0`.
    ///
    /// Leaves at this depth keep accepting points past `capacity`, which bounds
    /// the tree height when many points crowd into a tiny region.
    pub max_depth: u32,
    /// Handling of points outside the indexed volume.
    pub bounds_policy: BoundsPolicy,
}

impl OctreeConfig {
    /// Default leaf capacity.
    pub const DEFAULT_CAPACITY: usize = 2;
    /// Default depth cap.
    pub const DEFAULT_MAX_DEPTH: u32 = 32;
    /// Largest accepted depth cap.
    pub const MAX_DEPTH_LIMIT: u32 = 256;

    /// Configuration with default values.
    pub const fn new() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            bounds_policy: BoundsPolicy::Reject,
        }
    }

    /// Set the leaf capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the depth cap.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the out-of-volume policy.
    #[must_use]
    pub fn with_bounds_policy(mut self, bounds_policy: BoundsPolicy) -> Self {
        self.bounds_policy = bounds_policy;
        self
    }

    /// Check that the values can drive an octree.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.max_depth > Self::MAX_DEPTH_LIMIT {
            return Err(ConfigError::MaxDepthTooLarge {
                max_depth: self.max_depth,
                limit: Self::MAX_DEPTH_LIMIT,
            });
        }
        Ok(())
    }
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self::new()
    }
}
