// Copyright 2025 the Octree Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octree Index: a dynamic 3D point octree.
//!
//! Octree Index is a reusable building block for proximity queries over a changing
//! set of points, such as particle simulations, collision broad-phase, or spatial databases.
//!
//! - Insert and remove points; exact duplicates are rejected.
//! - Test membership with exact coordinate equality.
//! - Find every point within a radius, or the single nearest point.
//!
//! The tree recursively subdivides a cubical volume into eight octants. A leaf
//! splits into eight children when it holds more than [`OctreeConfig::capacity`]
//! points, and an internal node collapses back into a leaf once every child is
//! empty. Queries prune whole subtrees whose bounding sphere is out of reach and
//! re-check exact distances at the leaves, so results never depend on tree shape.
//!
//! # Example
//!
//! ```rust
//! use octree_index::{Octree, Point3};
//!
//! let mut tree = Octree::new(Point3::new(0.0, 0.0, 0.0), Point3::new(20.0, 20.0, 20.0));
//! for p in [[1.0, 1.0, 1.0], [5.0, 5.0, 5.0], [7.0, 8.0, 9.0], [3.0, 4.0, 3.0]] {
//!     assert!(tree.insert(p.into()));
//! }
//! // Exact duplicates are refused.
//! assert!(!tree.insert(Point3::new(5.0, 5.0, 5.0)));
//!
//! let q = Point3::new(6.0, 6.0, 6.0);
//! let hits = tree.radius_query(q, 5.0).unwrap();
//! assert_eq!(hits.len(), 3);
//! assert_eq!(tree.nearest_neighbor(q), Ok(Point3::new(5.0, 5.0, 5.0)));
//!
//! assert!(tree.remove(Point3::new(5.0, 5.0, 5.0)));
//! assert!(!tree.search(Point3::new(5.0, 5.0, 5.0)));
//! ```
//!
//! Capacity, depth cap, and the treatment of points outside the volume are set
//! through [`OctreeConfig`]:
//!
//! ```rust
//! use octree_index::{BoundsPolicy, Octree, OctreeConfig, Point3};
//!
//! let config = OctreeConfig::new()
//!     .with_capacity(16)
//!     .with_bounds_policy(BoundsPolicy::Accept);
//! let mut tree = Octree::with_config(Point3::ORIGIN, Point3::new(1.0, 1.0, 1.0), config).unwrap();
//!
//! // Accepted even though it is outside the unit cube.
//! assert!(tree.insert(Point3::new(5.0, 5.0, 5.0)));
//! assert_eq!(tree.nearest_neighbor(Point3::ORIGIN), Ok(Point3::new(5.0, 5.0, 5.0)));
//! ```
//!
//! ## Depth cap
//!
//! Points closer together than floating point can separate would make a leaf
//! split forever. Leaves at [`OctreeConfig::max_depth`] therefore stop splitting
//! and may hold more than `capacity` points.
//!
//! ## Float semantics
//!
//! Coordinates must be finite. Inserting a point with a NaN or infinite
//! coordinate is refused, and queries with such points return an error.
//!
//! ## Features
//!
//! - `std` (default): use the standard library for square roots.
//! - `libm`: use `libm` for square roots in `no_std` builds.
//! - `serde`: `Serialize`/`Deserialize` for [`Point3`], [`OctreeConfig`] and [`BoundsPolicy`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("octree_index requires either the `std` or `libm` feature");

pub mod config;
pub mod error;
pub mod octant;
pub mod octree;
pub mod query;
pub mod types;

mod node;

pub use config::{BoundsPolicy, OctreeConfig};
pub use error::{ConfigError, InsertError, QueryError};
pub use octant::Octant;
pub use octree::Octree;
pub use query::{LeafView, Leaves, OctreeStats};
pub use types::{Aabb3D, Cube, Point3};
