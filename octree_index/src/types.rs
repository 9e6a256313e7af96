// Copyright 2025 the Octree Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::fmt;

use crate::octant::Octant;

/// `sqrt(3)`, the ratio between a cube's half-diagonal and its half-size.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A point in 3D space.
///
/// Equality is exact, component-wise comparison with no tolerance, so two
/// points are the same index entry only if all three coordinates compare equal.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// The origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a point from its coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        sqrt(self.distance_squared(other))
    }

    /// Whether all three coordinates are finite (not NaN or infinite).
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        Self::new(
            0.5 * (self.x + other.x),
            0.5 * (self.y + other.y),
            0.5 * (self.z + other.z),
        )
    }

    /// Coordinates as an `[x, y, z]` array.
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        p.to_array()
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Axis-aligned bounding box in 3D, inclusive on every face.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb3D {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3D {
    /// Create a box from two opposite corners given in any order.
    pub fn from_corners(a: Point3, b: Point3) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Whether the box contains the point. Assumes no NaN.
    pub fn contains(&self, p: Point3) -> bool {
        self.min.x <= p.x
            && p.x <= self.max.x
            && self.min.y <= p.y
            && p.y <= self.max.y
            && self.min.z <= p.z
            && p.z <= self.max.z
    }

    /// Largest of the three axis extents.
    pub fn max_extent(&self) -> f64 {
        (self.max.x - self.min.x)
            .max(self.max.y - self.min.y)
            .max(self.max.z - self.min.z)
    }
}

/// A cube described by its center and half of its side length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cube {
    /// Center of the cube.
    pub center: Point3,
    /// Half of the side length.
    pub half_size: f64,
}

impl Cube {
    /// Create a cube from its center and half-size.
    pub const fn new(center: Point3, half_size: f64) -> Self {
        Self { center, half_size }
    }

    /// Smallest cube centered on the box whose half-size covers the box's largest extent.
    pub fn enclosing(aabb: &Aabb3D) -> Self {
        Self {
            center: aabb.min.midpoint(aabb.max),
            half_size: 0.5 * aabb.max_extent(),
        }
    }

    /// Minimum corner.
    pub fn min(&self) -> Point3 {
        let h = self.half_size;
        Point3::new(self.center.x - h, self.center.y - h, self.center.z - h)
    }

    /// Maximum corner.
    pub fn max(&self) -> Point3 {
        let h = self.half_size;
        Point3::new(self.center.x + h, self.center.y + h, self.center.z + h)
    }

    /// Whether the cube (faces included) contains the point.
    pub fn contains(&self, p: Point3) -> bool {
        Aabb3D {
            min: self.min(),
            max: self.max(),
        }
        .contains(p)
    }

    /// Radius of the sphere around `center` that passes through every corner.
    ///
    /// Every point of the cube lies within this distance of the center.
    #[inline]
    pub fn bounding_radius(&self) -> f64 {
        self.half_size * SQRT_3
    }

    /// The octant of this cube that `p` routes to.
    #[inline]
    pub fn octant_of(&self, p: Point3) -> Octant {
        Octant::of(self.center, p)
    }

    /// The sub-cube occupying `octant`.
    pub fn child(&self, octant: Octant) -> Self {
        let quarter = 0.5 * self.half_size;
        let [sx, sy, sz] = octant.signs();
        Self {
            center: Point3::new(
                self.center.x + sx * quarter,
                self.center.y + sy * quarter,
                self.center.z + sz * quarter,
            ),
            half_size: quarter,
        }
    }

    /// The eight corners, ordered by octant index.
    pub fn corners(&self) -> [Point3; 8] {
        let h = self.half_size;
        Octant::EACH.map(|o| {
            let [sx, sy, sz] = o.signs();
            Point3::new(
                self.center.x + sx * h,
                self.center.y + sy * h,
                self.center.z + sz * h,
            )
        })
    }
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn sqrt(v: f64) -> f64 {
    v.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn sqrt(v: f64) -> f64 {
    libm::sqrt(v)
}
