// Copyright 2025 the Octree Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octant addressing.
//!
//! An octant is identified by three bits, one per axis: bit 0 for x, bit 1 for y
//! and bit 2 for z. A set bit selects the half of the cube whose coordinates are
//! greater than or equal to the center on that axis. The bit pattern doubles as
//! the child slot index, so `Octant::X | Octant::Z` is slot `5`.

use crate::types::Point3;

bitflags::bitflags! {
    /// One of the eight octants of a cube, encoded as per-axis side bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Octant: u8 {
        /// Greater-or-equal side on the x axis.
        const X = 0b0000_0001;
        /// Greater-or-equal side on the y axis.
        const Y = 0b0000_0010;
        /// Greater-or-equal side on the z axis.
        const Z = 0b0000_0100;
    }
}

impl Octant {
    /// Number of octants in a cube.
    pub const COUNT: usize = 8;

    /// Every octant, in slot order.
    pub const EACH: [Self; 8] = [
        Self::from_bits_retain(0),
        Self::from_bits_retain(1),
        Self::from_bits_retain(2),
        Self::from_bits_retain(3),
        Self::from_bits_retain(4),
        Self::from_bits_retain(5),
        Self::from_bits_retain(6),
        Self::from_bits_retain(7),
    ];

    /// The octant of a cube centered at `center` that `p` falls into.
    ///
    /// Each axis compares with `>=`, so points on a dividing plane go to the upper half.
    #[inline]
    pub fn of(center: Point3, p: Point3) -> Self {
        let mut octant = Self::empty();
        octant.set(Self::X, p.x >= center.x);
        octant.set(Self::Y, p.y >= center.y);
        octant.set(Self::Z, p.z >= center.z);
        octant
    }

    /// Slot index in `0..8`.
    #[inline]
    pub const fn index(self) -> usize {
        self.bits() as usize
    }

    /// Octant for a slot index. Bits above the low three are ignored.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The index is masked to three bits before narrowing."
    )]
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::from_bits_retain((index & 0b111) as u8)
    }

    /// Per-axis sign of this octant's offset from the parent center: `1.0` or `-1.0`.
    pub fn signs(self) -> [f64; 3] {
        let sign = |flag: Self| if self.contains(flag) { 1.0 } else { -1.0 };
        [sign(Self::X), sign(Self::Y), sign(Self::Z)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_bits_follow_axes() {
        let c = Point3::new(5.0, 5.0, 5.0);
        assert_eq!(Octant::of(c, Point3::new(1.0, 1.0, 1.0)).index(), 0);
        assert_eq!(Octant::of(c, Point3::new(6.0, 1.0, 1.0)).index(), 1);
        assert_eq!(Octant::of(c, Point3::new(1.0, 6.0, 1.0)).index(), 2);
        assert_eq!(Octant::of(c, Point3::new(1.0, 1.0, 6.0)).index(), 4);
        assert_eq!(Octant::of(c, Point3::new(6.0, 6.0, 6.0)).index(), 7);
    }

    #[test]
    fn center_plane_goes_to_upper_half() {
        let c = Point3::new(0.0, 0.0, 0.0);
        assert_eq!(Octant::of(c, c), Octant::X | Octant::Y | Octant::Z);
        assert_eq!(Octant::of(c, Point3::new(0.0, -1.0, -1.0)), Octant::X);
    }

    #[test]
    fn from_index_round_trips_slots() {
        for (i, o) in Octant::EACH.iter().enumerate() {
            assert_eq!(o.index(), i);
            assert_eq!(Octant::from_index(i), *o);
        }
        assert_eq!(Octant::from_index(9), Octant::from_index(1));
    }

    #[test]
    fn signs_match_bits() {
        assert_eq!(Octant::empty().signs(), [-1.0, -1.0, -1.0]);
        assert_eq!((Octant::X | Octant::Z).signs(), [1.0, -1.0, 1.0]);
    }
}
