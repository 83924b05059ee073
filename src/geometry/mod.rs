//! The unit cube: its 8 corners and 12 edges.
//!
//! A corner is a 3-bit coordinate `xyz`, with `x` in bit 2, `y` in bit 1
//! and `z` in bit 0. Two corners are joined by an edge when exactly one
//! of those bits differs.

use std::fmt;

use crate::{Error, Result};

mod edge;
pub use edge::Edge;

/// The amount of corners of a cube.
pub const CORNER_COUNT: usize = 8;

/// The amount of edges of a cube.
pub const EDGE_COUNT: usize = 12;

/// One of the three coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The bit of a corner index that holds the coordinate along this axis.
    pub const fn bit(self) -> u8 {
        match self {
            Axis::X => 0b100,
            Axis::Y => 0b010,
            Axis::Z => 0b001,
        }
    }

    /// The axis owning `bit`, if `bit` has exactly one of the three low
    /// bits set.
    pub const fn from_bit(bit: u8) -> Option<Axis> {
        match bit {
            0b100 => Some(Axis::X),
            0b010 => Some(Axis::Y),
            0b001 => Some(Axis::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// A corner of the unit cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Corner(u8);

impl Corner {
    /// Decode `index` into a corner. Fails for indices outside `0..8`.
    pub fn from_index(index: usize) -> Result<Corner> {
        if index < CORNER_COUNT {
            Ok(Corner(index as u8))
        } else {
            Err(Error::InvalidCorner(index))
        }
    }

    /// Create a corner from its coordinates.
    pub const fn from_coords(x: bool, y: bool, z: bool) -> Corner {
        Corner(((x as u8) << 2) | ((y as u8) << 1) | (z as u8))
    }

    /// Caller guarantees `index < 8`.
    pub(crate) const fn from_raw(index: u8) -> Corner {
        Corner(index & 0b111)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn raw(self) -> u8 {
        self.0
    }

    /// The coordinate of this corner along `axis`.
    pub const fn coord(self, axis: Axis) -> bool {
        self.0 & axis.bit() != 0
    }

    pub const fn x(self) -> bool {
        self.coord(Axis::X)
    }

    pub const fn y(self) -> bool {
        self.coord(Axis::Y)
    }

    pub const fn z(self) -> bool {
        self.coord(Axis::Z)
    }

    /// Whether `self` and `other` differ in exactly one coordinate.
    pub const fn is_adjacent(self, other: Corner) -> bool {
        (self.0 ^ other.0).count_ones() == 1
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03b}", self.0)
    }
}

/// All corners of the cube, in index order.
pub const CORNERS: [Corner; CORNER_COUNT] = {
    let mut corners = [Corner(0); CORNER_COUNT];
    let mut i = 0;
    while i < CORNER_COUNT {
        corners[i] = Corner(i as u8);
        i += 1;
    }
    corners
};

/// All edges of the cube, sorted by `(low, high)`.
///
/// The position of an edge in this array is its [`Edge::index`].
pub const EDGES: [Edge; EDGE_COUNT] = edge::build_universe();
