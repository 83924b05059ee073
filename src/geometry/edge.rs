use std::fmt;

use super::{Axis, Corner, CORNER_COUNT, EDGES, EDGE_COUNT};
use crate::{Error, Result};

/// An edge of the cube: a pair of adjacent corners, lowest corner first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    low: Corner,
    high: Corner,
}

const NO_EDGE: u8 = u8::MAX;

/// Position of the edge `(a, b)` in [`EDGES`], or `NO_EDGE`.
const EDGE_INDEX: [[u8; CORNER_COUNT]; CORNER_COUNT] = {
    let mut table = [[NO_EDGE; CORNER_COUNT]; CORNER_COUNT];
    let mut i = 0;
    while i < EDGE_COUNT {
        let (a, b) = (EDGES[i].low.raw() as usize, EDGES[i].high.raw() as usize);
        table[a][b] = i as u8;
        table[b][a] = i as u8;
        i += 1;
    }
    table
};

pub(super) const fn build_universe() -> [Edge; EDGE_COUNT] {
    let placeholder = Edge {
        low: Corner::from_raw(0),
        high: Corner::from_raw(0),
    };
    let mut edges = [placeholder; EDGE_COUNT];
    let mut found = 0;

    let mut a = 0;
    while a < CORNER_COUNT as u8 {
        let mut b = a + 1;
        while b < CORNER_COUNT as u8 {
            if Corner::from_raw(a).is_adjacent(Corner::from_raw(b)) {
                edges[found] = Edge {
                    low: Corner::from_raw(a),
                    high: Corner::from_raw(b),
                };
                found += 1;
            }
            b += 1;
        }
        a += 1;
    }

    assert!(found == EDGE_COUNT);
    edges
}

impl Edge {
    /// Create the edge joining `a` and `b`, in either order.
    ///
    /// Fails with [`Error::InvalidEdge`] if the corners are equal or not
    /// adjacent.
    pub fn new(a: Corner, b: Corner) -> Result<Edge> {
        if a.is_adjacent(b) {
            Ok(Self::ordered(a, b))
        } else {
            Err(Error::InvalidEdge { a, b })
        }
    }

    /// Caller guarantees that `a` and `b` are adjacent.
    pub(crate) fn ordered(a: Corner, b: Corner) -> Edge {
        debug_assert!(a.is_adjacent(b), "{a} and {b} are not adjacent");

        if a < b {
            Edge { low: a, high: b }
        } else {
            Edge { low: b, high: a }
        }
    }

    /// Look up an edge by its position in [`EDGES`].
    pub fn from_index(index: usize) -> Option<Edge> {
        EDGES.get(index).copied()
    }

    /// The position of this edge in [`EDGES`].
    pub fn index(&self) -> usize {
        EDGE_INDEX[self.low.index()][self.high.index()] as usize
    }

    pub const fn low(&self) -> Corner {
        self.low
    }

    pub const fn high(&self) -> Corner {
        self.high
    }

    pub fn corners(&self) -> [Corner; 2] {
        [self.low, self.high]
    }

    /// The axis this edge runs along.
    pub fn axis(&self) -> Axis {
        match Axis::from_bit(self.low.raw() ^ self.high.raw()) {
            Some(axis) => axis,
            None => unreachable!("edge endpoints always differ in one bit"),
        }
    }

    pub fn runs_along(&self, axis: Axis) -> bool {
        self.axis() == axis
    }

    /// Whether `self` and `other` are distinct edges sharing a corner.
    pub fn touches(&self, other: &Edge) -> bool {
        self != other
            && (self.low == other.low
                || self.low == other.high
                || self.high == other.low
                || self.high == other.high)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low.index(), self.high.index())
    }
}
