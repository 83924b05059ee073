//! Candidate shapes: subsets of the edges of a cube.

use std::fmt;

use hashbrown::HashSet;

use crate::{
    geometry::{Axis, Corner, Edge, CORNERS, EDGES, EDGE_COUNT},
    rotation::{Rotation, RotationGroup},
};

mod rotations;
pub use rotations::Rotations;

const ALL_EDGES: u16 = (1 << EDGE_COUNT) - 1;

/// For every edge, the set of other edges it shares a corner with.
const TOUCHING: [u16; EDGE_COUNT] = {
    let mut table = [0; EDGE_COUNT];
    let mut i = 0;
    while i < EDGE_COUNT {
        let [a, b] = [EDGES[i].low().raw(), EDGES[i].high().raw()];
        let mut j = 0;
        while j < EDGE_COUNT {
            let [c, d] = [EDGES[j].low().raw(), EDGES[j].high().raw()];
            if i != j && (a == c || a == d || b == c || b == d) {
                table[i] |= 1 << j;
            }
            j += 1;
        }
        i += 1;
    }
    table
};

/// A set of edges of the cube.
///
/// Stored as a bitset over [`Edge::index`]. The corners of a shape are
/// always derived from its edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shape {
    edges: u16,
}

impl Shape {
    pub const fn empty() -> Shape {
        Shape { edges: 0 }
    }

    /// The complete wireframe of the cube.
    pub const fn full() -> Shape {
        Shape { edges: ALL_EDGES }
    }

    /// Create a shape from a bitset of edge indices, ignoring bits that do
    /// not correspond to an edge.
    pub const fn from_bits_truncate(bits: u16) -> Shape {
        Shape {
            edges: bits & ALL_EDGES,
        }
    }

    pub const fn bits(&self) -> u16 {
        self.edges
    }

    pub const fn len(&self) -> usize {
        self.edges.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.edges == 0
    }

    pub fn contains(&self, edge: Edge) -> bool {
        self.edges & (1 << edge.index()) != 0
    }

    /// Add `edge`, returning whether it was not present yet.
    pub fn insert(&mut self, edge: Edge) -> bool {
        let had = self.contains(edge);
        self.edges |= 1 << edge.index();
        !had
    }

    fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..EDGE_COUNT).filter(move |&i| self.edges & (1 << i) != 0)
    }

    /// The edges of this shape, in index order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.indices().map(|i| EDGES[i])
    }

    /// The corners touched by at least one edge of this shape, in
    /// index order.
    pub fn corners(&self) -> impl Iterator<Item = Corner> + '_ {
        let touched = self
            .edges()
            .flat_map(|e| e.corners())
            .fold(0u8, |acc, c| acc | (1 << c.index()));

        CORNERS
            .into_iter()
            .filter(move |c| touched & (1 << c.index()) != 0)
    }

    /// Whether every edge shares a corner with at least one other edge.
    ///
    /// The empty shape is connected, a single edge is not.
    pub fn is_connected(&self) -> bool {
        self.indices().all(|i| TOUCHING[i] & self.edges != 0)
    }

    /// Whether this shape has at least three edges, with at least one
    /// running along each axis.
    pub fn is_three_dimensional(&self) -> bool {
        if self.len() < 3 {
            return false;
        }

        Axis::ALL
            .iter()
            .all(|axis| self.edges().any(|e| e.runs_along(*axis)))
    }

    /// Whether this shape is a connected, three-dimensional skeleton.
    pub fn is_valid(&self) -> bool {
        self.is_connected() && self.is_three_dimensional()
    }

    /// Move every edge of this shape by `rotation`.
    pub fn transform(&self, rotation: &Rotation) -> Shape {
        let edges = self
            .indices()
            .fold(0u16, |acc, i| acc | (1 << rotation.apply_edge_index(i)));

        Shape { edges }
    }

    /// Whether some rotation in `group` moves `self` onto `other`.
    pub fn is_rotation_of(&self, other: &Shape, group: &RotationGroup) -> bool {
        self.len() == other.len() && self.rotations(group).any(|r| r == *other)
    }

    /// The amount of distinct shapes `self` can be rotated into.
    pub fn orbit_size(&self, group: &RotationGroup) -> usize {
        self.rotations(group).collect::<HashSet<_>>().len()
    }
}

impl FromIterator<Edge> for Shape {
    fn from_iter<T: IntoIterator<Item = Edge>>(iter: T) -> Self {
        let mut shape = Shape::empty();
        shape.extend(iter);
        shape
    }
}

impl Extend<Edge> for Shape {
    fn extend<T: IntoIterator<Item = Edge>>(&mut self, iter: T) {
        iter.into_iter().for_each(|e| {
            self.insert(e);
        });
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, edge) in self.edges().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{edge}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(pairs: &[(usize, usize)]) -> Shape {
        pairs
            .iter()
            .map(|(a, b)| {
                let a = Corner::from_index(*a).unwrap();
                let b = Corner::from_index(*b).unwrap();
                Edge::new(a, b).unwrap()
            })
            .collect()
    }

    #[test]
    fn empty_is_connected_but_not_3d() {
        let empty = Shape::empty();

        assert!(empty.is_connected());
        assert!(!empty.is_three_dimensional());
        assert!(!empty.is_valid());
    }

    #[test]
    fn single_edge_is_disconnected() {
        let single = shape(&[(0, 1)]);

        assert!(!single.is_connected());
        assert!(!single.is_valid());
    }

    #[test]
    fn disjoint_pairs_are_connected() {
        // Each edge has a neighbour, even though the shape has two parts.
        let pairs = shape(&[(0, 1), (0, 2), (5, 7), (6, 7)]);
        assert!(pairs.is_connected());
    }

    #[test]
    fn neighbour_through_either_endpoint() {
        // (1, 3) only meets (0, 1) in the second corner of (0, 1).
        let bent = shape(&[(0, 1), (1, 3)]);
        assert!(bent.is_connected());
    }

    #[test]
    fn isolated_edge_breaks_connectivity() {
        let stray = shape(&[(0, 1), (0, 2), (0, 4), (6, 7)]);
        assert!(!stray.is_connected());
    }

    #[test]
    fn three_dimensional() {
        assert!(shape(&[(0, 1), (0, 2), (0, 4)]).is_three_dimensional());

        // A square face only spans two axes.
        let face = shape(&[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert!(face.is_connected());
        assert!(!face.is_three_dimensional());

        assert!(!shape(&[(0, 2), (0, 4)]).is_three_dimensional());
    }

    #[test]
    fn corners_are_derived() {
        let tripod = shape(&[(0, 1), (0, 2), (0, 4)]);
        let corners: Vec<_> = tripod.corners().map(|c| c.index()).collect();

        assert_eq!(corners, [0, 1, 2, 4]);
        assert_eq!(Shape::empty().corners().count(), 0);
        assert_eq!(Shape::full().corners().count(), 8);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        assert_eq!(
            shape(&[(0, 1), (0, 2), (0, 4)]),
            shape(&[(4, 0), (1, 0), (2, 0)])
        );
    }

    #[test]
    fn transform_preserves_size() {
        let group = RotationGroup::build().unwrap();
        let bent = shape(&[(0, 1), (1, 3), (3, 7)]);

        for r in &group {
            assert_eq!(bent.transform(r).len(), 3);
        }
    }

    #[test]
    fn transform_matches_edge_rotation() {
        let group = RotationGroup::build().unwrap();
        let bent = shape(&[(0, 1), (1, 3), (3, 7), (4, 6)]);

        for r in &group {
            let expected: Shape = bent.edges().map(|e| r.apply_edge(e)).collect();
            assert_eq!(bent.transform(r), expected);
        }
    }

    #[test]
    fn full_shape_is_fixed() {
        let group = RotationGroup::build().unwrap();
        let full = Shape::full();

        assert_eq!(full.len(), 12);
        assert!(full.is_valid());
        assert!(group.iter().all(|r| full.transform(r) == full));
        assert_eq!(full.orbit_size(&group), 1);
    }

    #[test]
    fn opposite_tripods_are_rotations() {
        let group = RotationGroup::build().unwrap();
        let at_0 = shape(&[(0, 1), (0, 2), (0, 4)]);
        let at_7 = shape(&[(7, 6), (7, 5), (7, 3)]);

        assert!(at_0.is_rotation_of(&at_7, &group));
        assert!(at_7.is_rotation_of(&at_0, &group));

        // One tripod at every corner.
        assert_eq!(at_0.orbit_size(&group), 8);
    }

    #[test]
    fn mirror_images_are_not_rotations() {
        let group = RotationGroup::build().unwrap();

        // A chiral path of three edges and its reflection in the x = 1/2 plane.
        let path = shape(&[(0, 1), (1, 3), (3, 7)]);
        let mirrored = shape(&[(4, 5), (5, 7), (7, 3)]);

        assert!(!path.is_rotation_of(&mirrored, &group));
    }

    #[test]
    fn display() {
        assert_eq!(shape(&[(2, 0), (0, 1)]).to_string(), "[(0, 1), (0, 2)]");
        assert_eq!(Shape::empty().to_string(), "[]");
    }
}
