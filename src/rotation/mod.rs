//! The rotations of the cube, as permutations of its corners.

use std::fmt;

use crate::{
    geometry::{Corner, Edge, CORNERS, CORNER_COUNT, EDGES, EDGE_COUNT},
    Error, Result,
};

mod group;
pub use group::{RotationGroup, GENERATORS, ROTATION_COUNT};

/// A rigid rotation of the cube.
///
/// Stored as the image of every corner, plus the permutation of edge
/// indices that this corner permutation induces. A [`Rotation`] can only
/// be obtained from [`Rotation::identity`], [`Rotation::from_permutation`]
/// or by composing rotations, so it always preserves adjacency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rotation {
    corners: [u8; CORNER_COUNT],
    edges: [u8; EDGE_COUNT],
}

impl Rotation {
    pub fn identity() -> Rotation {
        let mut corners = [0; CORNER_COUNT];
        corners.iter_mut().enumerate().for_each(|(i, c)| *c = i as u8);

        let mut edges = [0; EDGE_COUNT];
        edges.iter_mut().enumerate().for_each(|(i, e)| *e = i as u8);

        Rotation { corners, edges }
    }

    /// Create a rotation from the image of each corner, where entry `c`
    /// of `permutation` is the corner that `c` is moved to.
    ///
    /// `name` is only used to identify the permutation in errors.
    pub fn from_permutation(
        name: &'static str,
        permutation: [u8; CORNER_COUNT],
    ) -> Result<Rotation> {
        let invalid = |reason: String| Error::InvalidGenerator { name, reason };

        let mut seen = [false; CORNER_COUNT];
        for &image in &permutation {
            let slot = seen
                .get_mut(image as usize)
                .ok_or_else(|| invalid(format!("corner {image} is out of range")))?;

            if *slot {
                return Err(invalid(format!("corner {image} appears more than once")));
            }
            *slot = true;
        }

        let mut edges = [0; EDGE_COUNT];
        for (edge, image) in EDGES.iter().zip(edges.iter_mut()) {
            let [a, b] = edge.corners().map(|c| Corner::from_raw(permutation[c.index()]));

            let moved = Edge::new(a, b).map_err(|_| {
                invalid(format!("edge {edge} is mapped onto non-adjacent corners {a} and {b}"))
            })?;

            *image = moved.index() as u8;
        }

        Ok(Rotation {
            corners: permutation,
            edges,
        })
    }

    /// The corner that `corner` is moved to.
    pub fn apply_corner(&self, corner: Corner) -> Corner {
        Corner::from_raw(self.corners[corner.index()])
    }

    /// The edge that `edge` is moved to.
    pub fn apply_edge(&self, edge: Edge) -> Edge {
        EDGES[self.apply_edge_index(edge.index())]
    }

    pub(crate) fn apply_edge_index(&self, index: usize) -> usize {
        self.edges[index] as usize
    }

    /// The rotation that first applies `self`, then `other`.
    pub fn then(&self, other: &Rotation) -> Rotation {
        let corners = self.corners.map(|c| other.corners[c as usize]);
        let edges = self.edges.map(|e| other.edges[e as usize]);

        Rotation { corners, edges }
    }

    pub fn inverse(&self) -> Rotation {
        let mut corners = [0; CORNER_COUNT];
        for (from, to) in self.corners.iter().enumerate() {
            corners[*to as usize] = from as u8;
        }

        let mut edges = [0; EDGE_COUNT];
        for (from, to) in self.edges.iter().enumerate() {
            edges[*to as usize] = from as u8;
        }

        Rotation { corners, edges }
    }

    pub fn is_identity(&self) -> bool {
        CORNERS.iter().all(|c| self.apply_corner(*c) == *c)
    }

    /// The amount of times this rotation has to be applied to get back to
    /// the identity.
    pub fn order(&self) -> usize {
        let mut current = *self;
        let mut order = 1;

        while !current.is_identity() {
            current = current.then(self);
            order += 1;
        }

        order
    }

    /// The image of every corner, in corner order.
    pub fn permutation(&self) -> [u8; CORNER_COUNT] {
        self.corners
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.corners.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x_turn() -> Rotation {
        Rotation::from_permutation("x", GENERATORS[0].1).unwrap()
    }

    #[test]
    fn identity() {
        let identity = Rotation::identity();

        assert!(identity.is_identity());
        assert_eq!(identity.order(), 1);
        for edge in EDGES {
            assert_eq!(identity.apply_edge(edge), edge);
        }
    }

    #[test]
    fn generators_are_quarter_turns() {
        for (name, permutation) in GENERATORS {
            let rotation = Rotation::from_permutation(name, permutation).unwrap();
            assert_eq!(rotation.order(), 4, "generator {name}");
        }
    }

    #[test]
    fn apply_corner_is_table_lookup() {
        let rotation = x_turn();
        let c = |i| Corner::from_index(i).unwrap();

        assert_eq!(rotation.apply_corner(c(0)), c(2));
        assert_eq!(rotation.apply_corner(c(4)), c(0));
        assert_eq!(rotation.apply_corner(c(7)), c(5));
    }

    #[test]
    fn apply_edge_recanonicalizes() {
        let rotation = x_turn();
        let c = |i| Corner::from_index(i).unwrap();

        // (0, 4) goes to (2, 0), which is stored as (0, 2).
        let edge = Edge::new(c(0), c(4)).unwrap();
        assert_eq!(rotation.apply_edge(edge), Edge::new(c(0), c(2)).unwrap());
    }

    #[test]
    fn inverse_undoes() {
        let rotation = x_turn();

        assert!(rotation.then(&rotation.inverse()).is_identity());
        assert!(rotation.inverse().then(&rotation).is_identity());
    }

    #[test]
    fn rejects_non_permutations() {
        let repeated = Rotation::from_permutation("repeated", [0, 0, 2, 3, 4, 5, 6, 7]);
        assert!(matches!(repeated, Err(Error::InvalidGenerator { name: "repeated", .. })));

        let out_of_range = Rotation::from_permutation("range", [0, 1, 2, 3, 4, 5, 6, 8]);
        assert!(out_of_range.is_err());
    }

    #[test]
    fn rejects_permutations_breaking_adjacency() {
        // Swapping two corners of one face tears the cube apart.
        let torn = Rotation::from_permutation("torn", [1, 0, 2, 3, 4, 5, 6, 7]);
        assert!(matches!(torn, Err(Error::InvalidGenerator { name: "torn", .. })));
    }

    #[test]
    fn display() {
        assert_eq!(x_turn().to_string(), "(2, 3, 6, 7, 0, 1, 4, 5)");
    }
}
