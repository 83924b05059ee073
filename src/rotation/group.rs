use hashbrown::HashSet;

use super::Rotation;
use crate::{geometry::CORNER_COUNT, Error, Result};

/// The amount of rotational symmetries of a cube.
pub const ROTATION_COUNT: usize = 24;

/// Quarter turns about the x, y and z axes, as the image of each corner.
///
/// Looking at the back face (`z = 0`) and the front face (`z = 1`):
///
/// ```text
///   back    front
///   2 . 3   6 . 7
///   .   .   .   .
///   0 . 1   4 . 5
/// ```
#[rustfmt::skip]
pub const GENERATORS: [(&str, [u8; CORNER_COUNT]); 3] = [
    ("x", [2, 3, 6, 7, 0, 1, 4, 5]),
    ("y", [4, 0, 6, 2, 5, 1, 7, 3]),
    ("z", [1, 3, 0, 2, 5, 7, 4, 6]),
];

/// All rotations of the cube.
///
/// Elements are kept in the order they were discovered while closing over
/// the generators, starting with the identity.
#[derive(Clone, Debug)]
pub struct RotationGroup {
    elements: Vec<Rotation>,
}

impl RotationGroup {
    /// Build the group generated by [`GENERATORS`].
    pub fn build() -> Result<RotationGroup> {
        Self::from_generators(&GENERATORS)
    }

    /// Build the group generated by `generators`, breadth first.
    ///
    /// Fails unless the closure holds exactly [`ROTATION_COUNT`] elements.
    pub fn from_generators(
        generators: &[(&'static str, [u8; CORNER_COUNT])],
    ) -> Result<RotationGroup> {
        let generators = generators
            .iter()
            .map(|&(name, permutation)| Rotation::from_permutation(name, permutation))
            .collect::<Result<Vec<_>>>()?;

        let identity = Rotation::identity();

        let mut seen = HashSet::new();
        seen.insert(identity);

        let mut elements = vec![identity];
        let mut next = 0;

        while let Some(current) = elements.get(next).copied() {
            for generator in &generators {
                let product = current.then(generator);
                if seen.insert(product) {
                    elements.push(product);
                }
            }
            next += 1;
        }

        if elements.len() != ROTATION_COUNT {
            return Err(Error::RotationGroupIncomplete {
                expected: ROTATION_COUNT,
                found: elements.len(),
            });
        }

        Ok(RotationGroup { elements })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rotation> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rotation> {
        self.elements.iter()
    }

    pub fn contains(&self, rotation: &Rotation) -> bool {
        self.elements.contains(rotation)
    }
}

impl<'a> IntoIterator for &'a RotationGroup {
    type Item = &'a Rotation;
    type IntoIter = std::slice::Iter<'a, Rotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CORNERS, EDGES};

    #[test]
    fn has_24_distinct_rotations() {
        let group = RotationGroup::build().unwrap();

        assert_eq!(group.len(), 24);

        let distinct: HashSet<_> = group.iter().collect();
        assert_eq!(distinct.len(), 24);
    }

    #[test]
    fn starts_with_identity() {
        let group = RotationGroup::build().unwrap();

        assert!(group.get(0).unwrap().is_identity());
        assert_eq!(group.iter().filter(|r| r.is_identity()).count(), 1);
    }

    #[test]
    fn closed_under_composition() {
        let group = RotationGroup::build().unwrap();

        for a in &group {
            for b in &group {
                assert!(group.contains(&a.then(b)), "{a} then {b} left the group");
            }
        }
    }

    #[test]
    fn contains_inverses() {
        let group = RotationGroup::build().unwrap();

        for r in &group {
            let inverse = r.inverse();
            assert!(group.contains(&inverse));
            assert!(r.then(&inverse).is_identity());
        }
    }

    #[test]
    fn preserves_adjacency() {
        let group = RotationGroup::build().unwrap();

        for r in &group {
            for a in CORNERS {
                for b in CORNERS {
                    assert_eq!(
                        a.is_adjacent(b),
                        r.apply_corner(a).is_adjacent(r.apply_corner(b))
                    );
                }
            }
        }
    }

    #[test]
    fn edge_images_are_a_bijection() {
        let group = RotationGroup::build().unwrap();

        for r in &group {
            let images: HashSet<_> = EDGES.iter().map(|e| r.apply_edge(*e)).collect();
            assert_eq!(images.len(), 12);
            assert!(EDGES.iter().all(|e| images.contains(e)));
        }
    }

    #[test]
    fn rotation_orders() {
        let group = RotationGroup::build().unwrap();

        // indexed by order
        let mut orders = [0; 5];
        for r in &group {
            orders[r.order()] += 1;
        }

        assert_eq!(orders, [0, 1, 9, 8, 6]);
    }

    #[test]
    fn is_deterministic() {
        let a = RotationGroup::build().unwrap();
        let b = RotationGroup::build().unwrap();

        assert!(a.iter().eq(b.iter()));
    }

    #[test]
    fn single_generator_is_incomplete() {
        let result = RotationGroup::from_generators(&GENERATORS[..1]);

        assert_eq!(
            result.unwrap_err(),
            Error::RotationGroupIncomplete {
                expected: 24,
                found: 4
            }
        );
    }

    #[test]
    fn two_generators_suffice() {
        let group = RotationGroup::from_generators(&GENERATORS[..2]).unwrap();
        assert_eq!(group.len(), 24);
    }
}
