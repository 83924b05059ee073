//! This module implements an iterator that yields all of the rotations
//! of a shape.

use std::iter::FusedIterator;

use super::Shape;
use crate::rotation::{Rotation, RotationGroup};

/// Iterator over the images of a [`Shape`] under every rotation of a
/// [`RotationGroup`], in group order.
///
/// Images are not deduplicated: symmetric shapes yield the same image
/// more than once.
pub struct Rotations<'a> {
    base: Shape,
    inner: std::slice::Iter<'a, Rotation>,
}

impl Iterator for Rotations<'_> {
    type Item = Shape;

    fn next(&mut self) -> Option<Self::Item> {
        let rotation = self.inner.next()?;
        Some(self.base.transform(rotation))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Rotations<'_> {}

impl FusedIterator for Rotations<'_> {}

impl Shape {
    /// Obtain an iterator yielding `self` rotated by every element of
    /// `group`.
    pub fn rotations<'a>(&self, group: &'a RotationGroup) -> Rotations<'a> {
        Rotations {
            base: *self,
            inner: group.iter(),
        }
    }
}

#[test]
pub fn correct_amount_of_rotations() {
    let group = RotationGroup::build().unwrap();
    let shape = Shape::from_bits_truncate(0b0000_0001_0111);

    assert_eq!(shape.rotations(&group).len(), 24);
    assert_eq!(shape.rotations(&group).count(), 24);
}

#[test]
pub fn first_rotation_is_identity() {
    let group = RotationGroup::build().unwrap();
    let shape = Shape::from_bits_truncate(0b0101_1001_0011);

    assert_eq!(shape.rotations(&group).next(), Some(shape));
}
