use std::iter::FusedIterator;

use crate::{geometry::EDGE_COUNT, shape::Shape};

/// The amount of subsets of the edges of a cube.
pub const SUBSET_COUNT: usize = 1 << EDGE_COUNT;

/// An iterator over every subset of the edges of a cube, exactly once.
///
/// Subsets are yielded by increasing size. Within one size, subsets are
/// ordered lexicographically by their sorted edge indices, so
/// `{0, 1, 2}` comes before `{0, 1, 3}` which comes before `{0, 2, 3}`.
#[derive(Clone, Debug)]
pub struct Subsets {
    size: usize,
    indices: [usize; EDGE_COUNT],
    yielded: usize,
}

impl Subsets {
    pub fn new() -> Self {
        Self {
            size: 0,
            indices: [0; EDGE_COUNT],
            yielded: 0,
        }
    }

    fn current(&self) -> Shape {
        let bits = self.indices[..self.size]
            .iter()
            .fold(0u16, |acc, i| acc | (1 << i));

        Shape::from_bits_truncate(bits)
    }

    /// Move to the next combination of the current size, or to the first
    /// combination of the next size.
    fn advance(&mut self) {
        let k = self.size;

        for i in (0..k).rev() {
            if self.indices[i] < EDGE_COUNT - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return;
            }
        }

        self.size += 1;
        for (j, index) in self.indices.iter_mut().enumerate().take(self.size) {
            *index = j;
        }
    }
}

impl Default for Subsets {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Subsets {
    type Item = Shape;

    fn next(&mut self) -> Option<Self::Item> {
        if self.yielded == SUBSET_COUNT {
            return None;
        }

        let output = self.current();
        self.yielded += 1;

        if self.yielded < SUBSET_COUNT {
            self.advance();
        }

        Some(output)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = SUBSET_COUNT - self.yielded;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Subsets {}

impl FusedIterator for Subsets {}
