//! Exhaustive search for rotationally distinct cube skeletons.
//!
//! Every subset of the 12 edges is visited in [`Subsets`] order. Subsets
//! that are not connected or not three-dimensional are rejected. The rest
//! are compared against every skeleton found so far, under every rotation,
//! and kept only if none of them match. The first subset found in each
//! rotation class becomes its representative.

use indicatif::ProgressBar;

use crate::{rotation::RotationGroup, shape::Shape, Error, Result};

mod subsets;
pub use subsets::{Subsets, SUBSET_COUNT};

/// The outcome of offering a candidate to a [`Classifier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// The candidate is not connected or not three-dimensional.
    Rejected,
    /// The candidate is a rotation of the solution at `of`.
    Duplicate { of: usize },
    /// The candidate was stored as a new solution at `index`.
    Accepted { index: usize },
}

/// The append-only list of solutions, together with the rotation check
/// that guards it.
pub struct Classifier<'a> {
    group: &'a RotationGroup,
    solutions: Vec<Shape>,
}

impl<'a> Classifier<'a> {
    pub fn new(group: &'a RotationGroup) -> Self {
        Self {
            group,
            solutions: Vec::new(),
        }
    }

    /// Classify `candidate`, storing it if it is a new solution.
    pub fn offer(&mut self, candidate: Shape) -> Classification {
        if !candidate.is_valid() {
            return Classification::Rejected;
        }

        self.admit(candidate)
    }

    /// Classify a candidate that is already known to be valid.
    fn admit(&mut self, candidate: Shape) -> Classification {
        let group = self.group;

        let duplicate_of = self
            .solutions
            .iter()
            .position(|solution| group.iter().any(|r| candidate.transform(r) == *solution));

        match duplicate_of {
            Some(of) => Classification::Duplicate { of },
            None => {
                self.solutions.push(candidate);
                Classification::Accepted {
                    index: self.solutions.len() - 1,
                }
            }
        }
    }

    pub fn solutions(&self) -> &[Shape] {
        &self.solutions
    }

    pub fn into_solutions(self) -> Vec<Shape> {
        self.solutions
    }
}

/// The result of a complete enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enumeration {
    solutions: Vec<Shape>,
    examined: usize,
    valid: usize,
}

impl Enumeration {
    fn new(solutions: Vec<Shape>, examined: usize, valid: usize) -> Result<Self> {
        if examined != SUBSET_COUNT {
            return Err(Error::SubsetCountMismatch {
                expected: SUBSET_COUNT,
                found: examined,
            });
        }

        Ok(Self {
            solutions,
            examined,
            valid,
        })
    }

    /// One shape per rotation class, in the order they were found.
    pub fn solutions(&self) -> &[Shape] {
        &self.solutions
    }

    pub fn into_solutions(self) -> Vec<Shape> {
        self.solutions
    }

    /// The amount of subsets that were looked at.
    pub fn examined(&self) -> usize {
        self.examined
    }

    /// The amount of subsets that were connected and three-dimensional,
    /// counting every rotation separately.
    pub fn valid(&self) -> usize {
        self.valid
    }

    /// The amount of subsets that were not connected or not
    /// three-dimensional.
    pub fn rejected(&self) -> usize {
        self.examined - self.valid
    }
}

/// Enumerate all rotationally distinct skeletons on the current thread.
pub fn enumerate(group: &RotationGroup, bar: &ProgressBar) -> Result<Enumeration> {
    let mut classifier = Classifier::new(group);
    let mut examined = 0;
    let mut valid = 0;

    for candidate in Subsets::new() {
        examined += 1;

        if classifier.offer(candidate) != Classification::Rejected {
            valid += 1;
        }

        bar.inc(1);
    }

    Enumeration::new(classifier.into_solutions(), examined, valid)
}

/// Enumerate all rotationally distinct skeletons, filtering subsets in
/// parallel.
///
/// Only the validity check runs on the rayon pool. The filtered candidates
/// are put back in [`Subsets`] order and classified on the calling thread,
/// so the result is identical to [`enumerate`].
pub fn enumerate_rayon(group: &RotationGroup, bar: &ProgressBar) -> Result<Enumeration> {
    use rayon::prelude::*;

    let subsets: Vec<Shape> = Subsets::new().collect();
    let examined = subsets.len();

    let available_parallelism = num_cpus::get();
    let chunk_size = (subsets.len() / available_parallelism) + 1;

    let chunks: Vec<Vec<Shape>> = subsets
        .par_chunks(chunk_size)
        .map(|chunk| {
            let valid: Vec<Shape> = chunk.iter().copied().filter(Shape::is_valid).collect();
            bar.inc(chunk.len() as u64);
            valid
        })
        .collect();

    let mut classifier = Classifier::new(group);
    let mut valid = 0;

    for candidate in chunks.into_iter().flatten() {
        classifier.admit(candidate);
        valid += 1;
    }

    Enumeration::new(classifier.into_solutions(), examined, valid)
}
