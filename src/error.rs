use thiserror::Error;

use crate::geometry::Corner;

/// Errors raised while building the fixed cube geometry or while
/// checking the results of an enumeration.
///
/// None of these are recoverable: each one means an invariant of the
/// cube model does not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("corner index {0} is out of range, expected 0..8")]
    InvalidCorner(usize),

    #[error("corners {a} and {b} do not form an edge")]
    InvalidEdge { a: Corner, b: Corner },

    #[error("generator {name} is not a rotation: {reason}")]
    InvalidGenerator { name: &'static str, reason: String },

    #[error("expected {expected} rotations, found {found}")]
    RotationGroupIncomplete { expected: usize, found: usize },

    #[error("expected to examine {expected} subsets, examined {found}")]
    SubsetCountMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
