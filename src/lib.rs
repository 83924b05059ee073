//! Enumerate the wireframe skeletons of a cube.
//!
//! A skeleton is a subset of the 12 edges of a cube in which every edge
//! touches another edge, and which extends along all three axes. Two
//! skeletons are the same if a rotation of the cube maps one onto the
//! other.


mod error;
pub use error::{Error, Result};

pub mod enumerator;
pub mod geometry;
pub mod report;
pub mod rotation;
pub mod shape;
