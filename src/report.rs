//! Plain text output of an enumeration.

use std::{collections::BTreeMap, fmt::Display, io::Write};

use crate::{
    enumerator::{Enumeration, SUBSET_COUNT},
    geometry::{CORNERS, EDGES, EDGE_COUNT},
    rotation::RotationGroup,
    shape::Shape,
};

fn bracketed<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    let inner: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
    format!("[{}]", inner.join(", "))
}

/// Write the corner and edge universes.
pub fn write_universe(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "All corners: {} (len={})",
        bracketed(CORNERS),
        CORNERS.len()
    )?;
    writeln!(out, "All edges: {} (len={})", bracketed(EDGES), EDGES.len())
}

/// Write the size of the rotation group.
pub fn write_group(out: &mut impl Write, group: &RotationGroup) -> std::io::Result<()> {
    writeln!(out, "Rotations in closure: {}", group.len())
}

/// Write every rotation of `group`, with its order.
pub fn write_rotations(out: &mut impl Write, group: &RotationGroup) -> std::io::Result<()> {
    for (i, rotation) in group.iter().enumerate() {
        writeln!(out, "{:>3}: {rotation} order {}", i + 1, rotation.order())?;
    }
    Ok(())
}

fn write_solution(
    out: &mut impl Write,
    number: usize,
    shape: &Shape,
    group: &RotationGroup,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{number:>4}: {shape} corners {} orbit {}",
        bracketed(shape.corners()),
        shape.orbit_size(group)
    )
}

/// Write the totals of `enumeration`, optionally followed by every
/// solution and a breakdown by edge count.
pub fn write_enumeration(
    out: &mut impl Write,
    group: &RotationGroup,
    enumeration: &Enumeration,
    list_solutions: bool,
) -> std::io::Result<()> {
    writeln!(
        out,
        "Checked {} subsets (should be 2^{EDGE_COUNT} = {SUBSET_COUNT})",
        enumeration.examined()
    )?;
    writeln!(
        out,
        "Valid subsets: {}, rejected: {}",
        enumeration.valid(),
        enumeration.rejected()
    )?;
    writeln!(
        out,
        "Found {} distinct solutions",
        enumeration.solutions().len()
    )?;

    if list_solutions {
        for (i, shape) in enumeration.solutions().iter().enumerate() {
            write_solution(out, i + 1, shape, group)?;
        }
    }

    let mut by_size = BTreeMap::new();
    for shape in enumeration.solutions() {
        *by_size.entry(shape.len()).or_insert(0usize) += 1;
    }

    writeln!(out, "Solutions by edge count:")?;
    for (edges, count) in by_size {
        writeln!(out, "{edges:>4} edges: {count}")?;
    }

    Ok(())
}
