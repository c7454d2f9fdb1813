//! Wall/node lattice geometry and the initial grid template
//!
//! Positions with an odd row and an odd column are nodes. Every other position
//! belongs to the wall lattice; the wall midway between two adjacent nodes
//! becomes a passage once carved.

use ndarray::Array2;

use crate::spatial::cell::{UNEXPLORED, WALL};

/// Normalized grid dimensions, both odd and at least 3
///
/// Only produced by [`crate::algorithm::normalize::normalize`], so holding one
/// is proof the lattice is well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    height: usize,
    width: usize,
}

impl Dimensions {
    pub(crate) const fn from_normalized(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Number of grid rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of grid columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of node positions in the lattice
    pub const fn node_count(&self) -> usize {
        node_count(self.height, self.width)
    }
}

/// Check whether a position lies on the node lattice
pub const fn is_node(row: usize, col: usize) -> bool {
    row % 2 == 1 && col % 2 == 1
}

/// Number of node positions in a `height` x `width` grid of any shape
pub const fn node_count(height: usize, width: usize) -> usize {
    (height / 2) * (width / 2)
}

/// Ordinal of a node in row-major node order, used to index visited sets
///
/// Returns `None` for positions that are not nodes of the given grid.
pub const fn node_ordinal(position: (usize, usize), height: usize, width: usize) -> Option<usize> {
    let (row, col) = position;
    if !is_node(row, col) || row >= height || col >= width {
        return None;
    }
    Some((row / 2) * (width / 2) + col / 2)
}

/// Wall position midway between two nodes two steps apart on one axis
pub const fn midpoint(a: (usize, usize), b: (usize, usize)) -> (usize, usize) {
    ((a.0 + b.0) / 2, (a.1 + b.1) / 2)
}

/// Lay out the carving template: nodes open, everything else walled
///
/// # Panics
///
/// Panics if `height * width` overflows `isize`
pub fn initialize(dimensions: Dimensions) -> Array2<i32> {
    Array2::from_shape_fn(
        (dimensions.height(), dimensions.width()),
        |(row, col)| {
            if is_node(row, col) { UNEXPLORED } else { WALL }
        },
    )
}
