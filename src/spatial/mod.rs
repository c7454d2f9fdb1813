//! Spatial data structures for the maze grid
//!
//! This module contains spatial-related functionality including:
//! - The cell-state vocabulary shared with downstream consumers
//! - Lattice geometry and the initial wall/node template

/// Cell states and their numeric codes
pub mod cell;
/// Node lattice geometry and grid initialization
pub mod lattice;

pub use cell::CellState;
pub use lattice::Dimensions;
