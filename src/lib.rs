//! Perfect-maze grid generation for multi-agent exploration simulations
//!
//! Requested dimensions are normalized to odd sizes, a wall/node lattice is laid
//! out, and a randomized depth-first walk with an explicit backtracking stack
//! carves passages forming a spanning tree over the nodes. The resulting grid is
//! held by [`Maze`], which exposes read-only views to the bot engine and the
//! visualizer.

#![forbid(unsafe_code)]

/// Normalization, carving, and structural inspection
pub mod algorithm;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Grid store and accessors
pub mod maze;
/// Cell states and lattice geometry
pub mod spatial;

pub use io::error::{MazeError, Result};
pub use maze::Maze;
pub use spatial::CellState;
