//! Grid holder exposing read-only views to the bot engine and visualizer
//!
//! The grid is replaced wholesale by [`Maze::generate`] or [`Maze::load`] and is
//! never mutated in place afterwards. Both take `&mut self`, so a caller cannot
//! regenerate while a view borrowed from [`Maze::matrix`] is still alive.

use log::debug;
use ndarray::{Array2, ArrayView2};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::carve::carve;
use crate::algorithm::normalize::{Advisory, normalize};
use crate::io::error::{Result, uninitialized};
use crate::spatial::lattice::initialize;

/// Owner of the current maze grid
#[derive(Debug, Clone, Default)]
pub struct Maze {
    matrix: Option<Array2<i32>>,
    bot_count: usize,
}

impl Maze {
    /// Create a maze holder with no grid
    pub const fn new() -> Self {
        Self {
            matrix: None,
            bot_count: 0,
        }
    }

    /// Build and carve a fresh perfect maze
    ///
    /// Requested dimensions are normalized first; the corrections made are
    /// returned for the caller to report. `bot_count` is stored for the bot
    /// engine and otherwise ignored.
    ///
    /// # Panics
    ///
    /// Panics if the normalized `height * width` overflows `isize`, since the
    /// grid cannot be allocated
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        bot_count: usize,
        height: i64,
        width: i64,
        rng: &mut R,
    ) -> Vec<Advisory> {
        let (dimensions, advisories) = normalize(height, width);

        let mut grid = initialize(dimensions);
        let stats = carve(&mut grid, rng);
        debug!(
            "Carved {}x{} maze: {} nodes, {} passages, {} backtracks",
            dimensions.height(),
            dimensions.width(),
            stats.nodes_visited,
            stats.passages_carved,
            stats.backtracks
        );

        self.matrix = Some(grid);
        self.bot_count = bot_count;
        advisories
    }

    /// Generate with a standard generator seeded from `seed`
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Maze::generate`]
    pub fn generate_seeded(
        &mut self,
        bot_count: usize,
        height: i64,
        width: i64,
        seed: u64,
    ) -> Vec<Advisory> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(bot_count, height, width, &mut rng)
    }

    /// Install an externally supplied grid as-is
    ///
    /// No shape, parity or cell-code validation is performed. A grid with even
    /// dimensions or codes outside [`crate::spatial::CellState`] is stored
    /// unchanged and will surface only when a consumer interprets it.
    pub fn load(&mut self, bot_count: usize, matrix: Array2<i32>) {
        debug!("Loaded {}x{} maze", matrix.nrows(), matrix.ncols());
        self.matrix = Some(matrix);
        self.bot_count = bot_count;
    }

    /// Read-only view of the current grid
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::Uninitialized`] if no grid has been generated or loaded
    pub fn matrix(&self) -> Result<ArrayView2<'_, i32>> {
        self.matrix
            .as_ref()
            .map(Array2::view)
            .ok_or_else(|| uninitialized("matrix"))
    }

    /// Number of rows in the current grid
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::Uninitialized`] if no grid has been generated or loaded
    pub fn height(&self) -> Result<usize> {
        self.matrix
            .as_ref()
            .map(Array2::nrows)
            .ok_or_else(|| uninitialized("height"))
    }

    /// Number of columns in the current grid
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::Uninitialized`] if no grid has been generated or loaded
    pub fn width(&self) -> Result<usize> {
        self.matrix
            .as_ref()
            .map(Array2::ncols)
            .ok_or_else(|| uninitialized("width"))
    }

    /// Bot count passed to the last generate or load, zero before either
    pub const fn bot_count(&self) -> usize {
        self.bot_count
    }
}
