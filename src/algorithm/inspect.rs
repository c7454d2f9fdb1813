//! Structural inspection of a maze grid
//!
//! Works on any rectangular grid, generated or loaded. Every code other than
//! [`WALL`] counts as open, so grids already annotated by the bot engine are
//! judged by the same rules as freshly carved ones.

use std::collections::VecDeque;

use bitvec::prelude::*;
use ndarray::ArrayView2;

use crate::io::configuration::START_NODE;
use crate::spatial::cell::WALL;
use crate::spatial::lattice::{is_node, node_count};

/// Summary of a grid's lattice structure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MazeReport {
    /// Number of node-lattice positions
    pub node_count: usize,
    /// Nodes reachable from the start node through open cells
    pub reachable_nodes: usize,
    /// Open wall positions sitting between two nodes
    pub passage_count: usize,
    /// Open positions that are neither nodes nor passages
    pub stray_open_cells: usize,
}

impl MazeReport {
    /// Check whether the passages form a spanning tree over the nodes
    ///
    /// Requires at least one node, every node reachable, exactly one passage
    /// fewer than nodes, and no open cell outside the lattice.
    pub const fn is_perfect(&self) -> bool {
        self.node_count > 0
            && self.reachable_nodes == self.node_count
            && self.passage_count + 1 == self.node_count
            && self.stray_open_cells == 0
    }
}

/// Measure connectivity and passage layout of a grid
pub fn inspect(grid: ArrayView2<'_, i32>) -> MazeReport {
    let (height, width) = grid.dim();
    let mut report = MazeReport {
        node_count: node_count(height, width),
        ..MazeReport::default()
    };

    for ((row, col), &code) in grid.indexed_iter() {
        if code == WALL || is_node(row, col) {
            continue;
        }
        if is_passage(row, col, height, width) {
            report.passage_count += 1;
        } else {
            report.stray_open_cells += 1;
        }
    }

    report.reachable_nodes = count_reachable_nodes(grid);
    report
}

/// Wall position between two in-bounds nodes on the same row or column
const fn is_passage(row: usize, col: usize, height: usize, width: usize) -> bool {
    match (row % 2 == 1, col % 2 == 1) {
        (true, false) => row < height && col >= 1 && col + 1 < width,
        (false, true) => col < width && row >= 1 && row + 1 < height,
        _ => false,
    }
}

fn count_reachable_nodes(grid: ArrayView2<'_, i32>) -> usize {
    let (height, width) = grid.dim();
    let is_open = |position: (usize, usize)| grid.get(position).is_some_and(|&code| code != WALL);

    if !is_open(START_NODE) {
        return 0;
    }

    let mut seen = bitvec![0; height * width];
    let mut queue = VecDeque::from([START_NODE]);
    seen.set(START_NODE.0 * width + START_NODE.1, true);
    let mut reachable = 0;

    while let Some((row, col)) = queue.pop_front() {
        if is_node(row, col) {
            reachable += 1;
        }

        let steps = [
            row.checked_sub(1).map(|r| (r, col)),
            Some((row + 1, col)),
            col.checked_sub(1).map(|c| (row, c)),
            Some((row, col + 1)),
        ];
        for next in steps.into_iter().flatten() {
            if next.0 >= height || next.1 >= width || !is_open(next) {
                continue;
            }
            let index = next.0 * width + next.1;
            if seen.get(index).as_deref() == Some(&false) {
                seen.set(index, true);
                queue.push_back(next);
            }
        }
    }

    reachable
}
