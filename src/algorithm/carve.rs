//! Randomized depth-first carving of a perfect maze
//!
//! Walks the node lattice from the start node, opening the wall between the
//! current node and a randomly chosen unvisited neighbor, and backtracks along
//! an explicit history stack when a node has no unvisited neighbors left. Each
//! newly reached node costs exactly one carved wall, so the passages form a
//! spanning tree over the nodes.

use bitvec::prelude::*;
use ndarray::Array2;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::io::configuration::START_NODE;
use crate::spatial::cell::UNEXPLORED;
use crate::spatial::lattice::{midpoint, node_count, node_ordinal};

/// Counters describing one carving run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarveStats {
    /// Nodes marked visited
    pub nodes_visited: usize,
    /// Walls opened into passages
    pub passages_carved: usize,
    /// Times the walk stepped back along its history
    pub backtracks: usize,
}

/// Carve passages into a wall/node template in place
///
/// The grid is expected to come from [`crate::spatial::lattice::initialize`].
/// On any other shape the walk still terminates: it stops once the history is
/// exhausted, leaving whatever nodes it could not reach uncarved.
pub fn carve<R: Rng + ?Sized>(grid: &mut Array2<i32>, rng: &mut R) -> CarveStats {
    let (height, width) = grid.dim();
    let total_nodes = node_count(height, width);
    let mut stats = CarveStats::default();

    if total_nodes == 0 {
        return stats;
    }

    let mut visited = bitvec![0; total_nodes];
    let mut history: Vec<(usize, usize)> = Vec::new();
    let mut current = START_NODE;

    while stats.nodes_visited < total_nodes {
        if let Some(ordinal) = node_ordinal(current, height, width) {
            if let Some(mut seen) = visited.get_mut(ordinal) {
                if !*seen {
                    *seen = true;
                    stats.nodes_visited += 1;
                }
            }
        }

        let neighbours = unvisited_neighbours(current, height, width, &visited);

        if let Some(&next) = neighbours.choose(rng) {
            history.push(current);
            let (row, col) = midpoint(current, next);
            if let Some(cell) = grid.get_mut((row, col)) {
                *cell = UNEXPLORED;
                stats.passages_carved += 1;
            }
            current = next;
        } else if stats.nodes_visited < total_nodes {
            match history.pop() {
                Some(previous) => {
                    current = previous;
                    stats.backtracks += 1;
                }
                None => break,
            }
        }
    }

    stats
}

/// Unvisited nodes two steps away on each axis, kept inside `[1, len - 2]`
fn unvisited_neighbours(
    (row, col): (usize, usize),
    height: usize,
    width: usize,
    visited: &BitSlice,
) -> Vec<(usize, usize)> {
    let mut candidates = Vec::with_capacity(4);

    if row > 1 {
        candidates.push((row - 2, col));
    }
    if row + 2 <= height.saturating_sub(2) {
        candidates.push((row + 2, col));
    }
    if col > 1 {
        candidates.push((row, col - 2));
    }
    if col + 2 <= width.saturating_sub(2) {
        candidates.push((row, col + 2));
    }

    candidates.retain(|&position| {
        node_ordinal(position, height, width)
            .and_then(|ordinal| visited.get(ordinal).as_deref().copied())
            .is_some_and(|seen| !seen)
    });
    candidates
}
