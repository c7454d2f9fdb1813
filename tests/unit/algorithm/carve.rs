//! Tests for randomized depth-first passage carving

#[cfg(test)]
mod tests {
    use mazegrid::algorithm::carve::carve;
    use mazegrid::algorithm::inspect::inspect;
    use mazegrid::algorithm::normalize::normalize;
    use mazegrid::spatial::cell::{UNEXPLORED, WALL};
    use mazegrid::spatial::lattice::initialize;
    use ndarray::Array2;
    use rand::{SeedableRng, rngs::StdRng};

    fn carved(height: i64, width: i64, seed: u64) -> (Array2<i32>, usize) {
        let (dimensions, _) = normalize(height, width);
        let mut grid = initialize(dimensions);
        let mut rng = StdRng::seed_from_u64(seed);
        let stats = carve(&mut grid, &mut rng);
        assert_eq!(stats.nodes_visited, dimensions.node_count());
        (grid, dimensions.node_count())
    }

    // Tests the single-node grid needs no carving and no backtracking
    #[test]
    fn test_three_by_three_carves_nothing() {
        let (dimensions, _) = normalize(3, 3);
        let mut grid = initialize(dimensions);
        let mut rng = StdRng::seed_from_u64(7);

        let stats = carve(&mut grid, &mut rng);

        assert_eq!(stats.nodes_visited, 1);
        assert_eq!(stats.passages_carved, 0);
        assert_eq!(stats.backtracks, 0);
        for ((row, col), &code) in grid.indexed_iter() {
            let expected = if (row, col) == (1, 1) { UNEXPLORED } else { WALL };
            assert_eq!(code, expected, "unexpected code at ({row}, {col})");
        }
    }

    // Tests one passage is carved per newly visited node except the start
    // Verified by carving on backtrack as well
    #[test]
    fn test_passage_count_is_nodes_minus_one() {
        let (dimensions, _) = normalize(21, 35);
        let mut grid = initialize(dimensions);
        let mut rng = StdRng::seed_from_u64(3);

        let stats = carve(&mut grid, &mut rng);

        assert_eq!(stats.nodes_visited, 10 * 17);
        assert_eq!(stats.passages_carved, stats.nodes_visited - 1);
    }

    // Tests carved grids are perfect mazes for a range of shapes and seeds
    // Verified by allowing already-visited neighbours
    #[test]
    fn test_carved_grids_are_spanning_trees() {
        for (height, width) in [(5, 5), (3, 41), (41, 3), (25, 25), (17, 9)] {
            for seed in 0..8 {
                let (grid, nodes) = carved(height, width, seed);
                let report = inspect(grid.view());
                assert_eq!(report.node_count, nodes);
                assert!(report.is_perfect(), "{height}x{width} seed {seed}: {report:?}");
            }
        }
    }

    // Tests border rows and columns are never opened
    #[test]
    fn test_border_stays_walled() {
        let (grid, _) = carved(15, 23, 11);
        let (height, width) = grid.dim();

        for ((row, col), &code) in grid.indexed_iter() {
            if row == 0 || col == 0 || row == height - 1 || col == width - 1 {
                assert_eq!(code, WALL, "border opened at ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_grid() {
        let (first, _) = carved(31, 31, 1234);
        let (second, _) = carved(31, 31, 1234);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let (first, _) = carved(31, 31, 1);
        let (second, _) = carved(31, 31, 2);
        assert_ne!(first, second);
    }

    // Tests a malformed grid terminates instead of looping or panicking
    #[test]
    fn test_even_grid_terminates() {
        let mut grid = Array2::from_elem((6, 6), WALL);
        let mut rng = StdRng::seed_from_u64(0);

        let stats = carve(&mut grid, &mut rng);

        assert!(stats.nodes_visited <= 9);
        assert!(stats.passages_carved < stats.nodes_visited);
    }

    #[test]
    fn test_grid_without_nodes_is_left_alone() {
        let mut grid = Array2::from_elem((1, 7), WALL);
        let mut rng = StdRng::seed_from_u64(0);

        let stats = carve(&mut grid, &mut rng);

        assert_eq!(stats.nodes_visited, 0);
        assert!(grid.iter().all(|&code| code == WALL));
    }
}
