//! Tests for the cell-state vocabulary

#[cfg(test)]
mod tests {
    use mazegrid::CellState;
    use mazegrid::spatial::cell::{BOT, EXPLORED, PROCRASTINATED, UNEXPLORED, WALL};

    // Tests codes match the values used in matrix files
    // Verified by renumbering the enum from zero
    #[test]
    fn test_codes() {
        assert_eq!(WALL, -1);
        assert_eq!(UNEXPLORED, 0);
        assert_eq!(PROCRASTINATED, 1);
        assert_eq!(EXPLORED, 2);
        assert_eq!(BOT, 3);
        assert_eq!(i32::from(CellState::Bot), 3);
    }

    #[test]
    fn test_from_code_round_trips_every_state() {
        for state in CellState::ALL {
            assert_eq!(CellState::from_code(state.code()), Some(state));
        }
        assert_eq!(CellState::from_code(4), None);
        assert_eq!(CellState::from_code(-2), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CellState::Wall.to_string(), "wall");
        assert_eq!(CellState::Procrastinated.to_string(), "procrastinated");
    }
}
