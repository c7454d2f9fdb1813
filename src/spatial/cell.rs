//! Cell-state vocabulary shared with the bot engine and visualizer

use std::fmt;

/// State of a single grid position
///
/// Discriminants are the numeric codes stored in the grid and used in matrix
/// text files. Generation only writes [`CellState::Wall`] and
/// [`CellState::Unexplored`]; the remaining states belong to the bot engine and
/// are carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CellState {
    /// Impassable position
    Wall = -1,
    /// Open position no bot has looked at yet
    Unexplored = 0,
    /// Open position a bot has seen but deferred
    Procrastinated = 1,
    /// Open position a bot has fully explored
    Explored = 2,
    /// Position currently occupied by a bot
    Bot = 3,
}

impl CellState {
    /// Every state, ordered by code
    pub const ALL: [Self; 5] = [
        Self::Wall,
        Self::Unexplored,
        Self::Procrastinated,
        Self::Explored,
        Self::Bot,
    ];

    /// Numeric code stored in the grid
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up the state for a stored code
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Wall),
            0 => Some(Self::Unexplored),
            1 => Some(Self::Procrastinated),
            2 => Some(Self::Explored),
            3 => Some(Self::Bot),
            _ => None,
        }
    }
}

impl From<CellState> for i32 {
    fn from(state: CellState) -> Self {
        state.code()
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wall => "wall",
            Self::Unexplored => "unexplored",
            Self::Procrastinated => "procrastinated",
            Self::Explored => "explored",
            Self::Bot => "bot",
        };
        f.write_str(name)
    }
}

/// Stored code of [`CellState::Wall`]
pub const WALL: i32 = CellState::Wall.code();
/// Stored code of [`CellState::Unexplored`]
pub const UNEXPLORED: i32 = CellState::Unexplored.code();
/// Stored code of [`CellState::Procrastinated`]
pub const PROCRASTINATED: i32 = CellState::Procrastinated.code();
/// Stored code of [`CellState::Explored`]
pub const EXPLORED: i32 = CellState::Explored.code();
/// Stored code of [`CellState::Bot`]
pub const BOT: i32 = CellState::Bot.code();
