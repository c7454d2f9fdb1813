//! Maze constants and runtime configuration defaults

/// Dimension substituted for any requested value below [`MIN_DIMENSION`]
pub const DEFAULT_DIMENSION: usize = 25;

// Values strictly below this are replaced rather than repaired
/// Smallest requested dimension that is kept (after parity repair)
pub const MIN_DIMENSION: i64 = 2;

/// Node where carving starts and where inspection traversals begin
pub const START_NODE: (usize, usize) = (1, 1);

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of bots forwarded to the exploration engine
pub const DEFAULT_BOT_COUNT: usize = 1;
