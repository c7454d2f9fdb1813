/// Randomized depth-first passage carving
pub mod carve;
/// Connectivity and passage-count inspection
pub mod inspect;
/// Dimension normalization and advisories
pub mod normalize;
