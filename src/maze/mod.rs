/// Grid store and read-only accessors
pub mod store;

pub use store::Maze;
