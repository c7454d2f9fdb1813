/// Command-line argument parsing and command execution
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Plain-text matrix parsing and formatting
pub mod matrix_text;
