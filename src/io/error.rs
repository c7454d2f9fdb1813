//! Error types and context management for maze operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// A grid accessor was called before any grid was generated or loaded
    Uninitialized {
        /// Name of the accessor that was called
        accessor: &'static str,
    },

    /// A line of a text matrix could not be turned into cell codes
    MatrixParse {
        /// 1-based line number in the source text
        line: usize,
        /// Description of what's wrong with the line
        reason: String,
    },

    /// A text matrix is empty or not rectangular
    MatrixShape {
        /// Description of the shape problem
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized { accessor } => {
                write!(
                    f,
                    "Maze has no grid yet: '{accessor}' requires a prior generate or load"
                )
            }
            Self::MatrixParse { line, reason } => {
                write!(f, "Invalid matrix text at line {line}: {reason}")
            }
            Self::MatrixShape { reason } => {
                write!(f, "Invalid matrix shape: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Attaches the file involved in a failed I/O operation
pub trait WithPath<T> {
    /// Convert an I/O failure into [`MazeError::FileSystem`] naming `path` and `operation`
    ///
    /// # Errors
    ///
    /// Propagates the original I/O error wrapped with the path context
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| MazeError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a state error for an accessor called on an empty maze
pub const fn uninitialized(accessor: &'static str) -> MazeError {
    MazeError::Uninitialized { accessor }
}

/// Create a parse error for a given text line
pub fn parse_error(line: usize, reason: &impl ToString) -> MazeError {
    MazeError::MatrixParse {
        line,
        reason: reason.to_string(),
    }
}
