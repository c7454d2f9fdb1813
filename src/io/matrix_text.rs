//! Plain-text matrix format for externally produced grids
//!
//! One grid row per line, values separated by whitespace. Blank lines and
//! lines starting with `#` are ignored. Values may be plain integers or floats
//! with an integral value, as written by numeric text savers
//! (`-1.000000000000000000e+00`). Only syntax and rectangularity are checked;
//! cell codes are passed through unvalidated.

use std::fs;
use std::path::Path;

use ndarray::{Array2, ArrayView2};

use crate::io::error::{MazeError, Result, WithPath, parse_error};

/// Parse matrix text into a grid of cell codes
///
/// # Errors
///
/// Returns [`MazeError::MatrixParse`] for a value that is not an integral number
/// in `i32` range, and [`MazeError::MatrixShape`] for empty input or rows of
/// differing length
pub fn parse_matrix(text: &str) -> Result<Array2<i32>> {
    let mut values = Vec::new();
    let mut rows = 0;
    let mut cols: Option<usize> = None;

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let before = values.len();
        for token in trimmed.split_whitespace() {
            values.push(parse_value(token, line_number)?);
        }
        let row_len = values.len() - before;

        match cols {
            None => cols = Some(row_len),
            Some(expected) if expected != row_len => {
                return Err(MazeError::MatrixShape {
                    reason: format!(
                        "line {line_number} has {row_len} values, expected {expected}"
                    ),
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let cols = cols.ok_or_else(|| MazeError::MatrixShape {
        reason: "no rows found".to_string(),
    })?;

    Array2::from_shape_vec((rows, cols), values).map_err(|e| MazeError::MatrixShape {
        reason: e.to_string(),
    })
}

fn parse_value(token: &str, line: usize) -> Result<i32> {
    if let Ok(code) = token.parse::<i32>() {
        return Ok(code);
    }

    let value = token
        .parse::<f64>()
        .map_err(|e| parse_error(line, &format!("'{token}' is not a number ({e})")))?;

    if value.fract() != 0.0 {
        return Err(parse_error(line, &format!("'{token}' is not a whole number")));
    }

    num_traits::cast::<f64, i32>(value)
        .ok_or_else(|| parse_error(line, &format!("'{token}' is out of range")))
}

/// Read and parse a matrix text file
///
/// # Errors
///
/// Returns [`MazeError::FileSystem`] if the file cannot be read, otherwise any
/// error from [`parse_matrix`]
pub fn read_matrix(path: &Path) -> Result<Array2<i32>> {
    let text = fs::read_to_string(path).with_path(path, "read")?;
    parse_matrix(&text)
}

/// Render a grid as matrix text, one space-separated line per row
pub fn format_matrix(grid: ArrayView2<'_, i32>) -> String {
    let mut text = String::new();
    for row in grid.rows() {
        let line = row
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        text.push_str(&line);
        text.push('\n');
    }
    text
}
