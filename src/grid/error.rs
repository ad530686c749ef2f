use thiserror::Error;

use super::types::Coordinate;

/// Shape problems detected when a grid or a coordinate comes in from outside.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid is empty")]
    Empty,

    #[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("coordinate {coordinate} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        coordinate: Coordinate,
        rows: usize,
        cols: usize,
    },
}
