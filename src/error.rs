//! Failures of the core: rendering against a grid, and building one from a map.

use crate::geometry::GridLocation;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// the ray or a movement check left the grid; maps need a closed wall ring
    #[error("cell {cell} is outside the grid")]
    OutOfBounds { cell: GridLocation },
    #[error("camera at cell {cell} is inside a wall of kind {kind}")]
    CameraInWall { cell: GridLocation, kind: u8 },
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map contains no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid cell {found:?} at row {row}, column {column}")]
    InvalidCell {
        row: usize,
        column: usize,
        found: char,
    },
    #[error("grid of {width}x{height} needs {expected} cells, got {found}")]
    SizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        found: usize,
    },
    #[error("could not read map: {0}")]
    Io(#[from] std::io::Error),
}
