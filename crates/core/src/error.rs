//! Error types for grid construction and configuration.

use thiserror::Error;

use crate::types::Tile;

/// Reasons a grid cannot be built.
///
/// Once a [`Grid`](crate::Grid) exists it is square, within the supported size
/// range and holds only valid tiles, so the transform engine never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("unsupported grid size {size} (expected {min}..={max})")]
    UnsupportedSize { size: usize, min: usize, max: usize },

    #[error("grid is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("invalid tile {value} at ({row}, {col}): must be 0 or a power of two")]
    InvalidTile { row: usize, col: usize, value: Tile },
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("spawn probability {0} is outside 0.0..=1.0")]
    TwoProbability(f64),

    #[error(transparent)]
    Grid(#[from] GridError),
}
