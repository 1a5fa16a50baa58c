//! Common types: cell coordinates and the error taxonomy.

use core::fmt;

/// A 1-indexed (row, col) board coordinate.
pub type Cell = (usize, usize);

/// Errors returned by grid cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside `[1, rows] x [1, cols]`.
    OutOfRange { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfRange { row, col } => {
                write!(f, "cell ({}, {}) is outside the grid", row, col)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Errors returned by game-level operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Underlying grid access error.
    Grid(GridError),
    /// Strict fleet placement ran out of attempts; discard the grid and retry.
    PlacementExhausted,
    /// No candidate cells remain to guess from.
    NoCandidateCells,
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        GameError::Grid(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Grid(e) => write!(f, "grid error: {}", e),
            GameError::PlacementExhausted => write!(f, "could not place the full fleet"),
            GameError::NoCandidateCells => write!(f, "no candidate cells left to guess"),
        }
    }
}

impl std::error::Error for GameError {}
