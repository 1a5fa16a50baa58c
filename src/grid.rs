//! Generic bounded 2-D cell store. The top left corner is (1, 1).

use core::fmt;

use crate::common::{Cell, GridError};
use crate::config::{COLS, ROWS};

/// Mapping from a cell value to the character drawn for it.
pub trait CellSymbol {
    fn symbol(&self) -> char;
}

/// Rectangular `rows x cols` matrix of cell values, 1-indexed externally.
/// Shape is fixed at construction; cell values mutate in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Create a grid with the default 10x10 dimensions.
    pub fn new() -> Self {
        Self::with_size(ROWS, COLS)
    }

    /// Create a grid with explicit dimensions, every cell at its default value.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![T::default(); rows * cols],
        }
    }
}

impl<T: Copy + Default> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value of the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<T, GridError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Overwrite the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        let i = self.index(row, col)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Iterate over every cell's coordinate and value in row-major order,
    /// rows ascending then columns ascending.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &v)| ((i / self.cols + 1, i % self.cols + 1), v))
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < 1 || row > self.rows || col < 1 || col > self.cols {
            return Err(GridError::OutOfRange { row, col });
        }
        Ok((row - 1) * self.cols + (col - 1))
    }
}

/// Bordered ASCII rendering for debug logs, one symbol per cell.
impl<T: Copy + CellSymbol> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}\\", "-".repeat(self.cols))?;
        for row in self.cells.chunks(self.cols) {
            write!(f, "\n|")?;
            for value in row {
                write!(f, "{}", value.symbol())?;
            }
            write!(f, "|")?;
        }
        write!(f, "\n\\{}/", "-".repeat(self.cols))
    }
}
