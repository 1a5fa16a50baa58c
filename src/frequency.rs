//! Frequency grid: per-cell ship-likelihood tallies from sampled placements.

use core::fmt;

use crate::common::{Cell, GridError};
use crate::grid::{CellSymbol, Grid};

/// A frequency tally cell. Counts accumulate how many sampled hypotheses
/// placed a ship on the cell; the sentinels exclude a cell from candidacy
/// (`Guessed`) or mark it for reporting snapshots (`Hit`). Only `Count`
/// values compete in [`FrequencyGrid::best_cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreqCell {
    Count(u32),
    Guessed,
    Hit,
}

impl Default for FreqCell {
    fn default() -> Self {
        FreqCell::Count(0)
    }
}

impl CellSymbol for FreqCell {
    fn symbol(&self) -> char {
        match self {
            FreqCell::Guessed | FreqCell::Hit => ' ',
            // counts above 9 continue through the ASCII table, clamped to
            // the last printable code point
            FreqCell::Count(n) => char::from_u32((*n).min(207) + u32::from(b'0')).unwrap_or('?'),
        }
    }
}

/// Accumulates how often each cell contained a ship across Monte Carlo
/// samples. One ephemeral instance per decision.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FrequencyGrid {
    grid: Grid<FreqCell>,
}

impl FrequencyGrid {
    /// Create a frequency grid with the default dimensions, all counts zero.
    pub fn new() -> Self {
        FrequencyGrid { grid: Grid::new() }
    }

    /// Create a frequency grid with explicit dimensions.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        FrequencyGrid {
            grid: Grid::with_size(rows, cols),
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Value of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<FreqCell, GridError> {
        self.grid.get(row, col)
    }

    /// Exclude already guessed cells from candidacy. Call before any
    /// [`increment`] for the decision.
    ///
    /// [`increment`]: FrequencyGrid::increment
    pub fn set_guessed_cells(&mut self, cells: &[Cell]) -> Result<(), GridError> {
        for &(row, col) in cells {
            self.grid.set(row, col, FreqCell::Guessed)?;
        }
        Ok(())
    }

    /// Mark hit cells for reporting snapshots only.
    pub fn set_hit_cells(&mut self, cells: &[Cell]) -> Result<(), GridError> {
        for &(row, col) in cells {
            self.grid.set(row, col, FreqCell::Hit)?;
        }
        Ok(())
    }

    /// Add one to the count at (row, col). Sentinel cells are left as-is;
    /// sampling never places ships on skipped cells, so incrementing a
    /// sentinel does not occur in practice.
    pub fn increment(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        if let FreqCell::Count(n) = self.grid.get(row, col)? {
            self.grid.set(row, col, FreqCell::Count(n + 1))?;
        }
        Ok(())
    }

    /// Every cell tied for the highest count, in row-major order. Sentinels
    /// never appear as long as at least one counted cell exists. Ties are
    /// broken by the caller, not here.
    pub fn best_cells(&self) -> Vec<Cell> {
        let best = self
            .grid
            .iter()
            .filter_map(|(_, value)| match value {
                FreqCell::Count(n) => Some(n),
                FreqCell::Guessed | FreqCell::Hit => None,
            })
            .max();
        match best {
            Some(best) => self
                .grid
                .iter()
                .filter(|&(_, value)| value == FreqCell::Count(best))
                .map(|(cell, _)| cell)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, FreqCell)> + '_ {
        self.grid.iter()
    }
}

impl fmt::Display for FrequencyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
