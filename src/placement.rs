//! Ship placement grid: random fleet placement with collision detection.

use core::fmt;

use log::{debug, error, info};
use rand::Rng;

use crate::common::{Cell, GridError};
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::grid::{CellSymbol, Grid};

/// Axis-aligned direction a ship is laid out in from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// 0 degrees: rightward, increasing column.
    Deg0,
    /// 90 degrees: upward, decreasing row.
    Deg90,
    /// 180 degrees: leftward, decreasing column.
    Deg180,
    /// 270 degrees: downward, increasing row.
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Uniformly random rotation.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Per-cell (row, col) step for this rotation.
    fn step(self) -> (isize, isize) {
        match self {
            Rotation::Deg0 => (0, 1),
            Rotation::Deg90 => (-1, 0),
            Rotation::Deg180 => (0, -1),
            Rotation::Deg270 => (1, 0),
        }
    }
}

/// State of a placement grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementCell {
    #[default]
    Empty,
    Occupied,
    /// Excluded from placement, standing in for an already guessed cell
    /// when this grid represents a sampled hypothesis.
    Skip,
}

impl CellSymbol for PlacementCell {
    fn symbol(&self) -> char {
        match self {
            PlacementCell::Empty | PlacementCell::Skip => ' ',
            PlacementCell::Occupied => 'O',
        }
    }
}

/// A Battleship field containing placed ships. Occupied cells form only
/// straight contiguous runs matching a placed ship's length.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PlacementGrid {
    grid: Grid<PlacementCell>,
}

impl PlacementGrid {
    /// Create an empty placement grid with the default dimensions.
    pub fn new() -> Self {
        PlacementGrid { grid: Grid::new() }
    }

    /// Create an empty placement grid with explicit dimensions.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        PlacementGrid {
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
    pub fn cell(&self, row: usize, col: usize) -> Result<PlacementCell, GridError> {
        self.grid.get(row, col)
    }

    /// Whether the cell at (row, col) holds no ship and is not skipped.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, GridError> {
        Ok(self.grid.get(row, col)? == PlacementCell::Empty)
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, PlacementCell)> + '_ {
        self.grid.iter()
    }

    /// Cells currently occupied by a ship, in row-major order.
    pub fn occupied_cells(&self) -> Vec<Cell> {
        self.iter()
            .filter(|&(_, value)| value == PlacementCell::Occupied)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Exclude the given cells from placement.
    pub fn mark_skipped(&mut self, cells: &[Cell]) -> Result<(), GridError> {
        for &(row, col) in cells {
            self.grid.set(row, col, PlacementCell::Skip)?;
        }
        Ok(())
    }

    /// Place a ship of `length` cells anchored at (row, col) along `rotation`.
    ///
    /// All-or-nothing: every projected cell must be in bounds and empty, or
    /// the call returns `false` and the grid is unchanged. A projection off
    /// the board is an ordinary rejection, not a propagated fault.
    pub fn place(&mut self, row: usize, col: usize, length: usize, rotation: Rotation) -> bool {
        debug!(
            "attempting {}-cell ship at ({}, {}) rotated {:?}",
            length, row, col, rotation
        );
        let (row_step, col_step) = rotation.step();
        let mut cells = Vec::with_capacity(length);
        let (mut r, mut c) = (row as isize, col as isize);
        for _ in 0..length {
            if r < 1 || c < 1 {
                debug!("one or more cells is off the grid");
                return false;
            }
            match self.is_empty(r as usize, c as usize) {
                Ok(true) => cells.push((r as usize, c as usize)),
                Ok(false) => {
                    debug!("one or more cells is already occupied");
                    return false;
                }
                Err(GridError::OutOfRange { .. }) => {
                    debug!("one or more cells is off the grid");
                    return false;
                }
            }
            r += row_step;
            c += col_step;
        }
        for &(r, c) in &cells {
            // cells were validated above, so the write cannot fail
            let _ = self.grid.set(r, c, PlacementCell::Occupied);
        }
        debug!(
            "placed {}-cell ship at ({}, {}) rotated {:?}",
            length, row, col, rotation
        );
        true
    }

    /// Strict fleet placement: place every ship of the fixed fleet at random,
    /// each with a bounded attempt budget.
    ///
    /// Returns `false` when any ship exhausts its budget, leaving the grid
    /// partially populated; a failed grid must be discarded, never reused.
    pub fn initialize<R: Rng>(&mut self, rng: &mut R) -> bool {
        for &length in FLEET.iter() {
            if !self.place_random(rng, length) {
                error!(
                    "could not place a {}-cell ship after {} attempts",
                    length, MAX_PLACEMENT_ATTEMPTS
                );
                return false;
            }
        }
        info!("random ship placement:\n{}", self);
        true
    }

    /// Best-effort fleet placement for sampling: a ship that exhausts its
    /// attempt budget is skipped with no failure signal. An occasional
    /// unfinished hypothesis only adds noise to the frequency estimate.
    pub fn sample<R: Rng>(&mut self, rng: &mut R, ships: &[usize]) {
        for &length in ships {
            self.place_random(rng, length);
        }
        debug!("random sample placement:\n{}", self);
    }

    fn place_random<R: Rng>(&mut self, rng: &mut R, length: usize) -> bool {
        for _attempt in 0..MAX_PLACEMENT_ATTEMPTS {
            let row = rng.random_range(1..=self.rows());
            let col = rng.random_range(1..=self.cols());
            let rotation = Rotation::random(rng);
            if self.place(row, col, length, rotation) {
                return true;
            }
        }
        false
    }
}

impl fmt::Display for PlacementGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
