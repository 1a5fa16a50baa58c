//! Shots grid: the attacking player's knowledge of guesses taken.

use core::fmt;
use std::collections::BTreeSet;

use log::info;
use rand::Rng;

use crate::common::{Cell, GridError};
use crate::config::{FLEET, REMAINING_SHIP_TRIALS, TOTAL_SHIP_CELLS};
use crate::grid::{CellSymbol, Grid};
use crate::placement::PlacementGrid;

/// Outcome recorded for a guessed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShotCell {
    #[default]
    Unguessed,
    Hit,
    Miss,
}

impl CellSymbol for ShotCell {
    fn symbol(&self) -> char {
        match self {
            ShotCell::Unguessed => ' ',
            ShotCell::Hit => 'X',
            ShotCell::Miss => '*',
        }
    }
}

/// Record of shots taken against an opponent's field.
///
/// Guessed-cell membership is kept in a set updated on every [`guess`]
/// call, so the derived queries avoid rescanning the whole grid per lookup.
///
/// [`guess`]: ShotsGrid::guess
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ShotsGrid {
    grid: Grid<ShotCell>,
    guessed: BTreeSet<Cell>,
}

impl ShotsGrid {
    /// Create a shots grid with the default dimensions, all cells unguessed.
    pub fn new() -> Self {
        ShotsGrid {
            grid: Grid::new(),
            guessed: BTreeSet::new(),
        }
    }

    /// Create a shots grid with explicit dimensions.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        ShotsGrid {
            grid: Grid::with_size(rows, cols),
            guessed: BTreeSet::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Value of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<ShotCell, GridError> {
        self.grid.get(row, col)
    }

    /// Guess a cell in the opponent's grid, recording the outcome here.
    ///
    /// Returns `true` on a hit. A repeated guess is not rejected: the prior
    /// mark is silently overwritten, since sampling reuses coordinates
    /// across hypothetical grids.
    pub fn guess(
        &mut self,
        row: usize,
        col: usize,
        placements: &PlacementGrid,
    ) -> Result<bool, GridError> {
        let hit = !placements.is_empty(row, col)?;
        if hit {
            info!("guessed ({},{}) and it was a hit", row, col);
            self.grid.set(row, col, ShotCell::Hit)?;
        } else {
            info!("guessed ({},{}) and it was a miss", row, col);
            self.grid.set(row, col, ShotCell::Miss)?;
        }
        self.guessed.insert((row, col));
        Ok(hit)
    }

    /// Cells recorded as hits, in row-major order.
    pub fn hit_cells(&self) -> Vec<Cell> {
        self.cells_with(ShotCell::Hit)
    }

    /// Cells recorded as misses, in row-major order.
    pub fn missed_cells(&self) -> Vec<Cell> {
        self.cells_with(ShotCell::Miss)
    }

    /// All guessed cells: hits first, then misses.
    pub fn guessed_cells(&self) -> Vec<Cell> {
        let mut cells = self.hit_cells();
        cells.extend(self.missed_cells());
        cells
    }

    /// Cells not yet guessed, in row-major order.
    pub fn unguessed_cells(&self) -> Vec<Cell> {
        self.grid
            .iter()
            .map(|(cell, _)| cell)
            .filter(|cell| !self.guessed.contains(cell))
            .collect()
    }

    /// Unguessed cells 4-directionally adjacent to at least one hit.
    ///
    /// A cell adjacent to multiple hits appears once per hit; the duplicates
    /// weight the caller's uniform random choice toward it.
    pub fn target_cells(&self) -> Vec<Cell> {
        let mut targets = Vec::new();
        for (row, col) in self.hit_cells() {
            let adjacent = [
                (row - 1, col),
                (row + 1, col),
                (row, col - 1),
                (row, col + 1),
            ];
            for (r, c) in adjacent {
                if self.is_unguessed(r, c) {
                    targets.push((r, c));
                }
            }
        }
        targets
    }

    /// Number of cells recorded as hits.
    pub fn hit_count(&self) -> usize {
        self.grid
            .iter()
            .filter(|&(_, value)| value == ShotCell::Hit)
            .count()
    }

    /// Whether every cell of the fleet has been hit.
    pub fn is_won(&self) -> bool {
        self.hit_count() >= TOTAL_SHIP_CELLS
    }

    /// Guess which ship lengths could be remaining given the current hit
    /// count.
    ///
    /// Each trial removes random ships from the fleet until all but one are
    /// gone, returning the remainder as soon as the removed lengths sum to
    /// the hit count. The estimate assumes one ship accounts for the rest;
    /// when no trial matches, the full fleet is returned as a conservative
    /// default. It only biases sampling, so imprecision is tolerable.
    pub fn remaining_ships<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let hits = self.hit_count();
        if hits == 0 {
            return FLEET.to_vec();
        }
        for _trial in 0..REMAINING_SHIP_TRIALS {
            let mut remaining = FLEET.to_vec();
            let mut hit_sum = 0;
            for _ in 0..FLEET.len() - 1 {
                hit_sum += remaining.remove(rng.random_range(0..remaining.len()));
                if hit_sum == hits {
                    return remaining;
                }
            }
        }
        FLEET.to_vec()
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, ShotCell)> + '_ {
        self.grid.iter()
    }

    fn cells_with(&self, wanted: ShotCell) -> Vec<Cell> {
        self.grid
            .iter()
            .filter(|&(_, value)| value == wanted)
            .map(|(cell, _)| cell)
            .collect()
    }

    fn is_unguessed(&self, row: usize, col: usize) -> bool {
        row >= 1
            && row <= self.rows()
            && col >= 1
            && col <= self.cols()
            && !self.guessed.contains(&(row, col))
    }
}

impl fmt::Display for ShotsGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
