//! Computer player utilizing Monte Carlo sampling to select each play.

use log::{debug, info};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::{Cell, GameError};
use crate::frequency::FrequencyGrid;
use crate::placement::PlacementGrid;
use crate::shots::ShotsGrid;
use crate::simulation::StepCounter;

/// One chosen guess, plus the frequency tally behind it when the decision
/// came from Monte Carlo sampling.
#[derive(Clone, Debug)]
pub struct Decision {
    pub cell: Cell,
    pub frequencies: Option<FrequencyGrid>,
}

/// Stateless decision engine. Each decision is recomputed from the current
/// shots grid:
///
/// 1. if cells have been hit, target the surrounding cells first
/// 2. otherwise generate `sample_size` random ship placements in the free
///    spaces and tally them
/// 3. randomly select from the cells most likely to contain part of a ship
///
/// A sample size of 0 disables sampling and falls back to purely random
/// guessing.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    sample_size: usize,
}

impl Player {
    /// Create a player with the given Monte Carlo sample size (0 for purely
    /// random guessing).
    pub fn new(sample_size: usize) -> Self {
        Player { sample_size }
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Select the next cell to guess based on targeting (if applicable) or
    /// Monte Carlo sampling. The counter records one step per targeting
    /// choice and one per sampling rollout.
    pub fn get_guess<R: Rng>(
        &self,
        rng: &mut R,
        shots: &ShotsGrid,
        counter: &mut StepCounter,
    ) -> Result<Decision, GameError> {
        let target_cells = shots.target_cells();
        if !target_cells.is_empty() {
            return Self::target_guess(rng, &target_cells, counter);
        }
        if self.sample_size == 0 {
            return Self::random_guess(rng, shots);
        }
        self.monte_carlo_guess(rng, shots, counter)
    }

    /// Uniform choice among cells adjacent to hits. Duplicate entries from
    /// multiple adjacent hits weight the draw toward those cells.
    fn target_guess<R: Rng>(
        rng: &mut R,
        target_cells: &[Cell],
        counter: &mut StepCounter,
    ) -> Result<Decision, GameError> {
        debug!("selecting from target cells: {:?}", target_cells);
        counter.increment();
        let cell = *target_cells.choose(rng).ok_or(GameError::NoCandidateCells)?;
        Ok(Decision {
            cell,
            frequencies: None,
        })
    }

    /// Uniform choice among all unguessed cells.
    fn random_guess<R: Rng>(rng: &mut R, shots: &ShotsGrid) -> Result<Decision, GameError> {
        let unguessed = shots.unguessed_cells();
        let cell = *unguessed.choose(rng).ok_or(GameError::NoCandidateCells)?;
        Ok(Decision {
            cell,
            frequencies: None,
        })
    }

    fn monte_carlo_guess<R: Rng>(
        &self,
        rng: &mut R,
        shots: &ShotsGrid,
        counter: &mut StepCounter,
    ) -> Result<Decision, GameError> {
        let guessed_cells = shots.guessed_cells();
        let mut frequencies = FrequencyGrid::with_size(shots.rows(), shots.cols());
        frequencies.set_guessed_cells(&guessed_cells)?;
        let ships = shots.remaining_ships(rng);
        info!("estimated remaining ships: {:?}", ships);
        for sample in 0..self.sample_size {
            debug!(
                "computing Monte Carlo sample {} of {}...",
                sample + 1,
                self.sample_size
            );
            counter.increment();
            let mut placements = PlacementGrid::with_size(shots.rows(), shots.cols());
            placements.mark_skipped(&guessed_cells)?;
            placements.sample(rng, &ships);
            for (row, col) in placements.occupied_cells() {
                frequencies.increment(row, col)?;
            }
        }
        debug!("frequencies after sampling:\n{}", frequencies);
        let best_cells = frequencies.best_cells();
        debug!("selecting from best probability cells: {:?}", best_cells);
        let cell = *best_cells.choose(rng).ok_or(GameError::NoCandidateCells)?;
        Ok(Decision {
            cell,
            frequencies: Some(frequencies),
        })
    }
}
