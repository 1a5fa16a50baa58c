//! One full game to completion, with optional per-turn snapshots.

use log::info;
use rand::Rng;

use crate::common::{Cell, GameError};
use crate::frequency::FrequencyGrid;
use crate::placement::PlacementGrid;
use crate::player::Player;
use crate::shots::ShotsGrid;

/// Counts algorithm steps for reporting: one per targeting choice, one per
/// Monte Carlo rollout. Owned by the caller, not the player.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepCounter {
    steps: usize,
}

impl StepCounter {
    pub fn new() -> Self {
        StepCounter::default()
    }

    pub fn increment(&mut self) {
        self.steps += 1;
    }

    pub fn value(&self) -> usize {
        self.steps
    }
}

/// Metrics from a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// Guesses taken to sink the fleet.
    pub guesses: usize,
    /// Algorithm steps accumulated across all decisions.
    pub steps: usize,
}

/// Per-turn state emitted to a [`TurnObserver`], captured before the turn's
/// guess is applied.
#[derive(Debug)]
pub struct TurnSnapshot<'a> {
    pub guessed_cells: &'a [Cell],
    pub hit_cells: &'a [Cell],
    /// Frequency tally behind the decision; present only for Monte Carlo
    /// sampling turns.
    pub frequencies: Option<&'a FrequencyGrid>,
}

/// Receives one snapshot per turn, strictly for external reporting; the
/// snapshot is never read back by the game.
pub trait TurnObserver {
    fn on_turn(&mut self, snapshot: &TurnSnapshot<'_>);
}

/// Play one game to completion and return its outcome metrics.
///
/// A fresh fleet is placed and a fresh shots grid created; the player is
/// invoked each turn until the game is won. A failed strict placement is
/// reported as [`GameError::PlacementExhausted`] so the caller can discard
/// and retry; the game never silently retries it.
pub fn run_one_game<R: Rng>(
    rng: &mut R,
    sample_size: usize,
    mut observer: Option<&mut dyn TurnObserver>,
) -> Result<GameOutcome, GameError> {
    let mut counter = StepCounter::new();

    let mut placements = PlacementGrid::new();
    if !placements.initialize(rng) {
        return Err(GameError::PlacementExhausted);
    }

    let mut shots = ShotsGrid::new();
    let player = Player::new(sample_size);

    while !shots.is_won() {
        let decision = player.get_guess(rng, &shots, &mut counter)?;
        if let Some(observer) = observer.as_deref_mut() {
            let guessed_cells = shots.guessed_cells();
            let hit_cells = shots.hit_cells();
            observer.on_turn(&TurnSnapshot {
                guessed_cells: &guessed_cells,
                hit_cells: &hit_cells,
                frequencies: decision.frequencies.as_ref(),
            });
        }
        let (row, col) = decision.cell;
        shots.guess(row, col, &placements)?;
    }

    let guesses = shots.guessed_cells().len();
    info!("the game was won after {} guesses", guesses);
    Ok(GameOutcome {
        guesses,
        steps: counter.value(),
    })
}
