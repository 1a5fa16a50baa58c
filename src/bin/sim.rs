//! Repeated-trial runner comparing Battleship guessing strategies, emitting
//! a JSON summary of guesses, steps, and duration per sample size.

use std::time::Instant;

use anyhow::bail;
use battleship_sim::{init_logging, run_one_game, GameError, TurnObserver, TurnSnapshot};
use clap::Parser;
use log::{info, warn, LevelFilter};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "sim",
    version,
    about = "Statistical comparison of Battleship guessing strategies"
)]
struct Cli {
    /// Include the purely random guessing strategy.
    #[arg(short, long)]
    random: bool,

    /// Monte Carlo sample sizes to simulate (comma separated).
    #[arg(short, long = "montecarlo", value_name = "N", value_delimiter = ',')]
    montecarlo: Vec<usize>,

    /// Number of times to repeat each simulation.
    #[arg(default_value_t = 1)]
    repeat: usize,

    /// Fix the RNG seed for reproducible simulations.
    #[arg(long)]
    seed: Option<u64>,

    /// Print each turn's frequency grid while playing.
    #[arg(long)]
    trace: bool,

    /// Enable verbose logging.
    #[arg(short = 'x', long)]
    verbose: bool,
}

#[derive(Serialize)]
struct RunRecord {
    guesses: usize,
    steps: usize,
    duration_s: f64,
}

#[derive(Serialize)]
struct StrategySummary {
    sample_size: usize,
    repetitions: usize,
    mean_guesses: f64,
    mean_steps: f64,
    mean_duration_s: f64,
    runs: Vec<RunRecord>,
}

/// Prints each sampling turn's frequency grid with guessed and hit cells
/// blanked out, mirroring what the player saw when deciding.
struct TraceObserver;

impl TurnObserver for TraceObserver {
    fn on_turn(&mut self, snapshot: &TurnSnapshot<'_>) {
        if let Some(frequencies) = snapshot.frequencies {
            let mut grid = frequencies.clone();
            let _ = grid.set_guessed_cells(snapshot.guessed_cells);
            let _ = grid.set_hit_cells(snapshot.hit_cells);
            println!("{}", grid);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    if !cli.random && cli.montecarlo.is_empty() {
        bail!("specify which strategy to use (--random and/or --montecarlo)");
    }
    let mut sample_sizes = Vec::new();
    if cli.random {
        sample_sizes.push(0);
    }
    sample_sizes.extend(&cli.montecarlo);

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut summaries = Vec::with_capacity(sample_sizes.len());
    for (index, &sample_size) in sample_sizes.iter().enumerate() {
        info!(
            "running strategy {} of {} (sample size {})...",
            index + 1,
            sample_sizes.len(),
            sample_size
        );
        let mut runs = Vec::with_capacity(cli.repeat);
        for repetition in 0..cli.repeat {
            info!("running simulation {} of {}...", repetition + 1, cli.repeat);
            runs.push(simulate(&mut rng, sample_size, cli.trace)?);
        }
        summaries.push(summarize(sample_size, runs));
    }

    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

/// Run one game, retrying only when the strict fleet placement exhausts its
/// attempt budget.
fn simulate(rng: &mut SmallRng, sample_size: usize, trace: bool) -> anyhow::Result<RunRecord> {
    let mut tracer = TraceObserver;
    loop {
        let start = Instant::now();
        let observer: Option<&mut dyn TurnObserver> =
            if trace { Some(&mut tracer) } else { None };
        match run_one_game(rng, sample_size, observer) {
            Ok(outcome) => {
                return Ok(RunRecord {
                    guesses: outcome.guesses,
                    steps: outcome.steps,
                    duration_s: start.elapsed().as_secs_f64(),
                });
            }
            Err(GameError::PlacementExhausted) => {
                warn!("fleet placement failed, retrying with a fresh grid");
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn summarize(sample_size: usize, runs: Vec<RunRecord>) -> StrategySummary {
    StrategySummary {
        sample_size,
        repetitions: runs.len(),
        mean_guesses: mean(runs.iter().map(|r| r.guesses as f64)),
        mean_steps: mean(runs.iter().map(|r| r.steps as f64)),
        mean_duration_s: mean(runs.iter().map(|r| r.duration_s)),
        runs,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (mut sum, mut count) = (0.0, 0usize);
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
