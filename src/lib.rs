//! Simulation of the Battleship board game: estimates how many turns a
//! computer player needs to sink a hidden fleet, comparing purely random
//! guessing against Monte Carlo sampling.

mod common;
mod config;
mod frequency;
mod grid;
mod logging;
mod placement;
mod player;
mod shots;
mod simulation;

pub use common::*;
pub use config::*;
pub use frequency::*;
pub use grid::*;
pub use logging::init_logging;
pub use placement::*;
pub use player::*;
pub use shots::*;
pub use simulation::*;
