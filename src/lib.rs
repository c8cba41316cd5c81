//! Game of Life colony simulator
//!
//! This library animates the lifecycle of a bacteria colony: cells live and
//! die by a fixed neighbor-counting rule and age while they survive. The
//! animation runs on a timer until the colony stabilizes or the user presses
//! a pointer button.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod render;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::Board;
pub use simulation::{AnimationDriver, ExitReason, Simulation};

use anyhow::{Context, Result};
use config::SeedMode;
use game_of_life::{load_board_from_file, random_board};
use render::{TerminalDisplay, TerminalEvents};

/// How a finished run ended and what it left behind.
pub struct SimulationOutcome {
    pub reason: ExitReason,
    pub generations: u64,
    pub final_board: Board,
}

/// Seed a board according to the settings: a random colony, or a board file.
pub fn seed_board(settings: &Settings) -> Result<Board> {
    match settings.input.seed {
        SeedMode::Random => {
            let mut rng = rand::rng();
            Ok(random_board(&mut rng, settings.simulation.max_age))
        }
        SeedMode::File => {
            let path = settings
                .input
                .board_file
                .as_ref()
                .context("Seed mode 'file' requires a board file")?;
            Ok(load_board_from_file(path)?)
        }
    }
}

/// Main entry point: seed a board and animate it in the terminal until the
/// colony stabilizes or the user cancels.
pub fn run_simulation(settings: Settings) -> Result<SimulationOutcome> {
    let board = seed_board(&settings)?;
    let mut sim = Simulation::new(board, settings.simulation.max_age);

    let display = TerminalDisplay::new(settings.simulation.max_age)
        .context("Failed to initialize terminal display")?;
    let events = TerminalEvents::new(settings.tick_interval());

    let mut driver = AnimationDriver::new(events, display);
    let reason = driver.run(&mut sim).context("Animation loop failed")?;
    drop(driver); // restores the terminal before anything else prints

    Ok(SimulationOutcome {
        reason,
        generations: sim.generation(),
        final_board: sim.board().clone(),
    })
}
