//! The simulation loop: owns the current board, advances it, detects
//! convergence, and pushes each new generation to the display

pub mod driver;

pub use driver::{AnimationDriver, ExitReason};

use crate::game_of_life::{next_generation, Board};
use crate::render::DisplaySurface;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Running,
    /// Terminal: the colony converged and will never change again
    Halted,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The board changed and was pushed to the display
    Advanced,
    /// The board equals its successor
    Stable,
}

/// Owns the current generation and the convergence state machine.
pub struct Simulation {
    current: Board,
    max_age: u8,
    generation: u64,
    state: SimState,
}

impl Simulation {
    pub fn new(board: Board, max_age: u8) -> Self {
        Self {
            current: board,
            max_age,
            generation: 0,
            state: SimState::Running,
        }
    }

    pub fn board(&self) -> &Board {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// Advance one generation.
    ///
    /// When the successor equals the current board the simulation halts for
    /// good; nothing is drawn on that tick and every later tick reports
    /// `Stable` without recomputing. Otherwise the new board replaces the
    /// old one and is pushed to the display. Display failures are fatal.
    pub fn tick<D: DisplaySurface>(&mut self, display: &mut D) -> io::Result<TickOutcome> {
        if self.state == SimState::Halted {
            return Ok(TickOutcome::Stable);
        }

        let next = next_generation(&self.current, self.max_age);
        if next == self.current {
            self.state = SimState::Halted;
            return Ok(TickOutcome::Stable);
        }

        self.current = next;
        self.generation += 1;
        self.render(display)?;
        Ok(TickOutcome::Advanced)
    }

    /// Push the current board: resize, draw every cell in row-major order,
    /// repaint.
    pub fn render<D: DisplaySurface>(&self, display: &mut D) -> io::Result<()> {
        let (rows, cols) = self.current.dimensions();
        display.set_dimensions(rows, cols)?;
        for row in 0..rows {
            for col in 0..cols {
                let age = self.current.get_or_dead(row as isize, col as isize);
                display.draw_cell_at(row, col, age)?;
            }
        }
        display.repaint()
    }
}
