//! Animation driver: turns timer and pointer events into simulation ticks

use super::{Simulation, TickOutcome};
use crate::render::{DisplaySurface, EventSource, InputEvent};
use std::io;

/// Why the animation loop ended. Both are deliberate exits, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The colony converged to a fixed point
    Stable,
    /// The user pressed a pointer button
    Cancelled,
}

/// Couples an event source and a display surface to the simulation loop.
pub struct AnimationDriver<E, D> {
    events: E,
    display: D,
}

impl<E: EventSource, D: DisplaySurface> AnimationDriver<E, D> {
    pub fn new(events: E, display: D) -> Self {
        Self { events, display }
    }

    /// Show the seed board, then block on the next of {timer, pointer}
    /// until the colony stabilizes or the user cancels.
    ///
    /// Single-threaded and cooperative: a tick always runs to completion
    /// before the next event is observed, so cancellation never interrupts
    /// a half-computed generation.
    pub fn run(&mut self, sim: &mut Simulation) -> io::Result<ExitReason> {
        sim.render(&mut self.display)?;

        loop {
            match self.events.wait()? {
                InputEvent::Tick => {
                    if sim.tick(&mut self.display)? == TickOutcome::Stable {
                        return Ok(ExitReason::Stable);
                    }
                }
                InputEvent::PointerPressed => return Ok(ExitReason::Cancelled),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Board;
    use std::collections::VecDeque;

    struct ScriptedEvents(VecDeque<InputEvent>);

    impl EventSource for ScriptedEvents {
        fn wait(&mut self) -> io::Result<InputEvent> {
            Ok(self.0.pop_front().expect("event script exhausted"))
        }
    }

    #[derive(Default)]
    struct CountingDisplay {
        repaints: usize,
    }

    impl DisplaySurface for CountingDisplay {
        fn set_dimensions(&mut self, _: usize, _: usize) -> io::Result<()> {
            Ok(())
        }
        fn draw_cell_at(&mut self, _: usize, _: usize, _: u8) -> io::Result<()> {
            Ok(())
        }
        fn repaint(&mut self) -> io::Result<()> {
            self.repaints += 1;
            Ok(())
        }
    }

    fn blinker() -> Board {
        Board::from_rows(vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]).unwrap()
    }

    #[test]
    fn test_pointer_press_cancels_without_advancing() {
        let events = ScriptedEvents(VecDeque::from([InputEvent::PointerPressed]));
        let mut driver = AnimationDriver::new(events, CountingDisplay::default());

        let seed = blinker();
        let mut sim = Simulation::new(seed.clone(), 12);
        let reason = driver.run(&mut sim).unwrap();

        assert_eq!(reason, ExitReason::Cancelled);
        assert_eq!(sim.generation(), 0);
        assert_eq!(*sim.board(), seed);
        // only the seed render happened
        assert_eq!(driver.display.repaints, 1);
    }

    #[test]
    fn test_tick_in_progress_completes_before_cancel() {
        let events = ScriptedEvents(VecDeque::from([
            InputEvent::Tick,
            InputEvent::PointerPressed,
        ]));
        let mut driver = AnimationDriver::new(events, CountingDisplay::default());

        let mut sim = Simulation::new(blinker(), 12);
        let reason = driver.run(&mut sim).unwrap();

        assert_eq!(reason, ExitReason::Cancelled);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_runs_until_stable() {
        // with max_age 1 a block is immediately its own successor
        let block = Board::from_rows(vec![vec![1, 1], vec![1, 1]]).unwrap();
        let events = ScriptedEvents(VecDeque::from([InputEvent::Tick]));
        let mut driver = AnimationDriver::new(events, CountingDisplay::default());

        let mut sim = Simulation::new(block, 1);
        let reason = driver.run(&mut sim).unwrap();

        assert_eq!(reason, ExitReason::Stable);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_stability_after_several_ticks() {
        let block = Board::from_rows(vec![vec![1, 1], vec![1, 1]]).unwrap();
        let events = ScriptedEvents(VecDeque::from([InputEvent::Tick; 4]));
        let mut driver = AnimationDriver::new(events, CountingDisplay::default());

        // ages run 1 -> 3, then the fourth tick sees the fixed point
        let mut sim = Simulation::new(block, 3);
        let reason = driver.run(&mut sim).unwrap();

        assert_eq!(reason, ExitReason::Stable);
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.board().get(0, 0).unwrap(), 3);
    }
}
