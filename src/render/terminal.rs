//! crossterm-backed terminal display and event source

use super::{DisplaySurface, EventSource, InputEvent};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Start of the ANSI 256-color grayscale ramp (near black).
const GRAY_DARKEST: u8 = 232;
/// How far up the ramp a cell fades by the time it reaches max age.
const GRAY_STEPS: u16 = 12;

/// Renders the board as shaded blocks in the terminal.
///
/// Construction switches the terminal into raw mode with a hidden cursor and
/// mouse capture enabled; drop restores all three.
pub struct TerminalDisplay {
    out: io::Stdout,
    max_age: u8,
}

impl TerminalDisplay {
    pub fn new(max_age: u8) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide, EnableMouseCapture)?;
        Ok(Self {
            out: io::stdout(),
            max_age,
        })
    }
}

impl DisplaySurface for TerminalDisplay {
    fn set_dimensions(&mut self, _rows: usize, _cols: usize) -> io::Result<()> {
        // the terminal is as big as it is; clearing is the resize
        queue!(self.out, terminal::Clear(terminal::ClearType::All))
    }

    fn draw_cell_at(&mut self, row: usize, col: usize, age: u8) -> io::Result<()> {
        if age == 0 {
            // the clear above already painted dead cells
            return Ok(());
        }
        queue!(
            self.out,
            cursor::MoveTo(col as u16, row as u16),
            SetForegroundColor(Color::AnsiValue(age_shade(age, self.max_age))),
            Print('█'),
            ResetColor
        )
    }

    fn repaint(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        // if we could enable these, we should be able to undo them
        let _ = execute!(io::stdout(), cursor::Show, DisableMouseCapture);
        let _ = terminal::disable_raw_mode();
    }
}

/// Grayscale ANSI value for an age: darkest for newborn cells, fading
/// toward gray as the age approaches `max_age`.
fn age_shade(age: u8, max_age: u8) -> u8 {
    let span = max_age.max(2) as u16 - 1;
    let step = (age.min(max_age).saturating_sub(1)) as u16 * GRAY_STEPS / span;
    GRAY_DARKEST + step as u8
}

/// Blocking event source: a fixed-interval tick deadline with terminal
/// input polled in the gaps.
///
/// A mouse button press (or Ctrl-C / `q`) cancels; anything else is ignored
/// and the wait continues until the deadline passes.
pub struct TerminalEvents {
    interval: Duration,
    next_tick: Instant,
}

impl TerminalEvents {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_tick: Instant::now() + interval,
        }
    }
}

impl EventSource for TerminalEvents {
    fn wait(&mut self) -> io::Result<InputEvent> {
        loop {
            let now = Instant::now();
            if now >= self.next_tick {
                self.next_tick += self.interval;
                return Ok(InputEvent::Tick);
            }

            if event::poll(self.next_tick - now)? {
                match event::read()? {
                    Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                        return Ok(InputEvent::PointerPressed);
                    }
                    Event::Key(KeyEvent {
                        code: KeyCode::Char('c'),
                        modifiers: KeyModifiers::CONTROL,
                        ..
                    })
                    | Event::Key(KeyEvent {
                        code: KeyCode::Char('q'),
                        ..
                    }) => {
                        return Ok(InputEvent::PointerPressed);
                    }
                    _ => {}
                }
            }
        }
    }
}
