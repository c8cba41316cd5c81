//! Display and output formatting utilities

use crate::game_of_life::Board;

/// Textual board dumps for the console
pub struct BoardFormatter;

impl BoardFormatter {
    /// Format a board in compact form
    pub fn format_compact(board: &Board) -> String {
        let (rows, cols) = board.dimensions();
        let mut output = String::with_capacity(rows * (cols + 1));
        for row in 0..rows {
            for col in 0..cols {
                let age = board.get_or_dead(row as isize, col as isize);
                output.push(if age > 0 { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a board with one digit per cell so ages are readable
    pub fn format_ages(board: &Board) -> String {
        let (rows, cols) = board.dimensions();
        let mut output = String::with_capacity(rows * (cols + 1));
        for row in 0..rows {
            for col in 0..cols {
                let age = board.get_or_dead(row as isize, col as isize);
                output.push(match age {
                    0 => '·',
                    1..=9 => (b'0' + age) as char,
                    _ => '+',
                });
            }
            output.push('\n');
        }
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
