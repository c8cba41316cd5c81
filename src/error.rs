//! Error taxonomy for board loading and grid access

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the simulation core
#[derive(Debug, Error)]
pub enum LifeError {
    /// The board source could not be opened at all
    #[error("board source {path} could not be opened")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The board source opened but its contents do not describe a board
    #[error("malformed board: {0}")]
    MalformedBoard(String),

    /// A cell access outside the grid bounds
    #[error("cell ({row}, {col}) out of range for {rows}x{cols} board")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

pub type Result<T> = std::result::Result<T, LifeError>;
