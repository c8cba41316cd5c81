//! Board seeding: random colonies and textual board sources

use super::Board;
use crate::error::{LifeError, Result};
use rand::Rng;
use std::ops::RangeInclusive;
use std::path::Path;

/// Marker character for a dead cell in board files. Any other character in a
/// body line marks a live cell with initial age 1.
pub const DEAD_MARKER: char = '-';

/// Edge lengths for randomly seeded boards.
const RANDOM_DIMENSIONS: RangeInclusive<usize> = 40..=60;

/// Seed a board with random dimensions and a ~50% live population.
///
/// Live cells start at a uniformly random age in `1..=max_age`.
pub fn random_board<R: Rng>(rng: &mut R, max_age: u8) -> Board {
    let rows = rng.random_range(RANDOM_DIMENSIONS);
    let cols = rng.random_range(RANDOM_DIMENSIONS);

    let mut board = Board::new(rows, cols);
    for age in board.cells.iter_mut() {
        if rng.random_bool(0.5) {
            *age = rng.random_range(1..=max_age);
        }
    }
    board
}

/// Load a board from a textual source on disk.
///
/// An unopenable source is `SourceUnavailable`; content that does not
/// describe a board is `MalformedBoard`. Neither is retried.
pub fn load_board_from_file<P: AsRef<Path>>(path: P) -> Result<Board> {
    let content =
        std::fs::read_to_string(&path).map_err(|source| LifeError::SourceUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
    parse_board(&content)
}

/// Parse a board from its textual form.
///
/// Format: any number of non-numeric header lines, a `rows` line, a `cols`
/// line, then exactly `rows` body lines. Body columns are bounded by both
/// the line length and `cols`; a short line leaves its remaining columns
/// dead.
pub fn parse_board(content: &str) -> Result<Board> {
    let mut lines = content.lines();

    // Skip the free-form header: everything before the first integer line.
    let rows = loop {
        let line = lines.next().ok_or_else(|| {
            LifeError::MalformedBoard("no row count found in source".to_string())
        })?;
        if let Ok(n) = line.trim().parse::<usize>() {
            break n;
        }
    };

    let cols = lines
        .next()
        .ok_or_else(|| LifeError::MalformedBoard("missing column count line".to_string()))?
        .trim()
        .parse::<usize>()
        .map_err(|_| LifeError::MalformedBoard("column count is not an integer".to_string()))?;

    if rows == 0 || cols == 0 {
        return Err(LifeError::MalformedBoard(format!(
            "dimensions must be positive, got {}x{}",
            rows, cols
        )));
    }

    let mut board = Board::new(rows, cols);
    for row in 0..rows {
        let line = lines.next().ok_or_else(|| {
            LifeError::MalformedBoard(format!(
                "expected {} body lines, found only {}",
                rows, row
            ))
        })?;
        for (col, ch) in line.chars().take(cols).enumerate() {
            if ch != DEAD_MARKER {
                board.set(row, col, 1)?;
            }
        }
    }

    Ok(board)
}

/// Write a handful of example board files in the textual format above.
pub fn create_example_boards<P: AsRef<Path>>(output_dir: P) -> anyhow::Result<()> {
    use anyhow::Context;

    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let bar = "A vertical bar that flips orientation each generation.\n\
               5\n5\n-----\n--X--\n--X--\n--X--\n-----\n";
    std::fs::write(dir.join("bar.txt"), bar).context("Failed to write bar.txt")?;

    let block = "A 2x2 block; it never moves, only ages.\n\
                 4\n4\n----\n-XX-\n-XX-\n----\n";
    std::fs::write(dir.join("block.txt"), block).context("Failed to write block.txt")?;

    let glider = "A glider that walks toward the bottom-right corner.\n\
                  10\n10\n-X--------\n--X-------\nXXX-------\n----------\n----------\n\
                  ----------\n----------\n----------\n----------\n----------\n";
    std::fs::write(dir.join("glider.txt"), glider).context("Failed to write glider.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    #[test]
    fn test_parse_with_header() {
        let content = "This file is a board.\nIt has two header lines.\n2\n3\nX-X\n-X-\n";
        let board = parse_board(content).unwrap();

        assert_eq!(board.dimensions(), (2, 3));
        assert_eq!(board.live_count(), 3);
        assert_eq!(board.get(0, 0).unwrap(), 1);
        assert_eq!(board.get(0, 1).unwrap(), 0);
        assert_eq!(board.get(1, 1).unwrap(), 1);
    }

    #[test]
    fn test_parse_any_character_is_alive() {
        let board = parse_board("1\n4\n*aX-\n").unwrap();
        assert_eq!(board.live_count(), 3);
        assert_eq!(board.get(0, 3).unwrap(), 0);
    }

    #[test]
    fn test_short_body_line_pads_dead() {
        // 3 columns declared, second line only has one
        let board = parse_board("2\n3\nXXX\nX\n").unwrap();
        assert_eq!(board.get(1, 0).unwrap(), 1);
        assert_eq!(board.get(1, 1).unwrap(), 0);
        assert_eq!(board.get(1, 2).unwrap(), 0);
    }

    #[test]
    fn test_overlong_body_line_is_clipped() {
        let board = parse_board("1\n2\nXXXXXX\n").unwrap();
        assert_eq!(board.dimensions(), (1, 2));
        assert_eq!(board.live_count(), 2);
    }

    #[test]
    fn test_missing_body_lines() {
        // declares 5 rows, provides 3
        let content = "5\n4\nXX--\n--XX\nX--X\n";
        let result = parse_board(content);
        assert!(matches!(result, Err(LifeError::MalformedBoard(_))));
    }

    #[test]
    fn test_no_numeric_lines() {
        let result = parse_board("just\nprose\nhere\n");
        assert!(matches!(result, Err(LifeError::MalformedBoard(_))));
    }

    #[test]
    fn test_bad_column_count() {
        let result = parse_board("3\nnot-a-number\nXXX\nXXX\nXXX\n");
        assert!(matches!(result, Err(LifeError::MalformedBoard(_))));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            parse_board("0\n5\n"),
            Err(LifeError::MalformedBoard(_))
        ));
        assert!(matches!(
            parse_board("5\n0\n"),
            Err(LifeError::MalformedBoard(_))
        ));
    }

    #[test]
    fn test_random_board_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = random_board(&mut rng, 12);

        let (rows, cols) = board.dimensions();
        assert!((40..=60).contains(&rows));
        assert!((40..=60).contains(&cols));

        for row in 0..rows {
            for col in 0..cols {
                assert!(board.get(row, col).unwrap() <= 12);
            }
        }
        // a 50% fill of a 40x40+ board is never empty in practice
        assert!(board.live_count() > 0);
    }

    #[test]
    fn test_random_board_deterministic_per_seed() {
        let a = random_board(&mut StdRng::seed_from_u64(42), 12);
        let b = random_board(&mut StdRng::seed_from_u64(42), 12);
        assert_eq!(a, b);
    }

    #[test]
    fn test_load_missing_file_is_source_unavailable() {
        let dir = tempdir().unwrap();
        let result = load_board_from_file(dir.path().join("no-such-board.txt"));
        assert!(matches!(result, Err(LifeError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.txt");
        std::fs::write(&path, "tiny board\n2\n2\nX-\n-X\n").unwrap();

        let board = load_board_from_file(&path).unwrap();
        assert_eq!(board.dimensions(), (2, 2));
        assert_eq!(board.live_count(), 2);
    }

    #[test]
    fn test_create_example_boards() {
        let dir = tempdir().unwrap();
        create_example_boards(dir.path()).unwrap();

        for name in ["bar.txt", "block.txt", "glider.txt"] {
            let board = load_board_from_file(dir.path().join(name)).unwrap();
            assert!(board.live_count() > 0);
        }

        let glider = load_board_from_file(dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.dimensions(), (10, 10));
        assert_eq!(glider.live_count(), 5);
    }
}
