//! The life/death/aging transition rule

use super::Board;
use itertools::Itertools;
use rayon::prelude::*;

/// Compute the next generation of a board.
///
/// Pure with respect to `board`: every cell is decided from the input
/// snapshot alone, and the successor starts as a fresh all-dead board so the
/// "dies" branches leave explicit zeros rather than stale ages.
pub fn next_generation(board: &Board, max_age: u8) -> Board {
    let (rows, cols) = board.dimensions();
    let mut next = Board::new(rows, cols);

    let next_cells: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            (0..cols).into_par_iter().map(move |col| {
                let neighbors = count_neighbors(board, row, col);
                let age = board.get_or_dead(row as isize, col as isize);
                next_age(age, neighbors, max_age)
            })
        })
        .collect();

    next.cells = next_cells;
    next
}

/// Count live Moore neighbors of a cell. Coordinates past an edge never
/// count; there is no wraparound.
pub fn count_neighbors(board: &Board, row: usize, col: usize) -> u8 {
    (-1isize..=1)
        .cartesian_product(-1isize..=1)
        .filter(|&offset| offset != (0, 0))
        .filter(|&(dr, dc)| board.get_or_dead(row as isize + dr, col as isize + dc) > 0)
        .count() as u8
}

/// The four-rule policy for a single cell, by live-neighbor count:
/// 1 or fewer kills by loneliness, 2 preserves, 3 births or grows,
/// 4 or more kills by overcrowding. Aging saturates at `max_age`.
pub fn next_age(age: u8, neighbors: u8, max_age: u8) -> u8 {
    match neighbors {
        0 | 1 => 0,
        2 => {
            if age == 0 {
                0
            } else {
                age.saturating_add(1).min(max_age)
            }
        }
        3 => age.saturating_add(1).min(max_age),
        _ => 0,
    }
}
