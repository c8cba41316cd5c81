//! Game of Life core: board storage, seeding, and the transition rule

pub mod grid;
pub mod loader;
pub mod rules;

pub use grid::Board;
pub use loader::{create_example_boards, load_board_from_file, parse_board, random_board};
pub use rules::next_generation;
