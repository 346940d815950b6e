//! Game session management for number-place puzzles.
//!
//! This crate wraps a generated puzzle in a playable [`Game`]:
//!
//! 1. Given cells from the problem grid are fixed and cannot be edited.
//! 2. The player fills and clears the remaining cells with
//!    [`Game::set_digit`] and [`Game::clear_cell`].
//! 3. [`Game::revalidate`] recomputes a [`ValidationReport`] listing every
//!    duplicated digit and the groups (row, column, box) it collides in.
//! 4. When a report finds all holes filled without conflicts, the game
//!    latches to won.
//!
//! # Example
//!
//! ```
//! use gridmate_core::Position;
//! use gridmate_game::Game;
//! use gridmate_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(Difficulty::Easy);
//! let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("demo"));
//! let mut game = Game::new(puzzle.clone());
//!
//! // Copy the solution into every hole and the game is won.
//! for pos in Position::ALL {
//!     if game.cell(pos).is_empty() {
//!         let digit = puzzle.solution.get(pos).expect("solution is complete");
//!         game.set_digit(pos, digit).unwrap();
//!     }
//! }
//! assert!(game.revalidate().is_complete());
//! assert!(game.is_won());
//! ```

mod cell_state;
mod error;
mod game;
mod validation;

pub use self::{
    cell_state::CellState,
    error::GameError,
    game::{Game, GameStatus},
    validation::{ConflictGroups, ValidationReport},
};
