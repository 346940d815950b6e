//! Seeded puzzle generation for the gridmate puzzle engine.
//!
//! The generator produces a [`GeneratedPuzzle`]: a solved grid, a problem
//! grid derived from it by punching holes, and the [`PuzzleSeed`] that
//! determines both. [`Difficulty`] presets choose how many holes a puzzle
//! has.
//!
//! # Examples
//!
//! ```
//! use gridmate_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(Difficulty::Easy);
//! let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("lunch break"));
//!
//! assert!(puzzle.solution.is_solved());
//! assert_eq!(puzzle.problem.empty_positions().len(), 20);
//!
//! // The seed reproduces the puzzle exactly.
//! assert_eq!(generator.generate_with_seed(puzzle.seed), puzzle);
//! ```

mod difficulty;
mod generator;
mod seed;

pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
