//! Core data structures for the gridmate puzzle engine.
//!
//! This crate defines the board vocabulary shared by the generator and game
//! crates:
//!
//! 1. [`Digit`] and [`DigitSet`]: the nine cell digits and bit sets of them.
//! 2. [`Position`] and [`PositionSet`]: board coordinates and bitboards with
//!    precomputed row, column, and box masks.
//! 3. [`House`]: the 27 constraint groups of the board.
//! 4. [`DigitGrid`]: the 9×9 grid with peer and validity queries.
//!
//! # Examples
//!
//! ```
//! use gridmate_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(2, 4), Some(Digit::D5));
//! grid.set(Position::new(6, 4), Some(Digit::D5));
//!
//! // Two 5s share a row, so the grid is no longer valid.
//! assert!(grid.row_peer_digits(Position::new(2, 4)).contains(Digit::D5));
//! assert!(!grid.is_valid());
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;
pub mod position_set;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    house::House,
    position::Position,
    position_set::PositionSet,
};
