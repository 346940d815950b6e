//! The 9×9 grid of digits and its constraint queries.

use std::{fmt, ops::Index, str::FromStr};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, House, Position, PositionSet};

/// An error which can be returned when parsing a [`DigitGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The input does not contain exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The input contains a character that is neither a digit nor a
    /// placeholder.
    #[display("invalid cell character: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

/// A 9×9 grid of optional digits.
///
/// The grid is the board representation shared by the generator and the game
/// layer: a solution is a fully filled grid, a problem is the same grid with
/// holes punched into it. Peer queries answer which digits are already taken
/// for a cell, which is all a placement check needs.
///
/// # Examples
///
/// ```
/// use gridmate_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
/// grid.set(Position::new(8, 0), Some(Digit::D7));
///
/// let peers = grid.row_peer_digits(Position::new(4, 0));
/// assert!(peers.contains(Digit::D5));
/// assert!(peers.contains(Digit::D7));
/// assert_eq!(grid.filled_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at the position, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places or clears the digit at the position.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    fn digits_at(&self, positions: PositionSet) -> DigitSet {
        positions.iter().filter_map(|pos| self.get(pos)).collect()
    }

    /// Returns the digits in the position's row, excluding the position
    /// itself.
    #[must_use]
    pub fn row_peer_digits(&self, pos: Position) -> DigitSet {
        self.digits_at(pos.row_peers())
    }

    /// Returns the digits in the position's column, excluding the position
    /// itself.
    #[must_use]
    pub fn column_peer_digits(&self, pos: Position) -> DigitSet {
        self.digits_at(pos.column_peers())
    }

    /// Returns the digits in the position's box, excluding the position
    /// itself.
    #[must_use]
    pub fn box_peer_digits(&self, pos: Position) -> DigitSet {
        self.digits_at(pos.box_peers())
    }

    /// Returns the digits among all of the position's peers.
    ///
    /// Peers are the cells sharing a row, column, or box with the position,
    /// excluding the position itself. A digit can be placed at the position
    /// without a conflict exactly when it is not in this set.
    #[must_use]
    pub fn peer_digits(&self, pos: Position) -> DigitSet {
        self.digits_at(pos.house_peers())
    }

    /// Returns the digits present in the house.
    #[must_use]
    pub fn house_digits(&self, house: House) -> DigitSet {
        self.digits_at(house.positions())
    }

    /// Returns the set of empty positions.
    #[must_use]
    pub fn empty_positions(&self) -> PositionSet {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos).is_none())
            .collect()
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Returns whether every cell is filled.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns whether no house contains a duplicate digit.
    ///
    /// Empty cells are ignored, so a partially filled grid is valid as long
    /// as its filled cells do not collide.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        for house in House::ALL {
            let mut seen = DigitSet::EMPTY;
            for pos in house.positions() {
                if let Some(digit) = self.get(pos) {
                    if seen.contains(digit) {
                        return false;
                    }
                    seen.insert(digit);
                }
            }
        }
        true
    }

    /// Returns whether the grid is completely filled without conflicts.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_filled() && self.is_valid()
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    /// Parses a grid from 81 cell characters.
    ///
    /// Digits `1` to `9` fill a cell; `.`, `_`, and `0` leave it empty.
    /// Whitespace is ignored, so multi-line layouts parse as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(81);
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match c {
                '.' | '_' | '0' => None,
                _ => {
                    let digit = c
                        .to_digit(10)
                        .and_then(|value| u8::try_from(value).ok())
                        .and_then(Digit::try_from_value)
                        .ok_or(ParseGridError::InvalidCharacter(c))?;
                    Some(digit)
                }
            };
            cells.push(cell);
        }
        let cells: [Option<Digit>; 81] = cells
            .try_into()
            .map_err(|cells: Vec<Option<Digit>>| ParseGridError::InvalidLength(cells.len()))?;
        Ok(Self { cells })
    }
}

impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED: &str =
        "498321657365487219271569384154632978629718435783954126836145792517296843942873561";

    fn solved_grid() -> DigitGrid {
        SOLVED.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let grid = solved_grid();
        assert_eq!(grid.to_string(), SOLVED);
        assert_eq!(grid[Position::new(0, 0)], Some(Digit::D4));
        assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D1));
    }

    #[test]
    fn test_parse_accepts_placeholders_and_whitespace() {
        let text = "
            53..7....
            6..195...
            .98....6.
            8...6...3
            4..8.3..1
            7...2...6
            .6....28.
            ...419..5
            ....8..79
        ";
        let grid: DigitGrid = text.parse().unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(4, 1)), Some(Digit::D9));
        assert_eq!(grid.filled_count(), 30);
    }

    #[test]
    fn test_parse_placeholder_forms_are_equivalent() {
        let dots: DigitGrid = ".".repeat(81).parse().unwrap();
        let zeros: DigitGrid = "0".repeat(81).parse().unwrap();
        let underscores: DigitGrid = "_".repeat(81).parse().unwrap();
        assert_eq!(dots, DigitGrid::new());
        assert_eq!(zeros, dots);
        assert_eq!(underscores, dots);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            ".".repeat(80).parse::<DigitGrid>(),
            Err(ParseGridError::InvalidLength(80))
        );
        assert_eq!(
            ".".repeat(82).parse::<DigitGrid>(),
            Err(ParseGridError::InvalidLength(82))
        );

        let mut text = ".".repeat(40);
        text.push('x');
        assert_eq!(
            text.parse::<DigitGrid>(),
            Err(ParseGridError::InvalidCharacter('x'))
        );
    }

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(
            ParseGridError::InvalidLength(80).to_string(),
            "expected 81 cells, found 80"
        );
        assert_eq!(
            ParseGridError::InvalidCharacter('x').to_string(),
            "invalid cell character: 'x'"
        );
    }

    #[test]
    fn test_peer_digit_queries() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(4, 0), Some(Digit::D1));
        grid.set(Position::new(0, 7), Some(Digit::D2));
        grid.set(Position::new(1, 1), Some(Digit::D3));

        let pos = Position::new(0, 0);
        assert_eq!(grid.row_peer_digits(pos), [Digit::D1].into_iter().collect());
        assert_eq!(
            grid.column_peer_digits(pos),
            [Digit::D2].into_iter().collect()
        );
        assert_eq!(grid.box_peer_digits(pos), [Digit::D3].into_iter().collect());
        assert_eq!(
            grid.peer_digits(pos),
            [Digit::D1, Digit::D2, Digit::D3].into_iter().collect()
        );

        grid.set(pos, Some(Digit::D9));
        assert!(!grid.peer_digits(pos).contains(Digit::D9));
    }

    #[test]
    fn test_peer_digits_of_solved_grid() {
        let grid = solved_grid();
        for pos in Position::ALL {
            let digit = grid.get(pos).unwrap();
            let peers = grid.peer_digits(pos);
            assert_eq!(peers.len(), 8);
            assert!(!peers.contains(digit));
        }
    }

    #[test]
    fn test_house_digits_of_solved_grid() {
        let grid = solved_grid();
        for house in House::ALL {
            assert_eq!(grid.house_digits(house), DigitSet::FULL);
        }
    }

    #[test]
    fn test_empty_grid_is_valid_but_unsolved() {
        let grid = DigitGrid::new();
        assert!(grid.is_valid());
        assert!(!grid.is_filled());
        assert!(!grid.is_solved());
        assert_eq!(grid.empty_positions(), PositionSet::FULL);
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_duplicate_digit_invalidates_grid() {
        let mut grid = solved_grid();
        assert!(grid.is_solved());

        let digit = grid.get(Position::new(0, 0));
        grid.set(Position::new(5, 0), digit);
        assert!(grid.is_filled());
        assert!(!grid.is_valid());
        assert!(!grid.is_solved());
    }

    #[test]
    fn test_empty_positions_track_cleared_cells() {
        let mut grid = solved_grid();
        assert!(grid.empty_positions().is_empty());

        grid.set(Position::new(3, 5), None);
        grid.set(Position::new(8, 0), None);
        let empty = grid.empty_positions();
        assert_eq!(empty.len(), 2);
        assert!(empty.contains(Position::new(3, 5)));
        assert!(empty.contains(Position::new(8, 0)));
        assert_eq!(grid.filled_count(), 79);
    }

    proptest! {
        #[test]
        fn prop_validity_matches_peer_digits(
            cells in prop::collection::vec(prop::option::of(1u8..=9), 81),
        ) {
            let mut grid = DigitGrid::new();
            for (pos, value) in Position::ALL.into_iter().zip(cells) {
                grid.set(pos, value.map(Digit::from_value));
            }

            let no_collisions = Position::ALL.into_iter().all(|pos| {
                grid.get(pos)
                    .is_none_or(|digit| !grid.peer_digits(pos).contains(digit))
            });
            prop_assert_eq!(grid.is_valid(), no_collisions);
        }
    }
}
