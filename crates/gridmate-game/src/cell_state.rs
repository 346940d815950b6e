use derive_more::IsVariant;
use gridmate_core::Digit;

/// The state of a single cell on the game board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// No digit has been entered.
    #[default]
    Empty,
    /// A fixed digit from the problem grid. Given cells cannot be modified.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
}

impl CellState {
    /// Returns the digit shown in the cell, whether given or filled.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Empty => None,
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_digit() {
        assert_eq!(CellState::Empty.as_digit(), None);
        assert_eq!(CellState::Given(Digit::D3).as_digit(), Some(Digit::D3));
        assert_eq!(CellState::Filled(Digit::D8).as_digit(), Some(Digit::D8));
    }

    #[test]
    fn test_variant_queries() {
        assert!(CellState::Empty.is_empty());
        assert!(CellState::Given(Digit::D1).is_given());
        assert!(CellState::Filled(Digit::D1).is_filled());
        assert!(!CellState::Filled(Digit::D1).is_given());
    }
}
