//! Difficulty presets for generated puzzles.

/// A difficulty preset, determining how many holes a puzzle has.
///
/// # Examples
///
/// ```
/// use gridmate_generator::Difficulty;
///
/// assert_eq!(Difficulty::Easy.hole_count(), 20);
/// assert_eq!(Difficulty::Hard.hole_count(), 40);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// An easier puzzle with 20 holes.
    #[default]
    Easy,
    /// A harder puzzle with 40 holes.
    Hard,
}

impl Difficulty {
    /// Returns the number of cells cleared from the solution at this
    /// difficulty.
    #[must_use]
    pub const fn hole_count(self) -> usize {
        match self {
            Self::Easy => 20,
            Self::Hard => 40,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hole_counts() {
        assert_eq!(Difficulty::Easy.hole_count(), 20);
        assert_eq!(Difficulty::Hard.hole_count(), 40);
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }
}
