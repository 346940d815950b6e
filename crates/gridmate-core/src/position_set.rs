//! A set of board positions backed by an 81-bit mask.

use std::{
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use crate::Position;

/// A set of board positions, represented as a bitboard.
///
/// Bit `i` of the backing `u128` corresponds to the position with row-major
/// index `i`. Precomputed masks for every row, column, and box make peer and
/// house lookups single mask operations.
///
/// # Examples
///
/// ```
/// use gridmate_core::{Position, PositionSet};
///
/// // The first row, minus its corner
/// let mut set = PositionSet::ROW_POSITIONS[0];
/// set.remove(Position::new(0, 0));
///
/// assert_eq!(set.len(), 8);
/// assert!(set.contains(Position::new(5, 0)));
/// assert!(!set.contains(Position::new(5, 1)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositionSet {
    bits: u128,
}

impl PositionSet {
    /// The set containing no positions.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all 81 positions.
    pub const FULL: Self = Self {
        bits: (1 << 81) - 1,
    };

    /// The positions of each row, indexed by y coordinate.
    pub const ROW_POSITIONS: [Self; 9] = {
        let mut rows = [Self::EMPTY; 9];
        let mut y = 0;
        while y < 9 {
            let mut bits = 0u128;
            let mut x = 0;
            while x < 9 {
                bits |= 1 << (y * 9 + x);
                x += 1;
            }
            rows[y] = Self { bits };
            y += 1;
        }
        rows
    };

    /// The positions of each column, indexed by x coordinate.
    pub const COLUMN_POSITIONS: [Self; 9] = {
        let mut columns = [Self::EMPTY; 9];
        let mut x = 0;
        while x < 9 {
            let mut bits = 0u128;
            let mut y = 0;
            while y < 9 {
                bits |= 1 << (y * 9 + x);
                y += 1;
            }
            columns[x] = Self { bits };
            x += 1;
        }
        columns
    };

    /// The positions of each 3×3 box, indexed by box index.
    pub const BOX_POSITIONS: [Self; 9] = {
        let mut boxes = [Self::EMPTY; 9];
        let mut index = 0;
        while index < 9 {
            let mut bits = 0u128;
            let mut i = 0;
            while i < 9 {
                let x = (index % 3) * 3 + i % 3;
                let y = (index / 3) * 3 + i / 3;
                bits |= 1 << (y * 9 + x);
                i += 1;
            }
            boxes[index] = Self { bits };
            index += 1;
        }
        boxes
    };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    fn bit(pos: Position) -> u128 {
        1 << pos.index()
    }

    /// Adds a position to the set.
    pub fn insert(&mut self, pos: Position) {
        self.bits |= Self::bit(pos);
    }

    /// Removes a position from the set.
    pub fn remove(&mut self, pos: Position) {
        self.bits &= !Self::bit(pos);
    }

    /// Returns whether the set contains the position.
    #[must_use]
    pub fn contains(self, pos: Position) -> bool {
        self.bits & Self::bit(pos) != 0
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the positions present in `self`, `other`, or both.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the positions present in both `self` and `other`.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the positions present in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the positions in row-major order.
    #[must_use]
    pub const fn iter(self) -> PositionSetIter {
        PositionSetIter { bits: self.bits }
    }
}

impl BitOr for PositionSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for PositionSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for PositionSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for PositionSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl Not for PositionSet {
    type Output = Self;

    fn not(self) -> Self {
        Self::FULL.difference(self)
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = PositionSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the positions of a [`PositionSet`], in row-major order.
#[derive(Debug, Clone)]
pub struct PositionSetIter {
    bits: u128,
}

impl Iterator for PositionSetIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        #[expect(clippy::cast_possible_truncation)]
        let index = index as u8;
        Some(Position::new(index % 9, index / 9))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for PositionSetIter {}
impl FusedIterator for PositionSetIter {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_house_masks_have_nine_positions() {
        for i in 0..9 {
            assert_eq!(PositionSet::ROW_POSITIONS[i].len(), 9);
            assert_eq!(PositionSet::COLUMN_POSITIONS[i].len(), 9);
            assert_eq!(PositionSet::BOX_POSITIONS[i].len(), 9);
        }
    }

    #[test]
    fn test_house_masks_cover_the_board() {
        let mut rows = PositionSet::EMPTY;
        let mut columns = PositionSet::EMPTY;
        let mut boxes = PositionSet::EMPTY;
        for i in 0..9 {
            rows |= PositionSet::ROW_POSITIONS[i];
            columns |= PositionSet::COLUMN_POSITIONS[i];
            boxes |= PositionSet::BOX_POSITIONS[i];
        }
        assert_eq!(rows, PositionSet::FULL);
        assert_eq!(columns, PositionSet::FULL);
        assert_eq!(boxes, PositionSet::FULL);
    }

    #[test]
    fn test_house_masks_match_coordinates() {
        for pos in Position::ALL {
            assert!(PositionSet::ROW_POSITIONS[usize::from(pos.y())].contains(pos));
            assert!(PositionSet::COLUMN_POSITIONS[usize::from(pos.x())].contains(pos));
            assert!(PositionSet::BOX_POSITIONS[usize::from(pos.box_index())].contains(pos));
        }
    }

    #[test]
    fn test_insert_remove_contains() {
        let mut set = PositionSet::new();
        let pos = Position::new(4, 7);

        set.insert(pos);
        assert!(set.contains(pos));
        assert_eq!(set.len(), 1);

        set.remove(pos);
        assert!(!set.contains(pos));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_is_row_major() {
        let positions = [Position::new(8, 0), Position::new(0, 1), Position::new(3, 0)];
        let set: PositionSet = positions.into_iter().collect();
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(
            collected,
            [Position::new(3, 0), Position::new(8, 0), Position::new(0, 1)]
        );
    }

    #[test]
    fn test_full_complement() {
        assert_eq!(!PositionSet::EMPTY, PositionSet::FULL);
        assert_eq!(PositionSet::FULL.len(), 81);
        assert_eq!(
            PositionSet::FULL.difference(PositionSet::ROW_POSITIONS[0]).len(),
            72
        );
    }

    proptest! {
        #[test]
        fn prop_from_iter_matches_membership(
            coords in prop::collection::vec((0u8..9, 0u8..9), 0..40),
        ) {
            let positions: Vec<Position> =
                coords.into_iter().map(|(x, y)| Position::new(x, y)).collect();
            let set: PositionSet = positions.iter().copied().collect();

            for pos in Position::ALL {
                prop_assert_eq!(set.contains(pos), positions.contains(&pos));
            }

            let mut expected = positions;
            expected.sort_unstable();
            expected.dedup();
            prop_assert_eq!(set.iter().collect::<Vec<_>>(), expected.clone());
            prop_assert_eq!(set.len(), expected.len());
        }
    }
}
