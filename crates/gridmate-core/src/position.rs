//! Board coordinates and peer lookups.

use std::cmp::Ordering;

use crate::PositionSet;

/// A board position identified by its `(x, y)` coordinates.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions order row-major, matching their linear [`index`].
///
/// Out-of-range coordinates are a programming error: construction panics
/// rather than returning a `Result`, so a `Position` in hand is always on
/// the board.
///
/// [`index`]: Self::index
///
/// # Examples
///
/// ```
/// use gridmate_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.index(), 22);
/// assert_eq!(pos.box_index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from `(x, y)` coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates the position at cell `i` (0-8) of the box at `index` (0-8).
    ///
    /// Boxes and the cells within them are both numbered left to right, top
    /// to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `index` or `i` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridmate_core::Position;
    ///
    /// assert_eq!(Position::from_box(0, 0), Position::new(0, 0));
    /// assert_eq!(Position::from_box(4, 8), Position::new(5, 5));
    /// assert_eq!(Position::from_box(8, 0), Position::new(6, 6));
    /// ```
    #[must_use]
    pub const fn from_box(index: u8, i: u8) -> Self {
        assert!(index < 9 && i < 9);
        Self {
            x: (index % 3) * 3 + i % 3,
            y: (index / 3) * 3 + i / 3,
        }
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major linear index (0-80).
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.y) * 9 + usize::from(self.x)
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the other positions in this position's row.
    #[must_use]
    pub fn row_peers(self) -> PositionSet {
        let mut peers = PositionSet::ROW_POSITIONS[usize::from(self.y)];
        peers.remove(self);
        peers
    }

    /// Returns the other positions in this position's column.
    #[must_use]
    pub fn column_peers(self) -> PositionSet {
        let mut peers = PositionSet::COLUMN_POSITIONS[usize::from(self.x)];
        peers.remove(self);
        peers
    }

    /// Returns the other positions in this position's box.
    #[must_use]
    pub fn box_peers(self) -> PositionSet {
        let mut peers = PositionSet::BOX_POSITIONS[usize::from(self.box_index())];
        peers.remove(self);
        peers
    }

    /// Returns the other positions sharing a row, column, or box with this
    /// position.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridmate_core::Position;
    ///
    /// let peers = Position::new(0, 0).house_peers();
    /// assert_eq!(peers.len(), 20);
    /// assert!(!peers.contains(Position::new(0, 0)));
    /// ```
    #[must_use]
    pub fn house_peers(self) -> PositionSet {
        let mut peers = PositionSet::ROW_POSITIONS[usize::from(self.y)]
            .union(PositionSet::COLUMN_POSITIONS[usize::from(self.x)])
            .union(PositionSet::BOX_POSITIONS[usize::from(self.box_index())]);
        peers.remove(self);
        peers
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
