//! Rows, columns, and boxes as constraint groups.

use crate::{Position, PositionSet};

/// A row, column, or 3×3 box of the board.
///
/// Each house covers nine cells that must hold nine distinct digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A horizontal line of cells.
    Row {
        /// The y coordinate shared by the row's cells.
        y: u8,
    },
    /// A vertical line of cells.
    Column {
        /// The x coordinate shared by the column's cells.
        x: u8,
    },
    /// A 3×3 box of cells.
    Box {
        /// The box index, row-major from the top-left box.
        index: u8,
    },
}

impl House {
    /// All 9 rows, indexed by y coordinate.
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut y = 0;
        #[expect(clippy::cast_possible_truncation)]
        while y < 9 {
            rows[y] = Self::Row { y: y as u8 };
            y += 1;
        }
        rows
    };

    /// All 9 columns, indexed by x coordinate.
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut x = 0;
        #[expect(clippy::cast_possible_truncation)]
        while x < 9 {
            columns[x] = Self::Column { x: x as u8 };
            x += 1;
        }
        columns
    };

    /// All 9 boxes, indexed by box index.
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut index = 0;
        #[expect(clippy::cast_possible_truncation)]
        while index < 9 {
            boxes[index] = Self::Box { index: index as u8 };
            index += 1;
        }
        boxes
    };

    /// All 27 houses: rows, then columns, then boxes.
    pub const ALL: [Self; 27] = {
        let mut houses = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            houses[i] = Self::ROWS[i];
            houses[i + 9] = Self::COLUMNS[i];
            houses[i + 18] = Self::BOXES[i];
            i += 1;
        }
        houses
    };

    /// Returns the position of the house's `i`-th cell.
    ///
    /// Cells are numbered 0 to 8: left to right for rows, top to bottom for
    /// columns, row-major within boxes.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 9`.
    #[must_use]
    pub const fn position(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            Self::Row { y } => Position::new(i, y),
            Self::Column { x } => Position::new(x, i),
            Self::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the set of positions the house covers.
    #[must_use]
    pub fn positions(self) -> PositionSet {
        match self {
            Self::Row { y } => PositionSet::ROW_POSITIONS[usize::from(y)],
            Self::Column { x } => PositionSet::COLUMN_POSITIONS[usize::from(x)],
            Self::Box { index } => PositionSet::BOX_POSITIONS[usize::from(index)],
        }
    }
}
