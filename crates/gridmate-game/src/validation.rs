//! Conflict detection and progress reporting.

use std::collections::BTreeMap;

use gridmate_core::{DigitGrid, Position, PositionSet};

bitflags::bitflags! {
    /// The constraint groups in which a cell's digit is duplicated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ConflictGroups: u8 {
        /// The digit appears again in the cell's row.
        const ROW = 0b001;
        /// The digit appears again in the cell's column.
        const COLUMN = 0b010;
        /// The digit appears again in the cell's box.
        const BOX = 0b100;
    }
}

/// Computes the groups in which the digit at `pos` is duplicated.
///
/// Empty cells never conflict.
pub(crate) fn conflict_groups(grid: &DigitGrid, pos: Position) -> ConflictGroups {
    let Some(digit) = grid.get(pos) else {
        return ConflictGroups::empty();
    };

    let mut groups = ConflictGroups::empty();
    if grid.row_peer_digits(pos).contains(digit) {
        groups |= ConflictGroups::ROW;
    }
    if grid.column_peer_digits(pos).contains(digit) {
        groups |= ConflictGroups::COLUMN;
    }
    if grid.box_peer_digits(pos).contains(digit) {
        groups |= ConflictGroups::BOX;
    }
    groups
}

/// A snapshot of the board's conflicts and fill progress.
///
/// A report is produced by [`Game::revalidate`](crate::Game::revalidate) and
/// lists every cell whose digit is duplicated within a row, column, or box,
/// along with how many of the puzzle's holes have been filled. The report is
/// complete when all holes are filled and no conflicts remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    conflicts: BTreeMap<Position, ConflictGroups>,
    filled_holes: usize,
    hole_count: usize,
}

impl ValidationReport {
    pub(crate) fn new(
        conflicts: BTreeMap<Position, ConflictGroups>,
        filled_holes: usize,
        hole_count: usize,
    ) -> Self {
        Self {
            conflicts,
            filled_holes,
            hole_count,
        }
    }

    /// Returns whether any cell's digit is duplicated within a group.
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Returns whether every hole is filled and no conflicts remain.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.filled_holes == self.hole_count && !self.has_conflicts()
    }

    /// Returns the conflicting cells and their groups, in row-major order.
    pub fn conflicting_cells(&self) -> impl Iterator<Item = (Position, ConflictGroups)> + '_ {
        self.conflicts.iter().map(|(&pos, &groups)| (pos, groups))
    }

    /// Returns the groups in which the digit at `pos` is duplicated.
    ///
    /// Cells without a conflict return [`ConflictGroups::empty`].
    #[must_use]
    pub fn groups_at(&self, pos: Position) -> ConflictGroups {
        self.conflicts
            .get(&pos)
            .copied()
            .unwrap_or_else(ConflictGroups::empty)
    }

    /// Returns the number of holes currently holding a player digit.
    #[must_use]
    pub const fn filled_holes(&self) -> usize {
        self.filled_holes
    }

    /// Returns the number of holes the puzzle started with.
    #[must_use]
    pub const fn hole_count(&self) -> usize {
        self.hole_count
    }

    /// Returns every position of every group containing a conflict.
    ///
    /// Each conflicting cell is expanded to the full rows, columns, and boxes
    /// it collides in. This is the set of cells a front end would highlight.
    #[must_use]
    pub fn implicated_positions(&self) -> PositionSet {
        let mut implicated = PositionSet::EMPTY;
        for (&pos, &groups) in &self.conflicts {
            if groups.contains(ConflictGroups::ROW) {
                implicated |= PositionSet::ROW_POSITIONS[usize::from(pos.y())];
            }
            if groups.contains(ConflictGroups::COLUMN) {
                implicated |= PositionSet::COLUMN_POSITIONS[usize::from(pos.x())];
            }
            if groups.contains(ConflictGroups::BOX) {
                implicated |= PositionSet::BOX_POSITIONS[usize::from(pos.box_index())];
            }
        }
        implicated
    }
}
