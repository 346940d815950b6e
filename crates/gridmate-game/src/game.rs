use std::collections::BTreeMap;

use derive_more::IsVariant;
use gridmate_core::{Digit, DigitGrid, Position, PositionSet};
use gridmate_generator::GeneratedPuzzle;

use crate::{CellState, GameError, ValidationReport, validation::conflict_groups};

/// The progress state of a game.
///
/// The status starts as [`InProgress`](Self::InProgress) and latches to
/// [`Solved`](Self::Solved) the first time a validation pass finds the board
/// complete. Edits made after that point do not revert it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, IsVariant)]
pub enum GameStatus {
    /// The puzzle still has unfilled or conflicting cells.
    #[default]
    InProgress,
    /// The board has been completely filled without conflicts.
    Solved,
}

/// A puzzle game session.
///
/// Tracks given cells from the problem grid and player input separately,
/// keeps the solution grid for reference, and reports conflicts and fill
/// progress through [`ValidationReport`] snapshots.
///
/// # Example
///
/// ```
/// use gridmate_game::Game;
/// use gridmate_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new(Difficulty::Easy);
/// let puzzle = generator.generate();
/// let game = Game::new(puzzle);
///
/// // Game tracks given cells and player input separately
/// assert!(!game.is_won());
/// assert_eq!(game.hole_count(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: DigitGrid,
    hole_count: usize,
    last_report: ValidationReport,
    status: GameStatus,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// All cells with digits in the puzzle's problem grid are marked as given
    /// (fixed) cells; the empty cells are the holes the player has to fill.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = puzzle;
        Self::from_parts(&problem, solution)
    }

    /// Creates a game from a problem grid and its solution.
    ///
    /// Cells with digits in `problem` become given cells. This is the entry
    /// point for boards restored from storage rather than freshly generated
    /// ones.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnsolvedSolution`] if `solution` is not a
    /// completely and correctly solved grid, and
    /// [`GameError::ProblemSolutionMismatch`] if `problem` holds a digit that
    /// differs from `solution` at the same position.
    pub fn from_grids(problem: &DigitGrid, solution: &DigitGrid) -> Result<Self, GameError> {
        if !solution.is_solved() {
            return Err(GameError::UnsolvedSolution);
        }
        for pos in Position::ALL {
            if let Some(digit) = problem.get(pos)
                && solution.get(pos) != Some(digit)
            {
                return Err(GameError::ProblemSolutionMismatch);
            }
        }
        Ok(Self::from_parts(problem, solution.clone()))
    }

    fn from_parts(problem: &DigitGrid, solution: DigitGrid) -> Self {
        let mut cells = [const { CellState::Empty }; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem.get(pos) {
                cells[pos.index()] = CellState::Given(digit);
            }
        }

        let mut this = Self {
            cells,
            solution,
            hole_count: 81 - problem.filled_count(),
            last_report: ValidationReport::new(BTreeMap::new(), 0, 0),
            status: GameStatus::InProgress,
        };
        this.refresh_report();
        this
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Places a digit at the given position.
    ///
    /// If the cell is empty it becomes filled; if it is already filled, the
    /// digit is replaced. The validation report is not recomputed until
    /// [`revalidate`](Self::revalidate) is called.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the position contains
    /// a given cell.
    ///
    /// # Example
    ///
    /// ```
    /// use gridmate_core::{Digit, Position};
    /// use gridmate_game::{CellState, Game};
    /// use gridmate_generator::{Difficulty, PuzzleGenerator};
    ///
    /// let generator = PuzzleGenerator::new(Difficulty::Easy);
    /// let puzzle = generator.generate();
    /// let mut game = Game::new(puzzle);
    ///
    /// // Find an empty cell
    /// let empty_pos = *Position::ALL
    ///     .iter()
    ///     .find(|&&pos| game.cell(pos).is_empty())
    ///     .expect("puzzle has empty cells");
    ///
    /// // Fill it
    /// game.set_digit(empty_pos, Digit::D5).unwrap();
    /// assert_eq!(game.cell(empty_pos), CellState::Filled(Digit::D5));
    /// ```
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        let cell = &mut self.cells[pos.index()];
        if cell.is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        *cell = CellState::Filled(digit);
        Ok(())
    }

    /// Clears the digit at the given position.
    ///
    /// If the cell is filled it becomes empty. Clearing an already empty cell
    /// has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the position contains
    /// a given cell.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        let cell = &mut self.cells[pos.index()];
        if cell.is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        *cell = CellState::Empty;
        Ok(())
    }

    /// Recomputes the validation report and returns it.
    ///
    /// The report lists every conflicting cell with the groups it collides
    /// in, along with fill progress. Once a report comes back complete the
    /// game status latches to [`GameStatus::Solved`].
    ///
    /// # Example
    ///
    /// ```
    /// use gridmate_core::Position;
    /// use gridmate_game::Game;
    /// use gridmate_generator::{Difficulty, PuzzleGenerator};
    ///
    /// let generator = PuzzleGenerator::new(Difficulty::Easy);
    /// let puzzle = generator.generate();
    /// let mut game = Game::new(puzzle.clone());
    ///
    /// // Fill all empty cells from the solution
    /// for pos in Position::ALL {
    ///     if game.cell(pos).is_empty() {
    ///         let digit = puzzle.solution.get(pos).expect("solution is complete");
    ///         game.set_digit(pos, digit).unwrap();
    ///     }
    /// }
    ///
    /// assert!(game.revalidate().is_complete());
    /// assert!(game.is_won());
    /// ```
    pub fn revalidate(&mut self) -> &ValidationReport {
        self.refresh_report();
        self.last_report()
    }

    fn refresh_report(&mut self) {
        let grid = self.to_digit_grid();
        let mut conflicts = BTreeMap::new();
        let mut filled_holes = 0;
        for pos in Position::ALL {
            if self.cell(pos).is_filled() {
                filled_holes += 1;
            }
            let groups = conflict_groups(&grid, pos);
            if !groups.is_empty() {
                conflicts.insert(pos, groups);
            }
        }

        self.last_report = ValidationReport::new(conflicts, filled_holes, self.hole_count);
        if self.last_report.is_complete() {
            self.status = GameStatus::Solved;
        }
    }

    /// Returns the most recently computed validation report.
    #[must_use]
    pub fn last_report(&self) -> &ValidationReport {
        &self.last_report
    }

    /// Returns the current game status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns whether the game has been won.
    ///
    /// Equivalent to checking that [`status`](Self::status) is
    /// [`GameStatus::Solved`].
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.status.is_solved()
    }

    /// Returns the number of holes the problem started with.
    #[must_use]
    pub const fn hole_count(&self) -> usize {
        self.hole_count
    }

    /// Returns the positions the player can edit.
    #[must_use]
    pub fn editable_positions(&self) -> PositionSet {
        Position::ALL
            .into_iter()
            .filter(|&pos| !self.cell(pos).is_given())
            .collect()
    }

    /// Returns the stored solution grid for this puzzle.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the digits currently on the board, given and filled alike.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cell(pos).as_digit());
        }
        grid
    }
}
