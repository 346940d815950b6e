use derive_more::{Display, Error};

/// An error which can be returned by game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted cell is a given cell, which cannot be modified.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// The supplied solution grid is not completely and correctly solved.
    #[display("solution grid is not solved")]
    UnsolvedSolution,
    /// The supplied problem grid contradicts the solution grid.
    #[display("problem grid does not match the solution grid")]
    ProblemSolutionMismatch,
}
