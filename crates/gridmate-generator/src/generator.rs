//! Seeded puzzle generation.

use gridmate_core::{Digit, DigitGrid, Position};
use rand::{Rng, RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::{Difficulty, PuzzleSeed};

/// A generated puzzle: the problem grid, its solution, and the seed that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The grid handed to the player, with holes punched into it.
    pub problem: DigitGrid,
    /// The solved grid the problem was derived from.
    pub solution: DigitGrid,
    /// The seed that produced this puzzle.
    pub seed: PuzzleSeed,
}

/// A pseudo-random puzzle generator.
///
/// The generator fills the three diagonal boxes with independently shuffled
/// permutations, completes the rest of the grid by backtracking, and punches
/// holes into a copy of the finished solution. All randomness comes from a
/// [`PuzzleSeed`], so every puzzle can be regenerated from its seed.
///
/// # Examples
///
/// ```
/// use gridmate_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new(Difficulty::Easy);
/// let puzzle = generator.generate();
///
/// assert!(puzzle.solution.is_solved());
/// assert_eq!(puzzle.problem.empty_positions().len(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    hole_count: usize,
}

impl PuzzleGenerator {
    /// Creates a generator for the difficulty's hole count.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self::with_hole_count(difficulty.hole_count())
    }

    /// Creates a generator that punches exactly `hole_count` holes.
    ///
    /// # Panics
    ///
    /// Panics if `hole_count > 81`.
    #[must_use]
    pub const fn with_hole_count(hole_count: usize) -> Self {
        assert!(hole_count <= 81);
        Self { hole_count }
    }

    /// Returns the number of holes this generator punches.
    #[must_use]
    pub const fn hole_count(self) -> usize {
        self.hole_count
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by the seed.
    ///
    /// The same seed and hole count always produce the same puzzle.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridmate_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
    ///
    /// let generator = PuzzleGenerator::new(Difficulty::Hard);
    /// let seed = PuzzleSeed::from_phrase("daily 2024-01-15");
    ///
    /// assert_eq!(
    ///     generator.generate_with_seed(seed),
    ///     generator.generate_with_seed(seed),
    /// );
    /// ```
    #[must_use]
    pub fn generate_with_seed(self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(seed.to_bytes());

        let solution = loop {
            if let Some(solution) = try_fill_solution(&mut rng) {
                break solution;
            }
            log::warn!("backtracking failed to complete a grid, retrying");
        };

        let problem = punch_holes(&solution, self.hole_count, &mut rng);
        log::debug!(
            "generated puzzle with {} holes from seed {seed}",
            self.hole_count
        );

        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}

/// Attempts to fill a complete solution grid.
///
/// The three diagonal boxes share no row or column, so they are seeded with
/// shuffled permutations first; backtracking then fills the remaining cells
/// in row-major order.
fn try_fill_solution(rng: &mut impl Rng) -> Option<DigitGrid> {
    let mut grid = DigitGrid::new();
    fill_diagonal_boxes(&mut grid, rng);
    fill_remaining(&mut grid, 0, rng).then_some(grid)
}

fn fill_diagonal_boxes(grid: &mut DigitGrid, rng: &mut impl Rng) {
    for box_index in [0, 4, 8] {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        for (i, digit) in (0..).zip(digits) {
            grid.set(Position::from_box(box_index, i), Some(digit));
        }
    }
}

/// Fills the cells from `index` onward, trying candidate digits in random
/// order and undoing the placement when no candidate leads to a solution.
fn fill_remaining(grid: &mut DigitGrid, index: usize, rng: &mut impl Rng) -> bool {
    let Some(&pos) = Position::ALL.get(index) else {
        return true;
    };
    if grid.get(pos).is_some() {
        return fill_remaining(grid, index + 1, rng);
    }

    let mut candidates: Vec<_> = (!grid.peer_digits(pos)).iter().collect();
    candidates.shuffle(rng);
    for digit in candidates {
        grid.set(pos, Some(digit));
        if fill_remaining(grid, index + 1, rng) {
            return true;
        }
    }
    grid.set(pos, None);
    false
}

/// Clears `hole_count` cells of a copy of the solution.
///
/// Positions are drawn uniformly; already cleared cells are drawn again, so
/// exactly `hole_count` distinct cells end up empty.
fn punch_holes(solution: &DigitGrid, hole_count: usize, rng: &mut impl Rng) -> DigitGrid {
    let mut problem = solution.clone();
    let mut punched = 0;
    while punched < hole_count {
        let pos = Position::new(rng.random_range(0..9), rng.random_range(0..9));
        if problem.get(pos).is_some() {
            problem.set(pos, None);
            punched += 1;
        }
    }
    problem
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn test_seed(n: u8) -> PuzzleSeed {
        PuzzleSeed::from_bytes([n; 32])
    }

    #[test]
    fn test_generated_solution_is_solved() {
        let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate_with_seed(test_seed(1));
        assert!(puzzle.solution.is_solved());
        assert!(puzzle.problem.is_valid());
    }

    #[test]
    fn test_hole_counts_match_difficulty() {
        for (difficulty, holes) in [(Difficulty::Easy, 20), (Difficulty::Hard, 40)] {
            let puzzle = PuzzleGenerator::new(difficulty).generate_with_seed(test_seed(2));
            assert_eq!(puzzle.problem.empty_positions().len(), holes);
            assert_eq!(puzzle.problem.filled_count(), 81 - holes);
        }
    }

    #[test]
    fn test_problem_agrees_with_solution() {
        let puzzle = PuzzleGenerator::new(Difficulty::Hard).generate_with_seed(test_seed(3));
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem.get(pos) {
                assert_eq!(puzzle.solution.get(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let generator = PuzzleGenerator::new(Difficulty::Easy);
        assert_eq!(
            generator.generate_with_seed(test_seed(4)),
            generator.generate_with_seed(test_seed(4)),
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let generator = PuzzleGenerator::new(Difficulty::Easy);
        assert_ne!(
            generator.generate_with_seed(test_seed(5)).solution,
            generator.generate_with_seed(test_seed(6)).solution,
        );
    }

    #[test]
    fn test_hole_count_does_not_change_the_solution() {
        let easy = PuzzleGenerator::new(Difficulty::Easy).generate_with_seed(test_seed(7));
        let hard = PuzzleGenerator::new(Difficulty::Hard).generate_with_seed(test_seed(7));
        assert_eq!(easy.solution, hard.solution);
    }

    #[test]
    fn test_zero_and_full_hole_counts() {
        let unpunched = PuzzleGenerator::with_hole_count(0).generate_with_seed(test_seed(8));
        assert_eq!(unpunched.problem, unpunched.solution);

        let blank = PuzzleGenerator::with_hole_count(81).generate_with_seed(test_seed(8));
        assert_eq!(blank.problem, DigitGrid::new());
    }

    #[test]
    #[should_panic(expected = "hole_count <= 81")]
    fn test_rejects_excessive_hole_count() {
        let _ = PuzzleGenerator::with_hole_count(82);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_generation_is_consistent(phrase in ".*", hole_count in 0usize..=81) {
            let seed = PuzzleSeed::from_phrase(&phrase);
            let puzzle = PuzzleGenerator::with_hole_count(hole_count).generate_with_seed(seed);

            prop_assert!(puzzle.solution.is_solved());
            prop_assert_eq!(puzzle.problem.empty_positions().len(), hole_count);
            prop_assert_eq!(puzzle.seed, seed);
            for pos in Position::ALL {
                if let Some(digit) = puzzle.problem.get(pos) {
                    prop_assert_eq!(puzzle.solution.get(pos), Some(digit));
                }
            }
        }
    }
}
