//! Example demonstrating puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty preset
//! - Generate a random puzzle, or regenerate one from a seed
//! - Display the problem, solution, and seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Select the difficulty preset (easy or hard):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Override the preset with an exact hole count:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --holes 30
//! ```
//!
//! Regenerate a puzzle from its seed, or derive a seed from a phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! cargo run --example generate_puzzle -- --phrase "daily 2024-01-15"
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use gridmate_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyKind {
    Easy,
    Hard,
}

impl From<DifficultyKind> for Difficulty {
    fn from(kind: DifficultyKind) -> Self {
        match kind {
            DifficultyKind::Easy => Self::Easy,
            DifficultyKind::Hard => Self::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty preset choosing the number of holes.
    #[arg(long, value_name = "DIFFICULTY", default_value = "easy")]
    difficulty: DifficultyKind,

    /// Exact number of holes to punch, overriding the preset.
    #[arg(long, value_name = "COUNT")]
    holes: Option<usize>,

    /// Seed to regenerate a puzzle from, as 64 hex digits.
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = match args.holes {
        Some(holes) if holes > 81 => {
            eprintln!("--holes must be at most 81.");
            process::exit(1);
        }
        Some(holes) => PuzzleGenerator::with_hole_count(holes),
        None => PuzzleGenerator::new(args.difficulty.into()),
    };

    let puzzle = match (args.seed, args.phrase) {
        (Some(text), None) => match text.parse::<PuzzleSeed>() {
            Ok(seed) => generator.generate_with_seed(seed),
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        (None, Some(phrase)) => generator.generate_with_seed(PuzzleSeed::from_phrase(&phrase)),
        (None, None) => generator.generate(),
        (Some(_), Some(_)) => unreachable!("clap rejects conflicting arguments"),
    };

    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
