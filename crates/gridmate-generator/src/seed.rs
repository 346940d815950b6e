//! Seeds for reproducible puzzle generation.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use sha2::{Digest as _, Sha256};

/// An error which can be returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The input does not contain exactly 64 hex digits.
    #[display("expected 64 hex digits, found {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The input contains a character that is not a hex digit.
    #[display("invalid hex digit: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

/// A 256-bit seed for the puzzle generator.
///
/// Equal seeds produce equal puzzles, so a seed is all that is needed to
/// reproduce or share a puzzle. Seeds display as 64 hex digits and parse back
/// from that form, or can be derived from an arbitrary phrase.
///
/// # Examples
///
/// ```
/// use gridmate_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("good morning");
/// assert_eq!(seed, PuzzleSeed::from_phrase("good morning"));
/// assert_eq!(seed.to_string().len(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed {
    bytes: [u8; 32],
}

impl PuzzleSeed {
    /// Creates a fresh random seed.
    #[must_use]
    pub fn random() -> Self {
        Self {
            bytes: rand::random(),
        }
    }

    /// Derives a seed from an arbitrary phrase.
    ///
    /// The phrase is hashed with SHA-256, so equal phrases always yield the
    /// same seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self {
            bytes: Sha256::digest(phrase).into(),
        }
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Returns the seed's raw bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 32] {
        self.bytes
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    /// Parses a seed from the 64 hex digits its `Display` form produces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .and_then(|digit| u8::try_from(digit).ok())
                    .ok_or(ParseSeedError::InvalidCharacter(c))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if digits.len() != 64 {
            return Err(ParseSeedError::InvalidLength(digits.len()));
        }

        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self { bytes })
    }
}
