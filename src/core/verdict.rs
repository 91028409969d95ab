//! Per-letter feedback verdicts
//!
//! A verdict classifies one letter of a guess:
//! - `Missing` (gray): letter not in the word
//! - `WrongPlace` (yellow): letter in the word, wrong position
//! - `Correct` (green): letter in the correct position
//!
//! Clicking a tile advances its verdict through the fixed cycle
//! `Missing → WrongPlace → Correct → Missing`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::WORD_LEN;

/// Feedback for a single letter position
///
/// Serializes as the variant name (`"Correct"`, `"WrongPlace"`, `"Missing"`),
/// which is the form the solver service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    WrongPlace,
    #[default]
    Missing,
}

impl Verdict {
    /// All verdicts in cycle order, starting from the default
    pub const ALL: [Self; 3] = [Self::Missing, Self::WrongPlace, Self::Correct];

    /// The verdict a tile shows after one more click
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Missing => Self::WrongPlace,
            Self::WrongPlace => Self::Correct,
            Self::Correct => Self::Missing,
        }
    }

    /// Emoji square for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongPlace => '🟨',
            Self::Missing => '⬜',
        }
    }
}

/// Error type for verdict rows written in text notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must be exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("unknown pattern symbol '{0}' (use G, Y or -)")]
    InvalidSymbol(char),
}

/// Parse a verdict row from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for wrong place
/// - '-'/'_'/'.'/⬜ for missing
///
/// # Errors
/// Returns `PatternError` if the row is not five symbols long or contains
/// anything else.
///
/// # Examples
/// ```
/// use wordle_squire::core::{Verdict, parse_pattern};
///
/// let row = parse_pattern("G-Y--").unwrap();
/// assert_eq!(row[0], Verdict::Correct);
/// assert_eq!(row[2], Verdict::WrongPlace);
/// assert_eq!(parse_pattern("🟩⬜🟨⬜⬜").unwrap(), row);
/// ```
pub fn parse_pattern(s: &str) -> Result<[Verdict; WORD_LEN], PatternError> {
    let symbols: Vec<char> = s.chars().collect();

    if symbols.len() != WORD_LEN {
        return Err(PatternError::InvalidLength(symbols.len()));
    }

    let mut row = [Verdict::Missing; WORD_LEN];
    for (slot, ch) in row.iter_mut().zip(symbols) {
        *slot = match ch {
            'G' | 'g' | '🟩' => Verdict::Correct,
            'Y' | 'y' | '🟨' => Verdict::WrongPlace,
            '-' | '_' | '.' | '⬜' => Verdict::Missing,
            other => return Err(PatternError::InvalidSymbol(other)),
        };
    }

    Ok(row)
}

/// Convert a verdict row to an emoji string like "🟩🟨⬜🟩🟨"
#[must_use]
pub fn pattern_to_emoji(row: &[Verdict]) -> String {
    row.iter().map(|v| v.emoji()).collect()
}
