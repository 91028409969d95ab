//! One guessing round: a guess and its aligned verdicts
//!
//! A `WordUnit` may be partially typed while editing. Positions without a
//! letter still carry a verdict, which defaults to `Missing`.

use std::fmt;

use thiserror::Error;

use super::{Verdict, WORD_LEN, parse_pattern, pattern_to_emoji};

/// What a single tile shows: an optional letter and its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub verdict: Verdict,
}

/// A guess of up to five characters with five index-aligned verdicts
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordUnit {
    guess: String,
    verdicts: [Verdict; WORD_LEN],
}

/// Error type for rounds written as `GUESS=PATTERN`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("expected GUESS=PATTERN, got '{0}'")]
    MissingSeparator(String),
    #[error("guess '{0}' must be exactly 5 letters")]
    InvalidGuess(String),
    #[error(transparent)]
    Pattern(#[from] super::PatternError),
}

impl WordUnit {
    /// Create a unit from (possibly partial) guess text and verdicts
    ///
    /// Text beyond five characters is dropped. Verdict slots not covered by
    /// `verdicts` default to `Missing`.
    #[must_use]
    pub fn new(guess: &str, verdicts: &[Verdict]) -> Self {
        let mut row = [Verdict::Missing; WORD_LEN];
        for (slot, v) in row.iter_mut().zip(verdicts) {
            *slot = *v;
        }

        Self {
            guess: guess.chars().take(WORD_LEN).collect(),
            verdicts: row,
        }
    }

    /// The typed guess text (0-5 characters)
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LEN] {
        &self.verdicts
    }

    /// Whether all five letters have been typed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.guess.chars().count() == WORD_LEN
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guess.is_empty()
    }

    /// Tile descriptors for rendering, one per letter position
    #[must_use]
    pub fn tiles(&self) -> [Tile; WORD_LEN] {
        render(&self.guess, &self.verdicts)
    }

    /// Verdict row after a click on tile `index`
    ///
    /// The unit itself is left untouched; the owner replaces its verdicts
    /// with the returned row.
    ///
    /// # Panics
    /// Panics if `index >= 5`
    #[must_use]
    pub fn clicked(&self, index: usize) -> [Verdict; WORD_LEN] {
        let mut row = self.verdicts;
        row[index] = row[index].next();
        row
    }
}

/// Pair each typed character with its verdict
///
/// Positions past the end of `guess` render without a letter, and positions
/// past the end of `verdicts` render as `Missing`.
#[must_use]
pub fn render(guess: &str, verdicts: &[Verdict]) -> [Tile; WORD_LEN] {
    let mut letters = guess.chars();
    std::array::from_fn(|i| Tile {
        letter: letters.next(),
        verdict: verdicts.get(i).copied().unwrap_or_default(),
    })
}

impl std::str::FromStr for WordUnit {
    type Err = UnitError;

    /// Parse a round written as `CRANE=G-Y--`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, pattern) = s
            .split_once('=')
            .ok_or_else(|| UnitError::MissingSeparator(s.to_string()))?;

        if guess.chars().count() != WORD_LEN {
            return Err(UnitError::InvalidGuess(guess.to_string()));
        }

        let verdicts = parse_pattern(pattern)?;
        Ok(Self::new(guess, &verdicts))
    }
}

impl fmt::Display for WordUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<5} {}",
            self.guess.to_uppercase(),
            pattern_to_emoji(&self.verdicts)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PatternError;

    #[test]
    fn render_partial_guess() {
        let tiles = render("cr", &[Verdict::Correct]);

        assert_eq!(tiles[0].letter, Some('c'));
        assert_eq!(tiles[0].verdict, Verdict::Correct);
        assert_eq!(tiles[1].letter, Some('r'));
        assert_eq!(tiles[1].verdict, Verdict::Missing);
        for tile in &tiles[2..] {
            assert_eq!(tile.letter, None);
            assert_eq!(tile.verdict, Verdict::Missing);
        }
    }

    #[test]
    fn clicked_changes_only_one_slot() {
        let unit = WordUnit::new("crane", &[Verdict::Correct; 5]);
        let row = unit.clicked(2);

        assert_eq!(
            row,
            [
                Verdict::Correct,
                Verdict::Correct,
                Verdict::Missing,
                Verdict::Correct,
                Verdict::Correct,
            ]
        );
        // Source unit is unchanged
        assert_eq!(unit.verdicts(), &[Verdict::Correct; 5]);
    }

    #[test]
    fn clicked_on_empty_tile_still_cycles() {
        let unit = WordUnit::default();
        assert_eq!(unit.clicked(4)[4], Verdict::WrongPlace);
    }

    #[test]
    fn new_truncates_long_text() {
        let unit = WordUnit::new("cranes", &[]);
        assert_eq!(unit.guess(), "crane");
        assert!(unit.is_complete());
    }

    #[test]
    fn parse_round_argument() {
        let unit: WordUnit = "CRANE=G----".parse().unwrap();
        assert_eq!(unit.guess(), "CRANE");
        assert_eq!(unit.verdicts()[0], Verdict::Correct);
        assert_eq!(unit.verdicts()[1..], [Verdict::Missing; 4]);
    }

    #[test]
    fn parse_round_argument_errors() {
        assert_eq!(
            "CRANE".parse::<WordUnit>(),
            Err(UnitError::MissingSeparator("CRANE".to_string()))
        );
        assert_eq!(
            "CRAN=G----".parse::<WordUnit>(),
            Err(UnitError::InvalidGuess("CRAN".to_string()))
        );
        assert_eq!(
            "CRANE=G--".parse::<WordUnit>(),
            Err(UnitError::Pattern(PatternError::InvalidLength(3)))
        );
    }

    #[test]
    fn display_shows_uppercase_and_emoji() {
        let unit: WordUnit = "crane=gy---".parse().unwrap();
        assert_eq!(unit.to_string(), "CRANE 🟩🟨⬜⬜⬜");
    }
}
