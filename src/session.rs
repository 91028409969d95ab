//! Guess session state
//!
//! One flat text buffer (owned by the keyboard capture) and one flat verdict
//! array sized for the maximum number of rounds. Everything the UI shows is
//! derived from these two buffers.

use crate::client::SubmissionPayload;
use crate::core::{Verdict, WORD_LEN, WordUnit, grid};
use crate::input::{CaptureAction, Key, KeyboardCapture, SpacePolicy};

/// Default maximum number of rounds
pub const DEFAULT_ROUNDS: usize = 5;

/// Session limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum number of rounds; 1 gives the single-word layout. Zero is
    /// treated as 1.
    pub max_rounds: usize,
    pub space: SpacePolicy,
}

impl SessionConfig {
    /// Maximum length of the raw text buffer
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.rounds() * WORD_LEN
    }

    /// Number of rounds actually laid out
    #[must_use]
    pub const fn rounds(&self) -> usize {
        if self.max_rounds == 0 { 1 } else { self.max_rounds }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_ROUNDS,
            space: SpacePolicy::Reject,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    capture: KeyboardCapture,
    verdicts: Vec<Verdict>,
    max_rounds: usize,
}

impl Session {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            capture: KeyboardCapture::new(config.max_len(), config.space),
            verdicts: vec![Verdict::Missing; config.max_len()],
            max_rounds: config.rounds(),
        }
    }

    /// Raw typed text across all rounds
    #[must_use]
    pub fn text(&self) -> &str {
        self.capture.text()
    }

    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Rounds that have at least one typed character
    #[must_use]
    pub fn active_rounds(&self) -> usize {
        grid::active_rounds(self.capture.text())
    }

    /// Every round's unit, including untyped trailing rounds
    #[must_use]
    pub fn units(&self) -> Vec<WordUnit> {
        grid::partition(self.capture.text(), &self.verdicts, self.max_rounds)
    }

    pub fn handle_key(&mut self, key: Key) -> CaptureAction {
        self.capture.handle(key)
    }

    /// Advance the verdict of tile `index` in round `round`
    ///
    /// Returns `false` (and changes nothing) when the position is outside the
    /// grid.
    pub fn cycle(&mut self, round: usize, index: usize) -> bool {
        if round >= self.max_rounds || index >= WORD_LEN {
            return false;
        }

        let units = self.units();
        let row = units[round].clicked(index);
        self.verdicts = grid::merge_edit(&self.verdicts, round, &row);
        true
    }

    /// Only whole rounds can be submitted
    #[must_use]
    pub fn can_submit(&self) -> bool {
        let len = self.capture.len();
        len > 0 && len % WORD_LEN == 0
    }

    /// Request payload for every round with typed text, in round order
    #[must_use]
    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload::from_units(&self.units())
    }

    /// Forget all typed text and verdicts
    pub fn clear(&mut self) {
        self.capture.clear();
        self.verdicts.fill(Verdict::Missing);
    }
}
