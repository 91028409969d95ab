//! Candidate list presentation model
//!
//! Shared by the TUI and the console output: a count header followed by the
//! words in the order the solver sent them.

use crate::client::CandidateList;

/// "1 word found" / "N words found"
#[must_use]
pub fn count_summary(count: usize) -> String {
    let noun = if count == 1 { "word" } else { "words" };
    format!("{count} {noun} found")
}

pub struct SolutionList<'a> {
    candidates: &'a CandidateList,
}

impl<'a> SolutionList<'a> {
    #[must_use]
    pub const fn new(candidates: &'a CandidateList) -> Self {
        Self { candidates }
    }

    /// Count header, absent while the list is empty
    #[must_use]
    pub fn header(&self) -> Option<String> {
        (!self.candidates.is_empty()).then(|| count_summary(self.candidates.len()))
    }

    /// Words as displayed, in received order
    pub fn entries(&self) -> impl Iterator<Item = String> + 'a {
        self.candidates.words().iter().map(|w| w.to_uppercase())
    }
}
