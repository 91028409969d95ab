//! Wire types for the solver service
//!
//! Request: `[{"guess": "crane", "result": ["Correct", "Missing", ...]}, ...]`
//! Response: `["crate", "craze", ...]`

use serde::{Deserialize, Serialize};

use crate::core::{Verdict, WORD_LEN, WordUnit};

/// One round as the solver expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    pub guess: String,
    pub result: [Verdict; WORD_LEN],
}

impl From<&WordUnit> for GuessResult {
    fn from(unit: &WordUnit) -> Self {
        Self {
            guess: unit.guess().to_string(),
            result: *unit.verdicts(),
        }
    }
}

/// Ordered rounds sent in one request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionPayload(Vec<GuessResult>);

impl SubmissionPayload {
    /// Build a payload from units, dropping those with no typed text
    #[must_use]
    pub fn from_units(units: &[WordUnit]) -> Self {
        Self(
            units
                .iter()
                .filter(|unit| !unit.is_empty())
                .map(GuessResult::from)
                .collect(),
        )
    }

    #[must_use]
    pub fn rounds(&self) -> &[GuessResult] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Candidate words in the order the solver returned them
///
/// Never re-sorted or de-duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateList(Vec<String>);

impl CandidateList {
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self(words)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for CandidateList {
    fn from(words: Vec<String>) -> Self {
        Self(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_pattern;

    #[test]
    fn payload_serializes_as_plain_array() {
        let unit = WordUnit::new("CRANE", &parse_pattern("G----").unwrap());
        let payload = SubmissionPayload::from_units(&[unit]);

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"[{"guess":"CRANE","result":["Correct","Missing","Missing","Missing","Missing"]}]"#
        );
    }

    #[test]
    fn payload_keeps_round_order_and_drops_empty_units() {
        let units = [
            WordUnit::new("crane", &[]),
            WordUnit::new("slate", &[]),
            WordUnit::default(),
        ];
        let payload = SubmissionPayload::from_units(&units);

        let guesses: Vec<&str> = payload.rounds().iter().map(|r| r.guess.as_str()).collect();
        assert_eq!(guesses, ["crane", "slate"]);
    }

    #[test]
    fn empty_payload_is_empty_array() {
        let payload = SubmissionPayload::from_units(&[WordUnit::default()]);
        assert!(payload.is_empty());
        assert_eq!(serde_json::to_string(&payload).unwrap(), "[]");
    }

    #[test]
    fn candidate_list_keeps_order_and_duplicates() {
        let list: CandidateList = serde_json::from_str(r#"["zesty","apple","zesty"]"#).unwrap();
        assert_eq!(list.words(), ["zesty", "apple", "zesty"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn candidate_list_rejects_non_string_items() {
        assert!(serde_json::from_str::<CandidateList>("[1, 2]").is_err());
        assert!(serde_json::from_str::<CandidateList>(r#"{"words": []}"#).is_err());
    }
}
