//! One-shot query mode
//!
//! Submits rounds given on the command line and prints the solutions.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::client::{CandidateList, CandidateSource, SolverError, SubmissionPayload};
use crate::core::WordUnit;

/// Submit `units` and wait for the candidates, with a spinner on stderr
///
/// # Errors
///
/// Returns `SolverError` if the solver cannot be reached or its response
/// cannot be decoded.
pub fn run_query(
    source: &dyn CandidateSource,
    units: &[WordUnit],
) -> Result<CandidateList, SolverError> {
    let payload = SubmissionPayload::from_units(units);

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Searching with {} round(s)...", payload.len()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = source.candidates(&payload);
    spinner.finish_and_clear();

    match &result {
        Ok(list) => log::info!("query returned {} candidates", list.len()),
        Err(err) => log::warn!("query failed: {err}"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records the payload it was given
    struct Recorder {
        seen: Mutex<Option<SubmissionPayload>>,
    }

    impl CandidateSource for Recorder {
        fn candidates(&self, payload: &SubmissionPayload) -> Result<CandidateList, SolverError> {
            *self.seen.lock().unwrap() = Some(payload.clone());
            Ok(vec!["crate".to_string()].into())
        }
    }

    #[test]
    fn query_submits_rounds_in_order() {
        let recorder = Recorder {
            seen: Mutex::new(None),
        };
        let units: Vec<WordUnit> = ["crane=G----", "slate=--G-Y"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let list = run_query(&recorder, &units).unwrap();
        assert_eq!(list.words(), ["crate"]);

        let seen = recorder.seen.lock().unwrap().clone().unwrap();
        let guesses: Vec<&str> = seen.rounds().iter().map(|r| r.guess.as_str()).collect();
        assert_eq!(guesses, ["crane", "slate"]);
    }
}
