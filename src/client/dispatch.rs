//! Background submission with request generations
//!
//! Each submission runs on its own worker thread so the UI keeps handling
//! input while the solver works. Submissions are numbered; only the
//! completion of the current generation is handed back as fresh; anything
//! older is reported as stale so the caller can drop it.
//!
//! Workers are never cancelled. A stale worker keeps its thread until the
//! source returns, so against a service that never answers, every
//! edit-then-resubmit leaves one more thread blocked. Give the source a
//! timeout (`--timeout`) to bound that.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use super::{CandidateList, CandidateSource, SolverError, SubmissionPayload};

/// Result of one background request
struct Completion {
    generation: u64,
    result: Result<CandidateList, SolverError>,
}

/// A completed request as seen by the UI
#[derive(Debug)]
pub enum Outcome {
    /// The response to the request currently in flight
    Fresh(Result<CandidateList, SolverError>),
    /// A response to a request that was superseded or invalidated
    Stale(u64),
}

pub struct Dispatcher {
    source: Arc<dyn CandidateSource>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    generation: u64,
    in_flight: Option<u64>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(source: Arc<dyn CandidateSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            tx,
            rx,
            generation: 0,
            in_flight: None,
        }
    }

    /// Whether a current request is outstanding
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a request on a worker thread and return its generation
    pub fn submit(&mut self, payload: SubmissionPayload) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        self.in_flight = Some(generation);

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        log::info!(
            "submitting {} round(s) as request #{generation}",
            payload.len()
        );
        thread::spawn(move || {
            let result = source.candidates(&payload);
            // The dispatcher may be gone by now; nobody is left to care.
            let _ = tx.send(Completion { generation, result });
        });

        generation
    }

    /// Mark the outstanding request, if any, as stale
    ///
    /// Returns `true` if a request was in flight.
    pub fn invalidate(&mut self) -> bool {
        match self.in_flight.take() {
            Some(generation) => {
                log::debug!("request #{generation} invalidated by an edit");
                true
            }
            None => false,
        }
    }

    /// Collect a finished request without blocking
    pub fn poll(&mut self) -> Option<Outcome> {
        match self.rx.try_recv() {
            Ok(completion) => Some(self.classify(completion)),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Wait up to `timeout` for a finished request
    pub fn wait(&mut self, timeout: Duration) -> Option<Outcome> {
        self.rx
            .recv_timeout(timeout)
            .ok()
            .map(|completion| self.classify(completion))
    }

    fn classify(&mut self, completion: Completion) -> Outcome {
        if self.in_flight == Some(completion.generation) {
            self.in_flight = None;
            Outcome::Fresh(completion.result)
        } else {
            log::info!("discarding stale response #{}", completion.generation);
            Outcome::Stale(completion.generation)
        }
    }
}
