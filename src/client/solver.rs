//! Solver service client
//!
//! Defines the `CandidateSource` trait and the HTTP implementation that
//! talks to the remote solver.

use std::io;
use std::time::Duration;

use clap::ValueEnum;
use thiserror::Error;

use super::{CandidateList, SubmissionPayload};

/// Default base URL of the solver service
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

/// Something that turns submitted feedback into candidate words
pub trait CandidateSource: Send + Sync {
    /// Fetch candidates consistent with every round in `payload`
    ///
    /// # Errors
    ///
    /// Returns `SolverError` if the candidates cannot be obtained.
    fn candidates(&self, payload: &SubmissionPayload) -> Result<CandidateList, SolverError>;
}

/// Error type for solver requests
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("could not encode request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("solver unreachable: {0}")]
    Transport(String),
    #[error("solver returned HTTP {0}")]
    Status(u16),
    #[error("could not read solver response: {0}")]
    Body(#[from] io::Error),
    #[error("solver response is not a word list: {0}")]
    Decode(#[source] serde_json::Error),
}

impl From<ureq::Error> for SolverError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => Self::Status(code),
            ureq::Error::Transport(transport) => Self::Transport(transport.to_string()),
        }
    }
}

/// Which word list the solver filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WordList {
    /// Every allowed guess, most frequent first
    #[default]
    Words,
    /// Only the answer list, unordered
    Solutions,
}

impl WordList {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Words => "/words",
            Self::Solutions => "/solutions",
        }
    }
}

/// Solver reached over HTTP
pub struct HttpSolver {
    agent: ureq::Agent,
    base_url: String,
    list: WordList,
}

impl HttpSolver {
    /// Create a client for the service at `base_url`
    ///
    /// With no `timeout` a request waits for as long as the service takes.
    #[must_use]
    pub fn new(base_url: &str, list: WordList, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            agent: builder.build(),
            base_url: base_url.trim_end_matches('/').to_string(),
            list,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, self.list.path())
    }

    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// Probe `GET /health`
    ///
    /// # Errors
    ///
    /// Returns `SolverError` if the service cannot be reached or answers
    /// with a non-2xx status.
    pub fn health(&self) -> Result<String, SolverError> {
        let url = self.health_url();
        log::debug!("GET {url}");

        let response = self.agent.get(&url).call()?;
        Ok(response.into_string()?)
    }
}

impl CandidateSource for HttpSolver {
    fn candidates(&self, payload: &SubmissionPayload) -> Result<CandidateList, SolverError> {
        let url = self.endpoint();
        let body = serde_json::to_string(payload).map_err(SolverError::Encode)?;
        log::debug!("POST {url} {body}");

        let response = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_string(&body)?;

        let text = response.into_string()?;
        let list: CandidateList = serde_json::from_str(&text).map_err(SolverError::Decode)?;
        log::info!("solver returned {} candidates", list.len());

        Ok(list)
    }
}
