//! Solver service protocol and transport

pub mod dispatch;
mod payload;
pub mod solver;

pub use dispatch::{Dispatcher, Outcome};
pub use payload::{CandidateList, GuessResult, SubmissionPayload};
pub use solver::{CandidateSource, DEFAULT_SERVER, HttpSolver, SolverError, WordList};
