//! Wordle Squire
//!
//! Record the feedback from Wordle rounds and ask a solver service which
//! words are still possible.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_squire::client::SubmissionPayload;
//! use wordle_squire::core::WordUnit;
//!
//! let unit: WordUnit = "CRANE=G----".parse().unwrap();
//! let payload = SubmissionPayload::from_units(&[unit]);
//! assert_eq!(
//!     serde_json::to_string(&payload).unwrap(),
//!     r#"[{"guess":"CRANE","result":["Correct","Missing","Missing","Missing","Missing"]}]"#
//! );
//! ```

// Core domain types
pub mod core;

// Keyboard capture and terminal lifecycle
pub mod input;

// Guess session state
pub mod session;

// Solver service protocol
pub mod client;

// Command implementations
pub mod commands;

// Solution list and console output
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod logging;
