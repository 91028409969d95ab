//! Core domain types for recording Wordle feedback
//!
//! This module contains the guess-state model with no I/O: verdicts, word
//! units, and the partitioning of multi-round buffers into grids.
//! All functions here are pure.

pub mod grid;
mod unit;
mod verdict;

pub use unit::{Tile, UnitError, WordUnit, render};
pub use verdict::{PatternError, Verdict, parse_pattern, pattern_to_emoji};

/// Letters per guess
pub const WORD_LEN: usize = 5;
