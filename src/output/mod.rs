//! Solution list presentation
//!
//! The list model plus console printing for CLI results.

pub mod display;
mod solutions;

pub use display::{print_rounds, print_solutions};
pub use solutions::{SolutionList, count_summary};
