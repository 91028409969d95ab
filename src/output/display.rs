//! Console output for the non-interactive commands

use super::SolutionList;
use crate::client::CandidateList;
use crate::core::WordUnit;
use colored::Colorize;

/// Print the rounds being submitted
pub fn print_rounds(units: &[WordUnit]) {
    println!("\n{}", "─".repeat(40).cyan());
    for (i, unit) in units.iter().enumerate() {
        println!("  {}. {}", (i + 1).to_string().bright_black(), unit);
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Print the candidate words with their count header
pub fn print_solutions(candidates: &CandidateList) {
    let view = SolutionList::new(candidates);

    match view.header() {
        Some(header) => println!("\n{}\n", header.bright_green().bold()),
        None => {
            println!("\n{}", "No words found".yellow().bold());
            return;
        }
    }

    for word in view.entries() {
        println!("  {}", word.bright_white().bold());
    }
    println!();
}
