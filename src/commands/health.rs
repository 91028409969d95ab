//! Solver reachability probe

use colored::Colorize;

use crate::client::{HttpSolver, SolverError};

/// Probe the solver's health endpoint and report the result
///
/// # Errors
///
/// Returns `SolverError` if the service is unreachable or unhealthy.
pub fn run_health(solver: &HttpSolver) -> Result<(), SolverError> {
    match solver.health() {
        Ok(body) => {
            println!(
                "{} {} ({})",
                "✓".green().bold(),
                solver.health_url().bright_white(),
                body.trim()
            );
            Ok(())
        }
        Err(err) => {
            println!("{} {}", "✗".red().bold(), err.to_string().red());
            Err(err)
        }
    }
}
