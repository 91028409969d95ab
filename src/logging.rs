//! Logging setup
//!
//! `log` records go through `env_logger`. The filter defaults to `info` and
//! can be overridden with `RUST_LOG`. While the TUI owns the terminal,
//! records are written to a file or dropped.

use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Where log records go
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Off,
}

/// Install the global logger
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_logging(target: LogTarget<'_>) -> std::io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(path) => {
            let file = File::create(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        LogTarget::Off => return Ok(()),
    }

    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}
