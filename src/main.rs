//! Wordle Squire - CLI
//!
//! Terminal front end for a Wordle solver service: type guesses, click tiles
//! to record feedback, and list the words that still fit.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_squire::{
    client::{DEFAULT_SERVER, HttpSolver, WordList},
    commands::{run_health, run_query},
    core::WordUnit,
    input::SpacePolicy,
    interactive::{App, run_tui},
    logging::{LogTarget, init_logging},
    output::{print_rounds, print_solutions},
    session::SessionConfig,
};

#[derive(Parser)]
#[command(
    name = "wordle-squire",
    about = "Record Wordle feedback and ask a solver service for matching words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the solver service
    #[arg(short, long, global = true, env = "WORDLE_SQUIRE_SERVER", default_value = DEFAULT_SERVER)]
    server: String,

    /// Word list to search: all allowed words or answers only
    #[arg(short, long, global = true, value_enum, default_value_t = WordList::Words)]
    list: WordList,

    /// Maximum number of rounds (1 = single word)
    #[arg(short, long, global = true, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=6))]
    rounds: u8,

    /// Accept the space character as guess input
    #[arg(long, global = true)]
    allow_space: bool,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(short, long, global = true)]
    timeout: Option<u64>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Submit rounds from the command line and print the solutions
    Query {
        /// Rounds as GUESS=PATTERN, e.g. CRANE=G-Y-- (G green, Y yellow, - gray)
        #[arg(required = true, value_name = "GUESS=PATTERN")]
        guesses: Vec<WordUnit>,
    },

    /// Check that the solver service is reachable
    Health,
}

impl Cli {
    fn solver(&self) -> HttpSolver {
        HttpSolver::new(
            &self.server,
            self.list,
            self.timeout.map(Duration::from_secs),
        )
    }

    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            max_rounds: usize::from(self.rounds),
            space: if self.allow_space {
                SpacePolicy::Accept
            } else {
                SpacePolicy::Reject
            },
        }
    }

    fn log_target(&self, interactive: bool) -> LogTarget<'_> {
        match (&self.log_file, interactive) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Off,
            (None, false) => LogTarget::Stderr,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref();

    let interactive = matches!(command, None | Some(Commands::Play));
    init_logging(cli.log_target(interactive)).context("could not open log file")?;

    match command {
        None | Some(Commands::Play) => run_play_command(&cli),
        Some(Commands::Query { guesses }) => run_query_command(&cli, guesses),
        Some(Commands::Health) => {
            run_health(&cli.solver())?;
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let solver = cli.solver();
    log::info!("starting session against {}", solver.endpoint());

    let app = App::new(cli.session_config(), Arc::new(solver));
    run_tui(app)
}

fn run_query_command(cli: &Cli, rounds: &[WordUnit]) -> Result<()> {
    let max_rounds = cli.session_config().max_rounds;
    if rounds.len() > max_rounds {
        bail!(
            "{} rounds given but at most {max_rounds} allowed (see --rounds)",
            rounds.len()
        );
    }

    let solver = cli.solver();
    print_rounds(rounds);

    let candidates = run_query(&solver, rounds)
        .with_context(|| format!("query to {} failed", solver.endpoint()))?;
    print_solutions(&candidates);
    Ok(())
}
