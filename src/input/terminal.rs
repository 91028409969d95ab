//! Terminal session guard
//!
//! Keyboard and mouse events only reach the app while a `TerminalSession`
//! is alive. Creating one switches the terminal into raw mode with the
//! alternate screen and mouse capture; dropping it restores the terminal,
//! including when the event loop exits with an error.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type TermBackend = CrosstermBackend<Stdout>;

pub struct TerminalSession {
    terminal: Terminal<TermBackend>,
}

impl TerminalSession {
    /// Take over the terminal
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be
    /// enabled. Anything already switched on is switched back off.
    pub fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err);
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                restore(&mut io::stdout());
                return Err(err);
            }
        };
        log::debug!("terminal session started");

        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<TermBackend> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
        log::debug!("terminal session ended");
    }
}

fn restore<W: io::Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
}
