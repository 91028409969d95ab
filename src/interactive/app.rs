//! TUI application state and logic

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Terminal, layout::Rect};

use crate::client::{CandidateList, CandidateSource, Dispatcher, Outcome};
use crate::core::WORD_LEN;
use crate::input::{Key, TerminalSession};
use crate::output::count_summary;
use crate::session::{Session, SessionConfig};

/// How long the event loop waits for input before checking the solver
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub session: Session,
    pub candidates: CandidateList,
    pub status: SolverStatus,
    /// Selected tile as (round, position)
    pub cursor: (usize, usize),
    /// First solution shown in the list
    pub scroll: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Terminal area of the last drawn frame, used for mouse hit testing
    pub viewport: Rect,
    dispatcher: Dispatcher,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverStatus {
    Idle,
    Busy(u64),
    Unavailable(String),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(config: SessionConfig, source: Arc<dyn CandidateSource>) -> Self {
        Self {
            session: Session::new(config),
            candidates: CandidateList::default(),
            status: SolverStatus::Idle,
            cursor: (0, 0),
            scroll: 0,
            messages: vec![Message {
                text: "Type your guesses, click tiles to set colors, Enter to search."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            viewport: Rect::default(),
            dispatcher: Dispatcher::new(source),
        }
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.dispatcher.is_busy()
    }

    /// Whether Enter would start a search right now
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && self.session.can_submit()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('u') if ctrl => {
                self.session.clear();
                self.cursor = (0, 0);
                self.on_edit();
                self.add_message("Cleared all guesses", MessageStyle::Info);
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => {
                let (round, index) = self.cursor;
                self.cycle_tile(round, index);
            }
            KeyCode::Left => self.cursor.1 = self.cursor.1.saturating_sub(1),
            KeyCode::Right => self.cursor.1 = (self.cursor.1 + 1).min(WORD_LEN - 1),
            KeyCode::Up => self.cursor.0 = self.cursor.0.saturating_sub(1),
            KeyCode::Down => {
                let last = self.session.max_rounds().saturating_sub(1);
                self.cursor.0 = (self.cursor.0 + 1).min(last);
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll_down(10),
            _ => {
                if self.session.handle_key(Key::from(key)).changed() {
                    self.follow_text();
                    self.on_edit();
                }
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = super::rendering::tile_at(
                    self.viewport,
                    self.session.max_rounds(),
                    mouse.column,
                    mouse.row,
                );
                if let Some((round, index)) = hit {
                    self.cycle_tile(round, index);
                }
            }
            MouseEventKind::ScrollDown => self.scroll_down(1),
            MouseEventKind::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
    }

    pub fn cycle_tile(&mut self, round: usize, index: usize) {
        if self.session.cycle(round, index) {
            self.cursor = (round, index);
            self.on_edit();
        }
    }

    /// Send every typed round to the solver
    pub fn submit(&mut self) {
        if self.is_busy() {
            self.add_message("Still searching...", MessageStyle::Info);
            return;
        }
        if !self.session.can_submit() {
            self.add_message("Finish typing 5-letter words first", MessageStyle::Error);
            return;
        }

        let generation = self.dispatcher.submit(self.session.payload());
        self.status = SolverStatus::Busy(generation);
    }

    /// Apply any finished solver response
    pub fn poll_solver(&mut self) {
        while let Some(outcome) = self.dispatcher.poll() {
            self.apply(outcome);
        }
    }

    /// Block up to `timeout` for a solver response and apply it
    pub fn wait_for_solver(&mut self, timeout: Duration) {
        if let Some(outcome) = self.dispatcher.wait(timeout) {
            self.apply(outcome);
        }
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Fresh(Ok(candidates)) => {
                let summary = count_summary(candidates.len());
                self.candidates = candidates;
                self.scroll = 0;
                self.status = SolverStatus::Idle;
                self.add_message(&summary, MessageStyle::Success);
            }
            Outcome::Fresh(Err(err)) => {
                log::warn!("solver request failed: {err}");
                self.status = SolverStatus::Unavailable(err.to_string());
                self.add_message("Solver unavailable", MessageStyle::Error);
            }
            Outcome::Stale(_) => {}
        }
    }

    /// Any edit makes an outstanding response describe a grid that is gone
    fn on_edit(&mut self) {
        if self.dispatcher.invalidate() {
            self.status = SolverStatus::Idle;
            self.add_message(
                "Guesses changed, pending search dropped",
                MessageStyle::Info,
            );
        }
    }

    /// Move the cursor to the last typed tile
    fn follow_text(&mut self) {
        let typed = self.session.text().chars().count();
        let last = typed.saturating_sub(1);
        self.cursor = (last / WORD_LEN, last % WORD_LEN);
    }

    fn scroll_down(&mut self, by: usize) {
        let max = self.candidates.len().saturating_sub(1);
        self.scroll = (self.scroll + by).min(max);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    let mut session = TerminalSession::start()?;
    let res = run_app(session.terminal(), app);
    drop(session);

    if let Err(err) = &res {
        log::error!("session ended with error: {err}");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.poll_solver();

        let frame = terminal.draw(|f| super::rendering::ui(f, &app))?;
        app.viewport = frame.area;

        if event::poll(TICK)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{SolverError, SubmissionPayload};
    use crate::core::Verdict;

    const WAIT: Duration = Duration::from_secs(5);

    struct Fixed(Vec<&'static str>);

    impl CandidateSource for Fixed {
        fn candidates(&self, _: &SubmissionPayload) -> Result<CandidateList, SolverError> {
            Ok(self
                .0
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .into())
        }
    }

    struct Down;

    impl CandidateSource for Down {
        fn candidates(&self, _: &SubmissionPayload) -> Result<CandidateList, SolverError> {
            Err(SolverError::Status(502))
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_fills_session_and_moves_cursor() {
        let mut app = App::new(SessionConfig::default(), Arc::new(Fixed(vec![])));
        type_str(&mut app, "cranes");

        assert_eq!(app.session.text(), "cranes");
        assert_eq!(app.cursor, (1, 0));
    }

    #[test]
    fn tab_cycles_tile_under_cursor() {
        let mut app = App::new(SessionConfig::default(), Arc::new(Fixed(vec![])));
        type_str(&mut app, "crane");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Tab);

        assert_eq!(app.session.verdicts()[3], Verdict::WrongPlace);
    }

    #[test]
    fn submit_is_refused_for_partial_words() {
        let mut app = App::new(SessionConfig::default(), Arc::new(Fixed(vec!["crate"])));
        type_str(&mut app, "cra");
        press(&mut app, KeyCode::Enter);

        assert!(!app.is_busy());
        assert_eq!(app.status, SolverStatus::Idle);
    }

    #[test]
    fn successful_search_replaces_candidates() {
        let mut app = App::new(
            SessionConfig::default(),
            Arc::new(Fixed(vec!["crate", "craze"])),
        );
        type_str(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.status, SolverStatus::Busy(1)));

        app.wait_for_solver(WAIT);

        assert_eq!(app.status, SolverStatus::Idle);
        assert_eq!(app.candidates.words(), ["crate", "craze"]);
        assert_eq!(app.messages.last().unwrap().text, "2 words found");
    }

    #[test]
    fn failed_search_reports_unavailable_and_keeps_list() {
        let mut app = App::new(SessionConfig::default(), Arc::new(Down));
        app.candidates = vec!["slate".to_string()].into();
        type_str(&mut app, "crane");
        press(&mut app, KeyCode::Enter);

        app.wait_for_solver(WAIT);

        assert_eq!(
            app.status,
            SolverStatus::Unavailable("solver returned HTTP 502".to_string())
        );
        assert_eq!(app.candidates.words(), ["slate"]);
        assert!(!app.is_busy());
    }

    #[test]
    fn edit_while_busy_drops_pending_search() {
        let mut app = App::new(SessionConfig::default(), Arc::new(Fixed(vec!["crate"])));
        type_str(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.status, SolverStatus::Idle);
        app.wait_for_solver(WAIT);
        assert!(app.candidates.is_empty());
    }

    #[test]
    fn down_stops_at_last_round() {
        let mut app = App::new(
            SessionConfig {
                max_rounds: 0,
                ..SessionConfig::default()
            },
            Arc::new(Fixed(vec![])),
        );
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, (0, 0));

        let mut app = App::new(SessionConfig::default(), Arc::new(Fixed(vec![])));
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor, (4, 0));
    }

    #[test]
    fn escape_quits() {
        let mut app = App::new(SessionConfig::default(), Arc::new(Fixed(vec![])));
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = App::new(SessionConfig::default(), Arc::new(Fixed(vec![])));
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "5");
    }
}
