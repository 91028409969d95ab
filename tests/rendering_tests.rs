use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};
use wordle_squire::client::{CandidateList, CandidateSource, SolverError, SubmissionPayload};
use wordle_squire::core::Verdict;
use wordle_squire::interactive::{App, rendering};
use wordle_squire::session::SessionConfig;

struct Never;

impl CandidateSource for Never {
    fn candidates(&self, _: &SubmissionPayload) -> Result<CandidateList, SolverError> {
        Err(SolverError::Transport("offline".to_string()))
    }
}

fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| rendering::ui(f, app)).unwrap();
    screen_text(terminal.backend().buffer())
}

fn app_with(words: &[&str]) -> App {
    let mut app = App::new(SessionConfig::default(), Arc::new(Never));
    app.candidates = words
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .into();
    app
}

#[test]
fn solutions_panel_shows_header_and_words_in_order() {
    let screen = draw(&app_with(&["crate", "craze"]));

    assert!(screen.contains("2 words found"));
    let crate_at = screen.find("CRATE").unwrap();
    let craze_at = screen.find("CRAZE").unwrap();
    assert!(crate_at < craze_at);
}

#[test]
fn singular_header() {
    let screen = draw(&app_with(&["slate"]));
    assert!(screen.contains("1 word found"));
}

#[test]
fn empty_list_shows_no_header() {
    let screen = draw(&app_with(&[]));
    assert!(!screen.contains("found"));
}

#[test]
fn typed_letters_appear_uppercase_on_tiles() {
    let mut app = app_with(&[]);
    for c in "crane".chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    let viewport = Rect::new(0, 0, 100, 40);
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| rendering::ui(f, &app)).unwrap();
    let buffer = terminal.backend().buffer();

    for (index, letter) in ["C", "R", "A", "N", "E"].into_iter().enumerate() {
        let shown: String = (0..40u16)
            .flat_map(|y| (0..100u16).map(move |x| (x, y)))
            .filter(|&(x, y)| rendering::tile_at(viewport, 5, x, y) == Some((0, index)))
            .map(|(x, y)| buffer[(x, y)].symbol().to_string())
            .collect();
        assert!(shown.contains(letter), "tile {index} shows {shown:?}");
    }
}

#[test]
fn clicking_a_rendered_tile_cycles_it() {
    let mut app = app_with(&[]);
    app.viewport = Rect::new(0, 0, 100, 40);

    // Find the top-left tile by probing the layout
    let (column, row) = (0..40u16)
        .flat_map(|y| (0..100u16).map(move |x| (x, y)))
        .find(|&(x, y)| rendering::tile_at(app.viewport, 5, x, y) == Some((0, 0)))
        .unwrap();

    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });

    assert_eq!(app.session.verdicts()[0], Verdict::WrongPlace);
    assert_eq!(app.cursor, (0, 0));
}
