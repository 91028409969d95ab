//! TUI rendering with ratatui
//!
//! Guess board on the left, solutions and messages on the right.

use super::app::{App, MessageStyle, SolverStatus};
use crate::core::{Tile, Verdict, WORD_LEN};
use crate::output::SolutionList;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 1;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Solutions
            Constraint::Length(7), // Messages
        ])
        .split(chunks[2]);

    render_solutions(f, app, side[0]);
    render_messages(f, app, side[1]);
    render_status(f, app, chunks[3]);
}

/// Header, board, side panel and status bar areas
fn screen_chunks(area: Rect) -> [Rect; 4] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Solutions
        ])
        .split(rows[1]);

    [rows[0], main[0], main[1], rows[2]]
}

fn board_block() -> Block<'static> {
    Block::default()
        .title(" Guesses ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Screen rectangles of every tile, one row of five per round
///
/// Tiles that do not fit inside `board` are clipped, possibly to nothing.
#[must_use]
pub fn tile_rects(board: Rect, rounds: usize) -> Vec<[Rect; WORD_LEN]> {
    let rounds = rounds as u16;
    let width = TILE_WIDTH * WORD_LEN as u16 + TILE_GAP * (WORD_LEN as u16 - 1);
    let height = (TILE_HEIGHT + TILE_GAP) * rounds - TILE_GAP.min(rounds);
    let left = board.x + board.width.saturating_sub(width) / 2;
    let top = board.y + board.height.saturating_sub(height) / 2;

    (0..rounds)
        .map(|round| {
            std::array::from_fn(|i| {
                let x = left.saturating_add((TILE_WIDTH + TILE_GAP) * i as u16);
                let y = top.saturating_add((TILE_HEIGHT + TILE_GAP) * round);
                Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT).intersection(board)
            })
        })
        .collect()
}

/// The tile under a screen cell, as (round, position)
#[must_use]
pub fn tile_at(viewport: Rect, rounds: usize, column: u16, row: u16) -> Option<(usize, usize)> {
    let board = board_block().inner(screen_chunks(viewport)[1]);
    let cell = Position::new(column, row);

    tile_rects(board, rounds)
        .iter()
        .enumerate()
        .find_map(|(round, tiles)| {
            tiles
                .iter()
                .position(|rect| !rect.is_empty() && rect.contains(cell))
                .map(|index| (round, index))
        })
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE SQUIRE - Find Possible Solutions")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Missing => Color::Rgb(0x78, 0x7c, 0x7e),
        Verdict::WrongPlace => Color::Rgb(0xc9, 0xb4, 0x58),
        Verdict::Correct => Color::Rgb(0x6a, 0xaa, 0x64),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = board_block();
    let board = block.inner(area);
    f.render_widget(block, area);

    let units = app.session.units();
    for (round, rects) in tile_rects(board, units.len()).iter().enumerate() {
        for (index, (tile, rect)) in units[round].tiles().iter().zip(rects).enumerate() {
            if rect.is_empty() {
                continue;
            }
            render_tile(f, *tile, *rect, app.cursor == (round, index));
        }
    }
}

fn render_tile(f: &mut Frame, tile: Tile, area: Rect, selected: bool) {
    let fill = Style::default()
        .bg(verdict_color(tile.verdict))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let (border_type, border_style) = if selected {
        (BorderType::Thick, fill.fg(Color::Black))
    } else {
        (BorderType::Plain, fill)
    };

    let letter = tile
        .letter
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    let widget = Paragraph::new(letter)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style)
                .style(fill),
        );
    f.render_widget(widget, area);
}

fn render_solutions(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Solutions ")
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Green));
    let visible = block.inner(area).height as usize;

    let mut lines = Vec::new();
    match &app.status {
        SolverStatus::Busy(_) => lines.push(Line::styled(
            "Searching...",
            Style::default().fg(Color::Yellow),
        )),
        SolverStatus::Unavailable(reason) => {
            lines.push(Line::styled(
                "Solver unavailable",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::styled(reason.clone(), Style::default().fg(Color::Red)));
        }
        SolverStatus::Idle => {}
    }

    let view = SolutionList::new(&app.candidates);
    if let Some(header) = view.header() {
        lines.push(Line::styled(
            header,
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }

    let room = visible.saturating_sub(lines.len());
    lines.extend(view.entries().skip(app.scroll).take(room).map(|word| {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                word,
                Style::default()
                    .fg(Color::White)
                    .bg(verdict_color(Verdict::Correct))
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let search_style = if app.can_submit() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let search = Paragraph::new(Line::styled("[ Enter: Search ]", search_style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(search, chunks[0]);

    let help = Paragraph::new(
        "Click/Tab: color | Arrows: move | Ctrl-U: clear | PgUp/PgDn: scroll | Esc: quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_rects_are_centered_and_disjoint() {
        let board = Rect::new(0, 0, 60, 30);
        let rects = tile_rects(board, 5);

        assert_eq!(rects.len(), 5);
        // 5 tiles of 7 plus 4 gaps = 39 wide, centered in 60
        assert_eq!(rects[0][0].x, 10);
        assert_eq!(rects[0][1].x, 18);
        assert_eq!(rects[1][0].y, rects[0][0].y + 4);
        assert!(rects.iter().flatten().all(|r| r.width == 7 && r.height == 3));
    }

    #[test]
    fn tile_rects_clip_to_board() {
        let board = Rect::new(0, 0, 20, 3);
        let rects = tile_rects(board, 2);

        assert!(rects[1].iter().all(|r| r.is_empty()));
        assert!(rects[0][4].is_empty());
    }

    #[test]
    fn tile_at_matches_rendered_layout() {
        let viewport = Rect::new(0, 0, 100, 40);
        let board = board_block().inner(screen_chunks(viewport)[1]);
        let rects = tile_rects(board, 5);

        let target = rects[2][3];
        assert_eq!(tile_at(viewport, 5, target.x + 1, target.y + 1), Some((2, 3)));
        assert_eq!(tile_at(viewport, 5, 0, 0), None);
    }
}
