//! Start, color selection and game-over screens.

use super::app::ColorSelection;
use super::board_widget::{board_lines, piece_color};
use crate::game::{GameSession, Seat};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_start(frame: &mut Frame) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            "CONNECT FOUR",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Two players take turns dropping pieces."),
        Line::from("First to line up four wins."),
        Line::from(""),
        Line::from("Enter: Start  |  Q: Quit"),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, centered(frame.area(), 50, 11));
}

pub fn render_color_selection(frame: &mut Frame, selection: &ColorSelection) {
    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "Choose your colors",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    for seat in Seat::BOTH {
        let label = match seat {
            Seat::First => "Player 1",
            Seat::Second => "Player 2",
        };
        let marker = if seat == selection.focused { "▶ " } else { "  " };
        let choice = match selection.choices[seat.index()] {
            Some(color) => Span::styled(
                format!("◀ {:^8} ▶", color.name()),
                Style::default()
                    .fg(piece_color(color))
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                format!("◀ {:^8} ▶", "Select"),
                Style::default().fg(Color::DarkGray),
            ),
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{marker}{label}: ")),
            choice,
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        selection.error.clone().unwrap_or_default(),
        Style::default().fg(Color::Red),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from("↑/↓: Player  |  ←/→: Color  |  Enter: Continue  |  Esc: Back"));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Color Selection"));
    frame.render_widget(widget, centered(frame.area(), 70, 13));
}

pub fn render_game_over(frame: &mut Frame, message: &str, session: Option<&GameSession>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(5)])
        .split(frame.area());

    if let Some(session) = session {
        let board = Paragraph::new(board_lines(session, None)).alignment(Alignment::Center);
        frame.render_widget(board, chunks[0]);
    }

    let lines = vec![
        Line::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("S: Start over  |  R: Rematch  |  H: Return home  |  Q: Quit"),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));
    frame.render_widget(widget, chunks[1]);
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
