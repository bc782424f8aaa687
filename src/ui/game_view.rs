use super::board_widget::{board_lines, piece_color};
use crate::game::GameSession;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Message
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);

    let selector = (!session.is_over()).then_some(selected_column);
    let board = Paragraph::new(board_lines(session, selector)).alignment(Alignment::Center);
    frame.render_widget(board, chunks[1]);

    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let player = session.active_player();
    let status = if session.is_over() {
        "Game Over".to_string()
    } else {
        format!("Current Player: {}", player.name())
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(piece_color(player.color()))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter or 1-7: Drop  |  Esc: Home  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
