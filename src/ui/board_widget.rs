use crate::game::{Cell, GameSession, PieceColor, HEIGHT, WIDTH};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Terminal color for a piece.
pub fn piece_color(color: PieceColor) -> Color {
    match color {
        PieceColor::Red => Color::Red,
        PieceColor::Blue => Color::Blue,
        PieceColor::Green => Color::Green,
        PieceColor::Yellow => Color::Yellow,
        PieceColor::Orange => Color::Rgb(255, 165, 0),
        PieceColor::Purple => Color::Magenta,
        PieceColor::Pink => Color::Rgb(255, 105, 180),
        PieceColor::Brown => Color::Rgb(150, 75, 0),
        PieceColor::Black => Color::Rgb(70, 70, 70),
    }
}

/// Board lines with a column selector above and below. Pass `None` to hide
/// the selector.
pub fn board_lines(session: &GameSession, selected_column: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(HEIGHT + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..WIDTH {
        let label = format!(" {} ", col + 1);
        if Some(col) == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(WIDTH * 3 + 1))));

    for row in 0..HEIGHT {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..WIDTH {
            let span = match session.cell(row, col).and_then(Cell::seat) {
                Some(seat) => Span::styled(
                    " ● ",
                    Style::default().fg(piece_color(session.player(seat).color())),
                ),
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            };
            row_spans.push(span);
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(WIDTH * 3 + 1))));

    if let Some(selected) = selected_column {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..WIDTH {
            if col == selected {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_lines_shape() {
        let session =
            GameSession::from_selection(Some(PieceColor::Red), Some(PieceColor::Green)).unwrap();
        assert_eq!(board_lines(&session, Some(0)).len(), HEIGHT + 4);
        assert_eq!(board_lines(&session, None).len(), HEIGHT + 3);
    }

    #[test]
    fn test_placed_piece_uses_player_color() {
        let mut session =
            GameSession::from_selection(Some(PieceColor::Orange), Some(PieceColor::Green)).unwrap();
        session.request_move(0).unwrap();

        let lines = board_lines(&session, None);
        // Header, top border, then rows; bottom row is the last board row.
        let bottom = &lines[1 + HEIGHT];
        assert_eq!(bottom.spans[1].style.fg, Some(piece_color(PieceColor::Orange)));
        assert_eq!(bottom.spans[2].style.fg, Some(Color::DarkGray));
    }
}
