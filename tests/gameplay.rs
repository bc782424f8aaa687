//! Full games driven through the public API, the way a front-end would.

use connect_four::error::{MoveError, SetupError};
use connect_four::game::{
    Cell, GameOutcome, GameSession, PieceColor, Phase, Seat, HEIGHT, WIDTH,
};

/// Column order that fills the whole board without a line of four.
const TIE_GAME: [usize; 42] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 4, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4,
    5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6,
];

fn new_session() -> GameSession {
    GameSession::from_selection(Some(PieceColor::Purple), Some(PieceColor::Orange)).unwrap()
}

#[test]
fn test_session_requires_two_distinct_colors() {
    assert_eq!(
        GameSession::from_selection(Some(PieceColor::Red), None).unwrap_err(),
        SetupError::MissingColor
    );
    assert_eq!(
        GameSession::from_selection(Some(PieceColor::Red), Some(PieceColor::Red)).unwrap_err(),
        SetupError::DuplicateColor
    );
}

#[test]
fn test_full_board_without_line_is_a_tie() {
    let mut session = new_session();

    for (i, &col) in TIE_GAME.iter().enumerate() {
        let event = session.request_move(col).unwrap();
        if i + 1 < TIE_GAME.len() {
            assert_eq!(event.outcome, None, "move {i} ended the game early");
        } else {
            assert_eq!(event.outcome, Some(GameOutcome::Tie));
        }
    }

    let board = session.board();
    assert!(board.is_full());
    assert!(!board.check_win(Seat::First));
    assert!(!board.check_win(Seat::Second));
    assert_eq!(board.winner(), None);
    assert_eq!(session.phase(), Phase::GameOver(GameOutcome::Tie));
}

#[test]
fn test_active_player_alternates_until_game_ends() {
    let mut session = new_session();
    for (i, &col) in TIE_GAME.iter().take(TIE_GAME.len() - 1).enumerate() {
        let expected = if i % 2 == 0 { Seat::First } else { Seat::Second };
        assert_eq!(session.active_seat(), expected);
        session.request_move(col).unwrap();
        assert_eq!(session.active_seat(), expected.other());
        assert_eq!(session.phase(), Phase::AwaitingMove);
    }
}

#[test]
fn test_second_player_can_win() {
    let mut session = new_session();
    // First scatters, second stacks column 6
    for col in [0, 6, 1, 6, 0, 6, 1] {
        session.request_move(col).unwrap();
    }
    let event = session.request_move(6).unwrap();

    assert_eq!(event.seat, Seat::Second);
    assert_eq!(event.outcome, Some(GameOutcome::Win(Seat::Second)));
    assert_eq!(
        session.outcome().unwrap().message(session.players()),
        "Player orange won!"
    );
}

#[test]
fn test_finished_game_rejects_every_column() {
    let mut session = new_session();
    for col in [3, 4, 3, 4, 3, 4, 3] {
        session.request_move(col).unwrap();
    }
    assert!(session.is_over());

    let snapshot = session.clone();
    for col in 0..=WIDTH {
        assert_eq!(session.request_move(col), Err(MoveError::GameAlreadyOver));
    }
    assert_eq!(session, snapshot);
}

#[test]
fn test_cells_are_never_reassigned() {
    let mut session = new_session();
    let mut owners = Vec::new();
    for &col in TIE_GAME.iter().take(20) {
        let event = session.request_move(col).unwrap();
        owners.push((event.row, event.col, event.seat));
        for &(row, col, seat) in &owners {
            assert_eq!(session.cell(row, col), Some(Cell::Occupied(seat)));
        }
    }
    assert_eq!(session.cell(HEIGHT, 0), None);
}
