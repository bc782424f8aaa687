use tracing::{debug, info, warn};

use super::board::{Board, Cell};
use super::player::{PieceColor, Player, Seat};
use super::setup::validate_colors;
use crate::error::{MoveError, SetupError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Seat),
    Tie,
}

impl GameOutcome {
    /// Announcement shown on the game-over screen.
    pub fn message(&self, players: &[Player; 2]) -> String {
        match self {
            GameOutcome::Win(seat) => format!("Player {} won!", players[seat.index()].color().token()),
            GameOutcome::Tie => "Tie!".to_string(),
        }
    }
}

/// Turn controller states. `Evaluating` only exists while a placed piece is
/// being checked, so observers outside `request_move` never see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove,
    Evaluating,
    GameOver(GameOutcome),
}

/// Result of an accepted move, handed to whatever renders the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    pub row: usize,
    pub col: usize,
    pub seat: Seat,
    pub outcome: Option<GameOutcome>,
}

/// One game between two players: board, turn order and terminal result.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    active: Seat,
    phase: Phase,
}

impl GameSession {
    /// Start a session for two players. Their colors must differ.
    pub fn new(players: [Player; 2]) -> Result<Self, SetupError> {
        Self::from_selection(Some(players[0].color()), Some(players[1].color()))
    }

    /// Start a session straight from the color selection screen.
    pub fn from_selection(
        first: Option<PieceColor>,
        second: Option<PieceColor>,
    ) -> Result<Self, SetupError> {
        let players = validate_colors(first, second)?;
        info!(
            first = %players[0].color(),
            second = %players[1].color(),
            "starting new game"
        );
        Ok(Self::with_players(players))
    }

    /// Fresh session with the same players.
    pub fn restart(&self) -> Self {
        Self::with_players(self.players)
    }

    /// Empty board, first seat to move. `players` must already be validated.
    fn with_players(players: [Player; 2]) -> Self {
        GameSession {
            board: Board::new(),
            players,
            active: Seat::First,
            phase: Phase::AwaitingMove,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell state for rendering; `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Get current player
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Drop the active player's piece into `col`.
    ///
    /// Rejected moves leave the session untouched. An accepted move either
    /// ends the game or hands the turn to the other player.
    pub fn request_move(&mut self, col: usize) -> Result<MoveEvent, MoveError> {
        if self.is_over() {
            warn!(col, "move requested after game over");
            return Err(MoveError::GameAlreadyOver);
        }

        let row = self.board.find_spot_for_column(col).inspect_err(|err| {
            warn!(col, %err, "move rejected");
        })?;
        let seat = self.active;
        self.board.place(row, col, seat)?;
        debug!(row, col, ?seat, "piece placed");

        self.phase = Phase::Evaluating;
        let outcome = if self.board.check_win(seat) {
            Some(GameOutcome::Win(seat))
        } else if self.board.is_full() {
            Some(GameOutcome::Tie)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                info!(?outcome, moves = self.board.piece_count(), "game over");
                self.phase = Phase::GameOver(outcome);
            }
            None => {
                self.active = seat.other();
                self.phase = Phase::AwaitingMove;
            }
        }

        Ok(MoveEvent {
            row,
            col,
            seat,
            outcome,
        })
    }
}
