//! Core Connect Four game logic: board, players, color setup and the turn
//! controller that drives a single game.

mod board;
mod player;
mod session;
mod setup;

pub use board::{Board, Cell, HEIGHT, WIDTH};
pub use player::{PieceColor, Player, Seat};
pub use session::{GameOutcome, GameSession, MoveEvent, Phase};
pub use setup::validate_colors;
