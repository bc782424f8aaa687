//! Terminal UI: start screen, color selection, game board and game-over
//! screen. Reads game state and renders it; all rules live in [`crate::game`].

mod app;
pub mod board_widget;
mod game_view;
mod menu_view;

pub use app::{App, ColorSelection, Screen};
