//! # Connect Four
//!
//! A two-player Connect Four game with a color-selection pre-game flow and a
//! terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, color setup, turn controller
//! - [`ui`]: Terminal UI: start, color selection, game and game-over screens
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
