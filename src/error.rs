use std::path::PathBuf;

/// Errors returned when a move is rejected. None of these change game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {col} is out of range (expected 0..{width})")]
    InvalidColumn { col: usize, width: usize },

    #[error("cell ({row}, {col}) is outside the {height}x{width} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("column {0} is full")]
    ColumnFull(usize),

    /// A placement into an occupied cell. Callers that always resolve the row
    /// with `find_spot_for_column` first never see this.
    #[error("cell ({row}, {col}) is already occupied")]
    InvalidMove { row: usize, col: usize },

    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Errors raised while validating the pre-game color selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("Both players must choose a color.")]
    MissingColor,

    #[error("Players must choose different colors.")]
    DuplicateColor,

    #[error("unknown color '{0}'")]
    UnknownColor(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
