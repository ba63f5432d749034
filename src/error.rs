use std::path::PathBuf;

/// Reasons a drop is rejected. A rejected drop never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is out of range")]
    InvalidColumn,

    #[error("column is full")]
    ColumnFull,

    #[error("game is already over")]
    GameAlreadyOver,
}

/// Errors that can occur while replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("move {} (column {column}) rejected: {source}", .index + 1)]
    Rejected {
        index: usize,
        column: i64,
        source: MoveError,
    },
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
