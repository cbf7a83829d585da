use std::path::PathBuf;

use crate::puzzle::MoveError;

/// Errors that can occur while animating a solve.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("failed to present frame: {0}")]
    Render(#[from] std::io::Error),
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
