use std::path::PathBuf;

use crate::grid::Position;

/// Why a proposed swap is not a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("position {0} is outside the grid")]
    OutOfBounds(Position),

    #[error("cells {0} and {1} are not adjacent")]
    NotAdjacent(Position, Position),

    #[error("swapping {0} and {1} does not form a match")]
    NoMatch(Position, Position),
}

/// Errors raised when building a grid from raw tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("expected {rows}x{cols} tokens, got {len}")]
    DimensionMismatch { rows: usize, cols: usize, len: usize },
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
