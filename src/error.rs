//! Error types for the flip gomoku engine

use std::path::PathBuf;

/// Errors raised by session commands. None of them leaves the game partially
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("position ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("no previous move: already at the start of the history")]
    NoPreviousMove,

    #[error("no next move: already at the end of the history")]
    NoNextMove,

    #[error("move index {index} is outside the history (0..={len})")]
    MoveIndexOutOfRange { index: i64, len: usize },

    #[error("position ({x}, {y}) is already occupied")]
    DuplicatePosition { x: u8, y: u8 },

    #[error("game already ended; start a new game first")]
    GameAlreadyEnded,

    #[error("flip probability {0} is outside [0, 1]")]
    InvalidFlipProbability(f64),
}

impl GameError {
    /// Coordinate or history-navigation errors. The caller is expected to
    /// avoid these rather than recover from them.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            GameError::OutOfBounds { .. }
                | GameError::NoPreviousMove
                | GameError::NoNextMove
                | GameError::MoveIndexOutOfRange { .. }
        )
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::DuplicatePosition { x: 3, y: 4 };
        assert_eq!(err.to_string(), "position (3, 4) is already occupied");

        let err = GameError::MoveIndexOutOfRange { index: -1, len: 6 };
        assert_eq!(err.to_string(), "move index -1 is outside the history (0..=6)");
    }

    #[test]
    fn test_range_error_classification() {
        assert!(GameError::OutOfBounds { x: 15, y: 0 }.is_range_error());
        assert!(GameError::NoPreviousMove.is_range_error());
        assert!(GameError::NoNextMove.is_range_error());
        assert!(!GameError::GameAlreadyEnded.is_range_error());
        assert!(!GameError::DuplicatePosition { x: 0, y: 0 }.is_range_error());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.flip_probability must be in [0, 1]".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.flip_probability must be in [0, 1]"
        );
    }
}
