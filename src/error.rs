use std::path::PathBuf;

/// Errors raised while constructing or editing a board or controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board size {size} is too small (minimum {min})")]
    BoardTooSmall { size: usize, min: usize },

    #[error("win exponent {win_exponent} must exceed the largest spawned exponent {max_spawn}")]
    WinExponentTooLow { win_exponent: u8, max_spawn: u8 },

    #[error("cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("row has {actual} cells, expected {expected}")]
    CellCountMismatch { expected: usize, actual: usize },
}

/// Errors that can occur while reading or writing the score history.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to read score history from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse score history from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

    #[error(transparent)]
    Game(#[from] GameError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::BoardTooSmall { size: 1, min: 2 };
        assert_eq!(err.to_string(), "board size 1 is too small (minimum 2)");

        let err = GameError::OutOfBounds {
            row: 4,
            col: 0,
            size: 4,
        };
        assert_eq!(err.to_string(), "cell (4, 0) is outside a 4x4 board");
    }

    #[test]
    fn test_history_error_display() {
        let err = HistoryError::Read {
            path: PathBuf::from("scores.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read score history from scores.json: denied"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("countdown.limit_secs must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: countdown.limit_secs must be > 0"
        );

        let err = ConfigError::from(GameError::WinExponentTooLow {
            win_exponent: 2,
            max_spawn: 2,
        });
        assert_eq!(
            err.to_string(),
            "win exponent 2 must exceed the largest spawned exponent 2"
        );
    }
}
