use std::path::PathBuf;

/// Errors surfaced by the game core.
///
/// A full column is deliberately absent here: it is an expected game outcome
/// reported through [`crate::game::MoveResult::Rejected`], not a failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board must be at least {min}x{min}, got {height}x{width}")]
    InvalidDimensions {
        height: usize,
        width: usize,
        min: usize,
    },

    #[error("column {column} is outside the board (width {width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("cell ({row}, {column}) is outside the board")]
    OutOfBounds { row: usize, column: usize },

    #[error("the game is already over")]
    GameAlreadyOver,
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
        let err = GameError::InvalidColumn { column: 9, width: 7 };
        assert_eq!(err.to_string(), "column 9 is outside the board (width 7)");
    }

    #[test]
    fn test_dimensions_error_display() {
        let err = GameError::InvalidDimensions {
            height: 3,
            width: 7,
            min: 4,
        };
        assert_eq!(err.to_string(), "board must be at least 4x4, got 3x7");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.height must be >= 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.height must be >= 4"
        );
    }
}
