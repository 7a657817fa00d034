use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION};

/// Largest grid side the terminal view stays legible at.
const MAX_DIMENSION: usize = 64;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
}

/// Board dimensions for new games.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_ROWS,
            width: DEFAULT_COLS,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.height must be >= {MIN_DIMENSION}"
            )));
        }
        if self.board.width < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.width must be >= {MIN_DIMENSION}"
            )));
        }
        if self.board.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.height must be <= {MAX_DIMENSION}"
            )));
        }
        if self.board.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.width must be <= {MAX_DIMENSION}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.height, 6);
        assert_eq!(config.board.width, 7);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
width = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.width, 9);
        assert_eq!(config.board.height, 6);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board.height, 6);
        assert_eq!(config.board.width, 7);
    }

    #[test]
    fn test_validation_rejects_small_board() {
        let mut config = AppConfig::default();
        config.board.height = 3;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_huge_board() {
        let mut config = AppConfig::default();
        config.board.width = 1000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.height, 6);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
height = 8
width = 10
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.height, 8);
        assert_eq!(config.board.width, 10);
    }

    #[test]
    fn test_load_rejects_invalid_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        std::fs::write(&path, "[board]\nheight = 2\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
