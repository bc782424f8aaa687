use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{PieceColor, WIDTH};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Colors preselected on the color selection screen.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<PieceColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<PieceColor>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Pause between the final move and the game-over screen.
    pub game_over_delay_ms: u64,
    /// Column the cursor starts on.
    pub initial_column: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            game_over_delay_ms: 500,
            initial_column: 3,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    pub file: String,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            directory: PathBuf::from("logs"),
            file: "connect-four.log".to_string(),
            level: "info".to_string(),
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
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(first), Some(second)) = (self.players.first, self.players.second) {
            if first == second {
                return Err(ConfigError::Validation(
                    "players.first and players.second must differ".into(),
                ));
            }
        }
        if self.display.initial_column >= WIDTH {
            return Err(ConfigError::Validation(format!(
                "display.initial_column must be < {WIDTH}"
            )));
        }
        if self.display.game_over_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "display.game_over_delay_ms must be <= 10000".into(),
            ));
        }
        if self.logging.file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.file must not be empty".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
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
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players]
first = "blue"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.first, Some(PieceColor::Blue));
        assert_eq!(config.players.second, None);
        assert_eq!(config.display.game_over_delay_ms, 500);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.display.initial_column, 3);
        assert_eq!(config.logging.file, "connect-four.log");
    }

    #[test]
    fn test_unknown_color_fails_to_parse() {
        let toml_str = r#"
[players]
first = "teal"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_color_names_parse_ignoring_case() {
        let toml_str = r#"
[players]
first = "Red"
second = "PURPLE"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.first, Some(PieceColor::Red));
        assert_eq!(config.players.second, Some(PieceColor::Purple));
    }

    #[test]
    fn test_unknown_color_reports_name() {
        let err = toml::from_str::<AppConfig>("[players]\nfirst = \"teal\"\n").unwrap_err();
        assert!(err.to_string().contains("unknown color 'teal'"));
    }

    #[test]
    fn test_validation_rejects_same_colors() {
        let mut config = AppConfig::default();
        config.players.first = Some(PieceColor::Red);
        config.players.second = Some(PieceColor::Red);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_initial_column_out_of_range() {
        let mut config = AppConfig::default();
        config.display.initial_column = WIDTH;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_long_delay() {
        let mut config = AppConfig::default();
        config.display.game_over_delay_ms = 60_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_level() {
        let mut config = AppConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.display.game_over_delay_ms, 500);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[display]
game_over_delay_ms = 250

[players]
first = "green"
second = "black"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.display.game_over_delay_ms, 250);
        assert_eq!(config.players.second, Some(PieceColor::Black));
        // Others are defaults
        assert_eq!(config.display.initial_column, 3);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[display]\ninitial_column = 9\n").unwrap();
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
