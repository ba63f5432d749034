use std::path::{Path, PathBuf};

use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;
use crate::game::COLS;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Terminal front end settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the selector starts on (0-based).
    pub start_column: usize,
    /// Show the key bindings panel under the board.
    pub show_controls: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            start_column: COLS / 2,
            show_controls: true,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of "off", "error", "warn", "info", "debug", "trace".
    pub level: String,
    /// Write logs to this file instead of stderr. The terminal UI only logs
    /// when this is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Parsed `level`.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level.parse::<LevelFilter>().map_err(|_| {
            ConfigError::Validation(format!(
                "log.level '{}' is not one of off, error, warn, info, debug, trace",
                self.level
            ))
        })
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
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {COLS}"
            )));
        }
        self.log.level_filter()?;

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
        assert_eq!(config.ui.start_column, 3);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[log]
level = "debug"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log.level_filter().unwrap(), LevelFilter::DEBUG);
        assert_eq!(config.ui.start_column, 3);
        assert!(config.ui.show_controls);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.start_column, UiConfig::default().start_column);
        assert_eq!(config.log.level, "info");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_validation_rejects_start_column_out_of_range() {
        let mut config = AppConfig::default();
        config.ui.start_column = COLS;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_level() {
        let mut config = AppConfig::default();
        config.log.level = "loud".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.ui.start_column, 3);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ui]
start_column = 0
show_controls = false
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ui.start_column, 0);
        assert!(!config.ui.show_controls);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        std::fs::write(&path, "[ui]\nstart_column = 9\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[ui\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
