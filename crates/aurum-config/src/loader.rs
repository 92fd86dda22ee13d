//! Configuration loading utilities

use crate::{validation, Settings, Theme};
use aurum_common::Result as DashResult;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading the configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable that failed to parse
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for aurum_common::DashboardError {
    fn from(err: ConfigError) -> Self {
        aurum_common::DashboardError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut settings: Settings = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut settings)?;
        Ok(settings)
    }

    /// Load configuration from environment variables and files
    ///
    /// Resolution order: `AURUM_CONFIG_PATH`, then `aurum.yaml` / `aurum.yml`
    /// in the working directory, then built-in defaults. Environment
    /// overrides apply in every case, and the result is validated.
    pub fn load() -> DashResult<Settings> {
        let settings = if let Ok(config_path) = env::var("AURUM_CONFIG_PATH") {
            debug!("loading settings from AURUM_CONFIG_PATH={}", config_path);
            Self::load_config(&config_path)?
        } else if Path::new("aurum.yaml").exists() {
            Self::load_config("aurum.yaml")?
        } else if Path::new("aurum.yml").exists() {
            Self::load_config("aurum.yml")?
        } else {
            let mut settings = Settings::default();
            Self::apply_env_overrides(&mut settings)?;
            settings
        };

        validation::validate_settings(&settings)?;
        Ok(settings)
    }

    /// Load configuration from a specific file, validated
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DashResult<Settings> {
        let settings = Self::load_config(path)?;
        validation::validate_settings(&settings)?;
        Ok(settings)
    }

    /// Apply environment variable overrides to the settings
    fn apply_env_overrides(settings: &mut Settings) -> Result<(), ConfigError> {
        if let Ok(title) = env::var("AURUM_TITLE") {
            settings.title = title;
        }

        if let Ok(theme) = env::var("AURUM_THEME") {
            settings.theme = match theme.to_ascii_lowercase().as_str() {
                "dark" => Theme::Dark,
                "light" => Theme::Light,
                other => {
                    return Err(ConfigError::EnvParseError {
                        var: "AURUM_THEME".to_string(),
                        source: format!("unknown theme '{}', expected dark|light", other).into(),
                    })
                }
            };
        }

        // Source path overrides
        if let Ok(path) = env::var("AURUM_PRICES") {
            settings.sources.prices = path.into();
        }
        if let Ok(path) = env::var("AURUM_USAGE") {
            settings.sources.usage = path.into();
        }
        if let Ok(path) = env::var("AURUM_INVESTMENT") {
            settings.sources.investment = path.into();
        }
        if let Ok(path) = env::var("AURUM_HEADLINES") {
            settings.sources.headlines = path.into();
        }
        if let Ok(path) = env::var("AURUM_RESERVES") {
            settings.sources.reserves = path.into();
        }

        // Control overrides
        if let Ok(country) = env::var("AURUM_COUNTRY") {
            settings.controls.country = country;
        }
        if let Ok(window) = env::var("AURUM_WINDOW_YEARS") {
            settings.controls.window_years =
                window.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "AURUM_WINDOW_YEARS".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Ok(level) = env::var("AURUM_LOG_LEVEL") {
            settings.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "title: Test Dashboard\ncontrols:\n  country: Egypt\n  window_years: 5\n"
        )
        .unwrap();

        let settings = SettingsLoader::load_config(file.path()).unwrap();
        assert_eq!(settings.title, "Test Dashboard");
        assert_eq!(settings.controls.country, "Egypt");
        assert_eq!(settings.controls.window_years, 5);
    }

    #[test]
    fn test_load_config_rejects_bad_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title: [unclosed").unwrap();
        assert!(SettingsLoader::load_config(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SettingsLoader::load_config("/definitely/not/here.yaml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
