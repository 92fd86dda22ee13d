//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Page-level dashboard title
    pub title: String,

    /// Visual theme applied to every panel at startup
    pub theme: Theme,

    /// Paths to the five input tables
    pub sources: SourcesConfig,

    /// Panel rendering settings
    pub chart: ChartSettings,

    /// Interactive control defaults
    pub controls: ControlsConfig,

    /// Logging configuration
    pub logging: LogSettings,
}

/// Visual theme for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background, light ink
    Dark,
    /// Light background, dark ink
    Light,
}

/// Paths to the input tables
///
/// Each source is independently optional at render time: a path whose file
/// does not exist skips that panel only, it never blocks the others.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Monthly gold price table (date, price)
    pub prices: PathBuf,
    /// Sector usage table (sector, tonnes)
    pub usage: PathBuf,
    /// Regional investment table (region, year, volume)
    pub investment: PathBuf,
    /// News headline table (country, headline)
    pub headlines: PathBuf,
    /// National reserves table (country, tonnes)
    pub reserves: PathBuf,
}

/// Panel rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Panel width in pixels
    pub width: u32,
    /// Panel height in pixels
    pub height: u32,
    /// Font family for titles and labels
    pub font_family: String,
    /// Base font size for axis labels
    pub font_size: u32,
}

/// Defaults for the dashboard's two interactive controls
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Selected country for the headline word cloud
    pub country: String,
    /// Trailing year window for the price trend panel
    pub window_years: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
    /// Optional log file path
    pub file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Gold Dashboard".to_string(),
            theme: Theme::Dark,
            sources: SourcesConfig::default(),
            chart: ChartSettings::default(),
            controls: ControlsConfig::default(),
            logging: LogSettings::default(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            prices: PathBuf::from("data/gold_prices.csv"),
            usage: PathBuf::from("data/sector_usage.csv"),
            investment: PathBuf::from("data/regional_investment.csv"),
            headlines: PathBuf::from("data/headlines.csv"),
            reserves: PathBuf::from("data/reserves.csv"),
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            font_family: "sans-serif".to_string(),
            font_size: 12,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            country: "United States".to_string(),
            window_years: 20,
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.controls.window_years, 20);
        assert_eq!(settings.chart.width, 900);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "controls:\n  country: Turkey\n";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.controls.country, "Turkey");
        // Unspecified fields fall back to defaults
        assert_eq!(settings.controls.window_years, 20);
        assert_eq!(settings.title, "Gold Dashboard");
    }

    #[test]
    fn test_theme_roundtrip() {
        let yaml = "theme: light\n";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.theme, Theme::Light);
    }
}
