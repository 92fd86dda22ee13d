//! Configuration management for the aurum dashboard

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, SettingsLoader};
pub use settings::{
    ChartSettings, ControlsConfig, LogSettings, Settings, SourcesConfig, Theme,
};
