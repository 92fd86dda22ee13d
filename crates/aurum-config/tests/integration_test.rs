//! Settings loading integration tests

use aurum_config::{SettingsLoader, Theme};
use std::io::Write;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_full_settings_file() {
    let file = write_config(
        r#"
title: Gold Market Overview
theme: light
sources:
  prices: inputs/prices.csv
  reserves: inputs/reserves.csv
chart:
  width: 1200
  height: 700
  font_size: 14
controls:
  country: Turkey
  window_years: 10
logging:
  level: debug
"#,
    );

    let settings = SettingsLoader::load_from_file(file.path()).unwrap();
    assert_eq!(settings.title, "Gold Market Overview");
    assert_eq!(settings.theme, Theme::Light);
    assert_eq!(settings.sources.prices.to_str().unwrap(), "inputs/prices.csv");
    // Unspecified sources keep their defaults
    assert_eq!(
        settings.sources.usage.to_str().unwrap(),
        "data/sector_usage.csv"
    );
    assert_eq!(settings.chart.width, 1200);
    assert_eq!(settings.controls.country, "Turkey");
    assert_eq!(settings.controls.window_years, 10);
    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn rejects_out_of_range_values() {
    let file = write_config("chart:\n  width: 7\n");
    let err = SettingsLoader::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("chart.width"));
}

#[test]
fn rejects_zero_window() {
    let file = write_config("controls:\n  window_years: 0\n");
    assert!(SettingsLoader::load_from_file(file.path()).is_err());
}

#[test]
fn rejects_unknown_theme() {
    let file = write_config("theme: sepia\n");
    let err = SettingsLoader::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}
