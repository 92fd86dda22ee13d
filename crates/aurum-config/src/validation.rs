//! Settings validation

use crate::Settings;
use aurum_common::{DashboardError, Result};

/// Validate the entire settings tree
///
/// Checks run in declaration order and stop at the first failure so the
/// reported field is unambiguous.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    if settings.title.trim().is_empty() {
        return Err(DashboardError::validation_field(
            "dashboard title cannot be empty",
            "title",
        ));
    }

    validate_dimension(settings.chart.width, "chart.width")?;
    validate_dimension(settings.chart.height, "chart.height")?;

    if !(8..=72).contains(&settings.chart.font_size) {
        return Err(DashboardError::validation_field(
            format!(
                "font size must be between 8 and 72, got {}",
                settings.chart.font_size
            ),
            "chart.font_size",
        ));
    }

    if settings.chart.font_family.trim().is_empty() {
        return Err(DashboardError::validation_field(
            "font family cannot be empty",
            "chart.font_family",
        ));
    }

    if settings.controls.country.trim().is_empty() {
        return Err(DashboardError::validation_field(
            "selected country cannot be empty",
            "controls.country",
        ));
    }

    if !(1..=200).contains(&settings.controls.window_years) {
        return Err(DashboardError::validation_field(
            format!(
                "window must be between 1 and 200 years, got {}",
                settings.controls.window_years
            ),
            "controls.window_years",
        ));
    }

    if settings.logging.level.trim().is_empty() {
        return Err(DashboardError::validation_field(
            "log level cannot be empty",
            "logging.level",
        ));
    }

    Ok(())
}

fn validate_dimension(value: u32, field: &str) -> Result<()> {
    if !(100..=4000).contains(&value) {
        return Err(DashboardError::validation_field(
            format!("{} must be between 100 and 4000 pixels, got {}", field, value),
            field,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_zero_width_rejected() {
        let mut settings = Settings::default();
        settings.chart.width = 0;
        let err = validate_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("chart.width"));
    }

    #[test]
    fn test_zero_window_rejected() {
        let mut settings = Settings::default();
        settings.controls.window_years = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_empty_country_rejected() {
        let mut settings = Settings::default();
        settings.controls.country = "   ".to_string();
        let err = validate_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("country"));
    }
}
