//! Utility functions used across the aurum dashboard

use crate::Result;

/// Validate that a string is not empty after trimming, returning the
/// trimmed value
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(crate::DashboardError::validation_field(
            format!("{} cannot be empty", field_name),
            field_name,
        ))
    } else {
        Ok(trimmed.to_string())
    }
}
