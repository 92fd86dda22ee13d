//! Error types and utilities for the aurum dashboard

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// An expected input file could not be located
    #[error("Missing source '{name}': {}", .path.display())]
    Source {
        /// Logical name of the source (e.g. "prices")
        name: String,
        /// Path that was checked
        path: PathBuf,
    },

    /// Required columns absent from an otherwise loadable source
    #[error("Schema violation in '{name}': missing required column(s): {}", .columns.join(", "))]
    Schema {
        /// Logical name of the source
        name: String,
        /// All required columns that were not found
        columns: Vec<String>,
    },

    /// Validation failure for input data or settings
    #[error("Validation error: {message}")]
    Validation {
        /// What failed
        message: String,
        /// Field the failure is attributed to, if any
        field: Option<String>,
    },

    /// Chart rendering errors
    #[error("Render error: {message}")]
    Render {
        /// What failed
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// What failed
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing errors not attributable to a single row
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl DashboardError {
    /// Create a missing-source error
    pub fn source_missing(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Source {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a schema-violation error naming the missing columns
    pub fn schema(source: impl Into<String>, columns: Vec<String>) -> Self {
        Self::Schema {
            name: source.into(),
            columns,
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a validation error attributed to a named field
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a validation error attributed to a specific input row
    pub fn validation_row(msg: impl Into<String>, line: usize) -> Self {
        Self::Validation {
            message: format!("{} (row {})", msg.into(), line),
            field: None,
        }
    }

    /// Create a render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a render error with source
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Convert from serde_yaml::Error to DashboardError
impl From<serde_yaml::Error> for DashboardError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config_with_source("YAML parsing error", err)
    }
}

/// Convert from plotters drawing errors to DashboardError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for DashboardError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::render_with_source("Chart rendering failed", err)
    }
}
