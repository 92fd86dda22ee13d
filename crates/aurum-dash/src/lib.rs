//! CLI support for the aurum dashboard binary

pub mod report;

pub use report::{exit_code, format_report_line, parse_panels};
