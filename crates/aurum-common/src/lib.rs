//! Common error, logging and record types for the aurum dashboard

pub mod error;
pub mod logging;
pub mod records;
pub mod utils;

// Re-export commonly used types
pub use error::{DashboardError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
pub use records::{
    HeadlineRecord, InvestmentRecord, PriceRecord, ReserveRecord, UsageRecord,
};
