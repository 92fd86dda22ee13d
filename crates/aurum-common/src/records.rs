//! Raw source-row types loaded from the dashboard's input tables
//!
//! Every record is a read-only snapshot of one input row. Aggregation never
//! mutates these; each derived shape is computed fresh on every render.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One month-granularity gold price observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Observation month (normalized to the first day of the month)
    pub date: NaiveDate,
    /// Price for that month
    pub price: f64,
}

/// One sector's gold usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Sector name (e.g. "Jewellery", "Technology")
    pub sector: String,
    /// Amount in tonnes
    pub tonnes: f64,
}

/// One regional investment observation in long format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRecord {
    /// Region name
    pub region: String,
    /// Calendar year
    pub year: i32,
    /// Investment volume (USD millions)
    pub volume: f64,
}

/// One news headline attributed to a country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineRecord {
    /// Country the headline is filed under
    pub country: String,
    /// Free-text headline
    pub headline: String,
}

/// One country's national gold reserves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReserveRecord {
    /// Country name, whitespace-trimmed at ingest
    pub country: String,
    /// Reserves in tonnes
    pub tonnes: f64,
}
