//! Panel generation for the aurum gold-market dashboard
//!
//! This crate turns the dashboard's raw CSV inputs into chart-ready shapes
//! (ingest + aggregation) and renders each panel to a PNG with plotters.

pub mod aggregator;
pub mod composer;
pub mod ingest;
pub mod renderer;
pub mod types;

// Panel implementations
pub mod headline_cloud;
pub mod investment_heatmap;
pub mod price_trend;
pub mod reserves;
pub mod sector_usage;

pub use aggregator::{
    InvestmentGrid, InvestmentPivotAggregator, SectorUsageAggregator,
    WordFrequencyAggregator, YearlyAverageAggregator, YearlyPricePoint,
};
pub use composer::{Composer, Controls, PanelOutcome, PanelReport};
pub use headline_cloud::HeadlineCloudPanel;
pub use ingest::{Ingested, RowError};
pub use investment_heatmap::InvestmentHeatmapPanel;
pub use price_trend::PriceTrendPanel;
pub use renderer::PanelRenderer;
pub use reserves::ReservesPanel;
pub use sector_usage::SectorUsagePanel;
pub use types::*;
