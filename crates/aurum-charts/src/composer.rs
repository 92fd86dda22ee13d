//! Dashboard composition: one isolated pipeline per panel
//!
//! Every panel is a pure function of (source file, control state) and runs
//! its own load -> aggregate -> render pipeline. Failure domains are
//! isolated: a missing or broken source affects exactly one panel, and the
//! outcome of every panel is user-visible text, never a silent blank.

use crate::{
    ingest, ChartConfig, ColorScheme, FontConfig, HeadlineCloudPanel, InvestmentHeatmapPanel,
    InvestmentPivotAggregator, PanelKind, PanelRenderer, PriceTrendPanel, ReservesPanel,
    SectorUsageAggregator, SectorUsagePanel, StyleConfig, WordFrequencyAggregator,
    YearlyAverageAggregator,
};
use aurum_common::{DashboardError, Result};
use aurum_config::{Settings, Theme};
use chrono::Datelike;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// State of the dashboard's two interactive controls
#[derive(Debug, Clone)]
pub struct Controls {
    /// Country filter for the headline cloud
    pub country: String,
    /// Trailing year window for the price trend
    pub window_years: u32,
}

/// Terminal state of one panel's render cycle
#[derive(Debug, Clone)]
pub enum PanelOutcome {
    /// Panel rendered to the given file
    Rendered(PathBuf),
    /// Source missing; panel skipped with a message naming it
    Skipped(String),
    /// Legitimate "nothing to display" state
    Empty(String),
    /// Hard failure for this panel only
    Failed(String),
}

impl PanelOutcome {
    /// True for hard failures
    pub fn is_failed(&self) -> bool {
        matches!(self, PanelOutcome::Failed(_))
    }

    /// True when a file was produced
    pub fn is_rendered(&self) -> bool {
        matches!(self, PanelOutcome::Rendered(_))
    }
}

/// One panel's report after a render cycle
#[derive(Debug, Clone)]
pub struct PanelReport {
    /// Which panel
    pub panel: PanelKind,
    /// What happened
    pub outcome: PanelOutcome,
}

/// Renders the dashboard's panels from configured sources and controls
#[derive(Debug)]
pub struct Composer {
    settings: Settings,
    controls: Controls,
    reference_year: i32,
}

impl Composer {
    /// Create a composer; the trailing window is measured from the current
    /// calendar year
    pub fn new(settings: Settings) -> Self {
        let controls = Controls {
            country: settings.controls.country.clone(),
            window_years: settings.controls.window_years,
        };
        Self {
            settings,
            controls,
            reference_year: chrono::Local::now().year(),
        }
    }

    /// Override the control state
    pub fn with_controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    /// Pin the window's reference year (tests and reproducible runs)
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    /// Render every panel into `out_dir`
    pub fn render_all(&self, out_dir: &Path) -> Result<Vec<PanelReport>> {
        self.render_panels(&PanelKind::ALL, out_dir)
    }

    /// Render the selected panels into `out_dir`
    pub fn render_panels(&self, kinds: &[PanelKind], out_dir: &Path) -> Result<Vec<PanelReport>> {
        fs::create_dir_all(out_dir)?;

        let reports: Vec<PanelReport> = kinds
            .iter()
            .map(|kind| PanelReport {
                panel: *kind,
                outcome: self.render_panel(*kind, out_dir),
            })
            .collect();

        let rendered = reports.iter().filter(|r| r.outcome.is_rendered()).count();
        info!(rendered, requested = kinds.len(), "dashboard render cycle complete");
        Ok(reports)
    }

    /// Run one panel's pipeline, containing its failures
    fn render_panel(&self, kind: PanelKind, out_dir: &Path) -> PanelOutcome {
        let result = match kind {
            PanelKind::PriceTrend => self.compose_price_trend(out_dir),
            PanelKind::SectorUsage => self.compose_sector_usage(out_dir),
            PanelKind::InvestmentHeatmap => self.compose_investment_heatmap(out_dir),
            PanelKind::HeadlineCloud => self.compose_headline_cloud(out_dir),
            PanelKind::Reserves => self.compose_reserves(out_dir),
        };

        match result {
            Ok(outcome) => outcome,
            Err(err @ DashboardError::Source { .. }) => {
                warn!(panel = %kind, "{}", err);
                PanelOutcome::Skipped(err.to_string())
            }
            Err(err) => {
                error!(panel = %kind, "{}", err);
                PanelOutcome::Failed(err.to_string())
            }
        }
    }

    fn compose_price_trend(&self, out_dir: &Path) -> Result<PanelOutcome> {
        let ingested = ingest::load_prices(&self.settings.sources.prices)?;
        if ingested.rows_read == 0 {
            return Ok(PanelOutcome::Empty("price table has no data rows".to_string()));
        }
        if ingested.emptied_by_defects() {
            return Err(DashboardError::validation(format!(
                "all {} price rows were invalid",
                ingested.rows_read
            )));
        }

        let aggregator =
            YearlyAverageAggregator::with_window(self.reference_year, self.controls.window_years);
        let points = aggregator.aggregate(&ingested.records);
        if points.is_empty() {
            return Ok(PanelOutcome::Empty(format!(
                "no price data within the last {} years",
                self.controls.window_years
            )));
        }

        let path = out_dir.join(PanelKind::PriceTrend.filename());
        PriceTrendPanel::new(points).render_to_file(&self.chart_config(PanelKind::PriceTrend), &path)?;
        Ok(PanelOutcome::Rendered(path))
    }

    fn compose_sector_usage(&self, out_dir: &Path) -> Result<PanelOutcome> {
        let ingested = ingest::load_usage(&self.settings.sources.usage)?;
        if ingested.records.is_empty() {
            return Ok(PanelOutcome::Empty("usage table has no data rows".to_string()));
        }

        let ordered = SectorUsageAggregator::new().aggregate(&ingested.records);
        let path = out_dir.join(PanelKind::SectorUsage.filename());
        SectorUsagePanel::new(ordered)
            .render_to_file(&self.chart_config(PanelKind::SectorUsage), &path)?;
        Ok(PanelOutcome::Rendered(path))
    }

    fn compose_investment_heatmap(&self, out_dir: &Path) -> Result<PanelOutcome> {
        let ingested = ingest::load_investment(&self.settings.sources.investment)?;
        if ingested.rows_read > 0 && ingested.records.is_empty() {
            return Err(DashboardError::validation(format!(
                "all {} investment rows were invalid",
                ingested.rows_read
            )));
        }

        let grid = InvestmentPivotAggregator::new().aggregate(&ingested.records)?;
        if grid.is_empty() {
            return Ok(PanelOutcome::Empty("no investment data to display".to_string()));
        }

        let path = out_dir.join(PanelKind::InvestmentHeatmap.filename());
        InvestmentHeatmapPanel::new(grid)
            .render_to_file(&self.chart_config(PanelKind::InvestmentHeatmap), &path)?;
        Ok(PanelOutcome::Rendered(path))
    }

    fn compose_headline_cloud(&self, out_dir: &Path) -> Result<PanelOutcome> {
        let ingested = ingest::load_headlines(&self.settings.sources.headlines)?;
        let country = self.controls.country.trim();

        // Filtering to the selected country is the composer's job; the
        // aggregator only cleans and counts
        let matching: Vec<_> = ingested
            .records
            .iter()
            .filter(|r| r.country.trim().eq_ignore_ascii_case(country))
            .cloned()
            .collect();

        let counts = WordFrequencyAggregator::new().aggregate(country, &matching);
        if counts.is_empty() {
            return Ok(PanelOutcome::Empty(format!(
                "no displayable headline content for '{}'",
                country
            )));
        }

        let path = out_dir.join(PanelKind::HeadlineCloud.filename());
        HeadlineCloudPanel::new(counts)
            .render_to_file(&self.chart_config(PanelKind::HeadlineCloud), &path)?;
        Ok(PanelOutcome::Rendered(path))
    }

    fn compose_reserves(&self, out_dir: &Path) -> Result<PanelOutcome> {
        let ingested = ingest::load_reserves(&self.settings.sources.reserves)?;
        if ingested.records.is_empty() {
            return Ok(PanelOutcome::Empty("reserves table has no data rows".to_string()));
        }

        let path = out_dir.join(PanelKind::Reserves.filename());
        ReservesPanel::new(ingested.records)
            .render_to_file(&self.chart_config(PanelKind::Reserves), &path)?;
        Ok(PanelOutcome::Rendered(path))
    }

    /// Build a panel's chart configuration from the settings and theme
    fn chart_config(&self, kind: PanelKind) -> ChartConfig {
        let mut style = match self.settings.theme {
            Theme::Dark => StyleConfig::dark(),
            Theme::Light => StyleConfig::light(),
        };
        style.title_font.family = self.settings.chart.font_family.clone();
        style.axis_font = FontConfig {
            family: self.settings.chart.font_family.clone(),
            size: self.settings.chart.font_size,
        };

        let (title, x_label, y_label) = match kind {
            PanelKind::PriceTrend => (
                "Average Gold Price by Year".to_string(),
                Some("Year".to_string()),
                Some("Average price (USD/oz)".to_string()),
            ),
            PanelKind::SectorUsage => (
                "Gold Usage by Sector".to_string(),
                Some("Tonnes".to_string()),
                None,
            ),
            PanelKind::InvestmentHeatmap => (
                "Regional Gold Investment by Year".to_string(),
                None,
                None,
            ),
            PanelKind::HeadlineCloud => (
                format!("Gold in the News: {}", self.controls.country.trim()),
                None,
                None,
            ),
            PanelKind::Reserves => (
                "National Gold Reserves".to_string(),
                Some("Tonnes".to_string()),
                None,
            ),
        };

        // The price trend and reserves panels carry the gold palette; the
        // rest follow the theme's categorical scheme
        if matches!(kind, PanelKind::PriceTrend | PanelKind::Reserves) {
            style.color_scheme = ColorScheme::Gold;
        }

        ChartConfig {
            title,
            width: self.settings.chart.width,
            height: self.settings.chart.height,
            x_label,
            y_label,
            style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings_with_sources(dir: &Path) -> Settings {
        let mut settings = Settings::default();
        settings.sources.prices = dir.join("prices.csv");
        settings.sources.usage = dir.join("usage.csv");
        settings.sources.investment = dir.join("investment.csv");
        settings.sources.headlines = dir.join("headlines.csv");
        settings.sources.reserves = dir.join("reserves.csv");
        settings
    }

    fn write_file(path: &Path, content: &str) {
        let mut file = std::fs::File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_missing_source_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let composer = Composer::new(settings_with_sources(dir.path()));

        let reports = composer
            .render_panels(&[PanelKind::PriceTrend], dir.path())
            .unwrap();
        assert!(matches!(reports[0].outcome, PanelOutcome::Skipped(_)));
    }

    #[test]
    fn test_empty_headlines_for_country_is_empty_outcome() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            &dir.path().join("headlines.csv"),
            "country,headline\nEgypt,Gold demand climbs\n",
        );
        let mut settings = settings_with_sources(dir.path());
        settings.controls.country = "Norway".to_string();
        let composer = Composer::new(settings);

        let reports = composer
            .render_panels(&[PanelKind::HeadlineCloud], dir.path())
            .unwrap();
        match &reports[0].outcome {
            PanelOutcome::Empty(notice) => assert!(notice.contains("Norway")),
            other => panic!("expected Empty, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_pivot_key_fails_panel() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            &dir.path().join("investment.csv"),
            "region,year,volume\nAsia,2020,100\nAsia,2020,90\n",
        );
        let composer = Composer::new(settings_with_sources(dir.path()));

        let reports = composer
            .render_panels(&[PanelKind::InvestmentHeatmap], dir.path())
            .unwrap();
        match &reports[0].outcome {
            PanelOutcome::Failed(message) => {
                assert!(message.contains("duplicate investment entry"))
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_window_control_reaches_price_panel() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            &dir.path().join("prices.csv"),
            "date,price\n1990-06,383.5\n1991-06,362.1\n",
        );
        let mut settings = settings_with_sources(dir.path());
        settings.controls.window_years = 5;
        let composer = Composer::new(settings).with_reference_year(2025);

        let reports = composer
            .render_panels(&[PanelKind::PriceTrend], dir.path())
            .unwrap();
        match &reports[0].outcome {
            PanelOutcome::Empty(notice) => assert!(notice.contains("last 5 years")),
            other => panic!("expected Empty, got {:?}", other),
        }
    }

    #[test]
    fn test_all_rows_invalid_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            &dir.path().join("prices.csv"),
            "date,price\nsometime,1800\nlater,1900\n",
        );
        let composer = Composer::new(settings_with_sources(dir.path()));

        let reports = composer
            .render_panels(&[PanelKind::PriceTrend], dir.path())
            .unwrap();
        match &reports[0].outcome {
            PanelOutcome::Failed(message) => {
                assert!(message.contains("all 2 price rows were invalid"))
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }
}
