//! Yearly average price line chart

use crate::{ChartConfig, PanelRenderer, YearlyPricePoint};
use aurum_common::{DashboardError, Result};
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Line chart of yearly average gold prices with point markers
#[derive(Debug)]
pub struct PriceTrendPanel {
    /// Windowed yearly averages, sorted by year ascending
    pub data: Vec<YearlyPricePoint>,
}

impl PriceTrendPanel {
    /// Create a panel over the given yearly series
    pub fn new(data: Vec<YearlyPricePoint>) -> Self {
        Self { data }
    }

    /// Padded y-axis range over the series
    fn price_range(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for point in &self.data {
            lo = lo.min(point.average_price);
            hi = hi.max(point.average_price);
        }
        let padding = ((hi - lo) * 0.08).max(hi.abs() * 0.02).max(1.0);
        ((lo - padding).max(0.0), hi + padding)
    }
}

impl PanelRenderer for PriceTrendPanel {
    fn name(&self) -> &'static str {
        "price-trend"
    }

    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(DashboardError::render("no yearly price data to render"));
        }

        let root =
            BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let ink = self.ink_color(config);
        let colors = self.get_colors(&config.style.color_scheme);
        let line_color = colors.first().copied().unwrap_or(RGBColor(212, 160, 23));

        let min_year = self.data.first().map(|p| p.year).unwrap_or(0);
        let max_year = self.data.last().map(|p| p.year).unwrap_or(0);
        let (y_min, y_max) = self.price_range();

        let title_font = (config.style.title_font.family.as_str(), config.style.title_font.size);
        let label_font = (config.style.axis_font.family.as_str(), config.style.axis_font.size);

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font.into_font().color(&ink))
            .margin(config.style.margins.outer)
            .x_label_area_size(config.style.margins.x_label_area)
            .y_label_area_size(config.style.margins.y_label_area)
            .build_cartesian_2d(
                f64::from(min_year) - 0.5..f64::from(max_year) + 0.5,
                y_min..y_max,
            )?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or("Year"))
            .y_desc(config.y_label.as_deref().unwrap_or("Average price"))
            .x_label_formatter(&|x| format!("{:.0}", x))
            .axis_style(ink)
            .label_style(label_font.into_font().color(&ink))
            .light_line_style(ink.mix(0.12))
            .draw()?;

        chart.draw_series(LineSeries::new(
            self.data
                .iter()
                .map(|p| (f64::from(p.year), p.average_price)),
            line_color.stroke_width(2),
        ))?;

        // Point markers, one per year
        chart.draw_series(
            self.data
                .iter()
                .map(|p| Circle::new((f64::from(p.year), p.average_price), 4, line_color.filled())),
        )?;

        root.present()?;
        info!("rendered price trend ({} years) to {}", self.data.len(), path.display());
        Ok(())
    }
}
