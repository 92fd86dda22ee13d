//! Region-by-year investment heatmap

use crate::renderer::lerp_color;
use crate::{ChartConfig, InvestmentGrid, PanelRenderer};
use aurum_common::{DashboardError, Result};
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Heatmap over the pivoted investment grid
///
/// Populated cells are shaded along a sequential ramp; cells with no
/// recorded value get a flat neutral fill so absence never reads as a low
/// volume.
#[derive(Debug)]
pub struct InvestmentHeatmapPanel {
    /// Pivoted grid (regions x years)
    pub grid: InvestmentGrid,
}

impl InvestmentHeatmapPanel {
    /// Create a panel over a pivoted grid
    pub fn new(grid: InvestmentGrid) -> Self {
        Self { grid }
    }
}

impl PanelRenderer for InvestmentHeatmapPanel {
    fn name(&self) -> &'static str {
        "investment-heatmap"
    }

    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        if self.grid.is_empty() {
            return Err(DashboardError::render("no investment data to render"));
        }

        let root =
            BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let ink = self.ink_color(config);
        let regions = self.grid.regions();
        let years = self.grid.years();
        let (lo, hi) = self.grid.value_range().unwrap_or((0.0, 0.0));
        let span = (hi - lo).max(f64::EPSILON);

        let ramp_from = RGBColor(252, 238, 197); // pale straw
        let ramp_to = RGBColor(153, 84, 13); // deep bronze
        // "No data" fill: a barely-inked tint of the background, flat and
        // outside the ramp so absence cannot be mistaken for a low value
        let neutral = lerp_color(self.background_color(config), ink, 0.15);

        let title_font = (config.style.title_font.family.as_str(), config.style.title_font.size);
        let label_font = (config.style.axis_font.family.as_str(), config.style.axis_font.size);

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font.into_font().color(&ink))
            .margin(config.style.margins.outer)
            .x_label_area_size(config.style.margins.x_label_area)
            .y_label_area_size(config.style.margins.y_label_area.max(110))
            .build_cartesian_2d(
                -0.5..years.len() as f64 - 0.5,
                -0.5..regions.len() as f64 - 0.5,
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(years.len())
            .y_labels(regions.len())
            .x_label_formatter(&|x| {
                let i = x.round();
                if (x - i).abs() < 1e-6 && i >= 0.0 && (i as usize) < years.len() {
                    years[i as usize].to_string()
                } else {
                    String::new()
                }
            })
            .y_label_formatter(&|y| {
                let i = y.round();
                if (y - i).abs() < 1e-6 && i >= 0.0 && (i as usize) < regions.len() {
                    regions[i as usize].clone()
                } else {
                    String::new()
                }
            })
            .axis_style(ink)
            .label_style(label_font.into_font().color(&ink))
            .draw()?;

        for (r, _region) in regions.iter().enumerate() {
            for (c, _year) in years.iter().enumerate() {
                let fill = match self.grid.value(r, c) {
                    Some(value) => lerp_color(ramp_from, ramp_to, (value - lo) / span),
                    None => neutral,
                };
                let cell = Rectangle::new(
                    [
                        (c as f64 - 0.46, r as f64 - 0.46),
                        (c as f64 + 0.46, r as f64 + 0.46),
                    ],
                    fill.filled(),
                );
                chart.draw_series(std::iter::once(cell))?;
            }
        }

        root.present()?;
        info!(
            "rendered investment heatmap ({}x{}) to {}",
            regions.len(),
            years.len(),
            path.display()
        );
        Ok(())
    }
}
