//! National reserves ranking panel

use crate::{ChartConfig, PanelRenderer};
use aurum_common::{DashboardError, ReserveRecord, Result};
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Ranked bar panel of national gold reserves
///
/// The source choropleth reduces to one number per country; this panel
/// presents the same data as a top-N ranking, largest holder first.
#[derive(Debug)]
pub struct ReservesPanel {
    /// Records sorted by tonnes descending
    pub data: Vec<ReserveRecord>,
    /// Number of countries to show
    pub limit: usize,
}

impl ReservesPanel {
    /// Rank the records, largest reserves first; ties keep input order
    pub fn new(mut data: Vec<ReserveRecord>) -> Self {
        data.sort_by(|a, b| {
            b.tonnes
                .partial_cmp(&a.tonnes)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { data, limit: 15 }
    }

    /// Override the number of countries shown
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl PanelRenderer for ReservesPanel {
    fn name(&self) -> &'static str {
        "reserves"
    }

    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(DashboardError::render("no reserve data to render"));
        }

        let root =
            BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let ink = self.ink_color(config);
        let colors = self.get_colors(&config.style.color_scheme);
        let shown = &self.data[..self.data.len().min(self.limit)];
        let num_items = shown.len();
        let max_tonnes = (shown.iter().map(|r| r.tonnes).fold(0.0, f64::max) * 1.1).max(1.0);

        let title_font = (config.style.title_font.family.as_str(), config.style.title_font.size);
        let label_font = (config.style.axis_font.family.as_str(), config.style.axis_font.size);

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font.into_font().color(&ink))
            .margin(config.style.margins.outer)
            .x_label_area_size(config.style.margins.x_label_area)
            .y_label_area_size(config.style.margins.y_label_area.max(130))
            .build_cartesian_2d(0.0..max_tonnes, -0.5..num_items as f64 - 0.5)?;

        let row_of = |i: usize| (num_items - 1 - i) as f64;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or("Tonnes"))
            .disable_y_mesh()
            .y_labels(num_items)
            .y_label_formatter(&|y| {
                let i = y.round();
                if (y - i).abs() < 1e-6 && i >= 0.0 && (i as usize) < num_items {
                    shown[num_items - 1 - i as usize].country.clone()
                } else {
                    String::new()
                }
            })
            .axis_style(ink)
            .label_style(label_font.into_font().color(&ink))
            .light_line_style(ink.mix(0.12))
            .draw()?;

        for (i, record) in shown.iter().enumerate() {
            let bar_color = colors[i % colors.len()];
            let y = row_of(i);

            chart.draw_series(std::iter::once(Rectangle::new(
                [(0.0, y - 0.35), (record.tonnes, y + 0.35)],
                bar_color.filled(),
            )))?;

            chart.draw_series(std::iter::once(Text::new(
                format!("{:.1} t", record.tonnes),
                (record.tonnes + max_tonnes * 0.01, y - 0.1),
                label_font.into_font().color(&ink),
            )))?;
        }

        root.present()?;
        info!(
            "rendered reserves ranking ({} of {} countries) to {}",
            num_items,
            self.data.len(),
            path.display()
        );
        Ok(())
    }
}
