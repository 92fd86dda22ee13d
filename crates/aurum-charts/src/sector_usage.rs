//! Sector usage horizontal bar chart

use crate::{ChartConfig, PanelRenderer};
use aurum_common::{DashboardError, Result, UsageRecord};
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Horizontal bar chart of gold usage per sector, largest at the top
#[derive(Debug)]
pub struct SectorUsagePanel {
    /// Records already sorted by amount descending
    pub data: Vec<UsageRecord>,
}

impl SectorUsagePanel {
    /// Create a panel over an ordered usage table
    pub fn new(data: Vec<UsageRecord>) -> Self {
        Self { data }
    }

    fn max_amount(&self) -> f64 {
        // Floor of 1.0 keeps the axis range non-degenerate for all-zero data
        (self.data.iter().map(|r| r.tonnes).fold(0.0, f64::max) * 1.1).max(1.0)
    }

    fn truncate_name(name: &str, max_length: usize) -> String {
        if name.chars().count() <= max_length {
            name.to_string()
        } else {
            let prefix: String = name.chars().take(max_length.saturating_sub(3)).collect();
            format!("{}...", prefix)
        }
    }
}

impl PanelRenderer for SectorUsagePanel {
    fn name(&self) -> &'static str {
        "sector-usage"
    }

    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(DashboardError::render("no usage data to render"));
        }

        let root =
            BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let ink = self.ink_color(config);
        let colors = self.get_colors(&config.style.color_scheme);
        let num_items = self.data.len();
        let max_amount = self.max_amount();

        let title_font = (config.style.title_font.family.as_str(), config.style.title_font.size);
        let label_font = (config.style.axis_font.family.as_str(), config.style.axis_font.size);

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font.into_font().color(&ink))
            .margin(config.style.margins.outer)
            .x_label_area_size(config.style.margins.x_label_area)
            // Extra room on the left for sector names
            .y_label_area_size(config.style.margins.y_label_area.max(120))
            .build_cartesian_2d(0.0..max_amount, -0.5..num_items as f64 - 0.5)?;

        // Rows are indexed top-down: bar 0 (the largest) sits at the top
        let row_of = |i: usize| (num_items - 1 - i) as f64;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or("Tonnes"))
            .disable_y_mesh()
            .y_labels(num_items)
            .y_label_formatter(&|y| {
                let i = y.round();
                if (y - i).abs() < 1e-6 && i >= 0.0 && (i as usize) < num_items {
                    let item = num_items - 1 - i as usize;
                    Self::truncate_name(&self.data[item].sector, 20)
                } else {
                    String::new()
                }
            })
            .axis_style(ink)
            .label_style(label_font.into_font().color(&ink))
            .light_line_style(ink.mix(0.12))
            .draw()?;

        for (i, record) in self.data.iter().enumerate() {
            let bar_color = colors[i % colors.len()];
            let y = row_of(i);

            chart.draw_series(std::iter::once(Rectangle::new(
                [(0.0, y - 0.35), (record.tonnes, y + 0.35)],
                bar_color.filled(),
            )))?;

            // Value label just past the bar end
            chart.draw_series(std::iter::once(Text::new(
                format!("{:.0}", record.tonnes),
                (record.tonnes + max_amount * 0.01, y - 0.1),
                label_font.into_font().color(&ink),
            )))?;
        }

        root.present()?;
        info!("rendered sector usage ({} sectors) to {}", num_items, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(sector: &str, tonnes: f64) -> UsageRecord {
        UsageRecord {
            sector: sector.to_string(),
            tonnes,
        }
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(SectorUsagePanel::truncate_name("Jewellery", 20), "Jewellery");
        assert_eq!(
            SectorUsagePanel::truncate_name("Exchange Traded Funds and Similar", 20),
            "Exchange Traded F..."
        );
    }

    #[test]
    fn test_empty_data_is_render_error() {
        let panel = SectorUsagePanel::new(Vec::new());
        let dir = tempfile::tempdir().unwrap();
        assert!(panel
            .render_to_file(&ChartConfig::default(), &dir.path().join("usage.png"))
            .is_err());
    }

    #[test]
    fn test_renders_png() {
        let panel = SectorUsagePanel::new(vec![
            usage("Jewellery", 2093.0),
            usage("Investment", 1107.5),
            usage("Central banks", 1037.4),
            usage("Technology", 330.2),
        ]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage.png");
        panel.render_to_file(&ChartConfig::default(), &path).unwrap();
        assert!(path.exists());
    }
}
