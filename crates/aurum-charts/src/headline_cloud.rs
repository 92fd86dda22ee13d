//! Headline word cloud

use crate::{ChartConfig, PanelRenderer};
use aurum_common::{DashboardError, Result};
use plotters::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Word cloud over per-country headline token frequencies
///
/// The aggregator reports the full frequency mapping; display-side
/// truncation and tie-breaking happen here: tokens are ranked by count
/// descending, ties alphabetically, and the top `limit` are drawn with
/// font sizes scaled between the observed extremes.
#[derive(Debug)]
pub struct HeadlineCloudPanel {
    /// Ranked (token, count) pairs, highest count first
    pub words: Vec<(String, u32)>,
    /// Maximum number of tokens to draw
    pub limit: usize,
}

impl HeadlineCloudPanel {
    /// Rank a frequency mapping into a displayable panel
    pub fn new(counts: HashMap<String, u32>) -> Self {
        let mut words: Vec<(String, u32)> = counts.into_iter().collect();
        // Deterministic display order: count descending, then alphabetical
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Self { words, limit: 50 }
    }

    /// Override the display limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Font size for a count, interpolated between the panel extremes
    fn font_size_for(&self, count: u32, min_count: u32, max_count: u32) -> u32 {
        const MIN_SIZE: u32 = 14;
        const MAX_SIZE: u32 = 52;
        if max_count == min_count {
            return (MIN_SIZE + MAX_SIZE) / 2;
        }
        let t = f64::from(count - min_count) / f64::from(max_count - min_count);
        MIN_SIZE + (t * f64::from(MAX_SIZE - MIN_SIZE)).round() as u32
    }
}

impl PanelRenderer for HeadlineCloudPanel {
    fn name(&self) -> &'static str {
        "headline-cloud"
    }

    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        if self.words.is_empty() {
            return Err(DashboardError::render("no headline tokens to render"));
        }

        let root =
            BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let ink = self.ink_color(config);
        let colors = self.get_colors(&config.style.color_scheme);
        let family = config.style.title_font.family.as_str();

        // Title along the top edge
        root.draw(&Text::new(
            config.title.clone(),
            (20, 16),
            (family, config.style.title_font.size).into_font().color(&ink),
        ))?;

        let shown = &self.words[..self.words.len().min(self.limit)];
        let min_count = shown.iter().map(|w| w.1).min().unwrap_or(1);
        let max_count = shown.iter().map(|w| w.1).max().unwrap_or(1);

        // Greedy row packing: left to right, wrap when the row is full
        let margin: i32 = 24;
        let mut x = margin;
        let mut y = margin + config.style.title_font.size as i32 + 20;
        let mut row_height: i32 = 0;

        for (i, (word, count)) in shown.iter().enumerate() {
            let size = self.font_size_for(*count, min_count, max_count);
            // Cheap width estimate; exact metrics are not worth a text-layout pass
            let est_width = (0.58 * f64::from(size) * word.chars().count() as f64) as i32 + 14;
            let est_height = size as i32 + 10;

            if x + est_width > config.width as i32 - margin && x > margin {
                x = margin;
                y += row_height;
                row_height = 0;
            }
            if y + est_height > config.height as i32 - margin {
                break;
            }

            let color = colors[i % colors.len()];
            root.draw(&Text::new(
                word.clone(),
                (x, y),
                (family, size).into_font().color(&color),
            ))?;

            x += est_width;
            row_height = row_height.max(est_height);
        }

        root.present()?;
        info!(
            "rendered headline cloud ({} of {} tokens) to {}",
            shown.len(),
            self.words.len(),
            path.display()
        );
        Ok(())
    }
}
