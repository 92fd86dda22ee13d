//! Panel rendering trait and shared styling helpers

use crate::{ChartConfig, ColorScheme};
use aurum_common::Result;
use plotters::prelude::*;
use std::path::Path;

/// Trait for panels that render themselves to an image file
pub trait PanelRenderer {
    /// Short identifier of this panel type
    fn name(&self) -> &'static str;

    /// Render the panel to `path` with the given configuration
    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()>;

    /// Resolve a color scheme to concrete series colors
    fn get_colors(&self, scheme: &ColorScheme) -> Vec<RGBColor> {
        match scheme {
            ColorScheme::Default => vec![
                RGBColor(31, 119, 180),  // Blue
                RGBColor(255, 127, 14),  // Orange
                RGBColor(44, 160, 44),   // Green
                RGBColor(214, 39, 40),   // Red
                RGBColor(148, 103, 189), // Purple
                RGBColor(140, 86, 75),   // Brown
                RGBColor(227, 119, 194), // Pink
                RGBColor(127, 127, 127), // Gray
            ],
            ColorScheme::Dark => vec![
                RGBColor(255, 202, 87),  // Amber
                RGBColor(84, 160, 255),  // Light blue
                RGBColor(76, 209, 160),  // Mint
                RGBColor(255, 128, 128), // Salmon
                RGBColor(178, 144, 255), // Lavender
                RGBColor(255, 159, 67),  // Orange
            ],
            ColorScheme::Gold => vec![
                RGBColor(212, 160, 23),  // Old gold
                RGBColor(230, 190, 80),  // Pale gold
                RGBColor(184, 134, 11),  // Dark goldenrod
                RGBColor(244, 214, 130), // Straw
                RGBColor(153, 101, 21),  // Bronze
            ],
            ColorScheme::Custom(colors) => colors
                .iter()
                .map(|color_str| self.parse_color(color_str))
                .collect(),
        }
    }

    /// Parse a `#rrggbb` color string; black on failure
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        RGBColor(0, 0, 0)
    }

    /// Background color from the style config
    fn background_color(&self, config: &ChartConfig) -> RGBColor {
        self.parse_color(&config.style.background_color)
    }

    /// Ink color (titles, labels, axes) from the style config
    fn ink_color(&self, config: &ChartConfig) -> RGBColor {
        self.parse_color(&config.style.ink_color)
    }
}

/// Linear interpolation between two colors, `t` clamped to 0..=1
pub fn lerp_color(from: RGBColor, to: RGBColor, t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| -> u8 {
        (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
    };
    RGBColor(
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}
