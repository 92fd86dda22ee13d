//! Chart types and styling structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five dashboard panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelKind {
    /// Yearly average gold price line chart
    PriceTrend,
    /// Sector usage bar chart
    SectorUsage,
    /// Region-by-year investment heatmap
    InvestmentHeatmap,
    /// Per-country headline word cloud
    HeadlineCloud,
    /// National reserves ranking
    Reserves,
}

impl PanelKind {
    /// All panels in their fixed dashboard order
    pub const ALL: [PanelKind; 5] = [
        PanelKind::SectorUsage,
        PanelKind::InvestmentHeatmap,
        PanelKind::HeadlineCloud,
        PanelKind::Reserves,
        PanelKind::PriceTrend,
    ];

    /// Stable kebab-case identifier, used for CLI selection and filenames
    pub fn slug(&self) -> &'static str {
        match self {
            PanelKind::PriceTrend => "price-trend",
            PanelKind::SectorUsage => "sector-usage",
            PanelKind::InvestmentHeatmap => "investment-heatmap",
            PanelKind::HeadlineCloud => "headline-cloud",
            PanelKind::Reserves => "reserves",
        }
    }

    /// Output filename for this panel
    pub fn filename(&self) -> String {
        format!("{}.png", self.slug().replace('-', "_"))
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PanelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price-trend" => Ok(PanelKind::PriceTrend),
            "sector-usage" => Ok(PanelKind::SectorUsage),
            "investment-heatmap" => Ok(PanelKind::InvestmentHeatmap),
            "headline-cloud" => Ok(PanelKind::HeadlineCloud),
            "reserves" => Ok(PanelKind::Reserves),
            other => Err(format!(
                "unknown panel '{}', expected one of: price-trend, sector-usage, \
                 investment-heatmap, headline-cloud, reserves",
                other
            )),
        }
    }
}

/// Per-panel chart configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Chart title
    pub title: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// X-axis description
    pub x_label: Option<String>,
    /// Y-axis description
    pub y_label: Option<String>,
    /// Styling
    pub style: StyleConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Chart".to_string(),
            width: 900,
            height: 600,
            x_label: None,
            y_label: None,
            style: StyleConfig::default(),
        }
    }
}

/// Color scheme for chart series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Standard categorical palette
    Default,
    /// Palette tuned for dark backgrounds
    Dark,
    /// Gold-tinted sequential palette
    Gold,
    /// Caller-supplied hex colors
    Custom(Vec<String>),
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font family name
    pub family: String,
    /// Point size
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 12,
        }
    }
}

/// Margin configuration (pixels)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Margins {
    /// Outer margin applied around the plot
    pub outer: u32,
    /// Space reserved for the x label area
    pub x_label_area: u32,
    /// Space reserved for the y label area
    pub y_label_area: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            outer: 20,
            x_label_area: 40,
            y_label_area: 60,
        }
    }
}

/// Comprehensive styling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Series color scheme
    pub color_scheme: ColorScheme,
    /// Background color (hex)
    pub background_color: String,
    /// Ink color for titles, labels and axes (hex)
    pub ink_color: String,
    /// Title font
    pub title_font: FontConfig,
    /// Axis/label font
    pub axis_font: FontConfig,
    /// Layout margins
    pub margins: Margins,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::light()
    }
}

impl StyleConfig {
    /// Light theme: white background, dark ink
    pub fn light() -> Self {
        Self {
            color_scheme: ColorScheme::Default,
            background_color: "#ffffff".to_string(),
            ink_color: "#202020".to_string(),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 22,
            },
            axis_font: FontConfig::default(),
            margins: Margins::default(),
        }
    }

    /// Dark theme: charcoal background, light ink
    pub fn dark() -> Self {
        Self {
            color_scheme: ColorScheme::Dark,
            background_color: "#1f1f24".to_string(),
            ink_color: "#e6e6e6".to_string(),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 22,
            },
            axis_font: FontConfig::default(),
            margins: Margins::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_kind_roundtrip() {
        for kind in PanelKind::ALL {
            assert_eq!(kind.slug().parse::<PanelKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_panel_name() {
        let err = "pie-chart".parse::<PanelKind>().unwrap_err();
        assert!(err.contains("unknown panel 'pie-chart'"));
    }

    #[test]
    fn test_filenames_are_snake_case() {
        assert_eq!(PanelKind::PriceTrend.filename(), "price_trend.png");
        assert_eq!(PanelKind::InvestmentHeatmap.filename(), "investment_heatmap.png");
    }
}
