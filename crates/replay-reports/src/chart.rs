//! Chart rendering trait and shared styling

use plotters::prelude::*;
use replay_common::Result;
use std::path::Path;

/// Styling and labeling for a single rendered chart.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Chart title drawn as the caption.
    pub title: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// Background color as `#RRGGBB`.
    pub background_color: String,
    /// Primary series color as `#RRGGBB`.
    pub accent_color: String,
    /// Second series color as `#RRGGBB` (weekend bars).
    pub secondary_color: String,
    /// Font family for captions and labels.
    pub font_family: String,
    /// Caption font size.
    pub font_size: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: 1200,
            height: 700,
            x_label: String::new(),
            y_label: String::new(),
            background_color: "#ffffff".to_string(),
            accent_color: "#1f77b4".to_string(),
            secondary_color: "#ff6b6b".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 24,
        }
    }
}

/// Trait for rendering report views to PNG files.
pub trait ChartRender {
    /// Render the chart to a file path.
    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()>;

    /// Parse a color string (hex format) to RGBColor.
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
        // Default to black if parsing fails
        RGBColor(0, 0, 0)
    }

    /// Background color from the chart configuration.
    fn background_color(&self, config: &ChartConfig) -> RGBColor {
        self.parse_color(&config.background_color)
    }

    /// Primary series color from the chart configuration.
    fn accent_color(&self, config: &ChartConfig) -> RGBColor {
        self.parse_color(&config.accent_color)
    }

    /// Render a chart with title and axes but no series.
    ///
    /// Used when a view has no data: the output still shows which report
    /// it is instead of failing or producing an empty file.
    fn render_blank(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let title_font = (config.font_family.as_str(), config.font_size);
        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font)
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..1.0, 0.0..1.0)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_str())
            .y_desc(config.y_label.as_str())
            .draw()?;

        root.present()?;
        Ok(())
    }
}

/// Truncate long names for axis labels.
pub(crate) fn truncate_name(name: &str, max_length: usize) -> String {
    if name.chars().count() <= max_length {
        name.to_string()
    } else {
        let kept: String = name.chars().take(max_length.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Format a metric value for a bar label, whole numbers without a
/// decimal point.
pub(crate) fn format_value(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
