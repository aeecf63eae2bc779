//! Ranked items horizontal bar chart

use crate::chart::{format_value, truncate_name, ChartConfig, ChartRender};
use crate::top::RankedEntry;
use plotters::prelude::*;
use replay_common::Result;
use std::path::Path;

/// Longest item name drawn on the axis before truncation.
const MAX_LABEL_LENGTH: usize = 24;

/// Horizontal bar chart renderer for ranked tracks and artists.
///
/// Entries are expected in ascending metric order so the largest bar
/// lands at the top of the chart. [`crate::top`] produces them that way.
#[derive(Debug)]
pub struct TopItemsChart {
    /// Ranked entries, ascending by value.
    pub entries: Vec<RankedEntry>,
}

impl TopItemsChart {
    /// Create a chart from ranked entries.
    pub fn new(entries: Vec<RankedEntry>) -> Self {
        Self { entries }
    }

    /// Max value for x-axis scaling.
    fn max_value(&self) -> f64 {
        if self.entries.is_empty() {
            return 10.0; // Default value for empty data
        }
        self.entries
            .iter()
            .map(|entry| entry.value)
            .fold(0.0, f64::max)
            * 1.1 // Add 10% padding
    }
}

impl ChartRender for TopItemsChart {
    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        if self.entries.is_empty() {
            return self.render_blank(config, path);
        }

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let max_value = self.max_value();
        let num_items = self.entries.len();

        let title_font = (config.font_family.as_str(), config.font_size);
        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font)
            .margin(15)
            .margin_right(60) // Space for value labels past the bar ends
            .x_label_area_size(50)
            .y_label_area_size(200)
            .build_cartesian_2d(0.0..max_value, (0..num_items).into_segmented())?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_str())
            .y_desc(config.y_label.as_str())
            .y_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(index) => self
                    .entries
                    .get(*index)
                    .map(|entry| truncate_name(&entry.name, MAX_LABEL_LENGTH))
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .draw()?;

        let bar_color = self.accent_color(config);

        for (i, entry) in self.entries.iter().enumerate() {
            let mut bar = Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(i)),
                    (entry.value, SegmentValue::Exact(i + 1)),
                ],
                bar_color.filled(),
            );
            bar.set_margin(4, 4, 0, 0);
            chart.draw_series(std::iter::once(bar))?;

            // Value label at the end of the bar
            chart.draw_series(std::iter::once(Text::new(
                format_value(entry.value),
                (entry.value + max_value * 0.01, SegmentValue::CenterOf(i)),
                ("sans-serif", 12).into_font().color(&BLACK),
            )))?;
        }

        root.present()?;
        tracing::debug!("Rendered ranked bar chart to {}", path.display());
        Ok(())
    }
}
