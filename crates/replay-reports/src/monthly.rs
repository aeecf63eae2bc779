//! Monthly listening trend line chart

use crate::chart::{ChartConfig, ChartRender};
use crate::trend::MonthlyPoint;
use plotters::prelude::*;
use replay_common::Result;
use std::path::Path;

/// Line chart renderer for the per-month listening trend.
///
/// Points are expected in chronological order. [`crate::trend`] sorts
/// them by their `YYYY-MM` label before they reach the chart.
#[derive(Debug)]
pub struct MonthlyTrendChart {
    /// One point per month that saw playback, in chronological order.
    pub points: Vec<MonthlyPoint>,
}

impl MonthlyTrendChart {
    /// Create a new monthly trend chart.
    pub fn new(points: Vec<MonthlyPoint>) -> Self {
        Self { points }
    }

    /// Max minutes for y-axis scaling.
    fn max_minutes(&self) -> f64 {
        let max = self
            .points
            .iter()
            .map(|point| point.minutes)
            .fold(0.0, f64::max);
        if max <= 0.0 {
            return 10.0; // Keeps the axis usable when totals are zero
        }
        max * 1.1 // Add 10% padding
    }
}

impl ChartRender for MonthlyTrendChart {
    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        if self.points.is_empty() {
            return self.render_blank(config, path);
        }

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let max_minutes = self.max_minutes();
        let plot_data: Vec<(usize, f64)> = self
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| (index, point.minutes))
            .collect();

        let title_font = (config.font_family.as_str(), config.font_size);
        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font)
            .margin(15)
            .x_label_area_size(60)
            .y_label_area_size(70)
            .build_cartesian_2d(0..self.points.len(), 0.0..max_minutes)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_str())
            .y_desc(config.y_label.as_str())
            .x_label_formatter(&|index| {
                self.points
                    .get(*index)
                    .map(|point| point.month.clone())
                    .unwrap_or_default()
            })
            .draw()?;

        let line_color = self.accent_color(config);

        chart.draw_series(LineSeries::new(plot_data.clone(), &line_color))?;
        chart.draw_series(
            plot_data
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, line_color.filled())),
        )?;

        root.present()?;
        tracing::debug!("Rendered monthly trend chart to {}", path.display());
        Ok(())
    }
}
