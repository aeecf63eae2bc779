//! Hour of day listening bar chart

use crate::chart::{ChartConfig, ChartRender};
use crate::trend::HourlyPoint;
use plotters::prelude::*;
use replay_common::Result;
use std::path::Path;

/// Number of hour slots on the x axis.
const HOURS_PER_DAY: usize = 24;

/// Vertical bar chart renderer for per-hour listening minutes.
///
/// Points cover only hours that saw playback. The axis still spans the
/// full day, so missing hours show up as gaps.
#[derive(Debug)]
pub struct HourlyChart {
    /// Minutes per hour of day, present hours only.
    pub points: Vec<HourlyPoint>,
}

impl HourlyChart {
    /// Create a new hourly chart.
    pub fn new(points: Vec<HourlyPoint>) -> Self {
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
            return 10.0; // Keeps the axis usable with no data
        }
        max * 1.1 // Add 10% padding
    }
}

impl ChartRender for HourlyChart {
    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let max_minutes = self.max_minutes();

        let title_font = (config.font_family.as_str(), config.font_size);
        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font)
            .margin(15)
            .x_label_area_size(60)
            .y_label_area_size(70)
            .build_cartesian_2d((0..HOURS_PER_DAY).into_segmented(), 0.0..max_minutes)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_str())
            .y_desc(config.y_label.as_str())
            .x_labels(HOURS_PER_DAY + 1)
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(hour) if *hour < HOURS_PER_DAY => hour.to_string(),
                _ => String::new(),
            })
            .draw()?;

        let bar_color = self.accent_color(config);

        for point in &self.points {
            let hour = point.hour as usize;
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(hour), 0.0),
                    (SegmentValue::Exact(hour + 1), point.minutes),
                ],
                bar_color.filled(),
            );
            bar.set_margin(0, 0, 1, 1);
            chart.draw_series(std::iter::once(bar))?;
        }

        root.present()?;
        tracing::debug!("Rendered hourly chart to {}", path.display());
        Ok(())
    }
}
