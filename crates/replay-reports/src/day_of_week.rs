//! Day of week listening bar chart

use crate::chart::{ChartConfig, ChartRender};
use crate::trend::DayOfWeekPoint;
use chrono::Weekday;
use plotters::prelude::*;
use replay_common::{weekday_index, weekday_name, Result, WEEKDAY_ORDER};
use std::path::Path;

/// Vertical bar chart renderer for per-weekday listening minutes.
#[derive(Debug)]
pub struct WeekdayChart {
    /// One point per weekday, Monday through Sunday.
    pub points: Vec<DayOfWeekPoint>,
    /// Whether weekend bars use the secondary color.
    pub highlight_weekends: bool,
}

impl WeekdayChart {
    /// Create a new weekday chart with weekend highlighting.
    pub fn new(points: Vec<DayOfWeekPoint>) -> Self {
        Self {
            points,
            highlight_weekends: true,
        }
    }

    /// Create without weekend highlighting.
    pub fn without_weekend_highlighting(points: Vec<DayOfWeekPoint>) -> Self {
        Self {
            points,
            highlight_weekends: false,
        }
    }

    /// Check if weekday is weekend.
    fn is_weekend(weekday: Weekday) -> bool {
        matches!(weekday, Weekday::Sat | Weekday::Sun)
    }

    /// Max minutes for y-axis scaling.
    fn max_minutes(&self) -> f64 {
        let max = self
            .points
            .iter()
            .map(|point| point.minutes)
            .fold(0.0, f64::max);
        if max <= 0.0 {
            return 10.0; // Keeps the axis usable when every day is zero
        }
        max * 1.1 // Add 10% padding
    }
}

impl ChartRender for WeekdayChart {
    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let max_minutes = self.max_minutes();

        // The x axis always spans all seven weekdays even when some
        // bars are zero, so week shapes stay comparable across runs.
        let title_font = (config.font_family.as_str(), config.font_size);
        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font)
            .margin(15)
            .x_label_area_size(60)
            .y_label_area_size(70)
            .build_cartesian_2d((0..WEEKDAY_ORDER.len()).into_segmented(), 0.0..max_minutes)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_str())
            .y_desc(config.y_label.as_str())
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(index) => WEEKDAY_ORDER
                    .get(*index)
                    .map(|weekday| weekday_name(*weekday).to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .draw()?;

        let primary_color = self.accent_color(config);
        let weekend_color = self.parse_color(&config.secondary_color);

        for point in &self.points {
            let day_index = weekday_index(point.weekday);
            let bar_color = if self.highlight_weekends && Self::is_weekend(point.weekday) {
                weekend_color
            } else {
                primary_color
            };

            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(day_index), 0.0),
                    (SegmentValue::Exact(day_index + 1), point.minutes),
                ],
                bar_color.filled(),
            );
            bar.set_margin(0, 0, 2, 2);
            chart.draw_series(std::iter::once(bar))?;
        }

        root.present()?;
        tracing::debug!("Rendered day of week chart to {}", path.display());
        Ok(())
    }
}
