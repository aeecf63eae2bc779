//! Renders computed report views to chart files

use crate::chart::{ChartConfig, ChartRender};
use crate::dashboard::DashboardResult;
use crate::day_of_week::WeekdayChart;
use crate::hourly::HourlyChart;
use crate::monthly::MonthlyTrendChart;
use crate::top_items::TopItemsChart;
use crate::view::ReportKind;
use replay_common::{ReplayError, Result};
use replay_config::{ChartTextConfig, ChartsConfig, ColorsConfig, ViewTextConfig};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Series color configured for a view.
fn accent_for(kind: ReportKind, colors: &ColorsConfig) -> &str {
    match kind {
        ReportKind::TopTracks => &colors.tracks,
        ReportKind::TopArtists => &colors.artists,
        ReportKind::MostSkippedArtists => &colors.skipped,
        ReportKind::MonthlyTrend => &colors.trend,
        ReportKind::DayOfWeek => &colors.weekday,
        ReportKind::Hourly => &colors.hourly,
    }
}

/// Text overrides configured for a view.
fn text_for(kind: ReportKind, text: &ChartTextConfig) -> &ViewTextConfig {
    match kind {
        ReportKind::TopTracks => &text.top_tracks,
        ReportKind::TopArtists => &text.top_artists,
        ReportKind::MostSkippedArtists => &text.most_skipped_artists,
        ReportKind::MonthlyTrend => &text.monthly_trend,
        ReportKind::DayOfWeek => &text.day_of_week,
        ReportKind::Hourly => &text.hourly,
    }
}

/// Build the per-chart styling from the charts configuration.
///
/// Configured text wins over the view's built-in title and labels.
fn chart_config(kind: ReportKind, charts: &ChartsConfig) -> ChartConfig {
    let colors = &charts.styling.colors;
    let text = text_for(kind, &charts.styling.text);
    ChartConfig {
        title: text
            .title
            .clone()
            .unwrap_or_else(|| kind.title().to_string()),
        width: charts.styling.width,
        height: charts.styling.height,
        x_label: text
            .x_label
            .clone()
            .unwrap_or_else(|| kind.x_label().to_string()),
        y_label: text
            .y_label
            .clone()
            .unwrap_or_else(|| kind.y_label().to_string()),
        background_color: colors.background.clone(),
        accent_color: accent_for(kind, colors).to_string(),
        secondary_color: colors.weekend.clone(),
        ..ChartConfig::default()
    }
}

/// Render every enabled report view to a PNG under the configured
/// output directory.
///
/// Returns the paths written, in catalog order. Disabled views are
/// skipped without touching their files.
#[instrument(skip(result, charts))]
pub fn render_charts(result: &DashboardResult, charts: &ChartsConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&charts.output_dir).map_err(|e| {
        ReplayError::chart_with_source(
            format!("failed to create output directory {}", charts.output_dir),
            e,
        )
    })?;

    let mut written = Vec::new();
    for kind in ReportKind::ALL {
        if !kind.is_enabled(&charts.enabled) {
            debug!("Skipping disabled chart {:?}", kind);
            continue;
        }

        let config = chart_config(kind, charts);
        let path = PathBuf::from(&charts.output_dir).join(kind.file_name());
        match kind {
            ReportKind::TopTracks => {
                TopItemsChart::new(result.top_tracks.clone()).render_to_file(&config, &path)?;
            }
            ReportKind::TopArtists => {
                TopItemsChart::new(result.top_artists.clone()).render_to_file(&config, &path)?;
            }
            ReportKind::MostSkippedArtists => {
                TopItemsChart::new(result.most_skipped_artists.clone())
                    .render_to_file(&config, &path)?;
            }
            ReportKind::MonthlyTrend => {
                MonthlyTrendChart::new(result.monthly_trend.clone())
                    .render_to_file(&config, &path)?;
            }
            ReportKind::DayOfWeek => {
                WeekdayChart::new(result.day_of_week.clone()).render_to_file(&config, &path)?;
            }
            ReportKind::Hourly => {
                HourlyChart::new(result.hourly.clone()).render_to_file(&config, &path)?;
            }
        }

        info!("Rendered {} to {}", config.title, path.display());
        written.push(path);
    }

    Ok(written)
}
