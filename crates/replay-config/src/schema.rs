//! Configuration schema definitions using serde.

use crate::validator::ConfigValidator;
use replay_common::Result;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the replay dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// History data source configuration.
    pub data: DataConfig,
    /// Report selection configuration.
    pub selection: SelectionConfig,
    /// Chart output configuration.
    pub charts: ChartsConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// History data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the listening history CSV export.
    pub source_path: String,
}

/// Report selection configuration.
///
/// A missing `media_type` means the first media type observed in the
/// history is used. A missing `year` means all years are included.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Media type to report on.
    pub media_type: Option<String>,
    /// Calendar year to restrict the report to.
    pub year: Option<i32>,
}

/// Chart output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Directory where chart PNGs are written.
    pub output_dir: String,
    /// Enabled charts configuration.
    pub enabled: EnabledChartsConfig,
    /// Styling configuration.
    pub styling: StylingConfig,
}

/// Enabled charts configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnabledChartsConfig {
    /// Top tracks chart.
    pub top_tracks: bool,
    /// Top artists chart.
    pub top_artists: bool,
    /// Most skipped artists chart.
    pub most_skipped_artists: bool,
    /// Monthly listening trend chart.
    pub monthly_trend: bool,
    /// Listening by day of week chart.
    pub day_of_week: bool,
    /// Listening by hour of day chart.
    pub hourly: bool,
}

/// Styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StylingConfig {
    /// Chart width in pixels.
    pub width: u32,
    /// Chart height in pixels.
    pub height: u32,
    /// Color configuration.
    pub colors: ColorsConfig,
    /// Chart text configuration.
    pub text: ChartTextConfig,
}

/// Color configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Top tracks bar color.
    pub tracks: String,
    /// Top artists bar color.
    pub artists: String,
    /// Most skipped artists bar color.
    pub skipped: String,
    /// Monthly trend line color.
    pub trend: String,
    /// Weekday bar color.
    pub weekday: String,
    /// Weekend bar color.
    pub weekend: String,
    /// Hourly bar color.
    pub hourly: String,
    /// Background color.
    pub background: String,
}

/// Chart text configuration, one entry per view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTextConfig {
    /// Top tracks chart text.
    pub top_tracks: ViewTextConfig,
    /// Top artists chart text.
    pub top_artists: ViewTextConfig,
    /// Most skipped artists chart text.
    pub most_skipped_artists: ViewTextConfig,
    /// Monthly listening trend chart text.
    pub monthly_trend: ViewTextConfig,
    /// Listening by day of week chart text.
    pub day_of_week: ViewTextConfig,
    /// Listening by hour of day chart text.
    pub hourly: ViewTextConfig,
}

/// Title and axis label overrides for one chart.
///
/// Unset fields fall back to the view's built-in text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewTextConfig {
    /// Chart title.
    pub title: Option<String>,
    /// X axis label.
    pub x_label: Option<String>,
    /// Y axis label.
    pub y_label: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error).
    pub level: String,
    /// Optional log file path.
    pub file: Option<String>,
}

impl ReplayConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}
