//! Default values for every configuration section.

use crate::schema::*;

/// Default history CSV path, matching the common export file name.
pub const DEFAULT_SOURCE_PATH: &str = "spotify_cleaned_data.csv";

/// Default directory for rendered chart PNGs.
pub const DEFAULT_OUTPUT_DIR: &str = "charts";

/// Default chart width in pixels.
pub const DEFAULT_CHART_WIDTH: u32 = 1200;

/// Default chart height in pixels.
pub const DEFAULT_CHART_HEIGHT: u32 = 700;

/// Default logging level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            selection: SelectionConfig::default(),
            charts: ChartsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source_path: DEFAULT_SOURCE_PATH.to_string(),
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            media_type: None,
            year: None,
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            enabled: EnabledChartsConfig::default(),
            styling: StylingConfig::default(),
        }
    }
}

impl Default for EnabledChartsConfig {
    fn default() -> Self {
        Self {
            top_tracks: true,
            top_artists: true,
            most_skipped_artists: true,
            monthly_trend: true,
            day_of_week: true,
            hourly: true,
        }
    }
}

impl Default for StylingConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            colors: ColorsConfig::default(),
            text: ChartTextConfig::default(),
        }
    }
}

impl Default for ChartTextConfig {
    fn default() -> Self {
        Self {
            top_tracks: ViewTextConfig::default(),
            top_artists: ViewTextConfig::default(),
            most_skipped_artists: ViewTextConfig::default(),
            monthly_trend: ViewTextConfig::default(),
            day_of_week: ViewTextConfig::default(),
            hourly: ViewTextConfig::default(),
        }
    }
}

impl Default for ViewTextConfig {
    fn default() -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
        }
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            tracks: "#1f77b4".to_string(),
            artists: "#ff7f0e".to_string(),
            skipped: "#d62728".to_string(),
            trend: "#1f77b4".to_string(),
            weekday: "#4a90e2".to_string(),
            weekend: "#ff6b6b".to_string(),
            hourly: "#2ca02c".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}
