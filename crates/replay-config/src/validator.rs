//! Runtime validation for loaded configuration values.

use crate::schema::{ColorsConfig, ReplayConfig};
use replay_common::{ReplayError, Result};

const MIN_CHART_DIMENSION: u32 = 100;
const MAX_CHART_DIMENSION: u32 = 4000;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &ReplayConfig) -> Result<()> {
        if config.data.source_path.trim().is_empty() {
            return Err(ReplayError::validation_field(
                "history source path cannot be empty",
                "data.source_path",
            ));
        }

        if config.charts.output_dir.trim().is_empty() {
            return Err(ReplayError::validation_field(
                "chart output directory cannot be empty",
                "charts.output_dir",
            ));
        }

        if let Some(media_type) = &config.selection.media_type {
            if media_type.trim().is_empty() {
                return Err(ReplayError::validation_field(
                    "media type cannot be blank when set",
                    "selection.media_type",
                ));
            }
        }

        if let Some(year) = config.selection.year {
            if !(1900..=2100).contains(&year) {
                return Err(ReplayError::validation_field(
                    format!("year {year} is outside the supported range 1900..=2100"),
                    "selection.year",
                ));
            }
        }

        Self::validate_dimension(config.charts.styling.width, "charts.styling.width")?;
        Self::validate_dimension(config.charts.styling.height, "charts.styling.height")?;
        Self::validate_colors(&config.charts.styling.colors)?;

        if !LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ReplayError::validation_field(
                format!(
                    "unknown log level {:?}, expected one of {}",
                    config.logging.level,
                    LOG_LEVELS.join(", ")
                ),
                "logging.level",
            ));
        }

        Ok(())
    }

    fn validate_dimension(value: u32, field: &str) -> Result<()> {
        if !(MIN_CHART_DIMENSION..=MAX_CHART_DIMENSION).contains(&value) {
            return Err(ReplayError::validation_field(
                format!(
                    "{value} is outside the supported range \
                     {MIN_CHART_DIMENSION}..={MAX_CHART_DIMENSION}"
                ),
                field,
            ));
        }
        Ok(())
    }

    fn validate_colors(colors: &ColorsConfig) -> Result<()> {
        let fields = [
            (&colors.tracks, "charts.styling.colors.tracks"),
            (&colors.artists, "charts.styling.colors.artists"),
            (&colors.skipped, "charts.styling.colors.skipped"),
            (&colors.trend, "charts.styling.colors.trend"),
            (&colors.weekday, "charts.styling.colors.weekday"),
            (&colors.weekend, "charts.styling.colors.weekend"),
            (&colors.hourly, "charts.styling.colors.hourly"),
            (&colors.background, "charts.styling.colors.background"),
        ];

        for (value, field) in fields {
            Self::validate_hex_color(value, field)?;
        }

        Ok(())
    }

    fn validate_hex_color(value: &str, field: &str) -> Result<()> {
        let digits = value.strip_prefix('#').unwrap_or("");
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ReplayError::validation_field(
                format!("{value:?} is not a #RRGGBB color"),
                field,
            ));
        }
        Ok(())
    }
}
