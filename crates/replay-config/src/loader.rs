//! Configuration loading with environment variable overrides.

use crate::schema::ReplayConfig;
use replay_common::{ReplayError, Result};
use std::env;
use std::path::Path;
use tracing::debug;

/// Environment variable naming the configuration file to load.
pub const CONFIG_PATH_ENV: &str = "REPLAY_CONFIG";

/// Configuration file looked up in the working directory when
/// [`CONFIG_PATH_ENV`] is not set.
pub const DEFAULT_CONFIG_FILE: &str = "replay.toml";

/// Configuration loader for the application.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the environment and files.
    ///
    /// Resolution order: the file named by `REPLAY_CONFIG`, then
    /// `replay.toml` in the working directory, then built-in defaults.
    /// Environment variable overrides apply in every case.
    pub fn load() -> Result<ReplayConfig> {
        if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            debug!(path = %config_path, "loading configuration from {CONFIG_PATH_ENV}");
            return Self::load_from_path(&config_path);
        }

        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            debug!("loading configuration from ./{DEFAULT_CONFIG_FILE}");
            return Self::load_from_path(DEFAULT_CONFIG_FILE);
        }

        debug!("no configuration file found, using defaults");
        let mut config = ReplayConfig::default();
        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file with environment variable overrides.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<ReplayConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReplayError::config_with_source(
                format!("failed to read configuration file {}", path.display()),
                e,
            )
        })?;

        let mut config: ReplayConfig = toml::from_str(&content)?;
        Self::apply_env_overrides(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides to configuration.
    fn apply_env_overrides(config: &mut ReplayConfig) -> Result<()> {
        if let Ok(path) = env::var("REPLAY_HISTORY_PATH") {
            config.data.source_path = path;
        }

        if let Ok(dir) = env::var("REPLAY_OUTPUT_DIR") {
            config.charts.output_dir = dir;
        }

        if let Ok(media_type) = env::var("REPLAY_MEDIA_TYPE") {
            config.selection.media_type = Some(media_type);
        }

        if let Ok(year) = env::var("REPLAY_YEAR") {
            config.selection.year = Some(year.parse().map_err(|e| {
                ReplayError::config_with_source(
                    format!("failed to parse environment variable REPLAY_YEAR={year:?}"),
                    e,
                )
            })?);
        }

        if let Ok(level) = env::var("REPLAY_LOG") {
            config.logging.level = level;
        }

        Ok(())
    }
}
