//! Dashboard application wiring.
//!
//! Loads the history file, applies the configured selection, computes
//! the report views, and writes charts plus a JSON report alongside.

use crate::error::AppResult;
use replay_common::format_date;
use replay_config::ReplayConfig;
use replay_history::{FilterSelection, History, YearFilter};
use replay_reports::{compute_dashboard, render_charts, DashboardResult};
use std::fs;
use std::path::Path;
use tracing::{info, instrument, warn};

/// File name of the JSON report written next to the charts.
pub const RESULT_FILE_NAME: &str = "dashboard.json";

/// Main application structure.
pub struct DashboardApp {
    config: ReplayConfig,
}

impl DashboardApp {
    /// Creates a new application instance.
    pub fn new(config: ReplayConfig) -> Self {
        Self { config }
    }

    /// Runs one full dashboard pass and returns the computed result.
    #[instrument(skip(self))]
    pub fn run(&self) -> AppResult<DashboardResult> {
        let history = History::load(&self.config.data.source_path)?;
        info!(
            "Loaded {} events from {}",
            history.len(),
            self.config.data.source_path
        );

        let selection = self.selection(&history);
        let result = compute_dashboard(&history, &selection);

        match (result.summary.first_event, result.summary.last_event) {
            (Some(first), Some(last)) => info!(
                "{} events, {} minutes played between {} and {}",
                result.summary.event_count,
                result.summary.total_minutes,
                format_date(first),
                format_date(last)
            ),
            _ => warn!(
                "No events matched media type {:?} with year filter {:?}",
                selection.media_type, selection.year
            ),
        }

        let written = render_charts(&result, &self.config.charts)?;
        info!(
            "Wrote {} chart files to {}",
            written.len(),
            self.config.charts.output_dir
        );

        let report_path = Path::new(&self.config.charts.output_dir).join(RESULT_FILE_NAME);
        fs::write(&report_path, serde_json::to_string_pretty(&result)?)?;
        info!("Wrote report data to {}", report_path.display());

        Ok(result)
    }

    /// Resolve the selection from configuration, falling back to the
    /// first media type seen in the history when none is configured.
    fn selection(&self, history: &History) -> FilterSelection {
        let media_type = match &self.config.selection.media_type {
            Some(media_type) => media_type.clone(),
            None => history.media_types().into_iter().next().unwrap_or_default(),
        };
        let year = match self.config.selection.year {
            Some(year) => YearFilter::Year(year),
            None => YearFilter::AllYears,
        };
        FilterSelection::new(media_type, year)
    }
}
