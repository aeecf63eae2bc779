//! One-call computation of every report view

use crate::summary::{summarize, SummaryMetrics};
use crate::top::{most_skipped_artists, top_artists, top_tracks, RankedEntry};
use crate::trend::{day_of_week, hourly, monthly_trend, DayOfWeekPoint, HourlyPoint, MonthlyPoint};
use replay_history::{FilterSelection, History};
use serde::Serialize;
use tracing::{debug, instrument};

/// Every report view for one selection, ready to render or serialize.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResult {
    /// The selection the views were computed for.
    pub selection: FilterSelection,
    /// Headline metrics.
    pub summary: SummaryMetrics,
    /// Top tracks by minutes played, ascending.
    pub top_tracks: Vec<RankedEntry>,
    /// Top artists by minutes played, ascending.
    pub top_artists: Vec<RankedEntry>,
    /// Artists by skipped play count, ascending.
    pub most_skipped_artists: Vec<RankedEntry>,
    /// Minutes per month, chronological.
    pub monthly_trend: Vec<MonthlyPoint>,
    /// Minutes per weekday, Monday through Sunday.
    pub day_of_week: Vec<DayOfWeekPoint>,
    /// Minutes per hour of day, present hours only.
    pub hourly: Vec<HourlyPoint>,
}

/// Compute every report view for a selection in one pass over the history.
///
/// The filter runs once; each view then works from the same borrowed
/// slice of matching events.
#[instrument(skip(history))]
pub fn compute_dashboard(history: &History, selection: &FilterSelection) -> DashboardResult {
    let view = history.filter(selection);
    debug!(
        matched = view.len(),
        total = history.len(),
        "filtered history for selection"
    );

    DashboardResult {
        selection: selection.clone(),
        summary: summarize(&view),
        top_tracks: top_tracks(&view),
        top_artists: top_artists(&view),
        most_skipped_artists: most_skipped_artists(&view),
        monthly_trend: monthly_trend(&view),
        day_of_week: day_of_week(&view),
        hourly: hourly(&view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replay_common::test_utils::{assert_approx_eq, csv_fixtures};
    use replay_history::{read_events, YearFilter};

    fn sample_history() -> History {
        History::from_events(
            read_events(csv_fixtures::sample_history_csv().as_bytes()).unwrap(),
        )
    }

    #[test]
    fn test_dashboard_over_sample_history() {
        let history = sample_history();
        let result = compute_dashboard(&history, &FilterSelection::all_years("track"));

        // Two track events: 2.0 minutes unskipped + 1.0 minute skipped
        assert_eq!(result.summary.event_count, 2);
        assert_eq!(result.summary.total_minutes, 3);

        assert_eq!(result.top_artists.len(), 1);
        assert_eq!(result.top_artists[0].name, "Artist A");
        assert_approx_eq(result.top_artists[0].value, 3.0, 1e-9);

        assert_eq!(result.most_skipped_artists.len(), 1);
        assert_eq!(result.most_skipped_artists[0].name, "Artist A");
        assert_approx_eq(result.most_skipped_artists[0].value, 1.0, 1e-9);

        assert_eq!(result.monthly_trend.len(), 1);
        assert_eq!(result.monthly_trend[0].month, "2024-01");
        assert_approx_eq(result.monthly_trend[0].minutes, 3.0, 1e-9);

        assert_eq!(result.day_of_week.len(), 7);
        assert_eq!(result.hourly.len(), 1);
        assert_eq!(result.hourly[0].hour, 10);
    }

    #[test]
    fn test_podcast_events_excluded_from_track_views() {
        let history = sample_history();
        let result = compute_dashboard(&history, &FilterSelection::all_years("track"));

        assert!(result
            .top_artists
            .iter()
            .all(|entry| entry.name != "Show B"));
    }

    #[test]
    fn test_year_filter_narrows_views() {
        let history = sample_history();
        let result = compute_dashboard(
            &history,
            &FilterSelection::new("track", YearFilter::Year(2023)),
        );

        assert_eq!(result.summary.event_count, 0);
        assert!(result.top_tracks.is_empty());
        assert!(result.monthly_trend.is_empty());
        assert_eq!(result.day_of_week.len(), 7);
        assert!(result.day_of_week.iter().all(|p| p.minutes == 0.0));
    }

    #[test]
    fn test_absent_media_type_yields_empty_views() {
        let history = sample_history();
        let result = compute_dashboard(&history, &FilterSelection::all_years("vinyl"));

        assert_eq!(result.summary.event_count, 0);
        assert_eq!(result.summary.total_minutes, 0);
        assert!(result.summary.first_event.is_none());
        assert!(result.summary.last_event.is_none());
        assert!(result.top_tracks.is_empty());
        assert!(result.top_artists.is_empty());
        assert!(result.most_skipped_artists.is_empty());
        assert!(result.monthly_trend.is_empty());
        assert!(result.hourly.is_empty());
        // The weekday view keeps its fixed seven slots even with no data
        assert_eq!(result.day_of_week.len(), 7);
    }

    #[test]
    fn test_result_serializes_to_json() {
        let history = sample_history();
        let result = compute_dashboard(&history, &FilterSelection::all_years("track"));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["selection"]["media_type"], "track");
        assert_eq!(json["summary"]["total_minutes"], 3);
        assert_eq!(json["summary"]["event_count"], 2);
        assert_eq!(json["summary"]["first_event"], "2024-01-01");
        assert_eq!(json["summary"]["last_event"], "2024-01-15");
        assert_eq!(json["top_tracks"][0]["name"], "Song X");
        assert_eq!(json["day_of_week"][0]["weekday"], "Mon");
        assert!(json["hourly"].as_array().unwrap().len() == 1);
    }
}
