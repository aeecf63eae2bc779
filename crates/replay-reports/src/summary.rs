//! Headline metrics for a filtered selection

use chrono::NaiveDate;
use replay_history::FilteredView;
use serde::Serialize;

/// The three headline numbers shown above the report views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryMetrics {
    /// Total minutes played, truncated to a whole number.
    pub total_minutes: i64,
    /// Number of matching events.
    pub event_count: usize,
    /// Date of the earliest matching event.
    pub first_event: Option<NaiveDate>,
    /// Date of the latest matching event.
    pub last_event: Option<NaiveDate>,
}

/// Compute summary metrics over a filtered view.
///
/// Fractional minutes are truncated, not rounded, so the total matches
/// what a whole-minute readout of the same data would show.
pub fn summarize(view: &FilteredView<'_>) -> SummaryMetrics {
    let total: f64 = view.iter().map(|event| event.minutes_played).sum();
    let first = view.iter().map(|event| event.timestamp).min();
    let last = view.iter().map(|event| event.timestamp).max();

    SummaryMetrics {
        total_minutes: total as i64,
        event_count: view.len(),
        first_event: first.map(|t| t.date_naive()),
        last_event: last.map(|t| t.date_naive()),
    }
}
