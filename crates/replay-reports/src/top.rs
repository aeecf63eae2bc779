//! Ranked top-N report views

use crate::group::Accumulator;
use replay_history::FilteredView;
use serde::Serialize;

/// Entry cap shared by every ranked view.
pub const TOP_LIMIT: usize = 10;

/// Name used when an event carries no track or artist metadata.
pub const UNKNOWN_LABEL: &str = "(unknown)";

/// One row of a ranked view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// Track or artist name.
    pub name: String,
    /// Aggregated metric value.
    pub value: f64,
}

/// Top tracks by minutes played, smallest of the kept entries first.
pub fn top_tracks(view: &FilteredView<'_>) -> Vec<RankedEntry> {
    let mut acc = Accumulator::new();
    for event in view.iter() {
        let name = event.track_name.as_deref().unwrap_or(UNKNOWN_LABEL);
        acc.add(name, event.minutes_played);
    }
    rank_top(acc.into_entries(), TOP_LIMIT)
}

/// Top artists by minutes played, smallest of the kept entries first.
pub fn top_artists(view: &FilteredView<'_>) -> Vec<RankedEntry> {
    let mut acc = Accumulator::new();
    for event in view.iter() {
        let name = event.artist_name.as_deref().unwrap_or(UNKNOWN_LABEL);
        acc.add(name, event.minutes_played);
    }
    rank_top(acc.into_entries(), TOP_LIMIT)
}

/// Artists ranked by how many of their plays were skipped.
pub fn most_skipped_artists(view: &FilteredView<'_>) -> Vec<RankedEntry> {
    let mut acc = Accumulator::new();
    for event in view.iter().filter(|event| event.skipped) {
        let name = event.artist_name.as_deref().unwrap_or(UNKNOWN_LABEL);
        acc.add(name, 1.0);
    }
    rank_top(acc.into_entries(), TOP_LIMIT)
}

/// Keep the `limit` largest totals, returned in ascending order so a
/// horizontal bar chart draws the winner at the top.
///
/// Both sorts are stable, so entries with equal totals stay in
/// first-seen order through the cut.
fn rank_top(mut entries: Vec<(&str, f64)>, limit: usize) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries.truncate(limit);
    entries.sort_by(|a, b| a.1.total_cmp(&b.1));

    entries
        .into_iter()
        .map(|(name, value)| RankedEntry {
            name: name.to_string(),
            value,
        })
        .collect()
}
