//! Listening event records and their derived time attributes

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc, Weekday};
use replay_common::{month_label, parse_timestamp, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Milliseconds per minute, the unit conversion for playback durations.
const MS_PER_MINUTE: f64 = 60_000.0;

/// One CSV row exactly as exported, before derivation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Playback timestamp string.
    pub ts: String,
    /// Playback duration in milliseconds.
    pub ms_played: u64,
    /// Media type label (e.g. "track", "podcast").
    pub media_type: String,
    /// Track name, absent for some media types.
    #[serde(rename = "master_metadata_track_name")]
    pub track_name: Option<String>,
    /// Artist name, absent for some media types.
    #[serde(rename = "master_metadata_album_artist_name")]
    pub artist_name: Option<String>,
    /// Whether playback was skipped before completion.
    #[serde(deserialize_with = "deserialize_flexible_bool")]
    pub skipped: bool,
}

/// Accepts `true`/`false` in any case as well as `1`/`0`.
fn deserialize_flexible_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "unrecognized skipped flag: {other:?}"
        ))),
    }
}

/// A playback event with the derived attributes reports group by.
///
/// Derived fields are computed once at load time so report passes never
/// touch the calendar again.
#[derive(Debug, Clone, Serialize)]
pub struct ListeningEvent {
    /// Playback timestamp in UTC.
    pub timestamp: DateTime<Utc>,
    /// Media type label.
    pub media_type: String,
    /// Track name, if present in the export.
    pub track_name: Option<String>,
    /// Artist name, if present in the export.
    pub artist_name: Option<String>,
    /// Playback duration in milliseconds.
    pub ms_played: u64,
    /// Whether playback was skipped.
    pub skipped: bool,
    /// Playback duration in minutes.
    pub minutes_played: f64,
    /// Day of the week of the timestamp.
    pub day_of_week: Weekday,
    /// Hour of the day, 0 through 23.
    pub hour: u32,
    /// Calendar year.
    pub year: i32,
    /// Month label in `YYYY-MM` form.
    pub month: String,
}

impl ListeningEvent {
    /// Build an event from a raw record, deriving all time attributes.
    pub fn from_raw(raw: RawRecord) -> Result<Self> {
        let timestamp = parse_timestamp(&raw.ts)?;

        Ok(Self {
            timestamp,
            media_type: raw.media_type,
            track_name: raw.track_name,
            artist_name: raw.artist_name,
            ms_played: raw.ms_played,
            skipped: raw.skipped,
            minutes_played: raw.ms_played as f64 / MS_PER_MINUTE,
            day_of_week: timestamp.weekday(),
            hour: timestamp.hour(),
            year: timestamp.year(),
            month: month_label(&timestamp),
        })
    }

    /// Calendar date of the event in UTC.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}
