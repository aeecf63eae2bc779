//! CSV loading for listening history exports

use crate::event::{ListeningEvent, RawRecord};
use replay_common::{ReplayError, Result};
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

/// Columns every history export must carry.
const REQUIRED_COLUMNS: [&str; 6] = [
    "ts",
    "ms_played",
    "media_type",
    "master_metadata_track_name",
    "master_metadata_album_artist_name",
    "skipped",
];

/// Load listening events from a CSV file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_events<P: AsRef<Path>>(path: P) -> Result<Vec<ListeningEvent>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| {
        ReplayError::with_source(
            format!("failed to open history file {}", path.display()),
            e,
        )
    })?;
    read_events(file)
}

/// Read listening events from any CSV source.
///
/// The header row is checked for every required column before any row is
/// decoded. The first malformed row aborts the load with its 1-based row
/// number in the error.
pub fn read_events<R: Read>(reader: R) -> Result<Vec<ListeningEvent>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| ReplayError::data_with_source("failed to read CSV header", e))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|name| name == column) {
            return Err(ReplayError::data(format!(
                "missing required column {column:?}"
            )));
        }
    }

    let mut events = Vec::new();
    for (index, record) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let row = index + 1;
        let raw = record.map_err(|e| {
            ReplayError::data_with_source(format!("row {row}: malformed record"), e)
        })?;
        let event = ListeningEvent::from_raw(raw).map_err(|e| e.at_row(row))?;
        events.push(event);
    }

    debug!(events = events.len(), "loaded listening history");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use replay_common::test_utils::csv_fixtures;

    #[test]
    fn test_read_sample_history() {
        let events = read_events(csv_fixtures::sample_history_csv().as_bytes()).unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].media_type, "track");
        assert_eq!(events[0].artist_name.as_deref(), Some("Artist A"));
        assert!(!events[0].skipped);
        assert!(events[1].skipped);
        assert_eq!(events[2].media_type, "podcast");
        assert_eq!(events[2].month, "2024-02");
    }

    #[test]
    fn test_header_only_yields_no_events() {
        let csv = format!("{}\n", csv_fixtures::HEADER);
        let events = read_events(csv.as_bytes()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_missing_column_is_reported_by_name() {
        let csv = "ts,ms_played,media_type,master_metadata_track_name,skipped\n";
        let error = read_events(csv.as_bytes()).unwrap_err();
        assert!(error
            .to_string()
            .contains("missing required column \"master_metadata_album_artist_name\""));
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv = "\
skipped,ms_played,ts,media_type,master_metadata_album_artist_name,master_metadata_track_name
false,60000,2024-05-05T12:00:00Z,track,Artist A,Song X
";
        let events = read_events(csv.as_bytes()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].ms_played, 60_000);
        assert_eq!(events[0].track_name.as_deref(), Some("Song X"));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = "\
ts,platform,ms_played,media_type,master_metadata_track_name,master_metadata_album_artist_name,conn_country,skipped
2024-05-05T12:00:00Z,ios,60000,track,Song X,Artist A,DK,false
";
        let events = read_events(csv.as_bytes()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].artist_name.as_deref(), Some("Artist A"));
    }

    #[test]
    fn test_malformed_row_number_in_error() {
        let csv = format!(
            "{}\n{}\n{}\n",
            csv_fixtures::HEADER,
            csv_fixtures::row("2024-01-01T10:00:00Z", 1000, "track", "T", "A", "false"),
            csv_fixtures::row("2024-01-02T10:00:00Z", 1000, "track", "T", "A", "perhaps"),
        );
        let error = read_events(csv.as_bytes()).unwrap_err();
        assert!(error.to_string().contains("row 2"));
    }

    #[test]
    fn test_bad_timestamp_row_number_in_error() {
        let csv = format!(
            "{}\n{}\n",
            csv_fixtures::HEADER,
            csv_fixtures::row("001-13-45T99:00:00", 1000, "track", "T", "A", "false"),
        );
        let error = read_events(csv.as_bytes()).unwrap_err();
        assert!(error.to_string().contains("row 1"));
        assert!(error.to_string().contains("unrecognized timestamp format"));
    }

    #[test]
    fn test_non_numeric_duration_fails() {
        let csv = format!(
            "{}\n2024-01-01T10:00:00Z,lots,track,T,A,false\n",
            csv_fixtures::HEADER
        );
        let error = read_events(csv.as_bytes()).unwrap_err();
        assert!(error.to_string().contains("row 1"));
    }

    #[test]
    fn test_load_events_missing_file() {
        let error = load_events("/nonexistent/history.csv").unwrap_err();
        assert!(error.to_string().contains("failed to open history file"));
    }
}
