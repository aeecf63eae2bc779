//! Test utilities and shared test helpers for the replay workspace.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// Test fixture for creating a mock timestamp.
pub fn mock_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Create a temporary file for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_file() -> tempfile::NamedTempFile {
    tempfile::NamedTempFile::new().expect("Failed to create temporary file")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// CSV fixtures in the listening history export layout.
pub mod csv_fixtures {
    /// Header row shared by all fixtures.
    pub const HEADER: &str =
        "ts,ms_played,media_type,master_metadata_track_name,master_metadata_album_artist_name,skipped";

    /// Render a single data row in header column order.
    pub fn row(
        ts: &str,
        ms_played: u64,
        media_type: &str,
        track: &str,
        artist: &str,
        skipped: &str,
    ) -> String {
        format!("{ts},{ms_played},{media_type},{track},{artist},{skipped}")
    }

    /// Small history covering two media types, one skip, and two months.
    pub fn sample_history_csv() -> String {
        let rows = [
            row(
                "2024-01-01T10:00:00Z",
                120_000,
                "track",
                "Song X",
                "Artist A",
                "false",
            ),
            row(
                "2024-01-15T10:00:00Z",
                60_000,
                "track",
                "Song X",
                "Artist A",
                "true",
            ),
            row(
                "2024-02-01T10:00:00Z",
                600_000,
                "podcast",
                "Episode Y",
                "Show B",
                "false",
            ),
        ];
        format!("{HEADER}\n{}\n", rows.join("\n"))
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for generating playback durations in milliseconds (up to ten hours).
    pub fn ms_played_strategy() -> impl Strategy<Value = u64> {
        0u64..=36_000_000u64
    }

    /// Strategy for generating media type labels.
    pub fn media_type_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("track".to_string()),
            Just("podcast".to_string()),
            Just("audiobook".to_string()),
        ]
    }

    /// Strategy for generating track or artist names.
    pub fn name_strategy() -> impl Strategy<Value = String> {
        r"[A-Za-z][A-Za-z0-9 ]{0,23}".prop_map(|s| s.trim_end().to_string())
    }

    /// Strategy for generating hours of the day.
    pub fn hour_strategy() -> impl Strategy<Value = u32> {
        0u32..24u32
    }
}
