//! Integration tests for replay-dashboard crate.
//!
//! These tests run the whole application against a temporary history
//! file and check the files it leaves behind.

use replay_common::test_utils::{create_temp_dir, csv_fixtures, init_test_logging};
use replay_config::{ChartsConfig, DataConfig, ReplayConfig, SelectionConfig};
use replay_dashboard::{DashboardApp, RESULT_FILE_NAME};
use replay_reports::ReportKind;
use std::fs;
use std::path::Path;

fn write_sample_history(dir: &Path) -> String {
    let csv_path = dir.join("history.csv");
    fs::write(&csv_path, csv_fixtures::sample_history_csv()).unwrap();
    csv_path.to_string_lossy().into_owned()
}

#[test]
fn test_full_run_writes_charts_and_report_data() {
    init_test_logging();

    let dir = create_temp_dir();
    let output_dir = dir.path().join("out");
    let config = ReplayConfig {
        data: DataConfig {
            source_path: write_sample_history(dir.path()),
        },
        selection: SelectionConfig {
            media_type: Some("track".to_string()),
            year: None,
        },
        charts: ChartsConfig {
            output_dir: output_dir.to_string_lossy().into_owned(),
            ..ChartsConfig::default()
        },
        ..ReplayConfig::default()
    };

    let result = DashboardApp::new(config).run().unwrap();

    assert_eq!(result.summary.event_count, 2);
    assert_eq!(result.summary.total_minutes, 3);

    for kind in ReportKind::ALL {
        assert!(
            output_dir.join(kind.file_name()).exists(),
            "missing chart {}",
            kind.file_name()
        );
    }

    let report = fs::read_to_string(output_dir.join(RESULT_FILE_NAME)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(json["selection"]["media_type"], "track");
    assert_eq!(json["summary"]["event_count"], 2);
    assert_eq!(json["summary"]["total_minutes"], 3);
    assert_eq!(json["top_tracks"][0]["name"], "Song X");
}

#[test]
fn test_run_without_configured_media_type_uses_first_seen() {
    init_test_logging();

    let dir = create_temp_dir();
    let csv_path = dir.path().join("podcast_first.csv");
    let rows = [
        csv_fixtures::row(
            "2024-03-01T08:00:00Z",
            300_000,
            "podcast",
            "Episode",
            "Show",
            "false",
        ),
        csv_fixtures::row(
            "2024-03-02T09:00:00Z",
            120_000,
            "track",
            "Song",
            "Artist",
            "false",
        ),
    ];
    fs::write(
        &csv_path,
        format!("{}\n{}\n", csv_fixtures::HEADER, rows.join("\n")),
    )
    .unwrap();

    let output_dir = dir.path().join("out");
    let config = ReplayConfig {
        data: DataConfig {
            source_path: csv_path.to_string_lossy().into_owned(),
        },
        charts: ChartsConfig {
            output_dir: output_dir.to_string_lossy().into_owned(),
            ..ChartsConfig::default()
        },
        ..ReplayConfig::default()
    };

    let result = DashboardApp::new(config).run().unwrap();

    assert_eq!(result.selection.media_type, "podcast");
    assert_eq!(result.summary.event_count, 1);
    assert_eq!(result.summary.total_minutes, 5);
}

#[test]
fn test_run_reports_malformed_history_row() {
    let dir = create_temp_dir();
    let csv_path = dir.path().join("broken.csv");
    let csv = format!(
        "{}\n{}\nnot a timestamp,abc,track,T,A,false\n",
        csv_fixtures::HEADER,
        csv_fixtures::row("2024-01-01T10:00:00Z", 1000, "track", "T", "A", "false"),
    );
    fs::write(&csv_path, csv).unwrap();

    let config = ReplayConfig {
        data: DataConfig {
            source_path: csv_path.to_string_lossy().into_owned(),
        },
        charts: ChartsConfig {
            output_dir: dir.path().join("out").to_string_lossy().into_owned(),
            ..ChartsConfig::default()
        },
        ..ReplayConfig::default()
    };

    let error = DashboardApp::new(config).run().unwrap_err();
    assert!(error.to_string().contains("row 2"));
}
