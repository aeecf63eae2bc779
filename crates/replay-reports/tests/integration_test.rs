//! Integration tests for replay-reports crate.
//!
//! These tests run the full pipeline from CSV fixture rows through view
//! computation to rendered chart files.

use replay_common::test_utils::{create_temp_dir, csv_fixtures, init_test_logging};
use replay_config::ChartsConfig;
use replay_history::{read_events, FilterSelection, History, YearFilter};
use replay_reports::{compute_dashboard, render_charts, ReportKind};

fn fixture_history() -> History {
    let events = read_events(csv_fixtures::sample_history_csv().as_bytes()).unwrap();
    History::from_events(events)
}

#[test]
fn test_dashboard_views_from_fixture_history() {
    init_test_logging();

    let history = fixture_history();
    let selection = FilterSelection::new("track", YearFilter::AllYears);

    let result = compute_dashboard(&history, &selection);

    assert_eq!(result.summary.event_count, 2);
    assert_eq!(result.summary.total_minutes, 3);

    assert_eq!(result.top_artists.len(), 1);
    assert_eq!(result.top_artists[0].name, "Artist A");
    assert!((result.top_artists[0].value - 3.0).abs() < 1e-9);

    assert_eq!(result.most_skipped_artists.len(), 1);
    assert!((result.most_skipped_artists[0].value - 1.0).abs() < 1e-9);

    assert_eq!(result.monthly_trend.len(), 1);
    assert_eq!(result.monthly_trend[0].month, "2024-01");
    assert_eq!(result.day_of_week.len(), 7);
}

#[test]
fn test_charts_render_end_to_end() {
    init_test_logging();

    let result = compute_dashboard(&fixture_history(), &FilterSelection::all_years("track"));

    let dir = create_temp_dir();
    let charts = ChartsConfig {
        output_dir: dir.path().join("charts").to_string_lossy().into_owned(),
        ..ChartsConfig::default()
    };

    let written = render_charts(&result, &charts).unwrap();
    assert_eq!(written.len(), ReportKind::ALL.len());

    for kind in ReportKind::ALL {
        let path = dir.path().join("charts").join(kind.file_name());
        assert!(path.exists(), "missing chart {}", path.display());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}

#[test]
fn test_views_without_data_still_render_files() {
    // The podcast slice has no skipped plays, so the skip ranking is
    // empty. Its chart should still be written as a titled blank.
    let result = compute_dashboard(&fixture_history(), &FilterSelection::all_years("podcast"));
    assert!(result.most_skipped_artists.is_empty());

    let dir = create_temp_dir();
    let charts = ChartsConfig {
        output_dir: dir.path().to_string_lossy().into_owned(),
        ..ChartsConfig::default()
    };

    render_charts(&result, &charts).unwrap();
    let path = dir.path().join("most_skipped_artists.png");
    assert!(path.exists());
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_disabled_views_are_not_rendered() {
    let result = compute_dashboard(&fixture_history(), &FilterSelection::all_years("track"));

    let dir = create_temp_dir();
    let mut charts = ChartsConfig {
        output_dir: dir.path().to_string_lossy().into_owned(),
        ..ChartsConfig::default()
    };
    charts.enabled.top_tracks = false;

    let written = render_charts(&result, &charts).unwrap();
    assert_eq!(written.len(), ReportKind::ALL.len() - 1);
    assert!(!dir.path().join("top_tracks.png").exists());
    assert!(dir.path().join("top_artists.png").exists());
}
