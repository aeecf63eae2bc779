//! Trend report views over months, weekdays, and hours

use crate::group::Accumulator;
use chrono::Weekday;
use replay_common::{weekday_index, WEEKDAY_ORDER};
use replay_history::FilteredView;
use serde::Serialize;

/// Minutes played in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    /// Month label in `YYYY-MM` form.
    pub month: String,
    /// Minutes played in that month.
    pub minutes: f64,
}

/// Minutes played on one day of the week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOfWeekPoint {
    /// Day of the week.
    pub weekday: Weekday,
    /// Minutes played on that day across the whole selection.
    pub minutes: f64,
}

/// Minutes played in one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyPoint {
    /// Hour of the day, 0 through 23.
    pub hour: u32,
    /// Minutes played in that hour across the whole selection.
    pub minutes: f64,
}

/// Minutes played per month, sorted chronologically.
///
/// Only months with at least one event appear; `YYYY-MM` labels sort
/// the same way the underlying dates do.
pub fn monthly_trend(view: &FilteredView<'_>) -> Vec<MonthlyPoint> {
    let mut acc = Accumulator::new();
    for event in view.iter() {
        acc.add(event.month.as_str(), event.minutes_played);
    }

    let mut entries = acc.into_entries();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(month, minutes)| MonthlyPoint {
            month: month.to_string(),
            minutes,
        })
        .collect()
}

/// Minutes played per weekday, always all seven days Monday through
/// Sunday with zeros where nothing was played.
pub fn day_of_week(view: &FilteredView<'_>) -> Vec<DayOfWeekPoint> {
    let mut totals = [0.0f64; 7];
    for event in view.iter() {
        totals[weekday_index(event.day_of_week)] += event.minutes_played;
    }

    WEEKDAY_ORDER
        .iter()
        .zip(totals)
        .map(|(weekday, minutes)| DayOfWeekPoint {
            weekday: *weekday,
            minutes,
        })
        .collect()
}

/// Minutes played per hour of the day, ascending by hour.
///
/// Hours with no events are omitted rather than zero-filled.
pub fn hourly(view: &FilteredView<'_>) -> Vec<HourlyPoint> {
    let mut acc = Accumulator::new();
    for event in view.iter() {
        acc.add(event.hour, event.minutes_played);
    }

    let mut entries = acc.into_entries();
    entries.sort_by_key(|(hour, _)| *hour);
    entries
        .into_iter()
        .map(|(hour, minutes)| HourlyPoint { hour, minutes })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use replay_common::test_utils::{assert_approx_eq, csv_fixtures};
    use replay_history::{read_events, FilterSelection, History};

    fn track_row(ts: &str, ms: u64) -> String {
        csv_fixtures::row(ts, ms, "track", "T", "A", "false")
    }

    fn tracks_history(rows: &[String]) -> History {
        let csv = format!("{}\n{}\n", csv_fixtures::HEADER, rows.join("\n"));
        History::from_events(read_events(csv.as_bytes()).unwrap())
    }

    #[test]
    fn test_monthly_trend_sorted_by_label() {
        let history = tracks_history(&[
            track_row("2024-02-10T10:00:00Z", 60_000),
            track_row("2023-12-31T10:00:00Z", 120_000),
            track_row("2024-01-05T10:00:00Z", 60_000),
            track_row("2024-01-20T10:00:00Z", 60_000),
        ]);
        let view = history.filter(&FilterSelection::all_years("track"));
        let points = monthly_trend(&view);

        let months: Vec<_> = points.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-02"]);
        assert_approx_eq(points[1].minutes, 2.0, 1e-9);
    }

    #[test]
    fn test_monthly_trend_skips_empty_months() {
        let history = tracks_history(&[
            track_row("2024-01-10T10:00:00Z", 60_000),
            track_row("2024-04-10T10:00:00Z", 60_000),
        ]);
        let view = history.filter(&FilterSelection::all_years("track"));
        let months: Vec<_> = monthly_trend(&view)
            .into_iter()
            .map(|p| p.month)
            .collect();

        // February and March have no events and are not zero-filled
        assert_eq!(months, vec!["2024-01", "2024-04"]);
    }

    #[test]
    fn test_day_of_week_always_seven_days() {
        // 2024-01-01 is a Monday, 2024-01-06 a Saturday
        let history = tracks_history(&[
            track_row("2024-01-01T10:00:00Z", 120_000),
            track_row("2024-01-06T10:00:00Z", 60_000),
            track_row("2024-01-08T10:00:00Z", 60_000),
        ]);
        let view = history.filter(&FilterSelection::all_years("track"));
        let points = day_of_week(&view);

        assert_eq!(points.len(), 7);
        let weekdays: Vec<_> = points.iter().map(|p| p.weekday).collect();
        assert_eq!(weekdays, WEEKDAY_ORDER.to_vec());

        assert_approx_eq(points[0].minutes, 3.0, 1e-9); // both Mondays
        assert_approx_eq(points[5].minutes, 1.0, 1e-9); // Saturday
        assert_approx_eq(points[1].minutes, 0.0, 1e-9); // Tuesday zero-filled
        assert_approx_eq(points[6].minutes, 0.0, 1e-9); // Sunday zero-filled
    }

    #[test]
    fn test_day_of_week_on_empty_view() {
        let history = History::from_events(Vec::new());
        let view = history.filter(&FilterSelection::all_years("track"));
        let points = day_of_week(&view);

        assert_eq!(points.len(), 7);
        assert!(points.iter().all(|p| p.minutes == 0.0));
    }

    #[test]
    fn test_hourly_present_hours_only() {
        let history = tracks_history(&[
            track_row("2024-01-01T22:00:00Z", 60_000),
            track_row("2024-01-02T08:30:00Z", 120_000),
            track_row("2024-01-03T22:45:00Z", 60_000),
        ]);
        let view = history.filter(&FilterSelection::all_years("track"));
        let points = hourly(&view);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].hour, 8);
        assert_approx_eq(points[0].minutes, 2.0, 1e-9);
        assert_eq!(points[1].hour, 22);
        assert_approx_eq(points[1].minutes, 2.0, 1e-9);
    }

    #[test]
    fn test_hourly_empty_view() {
        let history = History::from_events(Vec::new());
        let view = history.filter(&FilterSelection::all_years("track"));
        assert!(hourly(&view).is_empty());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;
        use replay_common::test_utils::property_testing;

        fn event_rows() -> impl Strategy<Value = Vec<(u64, u32, u32, u32)>> {
            proptest::collection::vec(
                (
                    property_testing::ms_played_strategy(),
                    1u32..=12,
                    1u32..=28,
                    property_testing::hour_strategy(),
                ),
                0..40,
            )
        }

        proptest! {
            // Every event lands in exactly one bucket of each trend
            // view, so bucket sums must add back up to the total.
            #[test]
            fn test_property_buckets_partition_total_minutes(rows in event_rows()) {
                let lines: Vec<String> = rows
                    .iter()
                    .map(|&(ms, month, day, hour)| {
                        track_row(&format!("2024-{month:02}-{day:02}T{hour:02}:00:00Z"), ms)
                    })
                    .collect();
                let history = tracks_history(&lines);
                let view = history.filter(&FilterSelection::all_years("track"));
                let total: f64 = view.iter().map(|event| event.minutes_played).sum();

                let monthly_sum: f64 = monthly_trend(&view).iter().map(|p| p.minutes).sum();
                let weekday_sum: f64 = day_of_week(&view).iter().map(|p| p.minutes).sum();
                let hourly_sum: f64 = hourly(&view).iter().map(|p| p.minutes).sum();

                prop_assert!((monthly_sum - total).abs() < 1e-6);
                prop_assert!((weekday_sum - total).abs() < 1e-6);
                prop_assert!((hourly_sum - total).abs() < 1e-6);
            }
        }
    }
}
