//! The fixed catalog of report views

use replay_config::EnabledChartsConfig;

/// Every report view the dashboard computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Top 10 tracks by minutes played.
    TopTracks,
    /// Top 10 artists by minutes played.
    TopArtists,
    /// Artists ranked by skipped play count.
    MostSkippedArtists,
    /// Minutes played per calendar month.
    MonthlyTrend,
    /// Minutes played per day of the week.
    DayOfWeek,
    /// Minutes played per hour of the day.
    Hourly,
}

/// How a report view is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Horizontal bars, one per ranked entry.
    HorizontalBar,
    /// Vertical bars over a fixed category axis.
    VerticalBar,
    /// A line over an ordered sequence of points.
    Line,
}

/// The quantity a report view aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Sum of minutes played.
    MinutesPlayed,
    /// Number of events.
    EventCount,
}

impl ReportKind {
    /// All report views, in rendering order.
    pub const ALL: [ReportKind; 6] = [
        ReportKind::TopTracks,
        ReportKind::TopArtists,
        ReportKind::MostSkippedArtists,
        ReportKind::MonthlyTrend,
        ReportKind::DayOfWeek,
        ReportKind::Hourly,
    ];

    /// Default chart title, used unless the configuration overrides it.
    pub fn title(self) -> &'static str {
        match self {
            Self::TopTracks => "Top 10 Songs",
            Self::TopArtists => "Top 10 Artists",
            Self::MostSkippedArtists => "Top 10 Most Skipped Artists",
            Self::MonthlyTrend => "Monthly Listening Time",
            Self::DayOfWeek => "Listening by Day of Week",
            Self::Hourly => "Listening by Hour of Day",
        }
    }

    /// File name of the rendered PNG.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::TopTracks => "top_tracks.png",
            Self::TopArtists => "top_artists.png",
            Self::MostSkippedArtists => "most_skipped_artists.png",
            Self::MonthlyTrend => "monthly_trend.png",
            Self::DayOfWeek => "day_of_week.png",
            Self::Hourly => "hourly.png",
        }
    }

    /// Default x axis description, used unless the configuration
    /// overrides it.
    pub fn x_label(self) -> &'static str {
        match self {
            Self::TopTracks | Self::TopArtists => "Minutes",
            Self::MostSkippedArtists => "Skips",
            Self::MonthlyTrend => "Month",
            Self::DayOfWeek => "Day of Week",
            Self::Hourly => "Hour of Day",
        }
    }

    /// Default y axis description, used unless the configuration
    /// overrides it.
    pub fn y_label(self) -> &'static str {
        match self {
            Self::TopTracks => "Track",
            Self::TopArtists | Self::MostSkippedArtists => "Artist",
            Self::MonthlyTrend | Self::DayOfWeek | Self::Hourly => "Minutes Played",
        }
    }

    /// Chart shape used for this view.
    pub fn chart_kind(self) -> ChartKind {
        match self {
            Self::TopTracks | Self::TopArtists | Self::MostSkippedArtists => {
                ChartKind::HorizontalBar
            }
            Self::MonthlyTrend => ChartKind::Line,
            Self::DayOfWeek | Self::Hourly => ChartKind::VerticalBar,
        }
    }

    /// Quantity this view aggregates.
    pub fn metric(self) -> MetricKind {
        match self {
            Self::MostSkippedArtists => MetricKind::EventCount,
            _ => MetricKind::MinutesPlayed,
        }
    }

    /// Entry cap for ranked views, `None` for trend views.
    pub fn top_n(self) -> Option<usize> {
        match self {
            Self::TopTracks | Self::TopArtists | Self::MostSkippedArtists => {
                Some(crate::top::TOP_LIMIT)
            }
            Self::MonthlyTrend | Self::DayOfWeek | Self::Hourly => None,
        }
    }

    /// Whether this view is switched on in the charts configuration.
    pub fn is_enabled(self, enabled: &EnabledChartsConfig) -> bool {
        match self {
            Self::TopTracks => enabled.top_tracks,
            Self::TopArtists => enabled.top_artists,
            Self::MostSkippedArtists => enabled.most_skipped_artists,
            Self::MonthlyTrend => enabled.monthly_trend,
            Self::DayOfWeek => enabled.day_of_week,
            Self::Hourly => enabled.hourly,
        }
    }
}
