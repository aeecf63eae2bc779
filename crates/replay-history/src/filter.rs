//! Report selection and event filtering

use crate::event::ListeningEvent;
use crate::store::History;
use serde::Serialize;

/// Year restriction for a report selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum YearFilter {
    /// Include every year present in the history.
    #[default]
    AllYears,
    /// Restrict to a single calendar year.
    Year(i32),
}

impl YearFilter {
    /// Whether an event year passes this filter.
    pub fn matches(self, year: i32) -> bool {
        match self {
            Self::AllYears => true,
            Self::Year(selected) => selected == year,
        }
    }
}

/// The media type and year a report is computed for.
#[derive(Debug, Clone, Serialize)]
pub struct FilterSelection {
    /// Media type the report covers.
    pub media_type: String,
    /// Year restriction.
    pub year: YearFilter,
}

impl FilterSelection {
    /// Create a selection for one media type and year filter.
    pub fn new(media_type: impl Into<String>, year: YearFilter) -> Self {
        Self {
            media_type: media_type.into(),
            year,
        }
    }

    /// Selection covering every year of one media type.
    pub fn all_years(media_type: impl Into<String>) -> Self {
        Self::new(media_type, YearFilter::AllYears)
    }
}

/// Borrowed view of the events that pass a selection, in input order.
#[derive(Debug)]
pub struct FilteredView<'a> {
    events: Vec<&'a ListeningEvent>,
}

impl<'a> FilteredView<'a> {
    /// Matching events.
    pub fn events(&self) -> &[&'a ListeningEvent] {
        &self.events
    }

    /// Number of matching events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over matching events.
    pub fn iter(&self) -> impl Iterator<Item = &'a ListeningEvent> + '_ {
        self.events.iter().copied()
    }
}

impl History {
    /// Events matching the selection, preserving input order.
    pub fn filter(&self, selection: &FilterSelection) -> FilteredView<'_> {
        let events = self
            .events()
            .iter()
            .filter(|event| {
                event.media_type == selection.media_type && selection.year.matches(event.year)
            })
            .collect();
        FilteredView { events }
    }
}
