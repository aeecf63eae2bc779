//! In-memory listening history store

use crate::event::ListeningEvent;
use crate::loader;
use replay_common::Result;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::Arc;

/// Immutable collection of listening events, cheap to clone and share.
#[derive(Debug, Clone)]
pub struct History {
    events: Arc<[ListeningEvent]>,
}

impl History {
    /// Load a history from a CSV file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_events(loader::load_events(path)?))
    }

    /// Build a history from already loaded events.
    pub fn from_events(events: Vec<ListeningEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }

    /// All events, in input order.
    pub fn events(&self) -> &[ListeningEvent] {
        &self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the history holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Distinct media types, in first-seen order.
    pub fn media_types(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for event in self.events.iter() {
            if seen.insert(event.media_type.as_str()) {
                result.push(event.media_type.clone());
            }
        }
        result
    }

    /// Distinct event years, most recent first.
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.events.iter().map(|event| event.year).collect();
        years.into_iter().rev().collect()
    }
}
