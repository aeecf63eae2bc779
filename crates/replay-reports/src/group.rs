//! Order-preserving accumulation shared by the ranked and trend reports

use std::collections::HashMap;
use std::hash::Hash;

/// Sums values per key while remembering the order keys first appeared.
///
/// Ranked reports rely on this: when two entries tie, the one whose key
/// was seen earlier in the history stays ahead.
#[derive(Debug)]
pub(crate) struct Accumulator<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, f64)>,
}

impl<K: Eq + Hash + Clone> Accumulator<K> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Add `value` to the running total for `key`.
    pub fn add(&mut self, key: K, value: f64) {
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 += value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Totals in first-seen key order.
    pub fn into_entries(self) -> Vec<(K, f64)> {
        self.entries
    }
}
