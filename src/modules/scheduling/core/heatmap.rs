use std::collections::HashMap;

use chrono::NaiveDate;

use crate::modules::scheduling::core::event::AvailabilityEntry;

/// Per-date tally of who is available.
///
/// Dates keep the order in which they were first seen; a date is only present
/// once at least one participant picked it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeatmapResult {
    dates: Vec<(NaiveDate, Vec<String>)>,
    index: HashMap<NaiveDate, usize>,
    max_count: usize,
}

impl HeatmapResult {
    pub fn names(&self, date: NaiveDate) -> &[String] {
        self.index
            .get(&date)
            .map(|&slot| self.dates[slot].1.as_slice())
            .unwrap_or_default()
    }

    pub fn count(&self, date: NaiveDate) -> usize {
        self.names(date).len()
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Dates in first-insertion order with their names.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[String])> {
        self.dates
            .iter()
            .map(|(date, names)| (*date, names.as_slice()))
    }

    fn push(&mut self, date: NaiveDate, name: &str) {
        let slot = *self.index.entry(date).or_insert_with(|| {
            self.dates.push((date, Vec::new()));
            self.dates.len() - 1
        });
        self.dates[slot].1.push(name.to_string());
    }
}

/// Fold submissions into a heatmap in one pass over every (entry, date) pair.
///
/// A date repeated inside one entry is counted once per occurrence.
pub fn aggregate(entries: &[AvailabilityEntry]) -> HeatmapResult {
    let mut heatmap = HeatmapResult::default();
    for entry in entries {
        for date in &entry.dates {
            heatmap.push(*date, &entry.name);
        }
    }
    heatmap.max_count = heatmap
        .dates
        .iter()
        .map(|(_, names)| names.len())
        .max()
        .unwrap_or(0);
    heatmap
}
