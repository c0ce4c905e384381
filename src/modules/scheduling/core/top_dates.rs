use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::scheduling::core::heatmap::HeatmapResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopDateEntry {
    pub date: NaiveDate,
    pub count: usize,
}

/// The `n` best-attended dates, highest count first. Equal counts keep the
/// heatmap's first-insertion order (`sort_by` is stable).
pub fn top_n(heatmap: &HeatmapResult, n: usize) -> Vec<TopDateEntry> {
    let mut ranked: Vec<TopDateEntry> = heatmap
        .iter()
        .map(|(date, names)| TopDateEntry {
            date,
            count: names.len(),
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}
