use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatTier {
    None,
    Low,
    Partial,
    Solid,
    Peak,
}

/// Bucket `count / max_count` into quartile tiers, upper bounds inclusive.
///
/// Compared as integers (`4 * count` against multiples of `max_count`) so a
/// ratio of exactly 0.25 lands in `Low`. A zero `max_count` yields `None`.
pub fn classify(count: usize, max_count: usize) -> HeatTier {
    if count == 0 || max_count == 0 {
        return HeatTier::None;
    }
    let scaled = count.saturating_mul(4);
    if scaled <= max_count {
        HeatTier::Low
    } else if scaled <= max_count.saturating_mul(2) {
        HeatTier::Partial
    } else if scaled <= max_count.saturating_mul(3) {
        HeatTier::Solid
    } else {
        HeatTier::Peak
    }
}
