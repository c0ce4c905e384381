use chrono::NaiveDate;

/// `date: None` clears the decision and reopens polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDecidedDate {
    pub event_id: String,
    pub date: Option<NaiveDate>,
}
