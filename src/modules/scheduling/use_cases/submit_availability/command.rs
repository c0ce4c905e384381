use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAvailability {
    pub event_id: String,
    pub name: String,
    pub dates: Vec<NaiveDate>,
}
