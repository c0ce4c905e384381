use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub decided_date: Option<NaiveDate>,
    pub admin_token: String,
    pub created_at: i64,
}

impl Event {
    pub fn window_contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn is_decided(&self) -> bool {
        self.decided_date.is_some()
    }

    /// Link handed to participants.
    pub fn share_path(&self) -> String {
        format!("/events/{}", self.id)
    }

    /// Link kept by the organizer. The token rides in the fragment so it is
    /// not sent with page requests.
    pub fn admin_path(&self) -> String {
        format!("/events/{}#admin={}", self.id, self.admin_token)
    }
}

/// Public view of an event. Never carries the admin token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub decided_date: Option<NaiveDate>,
    pub is_closed: bool,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            start_date: event.start_date,
            end_date: event.end_date,
            decided_date: event.decided_date,
            is_closed: event.is_decided(),
        }
    }
}

/// One participant submission. Submitting twice yields two entries and both
/// are counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub event_id: String,
    pub name: String,
    pub dates: Vec<NaiveDate>,
}

/// Whether a URL fragment such as `#admin=K3X9QZ` carries the event's admin
/// token.
///
/// The token is readable by anyone holding the admin link, so this only
/// toggles organizer controls in the view. It is not an authorization check.
pub fn is_admin_hint_present(fragment: &str, admin_token: &str) -> bool {
    if admin_token.is_empty() {
        return false;
    }
    fragment
        .trim_start_matches('#')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| key == "admin" && value == admin_token)
}
