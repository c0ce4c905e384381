// Canonical event for tests, parsed from json/event.json and adjusted through
// the builder setters.

use chrono::NaiveDate;

use crate::modules::scheduling::core::event::Event;

const EVENT_JSON: &str = include_str!("json/event.json");

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(EVENT_JSON).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.inner.start_date = start;
        self.inner.end_date = end;
        self
    }

    pub fn decided_date(mut self, v: Option<NaiveDate>) -> Self {
        self.inner.decided_date = v;
        self
    }

    pub fn admin_token(mut self, v: impl Into<String>) -> Self {
        self.inner.admin_token = v.into();
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}

#[cfg(test)]
mod event_builder_tests {
    use super::*;
    use crate::tests::fixtures::date;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EventBuilder::default().build();
        assert_eq!(built.title, "Summer Barbecue");
        assert_eq!(built.start_date, date("2024-06-10"));
        assert_eq!(built.end_date, date("2024-07-05"));
        assert_eq!(built.decided_date, None);
        assert_eq!(built.admin_token, "K3X9QZ");
    }

    #[rstest]
    fn setters_override_fields() {
        let built = EventBuilder::new()
            .id("ev-1")
            .title("Retro")
            .window(date("2025-01-01"), date("2025-01-31"))
            .decided_date(Some(date("2025-01-15")))
            .admin_token("ABC123")
            .created_at(42)
            .build();
        assert_eq!(built.id, "ev-1");
        assert_eq!(built.title, "Retro");
        assert_eq!(built.start_date, date("2025-01-01"));
        assert_eq!(built.decided_date, Some(date("2025-01-15")));
        assert_eq!(built.admin_token, "ABC123");
        assert_eq!(built.created_at, 42);
    }
}
