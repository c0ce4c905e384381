use std::sync::Arc;

use crate::modules::scheduling::adapters::outbound::repositories::EventRepository;
use crate::modules::scheduling::core::event::EventSummary;
use crate::modules::scheduling::use_cases::application_error::ApplicationError;

pub struct ListRecentEventsHandler<TEvents>
where
    TEvents: EventRepository + 'static,
{
    events: Arc<TEvents>,
    default_limit: usize,
}

impl<TEvents> ListRecentEventsHandler<TEvents>
where
    TEvents: EventRepository + 'static,
{
    pub fn new(events: Arc<TEvents>, default_limit: usize) -> Self {
        Self {
            events,
            default_limit,
        }
    }

    pub async fn handle(&self, limit: Option<usize>) -> Result<Vec<EventSummary>, ApplicationError> {
        let events = self
            .events
            .list_recent(limit.unwrap_or(self.default_limit))
            .await?;
        Ok(events.iter().map(EventSummary::from).collect())
    }
}
