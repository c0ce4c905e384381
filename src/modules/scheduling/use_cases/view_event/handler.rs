use std::sync::Arc;

use crate::modules::scheduling::adapters::outbound::repositories::{
    AvailabilityRepository, EventRepository,
};
use crate::modules::scheduling::core::calendar_window::YearMonth;
use crate::modules::scheduling::use_cases::application_error::ApplicationError;
use crate::modules::scheduling::use_cases::view_event::projection::{
    EventView, ViewOptions, project_event_view,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEventQuery {
    pub event_id: String,
    pub month: Option<YearMonth>,
    pub fragment: Option<String>,
}

pub struct ViewEventHandler<TEvents, TAvailability>
where
    TEvents: EventRepository + 'static,
    TAvailability: AvailabilityRepository + 'static,
{
    events: Arc<TEvents>,
    availability: Arc<TAvailability>,
    top_dates: usize,
}

impl<TEvents, TAvailability> ViewEventHandler<TEvents, TAvailability>
where
    TEvents: EventRepository + 'static,
    TAvailability: AvailabilityRepository + 'static,
{
    pub fn new(events: Arc<TEvents>, availability: Arc<TAvailability>, top_dates: usize) -> Self {
        Self {
            events,
            availability,
            top_dates,
        }
    }

    pub async fn handle(&self, query: ViewEventQuery) -> Result<EventView, ApplicationError> {
        let event = self
            .events
            .find_by_id(&query.event_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(query.event_id.clone()))?;
        let entries = self.availability.list_by_event(&event.id).await?;
        tracing::debug!(event_id = %event.id, entries = entries.len(), "rendering event view");

        let view = project_event_view(
            &event,
            &entries,
            ViewOptions {
                month: query.month,
                fragment: query.fragment.as_deref(),
                top_dates: self.top_dates,
            },
        )?;
        Ok(view)
    }
}
