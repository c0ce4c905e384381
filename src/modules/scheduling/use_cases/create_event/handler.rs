use std::sync::Arc;

use crate::modules::scheduling::adapters::outbound::repositories::EventRepository;
use crate::modules::scheduling::core::event::Event;
use crate::modules::scheduling::use_cases::application_error::ApplicationError;
use crate::modules::scheduling::use_cases::create_event::command::CreateEvent;
use crate::modules::scheduling::use_cases::create_event::decide::decide_create;

pub struct CreateEventHandler<TEvents>
where
    TEvents: EventRepository + 'static,
{
    events: Arc<TEvents>,
}

impl<TEvents> CreateEventHandler<TEvents>
where
    TEvents: EventRepository + 'static,
{
    pub fn new(events: Arc<TEvents>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, command: CreateEvent) -> Result<Event, ApplicationError> {
        let event =
            decide_create(command).map_err(|reason| ApplicationError::Domain(reason.to_string()))?;
        self.events.create(event.clone()).await?;
        tracing::info!(
            event_id = %event.id,
            start_date = %event.start_date,
            end_date = %event.end_date,
            "event created"
        );
        Ok(event)
    }
}
