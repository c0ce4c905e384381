use std::sync::Arc;

use crate::modules::scheduling::adapters::outbound::repositories::EventRepository;
use crate::modules::scheduling::use_cases::application_error::ApplicationError;
use crate::modules::scheduling::use_cases::decide_date::command::SetDecidedDate;
use crate::modules::scheduling::use_cases::decide_date::decide::decide_set_decided_date;

/// Sets or clears an event's decided date. Concurrent calls are
/// last-writer-wins at the store.
pub struct DecideDateHandler<TEvents>
where
    TEvents: EventRepository + 'static,
{
    events: Arc<TEvents>,
}

impl<TEvents> DecideDateHandler<TEvents>
where
    TEvents: EventRepository + 'static,
{
    pub fn new(events: Arc<TEvents>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, command: SetDecidedDate) -> Result<(), ApplicationError> {
        let event = self
            .events
            .find_by_id(&command.event_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(command.event_id.clone()))?;

        let date = decide_set_decided_date(&event, &command)
            .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;

        self.events.set_decided_date(&event.id, date).await?;
        match date {
            Some(date) => tracing::info!(event_id = %event.id, %date, "date decided"),
            None => tracing::info!(event_id = %event.id, "decided date cleared"),
        }
        Ok(())
    }
}
