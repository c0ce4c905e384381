use std::sync::Arc;

use crate::modules::scheduling::adapters::outbound::repositories::{
    AvailabilityRepository, EventRepository,
};
use crate::modules::scheduling::core::event::AvailabilityEntry;
use crate::modules::scheduling::use_cases::application_error::ApplicationError;
use crate::modules::scheduling::use_cases::submit_availability::command::SubmitAvailability;
use crate::modules::scheduling::use_cases::submit_availability::decide::{
    DecideError, decide_submit,
};

pub struct SubmitAvailabilityHandler<TEvents, TAvailability>
where
    TEvents: EventRepository + 'static,
    TAvailability: AvailabilityRepository + 'static,
{
    events: Arc<TEvents>,
    availability: Arc<TAvailability>,
}

impl<TEvents, TAvailability> SubmitAvailabilityHandler<TEvents, TAvailability>
where
    TEvents: EventRepository + 'static,
    TAvailability: AvailabilityRepository + 'static,
{
    pub fn new(events: Arc<TEvents>, availability: Arc<TAvailability>) -> Self {
        Self {
            events,
            availability,
        }
    }

    pub async fn handle(
        &self,
        command: SubmitAvailability,
    ) -> Result<AvailabilityEntry, ApplicationError> {
        let event = self
            .events
            .find_by_id(&command.event_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(command.event_id.clone()))?;

        let entry = decide_submit(&event, command).map_err(|reason| match reason {
            DecideError::PollingClosed => ApplicationError::Conflict(reason.to_string()),
            _ => ApplicationError::Domain(reason.to_string()),
        })?;

        self.availability.add(entry.clone()).await?;
        tracing::info!(
            event_id = %entry.event_id,
            dates = entry.dates.len(),
            "availability submitted"
        );
        Ok(entry)
    }
}
