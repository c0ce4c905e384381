// Pure decision for a participant's submission.
//
// Rules
// - Polling closes once the organizer has decided a date.
// - A name and at least one date are required.
// - Every date must fall inside the event window.
// - Dates are stored as submitted, repeats included.

use chrono::NaiveDate;

use crate::modules::scheduling::core::event::{AvailabilityEntry, Event};
use crate::modules::scheduling::use_cases::submit_availability::command::SubmitAvailability;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("polling is closed, a date has been decided")]
    PollingClosed,

    #[error("name must not be empty")]
    EmptyName,

    #[error("at least one date must be selected")]
    NoDates,

    #[error("date {0} is outside the event window")]
    OutsideWindow(NaiveDate),
}

pub fn decide_submit(
    event: &Event,
    command: SubmitAvailability,
) -> Result<AvailabilityEntry, DecideError> {
    if event.is_decided() {
        return Err(DecideError::PollingClosed);
    }
    let name = command.name.trim();
    if name.is_empty() {
        return Err(DecideError::EmptyName);
    }
    if command.dates.is_empty() {
        return Err(DecideError::NoDates);
    }
    if let Some(outside) = command.dates.iter().find(|d| !event.window_contains(**d)) {
        return Err(DecideError::OutsideWindow(*outside));
    }
    Ok(AvailabilityEntry {
        event_id: event.id.clone(),
        name: name.to_string(),
        dates: command.dates,
    })
}
