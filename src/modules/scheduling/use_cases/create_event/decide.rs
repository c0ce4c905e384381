use chrono::NaiveDate;

use crate::modules::scheduling::core::event::Event;
use crate::modules::scheduling::use_cases::create_event::command::CreateEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("start date {start} is after end date {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
}

pub fn decide_create(command: CreateEvent) -> Result<Event, DecideError> {
    let title = command.title.trim();
    if title.is_empty() {
        return Err(DecideError::EmptyTitle);
    }
    if command.start_date > command.end_date {
        return Err(DecideError::InvalidWindow {
            start: command.start_date,
            end: command.end_date,
        });
    }
    Ok(Event {
        id: command.event_id,
        title: title.to_string(),
        start_date: command.start_date,
        end_date: command.end_date,
        decided_date: None,
        admin_token: command.admin_token,
        created_at: command.created_at,
    })
}
