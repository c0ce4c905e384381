use chrono::NaiveDate;

use crate::modules::scheduling::core::event::Event;
use crate::modules::scheduling::use_cases::decide_date::command::SetDecidedDate;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("decided date {0} is outside the event window")]
    OutsideWindow(NaiveDate),
}

pub fn decide_set_decided_date(
    event: &Event,
    command: &SetDecidedDate,
) -> Result<Option<NaiveDate>, DecideError> {
    match command.date {
        Some(date) if !event.window_contains(date) => Err(DecideError::OutsideWindow(date)),
        date => Ok(date),
    }
}
