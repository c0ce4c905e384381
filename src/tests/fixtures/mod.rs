// Shared test fixtures, compiled only under cfg(test).

pub mod availability;
pub mod events;

use chrono::NaiveDate;

use crate::modules::scheduling::core::calendar_window::parse_date;

pub fn date(value: &str) -> NaiveDate {
    parse_date(value).unwrap()
}
