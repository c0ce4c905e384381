use crate::modules::scheduling::core::event::AvailabilityEntry;
use crate::tests::fixtures::date;

const EVENT_ID: &str = "01890a5d-ac96-774b-bcce-b302099a8057";

pub fn entry(name: &str, dates: &[&str]) -> AvailabilityEntry {
    entry_for(EVENT_ID, name, dates)
}

pub fn entry_for(event_id: &str, name: &str, dates: &[&str]) -> AvailabilityEntry {
    AvailabilityEntry {
        event_id: event_id.to_string(),
        name: name.to_string(),
        dates: dates.iter().map(|value| date(value)).collect(),
    }
}
