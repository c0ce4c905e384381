// Read model for the event page.
//
// Purpose
// - Combine an event and its availability entries into everything the page
//   shows: the month heatmap, top dates, month navigation and admin mode.
//
// Boundaries
// - Pure. Callers fetch the event and entries beforehand.

use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::scheduling::core::calendar_window::{
    YearMonth, enumerate_month_grid, enumerate_months_in_range,
};
use crate::modules::scheduling::core::errors::CoreError;
use crate::modules::scheduling::core::event::{
    AvailabilityEntry, Event, EventSummary, is_admin_hint_present,
};
use crate::modules::scheduling::core::heatmap::aggregate;
use crate::modules::scheduling::core::intensity::{HeatTier, classify};
use crate::modules::scheduling::core::top_dates::{TopDateEntry, top_n};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub count: usize,
    pub names: Vec<String>,
    /// `None` for days that belong to a neighbouring month.
    pub tier: HeatTier,
    pub is_decided: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventView {
    pub event: EventSummary,
    pub admin_mode: bool,
    pub month: YearMonth,
    pub prev_month: Option<YearMonth>,
    pub next_month: Option<YearMonth>,
    pub has_prev: bool,
    pub has_next: bool,
    pub days: Vec<DayCell>,
    pub top_dates: Vec<TopDateEntry>,
    pub months_in_range: Vec<YearMonth>,
    pub polling_closed: bool,
    pub max_count: usize,
    pub response_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ViewOptions<'a> {
    /// Month to display. Defaults to the month of the event's start date.
    pub month: Option<YearMonth>,
    /// URL fragment forwarded by the client, checked for the admin hint.
    pub fragment: Option<&'a str>,
    pub top_dates: usize,
}

pub fn project_event_view(
    event: &Event,
    entries: &[AvailabilityEntry],
    options: ViewOptions<'_>,
) -> Result<EventView, CoreError> {
    let heatmap = aggregate(entries);
    let months_in_range = enumerate_months_in_range(event.start_date, event.end_date)?;
    let first = YearMonth::of(event.start_date)?;
    let last = YearMonth::of(event.end_date)?;
    let month = options.month.unwrap_or(first);

    let days = enumerate_month_grid(month)
        .into_iter()
        .map(|date| {
            let in_month = month.contains(date);
            let names = heatmap.names(date).to_vec();
            let tier = if in_month {
                classify(names.len(), heatmap.max_count())
            } else {
                HeatTier::None
            };
            DayCell {
                date,
                in_month,
                count: names.len(),
                names,
                tier,
                is_decided: event.decided_date == Some(date),
            }
        })
        .collect();

    Ok(EventView {
        event: EventSummary::from(event),
        admin_mode: options
            .fragment
            .is_some_and(|fragment| is_admin_hint_present(fragment, &event.admin_token)),
        month,
        prev_month: month.pred(),
        next_month: month.succ(),
        has_prev: month > first,
        has_next: month < last,
        days,
        top_dates: top_n(&heatmap, options.top_dates),
        months_in_range,
        polling_closed: event.is_decided(),
        max_count: heatmap.max_count(),
        response_count: entries.len(),
    })
}
