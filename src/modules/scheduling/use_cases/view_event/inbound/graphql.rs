use async_graphql::{Context, Enum, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::scheduling::core::event::EventSummary;
use crate::modules::scheduling::core::intensity::HeatTier;
use crate::modules::scheduling::core::top_dates::TopDateEntry;
use crate::modules::scheduling::use_cases::view_event::inbound::http::to_query;
use crate::modules::scheduling::use_cases::view_event::projection::{DayCell, EventView};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlHeatTier {
    None,
    Low,
    Partial,
    Solid,
    Peak,
}

impl From<HeatTier> for GqlHeatTier {
    fn from(tier: HeatTier) -> Self {
        match tier {
            HeatTier::None => Self::None,
            HeatTier::Low => Self::Low,
            HeatTier::Partial => Self::Partial,
            HeatTier::Solid => Self::Solid,
            HeatTier::Peak => Self::Peak,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlEventSummary {
    pub id: ID,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub decided_date: Option<String>,
    pub is_closed: bool,
}

impl From<EventSummary> for GqlEventSummary {
    fn from(v: EventSummary) -> Self {
        Self {
            id: ID(v.id),
            title: v.title,
            start_date: v.start_date.to_string(),
            end_date: v.end_date.to_string(),
            decided_date: v.decided_date.map(|d| d.to_string()),
            is_closed: v.is_closed,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlDayCell {
    pub date: String,
    pub in_month: bool,
    pub count: usize,
    pub names: Vec<String>,
    pub tier: GqlHeatTier,
    pub is_decided: bool,
}

impl From<DayCell> for GqlDayCell {
    fn from(v: DayCell) -> Self {
        Self {
            date: v.date.to_string(),
            in_month: v.in_month,
            count: v.count,
            names: v.names,
            tier: v.tier.into(),
            is_decided: v.is_decided,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlTopDate {
    pub date: String,
    pub count: usize,
}

impl From<TopDateEntry> for GqlTopDate {
    fn from(v: TopDateEntry) -> Self {
        Self {
            date: v.date.to_string(),
            count: v.count,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlEventView {
    pub event: GqlEventSummary,
    pub admin_mode: bool,
    pub month: String,
    pub prev_month: Option<String>,
    pub next_month: Option<String>,
    pub has_prev: bool,
    pub has_next: bool,
    pub days: Vec<GqlDayCell>,
    pub top_dates: Vec<GqlTopDate>,
    pub months_in_range: Vec<String>,
    pub polling_closed: bool,
    pub max_count: usize,
    pub response_count: usize,
}

impl From<EventView> for GqlEventView {
    fn from(v: EventView) -> Self {
        Self {
            event: v.event.into(),
            admin_mode: v.admin_mode,
            month: v.month.to_string(),
            prev_month: v.prev_month.map(|m| m.to_string()),
            next_month: v.next_month.map(|m| m.to_string()),
            has_prev: v.has_prev,
            has_next: v.has_next,
            days: v.days.into_iter().map(Into::into).collect(),
            top_dates: v.top_dates.into_iter().map(Into::into).collect(),
            months_in_range: v.months_in_range.iter().map(ToString::to_string).collect(),
            polling_closed: v.polling_closed,
            max_count: v.max_count,
            response_count: v.response_count,
        }
    }
}

#[derive(Default)]
pub struct EventQuery;

#[Object]
impl EventQuery {
    async fn event(
        &self,
        context: &Context<'_>,
        id: ID,
        month: Option<String>,
        fragment: Option<String>,
    ) -> GqlResult<GqlEventView> {
        let state = context.data_unchecked::<AppState>();
        let query = to_query(id.0, month.as_deref(), fragment)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let view = state
            .view_event
            .handle(query)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }
}
