use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::scheduling::use_cases::view_event::inbound::graphql::GqlEventSummary;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RecentEventsQuery;

#[Object]
impl RecentEventsQuery {
    async fn recent_events(
        &self,
        context: &Context<'_>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlEventSummary>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .list_recent_events
            .handle(limit.map(|l| l.max(0) as usize))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
