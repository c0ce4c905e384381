use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::scheduling::use_cases::submit_availability::inbound::http::to_command;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlAvailabilityEntry {
    pub event_id: ID,
    pub name: String,
    pub dates: Vec<String>,
}

#[derive(Default)]
pub struct SubmitAvailabilityMutation;

#[Object]
impl SubmitAvailabilityMutation {
    async fn submit_availability(
        &self,
        context: &Context<'_>,
        event_id: ID,
        name: String,
        dates: Vec<String>,
    ) -> GqlResult<GqlAvailabilityEntry> {
        let state = context.data_unchecked::<AppState>();
        let command = to_command(event_id.0, name, &dates)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let entry = state
            .submit_availability
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(GqlAvailabilityEntry {
            event_id: ID(entry.event_id),
            name: entry.name,
            dates: entry.dates.iter().map(ToString::to_string).collect(),
        })
    }
}
