use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::scheduling::use_cases::decide_date::inbound::http::to_command;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DecideDateMutation;

#[Object]
impl DecideDateMutation {
    /// Omit `date` (or pass null) to clear the decision.
    async fn set_decided_date(
        &self,
        context: &Context<'_>,
        event_id: ID,
        date: Option<String>,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = to_command(event_id.0, date.as_deref())
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        state
            .decide_date
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
