use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::scheduling::use_cases::create_event::inbound::http::to_command;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlCreatedEvent {
    pub id: ID,
    pub admin_token: String,
    pub share_path: String,
    pub admin_path: String,
}

#[derive(Default)]
pub struct CreateEventMutation;

#[Object]
impl CreateEventMutation {
    async fn create_event(
        &self,
        context: &Context<'_>,
        title: String,
        start_date: String,
        end_date: String,
    ) -> GqlResult<GqlCreatedEvent> {
        let state = context.data_unchecked::<AppState>();
        let command = to_command(title, &start_date, &end_date)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let event = state
            .create_event
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(GqlCreatedEvent {
            id: ID(event.id.clone()),
            admin_token: event.admin_token.clone(),
            share_path: event.share_path(),
            admin_path: event.admin_path(),
        })
    }
}
