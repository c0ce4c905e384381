use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteEventMutation;

#[Object]
impl DeleteEventMutation {
    async fn delete_event(&self, context: &Context<'_>, event_id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_event
            .handle(&event_id.0)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
