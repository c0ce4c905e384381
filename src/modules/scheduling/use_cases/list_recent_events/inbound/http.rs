use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListRecentEventsParams {
    pub limit: Option<usize>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListRecentEventsParams>,
) -> Response {
    match state.list_recent_events.handle(params.limit).await {
        Ok(events) => Json(events).into_response(),
        Err(e) => error_response(e),
    }
}
