use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::scheduling::core::calendar_window::parse_date;
use crate::modules::scheduling::core::errors::CoreError;
use crate::modules::scheduling::core::event::Event;
use crate::modules::scheduling::use_cases::create_event::command::CreateEvent;
use crate::shared::core::primitives::{new_admin_token, new_event_id, now_millis};
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateEventBody {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    pub id: String,
    pub admin_token: String,
    pub share_path: String,
    pub admin_path: String,
}

impl From<&Event> for CreateEventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            admin_token: event.admin_token.clone(),
            share_path: event.share_path(),
            admin_path: event.admin_path(),
        }
    }
}

pub fn to_command(
    title: String,
    start_date: &str,
    end_date: &str,
) -> Result<CreateEvent, CoreError> {
    Ok(CreateEvent {
        event_id: new_event_id(),
        title,
        start_date: parse_date(start_date)?,
        end_date: parse_date(end_date)?,
        admin_token: new_admin_token(),
        created_at: now_millis(),
    })
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = match to_command(body.title, &body.start_date, &body.end_date) {
        Ok(command) => command,
        Err(e) => return error_response(e.into()),
    };

    match state.create_event.handle(command).await {
        Ok(event) => (
            StatusCode::CREATED,
            Json(CreateEventResponse::from(&event)),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
