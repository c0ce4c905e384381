use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::scheduling::core::calendar_window::parse_date;
use crate::modules::scheduling::core::errors::CoreError;
use crate::modules::scheduling::use_cases::decide_date::command::SetDecidedDate;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SetDecidedDateBody {
    #[serde(default)]
    pub date: Option<String>,
}

/// `null`, an empty string or `"clear"` all clear the decision.
pub fn to_command(event_id: String, date: Option<&str>) -> Result<SetDecidedDate, CoreError> {
    let date = match date {
        None | Some("") | Some("clear") => None,
        Some(value) => Some(parse_date(value)?),
    };
    Ok(SetDecidedDate { event_id, date })
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<SetDecidedDateBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = match to_command(event_id, body.date.as_deref()) {
        Ok(command) => command,
        Err(e) => return error_response(e.into()),
    };

    match state.decide_date.handle(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
