use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::scheduling::core::calendar_window::parse_date;
use crate::modules::scheduling::core::errors::CoreError;
use crate::modules::scheduling::core::event::AvailabilityEntry;
use crate::modules::scheduling::use_cases::submit_availability::command::SubmitAvailability;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitAvailabilityBody {
    pub name: String,
    pub dates: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitAvailabilityResponse {
    pub event_id: String,
    pub name: String,
    pub dates: Vec<chrono::NaiveDate>,
}

impl From<AvailabilityEntry> for SubmitAvailabilityResponse {
    fn from(entry: AvailabilityEntry) -> Self {
        Self {
            event_id: entry.event_id,
            name: entry.name,
            dates: entry.dates,
        }
    }
}

pub fn to_command(
    event_id: String,
    name: String,
    dates: &[String],
) -> Result<SubmitAvailability, CoreError> {
    Ok(SubmitAvailability {
        event_id,
        name,
        dates: dates
            .iter()
            .map(|value| parse_date(value))
            .collect::<Result<_, _>>()?,
    })
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<SubmitAvailabilityBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = match to_command(event_id, body.name, &body.dates) {
        Ok(command) => command,
        Err(e) => return error_response(e.into()),
    };

    match state.submit_availability.handle(command).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(SubmitAvailabilityResponse::from(entry)),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
