use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;

use crate::modules::scheduling::adapters::outbound::repositories::StoreError;
use crate::modules::scheduling::use_cases::application_error::ApplicationError;
use crate::modules::scheduling::use_cases::create_event::inbound::http as create_http;
use crate::modules::scheduling::use_cases::decide_date::inbound::http as decide_http;
use crate::modules::scheduling::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::scheduling::use_cases::list_recent_events::inbound::http as list_http;
use crate::modules::scheduling::use_cases::submit_availability::inbound::http as submit_http;
use crate::modules::scheduling::use_cases::view_event::inbound::http as view_http;
use crate::shell::graphql::{build_schema, graphiql, graphql_handler};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/events", post(create_http::handle).get(list_http::handle))
        .route(
            "/events/{id}",
            get(view_http::handle).delete(delete_http::handle),
        )
        .route("/events/{id}/availability", post(submit_http::handle))
        .route("/events/{id}/decided-date", put(decide_http::handle))
        .route("/gql", get(graphiql).post(graphql_handler))
        .layer(Extension(schema))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Map a use-case failure onto a status code and a JSON error body.
pub fn error_response(error: ApplicationError) -> Response {
    let status = match &error {
        ApplicationError::Invalid(_) | ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
        ApplicationError::NotFound(_) | ApplicationError::Store(StoreError::NotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        ApplicationError::Conflict(_) => StatusCode::CONFLICT,
        ApplicationError::Store(StoreError::Backend(_)) => {
            tracing::error!(error = %error, "store failure");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "internal error".to_string(),
                }),
            )
                .into_response();
        }
    };
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}
