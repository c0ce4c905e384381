use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::scheduling::core::calendar_window::YearMonth;
use crate::modules::scheduling::core::errors::CoreError;
use crate::modules::scheduling::use_cases::view_event::handler::ViewEventQuery;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ViewEventParams {
    pub month: Option<String>,
    pub fragment: Option<String>,
}

pub fn to_query(
    event_id: String,
    month: Option<&str>,
    fragment: Option<String>,
) -> Result<ViewEventQuery, CoreError> {
    Ok(ViewEventQuery {
        event_id,
        month: month.map(str::parse::<YearMonth>).transpose()?,
        fragment,
    })
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Query(params): Query<ViewEventParams>,
) -> Response {
    let query = match to_query(event_id, params.month.as_deref(), params.fragment) {
        Ok(query) => query,
        Err(e) => return error_response(e.into()),
    };

    match state.view_event.handle(query).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod view_event_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::scheduling::adapters::outbound::in_memory::InMemoryStore;
    use crate::modules::scheduling::adapters::outbound::repositories::{
        AvailabilityRepository, EventRepository,
    };
    use crate::shell::config::Config;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::availability::entry_for;
    use crate::tests::fixtures::date;
    use crate::tests::fixtures::events::EventBuilder;

    use super::handle;

    async fn seeded_store() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        store
            .create(
                EventBuilder::new()
                    .id("ev-1")
                    .window(date("2024-06-10"), date("2024-07-05"))
                    .admin_token("K3X9QZ")
                    .build(),
            )
            .await
            .unwrap();
        store
            .add(entry_for("ev-1", "A", &["2024-06-10", "2024-06-11"]))
            .await
            .unwrap();
        store.add(entry_for("ev-1", "B", &["2024-06-10"])).await.unwrap();
        store
    }

    fn app(store: Arc<InMemoryStore>) -> Router {
        Router::new()
            .route("/events/{id}", get(handle))
            .with_state(AppState::new(store, &Config::default()))
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(seeded_store().await)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_heatmap_view() {
        let (status, json) = get_json("/events/ev-1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["month"], "2024-06");
        assert_eq!(json["days"][0]["date"], "2024-05-27");
        assert_eq!(json["max_count"], 2);
        assert_eq!(
            json["top_dates"],
            serde_json::json!([
                {"date": "2024-06-10", "count": 2},
                {"date": "2024-06-11", "count": 1}
            ])
        );
        assert_eq!(json["admin_mode"], false);
        assert!(json["event"].get("admin_token").is_none());
    }

    #[tokio::test]
    async fn it_should_switch_month_and_detect_the_admin_hint() {
        let (status, json) =
            get_json("/events/ev-1?month=2024-07&fragment=%23admin%3DK3X9QZ").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["month"], "2024-07");
        assert_eq!(json["has_next"], false);
        assert_eq!(json["admin_mode"], true);
    }

    #[tokio::test]
    async fn it_should_return_400_for_a_malformed_month() {
        let (status, json) = get_json("/events/ev-1?month=July").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("July"));
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_event() {
        let (status, _) = get_json("/events/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
