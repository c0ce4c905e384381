// End-to-end flow through the full router: an organizer creates an event,
// participants submit availability, the organizer decides a date and later
// deletes the event.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::scheduling::adapters::outbound::in_memory::InMemoryStore;
use crate::shell::config::Config;
use crate::shell::http::router;
use crate::shell::state::AppState;

#[fixture]
fn app() -> Router {
    router(AppState::new(
        Arc::new(InMemoryStore::new()),
        &Config::default(),
    ))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or_default())
}

#[rstest]
#[tokio::test]
async fn it_should_run_the_full_scheduling_flow(app: Router) {
    let (status, created) = send(
        &app,
        "POST",
        "/events",
        Some(json!({"title": "Summer Barbecue", "start_date": "2024-06-10", "end_date": "2024-07-05"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    let token = created["admin_token"].as_str().unwrap().to_string();

    for (name, dates) in [
        ("A", json!(["2024-06-10", "2024-06-11"])),
        ("B", json!(["2024-06-10"])),
    ] {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/events/{id}/availability"),
            Some(json!({"name": name, "dates": dates})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, view) = send(&app, "GET", &format!("/events/{id}?fragment=admin%3D{token}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["admin_mode"], true);
    assert_eq!(view["max_count"], 2);
    assert_eq!(view["top_dates"][0], json!({"date": "2024-06-10", "count": 2}));

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/events/{id}/decided-date"),
        Some(json!({"date": "2024-06-10"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/events/{id}/availability"),
        Some(json!({"name": "C", "dates": ["2024-06-12"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, listed) = send(&app, "GET", "/events", None).await;
    assert_eq!(listed[0]["id"], id.as_str());
    assert_eq!(listed[0]["is_closed"], true);

    let (status, _) = send(&app, "DELETE", &format!("/events/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", &format!("/events/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn it_should_serve_the_same_flow_over_graphql(app: Router) {
    let (status, created) = send(
        &app,
        "POST",
        "/gql",
        Some(json!({
            "query": r#"mutation { createEvent(title: "Retro", startDate: "2024-06-10", endDate: "2024-06-20") { id adminToken } }"#
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["data"]["createEvent"]["id"].as_str().unwrap().to_string();

    let submit = format!(
        r#"mutation {{ submitAvailability(eventId: "{id}", name: "A", dates: ["2024-06-12", "2024-06-13"]) {{ name }} }}"#
    );
    let (_, submitted) = send(&app, "POST", "/gql", Some(json!({ "query": submit }))).await;
    assert_eq!(submitted["data"]["submitAvailability"]["name"], "A");

    let view = format!(
        r#"{{ event(id: "{id}") {{ month maxCount topDates {{ date count }} days {{ date tier }} }} recentEvents {{ id }} }}"#
    );
    let (_, viewed) = send(&app, "POST", "/gql", Some(json!({ "query": view }))).await;
    assert_eq!(viewed["data"]["event"]["month"], "2024-06");
    assert_eq!(viewed["data"]["event"]["maxCount"], 1);
    assert_eq!(
        viewed["data"]["event"]["topDates"],
        json!([{"date": "2024-06-12", "count": 1}, {"date": "2024-06-13", "count": 1}])
    );
    assert_eq!(viewed["data"]["recentEvents"][0]["id"], id.as_str());

    let bad = format!(r#"mutation {{ setDecidedDate(eventId: "{id}", date: "2024-07-01") }}"#);
    let (_, rejected) = send(&app, "POST", "/gql", Some(json!({ "query": bad }))).await;
    assert!(rejected["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("outside the event window"));
}

#[rstest]
#[tokio::test]
async fn it_should_answer_health_checks(app: Router) {
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
