use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use meetup_planner::modules::scheduling::adapters::outbound::in_memory::InMemoryStore;
use meetup_planner::shell::config::Config;
use meetup_planner::shell::http::router;
use meetup_planner::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("reading configuration")?;

    // In-memory store for now; the hosted backend plugs in behind the same ports
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(store, &config);

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("HTTP API: http://{}/events, GraphQL: http://{}/gql", addr, addr);
    axum::serve(listener, app).await?;
    Ok(())
}
