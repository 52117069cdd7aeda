use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::editor::EditorEvent;
use crate::error::ServerError;
use crate::ui::editor::{ANALYZE_URL, EDITOR_EVENTS_URL};

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route(EDITOR_EVENTS_URL, post(editor_event))
        .route(ANALYZE_URL, post(analyze))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> Result<(), ServerError> {
    let addr = config.bind_address();
    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - The editor page.
async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

/// GET /health - Liveness check.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /api/editor/events - Lifecycle event from the editor widget.
async fn editor_event(State(state): State<AppState>, Json(event): Json<EditorEvent>) -> StatusCode {
    state.hooks.dispatch(&event);
    StatusCode::NO_CONTENT
}

/// POST /api/analyze - Analyze button. Logs only.
async fn analyze(State(state): State<AppState>) -> StatusCode {
    state.hooks.analyze();
    StatusCode::NO_CONTENT
}
