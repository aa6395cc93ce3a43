//! In-process mock of the job-orchestration API
//!
//! Implements just enough surface for the harness engine to be exercised
//! end to end: the administrative reset endpoint, the baseline creation
//! endpoints, and a couple of assertable widget endpoints with role-aware
//! responses.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

use functest_http::Role;

/// Observable mock state, shared with the test body.
#[derive(Debug, Default)]
pub struct MockState {
    /// Number of database resets requested so far
    pub reset_count: usize,
    /// Paths of creation calls since the last reset, in arrival order
    pub seeded: Vec<String>,
}

pub type SharedState = Arc<Mutex<MockState>>;

/// Bind the mock on an ephemeral port and serve it in the background.
/// Returns the root URL (no trailing slash) and the shared state.
pub async fn spawn() -> (String, SharedState) {
    let state: SharedState = Arc::default();
    let app = router(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), state)
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/admin/db", post(reset_db))
        .route("/users", post(create_entity))
        .route("/projects", post(create_entity))
        .route("/subprojects", post(create_entity))
        .route("/repos", post(create_entity))
        .route("/repos/1/branches", post(create_entity))
        .route("/repos/1/branches/master", post(create_entity))
        .route("/agents", post(create_entity))
        .route("/widgets/1", get(get_widget).put(put_widget))
        .route("/redirect", get(redirect))
        .with_state(state)
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

async fn reset_db(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    if bearer(&headers) != Role::Admin.token() {
        return (StatusCode::FORBIDDEN, Json(json!({"error": "Access denied"}))).into_response();
    }
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();
    if parsed.get("command").and_then(|c| c.as_str()) != Some("resetDB") {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "Unknown command"})))
            .into_response();
    }

    let mut state = state.lock().unwrap();
    state.reset_count += 1;
    state.seeded.clear();
    StatusCode::NO_CONTENT.into_response()
}

async fn create_entity(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    if bearer(&headers).is_none() {
        return (StatusCode::FORBIDDEN, Json(json!({"error": "Access denied"}))).into_response();
    }
    let mut state = state.lock().unwrap();
    state.seeded.push(uri.path().to_string());
    let id = state.seeded.len();
    (StatusCode::CREATED, Json(json!({"id": id}))).into_response()
}

async fn get_widget() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({"id": 1, "name": "widget", "tags": ["a", "b"]})),
    )
}

async fn put_widget(headers: HeaderMap) -> impl IntoResponse {
    if bearer(&headers) == Role::Operator.token() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::FORBIDDEN, Json(json!({"error": "Access denied"}))).into_response()
    }
}

async fn redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/widgets/1")])
}
