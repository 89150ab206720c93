use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/session", get(get_session))
        .route("/session/reset", post(reset_session))
}

// GET /api/session
async fn get_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.session.lock().await;
    (StatusCode::OK, Json(session.snapshot()))
}

// POST /api/session/reset - конец сессии, всё начинается заново
async fn reset_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    session.restart();
    (StatusCode::OK, Json(session.snapshot()))
}
