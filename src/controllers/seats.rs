//! seats.rs
//!
//! Маршруты работы с местами. Каждый запрос сначала проходит проверку формата
//! идентификатора, затем передаётся в хранилище под блокировкой сессии.
//! Ответ на действие всегда содержит свежий снимок выбора.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use super::reject;
use crate::{models::SeatId, store::SeatAction, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(get_seats))
        .route("/seats/{id}", get(get_seat))
        .route("/seats/toggle", patch(toggle_seat))
        .route("/seats/select", patch(select_seat))
        .route("/seats/deselect", patch(deselect_seat))
        .route("/seats/clear", post(clear_selection))
}

/* ---------- helpers ---------- */

#[derive(Debug, Deserialize, Validate)]
struct SeatActionRequest {
    #[validate(length(min = 2, max = 3, message = "seat_id должен содержать 2-3 символа"))]
    seat_id: String,
}

fn validate_seat_id(raw: &str) -> Result<SeatId, (StatusCode, String)> {
    raw.parse::<SeatId>().map_err(reject)
}

async fn apply(
    state: &AppState,
    action: SeatAction,
    req: SeatActionRequest,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    req.validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    validate_seat_id(&req.seat_id)?;

    let mut session = state.session.lock().await;
    session
        .store_mut()
        .dispatch(action, &req.seat_id)
        .map_err(reject)?;

    Ok((StatusCode::OK, Json(session.snapshot())))
}

/* ---------- SEATS ---------- */

// GET /api/seats
async fn get_seats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.session.lock().await;
    (StatusCode::OK, Json(session.store().seats().to_vec()))
}

// GET /api/seats/{id}
async fn get_seat(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    validate_seat_id(&id)?;

    let session = state.session.lock().await;
    let seat = session
        .store()
        .seat_by_id(&id)
        .cloned()
        .ok_or_else(|| reject(crate::SeatError::SeatNotFound(id)))?;

    Ok((StatusCode::OK, Json(seat)))
}

// PATCH /api/seats/toggle
async fn toggle_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SeatActionRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    apply(&state, SeatAction::Toggle, req).await
}

// PATCH /api/seats/select
async fn select_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SeatActionRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    apply(&state, SeatAction::Select, req).await
}

// PATCH /api/seats/deselect
async fn deselect_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SeatActionRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    apply(&state, SeatAction::Deselect, req).await
}

// POST /api/seats/clear
async fn clear_selection(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    let cleared = session.store_mut().clear_selection();
    tracing::info!("Cleared {} selected seats", cleared);
    (StatusCode::OK, Json(session.snapshot()))
}
