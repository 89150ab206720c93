pub mod seats;
pub mod session;
pub mod movie;

use axum::{http::StatusCode, Router};
use std::sync::Arc;

use crate::error::SeatError;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(seats::routes())
        .merge(session::routes())
        .merge(movie::routes())
}

/// Отображение ошибок ядра в HTTP-ответ.
pub(crate) fn reject(err: SeatError) -> (StatusCode, String) {
    let status = match err {
        SeatError::SeatNotFound(_) => StatusCode::NOT_FOUND,
        SeatError::InvalidSeatIdentifier(_) => StatusCode::BAD_REQUEST,
        _ => {
            tracing::error!("seat catalog integrity error: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, err.to_string())
}
