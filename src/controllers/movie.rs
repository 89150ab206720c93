use axum::{routing::get, Json, Router};
use std::sync::Arc;

use crate::{config::theater::MOVIE, models::Movie, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movie", get(get_movie))
}

// GET /api/movie
async fn get_movie() -> Json<Movie> {
    Json(MOVIE)
}
