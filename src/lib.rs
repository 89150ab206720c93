pub mod config;
pub mod error;
pub mod models;
pub mod grid;
pub mod store;
pub mod session;
pub mod controllers;

use axum::{extract::State, routing::get, Router};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::SeatError;
pub use grid::SeatGrid;
pub use session::{Session, SessionSnapshot};
pub use store::{SeatAction, SelectionStore, Transition};

// Shared state для всего приложения
pub struct AppState {
    pub config: config::Config,
    // Одна сессия на процесс. Мьютекс не даёт действиям пересекаться.
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Arc<Self>, SeatError> {
        let session = Session::start()?;
        Ok(Arc::new(Self {
            config,
            session: Mutex::new(session),
        }))
    }
}

// GET / - версия и окружение
async fn banner(State(state): State<Arc<AppState>>) -> String {
    format!("Seat Selection API v1.0 ({})", state.config.app.environment)
}

/// Главный роутер приложения.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
