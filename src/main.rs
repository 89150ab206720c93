use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use seat_selection::{config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // JSON-логи в production, человекочитаемые в остальных окружениях
    let json_logs = config.app.is_production();
    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.app.rust_log))
        .with(json_logs.then(|| fmt::layer().json()))
        .with((!json_logs).then(|| fmt::layer()))
        .init();

    info!("Starting Seat Selection API ({})", config.app.environment);

    // Create the shared application state with a fresh session
    let app_state = AppState::new(config.clone())?;
    let app = seat_selection::router(app_state);

    let addr: SocketAddr = format!("{}:{}", config.app.host, config.app.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
