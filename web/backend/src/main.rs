use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use reviewsense_web::{app, state::AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app_state = match AppState::new() {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to initialize app state: {e}");
            std::process::exit(1);
        }
    };

    let app = app(app_state);

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();

    tracing::info!("Server running on http://{bind_addr}");

    axum::serve(listener, app).await.unwrap();
}
