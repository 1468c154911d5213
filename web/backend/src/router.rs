use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router. Shared by the server binary and the tests
/// that drive the app through `oneshot`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/predict", post(handlers::predict_sentiment))
        .route("/api/examples", get(handlers::list_examples))
        .route("/api/sessions", post(handlers::create_session))
        .route(
            "/api/sessions/:session_id",
            get(handlers::get_session).put(handlers::update_session),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
