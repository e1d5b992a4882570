pub mod request_id;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, history::HistoryController, tts::TtsController};
use crate::infrastructure::config::Config;

/// Build the application router with all routes configured
pub fn build_router(tts_controller: Arc<TtsController>, history_controller: Arc<HistoryController>) -> Router {
    // Generation routes
    let tts_routes = Router::new()
        .route("/api/tts/generate", post(TtsController::generate))
        .route("/api/tts/progress", get(TtsController::progress))
        .route(
            "/api/tts/active",
            get(TtsController::active_audio).delete(TtsController::clear),
        )
        .with_state(tts_controller.clone());

    // History routes
    let history_routes = Router::new()
        .route(
            "/api/history",
            get(HistoryController::list).delete(HistoryController::clear_history),
        )
        .route("/api/history/:entryId", delete(HistoryController::delete_entry))
        .route("/api/history/:entryId/audio", get(HistoryController::audio))
        .route("/api/history/:entryId/restore", post(HistoryController::restore))
        .with_state(history_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(tts_controller)
        .merge(tts_routes)
        .merge(history_routes)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    tts_controller: Arc<TtsController>,
    history_controller: Arc<HistoryController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(tts_controller, history_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
