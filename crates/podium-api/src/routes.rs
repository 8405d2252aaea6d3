//! Router setup with all API routes and middleware.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use podium_core::config::PodiumConfig;
use podium_core::error::PodiumError;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Any origin: the API is read-only and unauthenticated.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/recommend", post(handlers::recommend))
        .route("/speakers", get(handlers::list_speakers))
        .route("/speakers/search", get(handlers::search_speakers))
        .route("/speakers/{name}", get(handlers::get_speaker))
        .route("/stats", get(handlers::stats))
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind to the configured port and serve until the process is stopped.
pub async fn start_server(config: &PodiumConfig, state: AppState) -> Result<(), PodiumError> {
    let addr = format!("{}:{}", config.general.host, config.general.port);

    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| PodiumError::Api(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(addr = %addr, "API server listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| PodiumError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
