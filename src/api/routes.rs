//! API Routes
//!
//! Configures the Axum router with all request backend endpoints.

use std::time::Duration;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::handlers::{
    add_request_handler, cleanup_handler, delete_request_handler, health_handler,
    list_requests_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /requests` - List live requests, newest first
/// - `POST /requests` - Submit a song request
/// - `DELETE /requests/:id` - Delete a request by identifier
/// - `POST /requests/cleanup` - Manually purge expired requests
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: single declarative allow-list policy (open for this internal tool)
/// - Timeout: bounds every handler so a stalled store call cannot hang a client
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState, request_timeout_secs: u64) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/requests", get(list_requests_handler).post(add_request_handler))
        .route("/requests/:id", delete(delete_request_handler))
        .route("/requests/cleanup", post(cleanup_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(request_timeout_secs)))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
