//! API Handlers
//!
//! HTTP request handlers for each request backend endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{RequestError, Result};
use crate::models::{
    AddRequest, AddResponse, CleanupResponse, DeleteResponse, HealthResponse, ListResponse,
    RequestView,
};
use crate::store::RequestStore;

/// Application state shared across all handlers.
///
/// Holds the request store wrapped in Arc<RwLock<>> for thread-safe access.
/// Constructed once at startup and injected into the router and the sweeper;
/// there is no ambient global store.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe request store
    pub store: Arc<RwLock<RequestStore>>,
    /// Cap applied to listings
    pub list_limit: usize,
}

impl AppState {
    /// Creates a new AppState with the given store and listing cap.
    pub fn new(store: RequestStore, list_limit: usize) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            list_limit,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let store = RequestStore::new(config.retention());
        Self::new(store, config.list_limit)
    }
}

/// Handler for GET /requests
///
/// Lists live requests newest first. Expired records never appear here:
/// the store drops them during the listing call.
pub async fn list_requests_handler(State(state): State<AppState>) -> Result<Json<ListResponse>> {
    // Write lock: listings lazily delete expired records
    let mut store = state.store.write().await;
    let listed = store.list_recent(state.list_limit)?;

    let views = listed.into_iter().map(RequestView::from).collect();
    Ok(Json(ListResponse::new(views)))
}

/// Handler for POST /requests
///
/// Validates and stores a new song request. Validation happens here at the
/// boundary, before the store is touched.
pub async fn add_request_handler(
    State(state): State<AppState>,
    Json(req): Json<AddRequest>,
) -> Result<Json<AddResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(RequestError::Validation(error_msg));
    }

    // Acquire write lock and persist
    let mut store = state.store.write().await;
    let id = store.insert(req.music(), req.requester_name())?;

    Ok(Json(AddResponse::new(id.to_string())))
}

/// Handler for DELETE /requests/:id
///
/// Removes a single request. A malformed identifier is a client error; an
/// unknown identifier is a 404, not a server fault.
pub async fn delete_request_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let id = id
        .parse::<Uuid>()
        .map_err(|_| RequestError::Validation(format!("Invalid request id: {}", id)))?;

    let mut store = state.store.write().await;
    if store.delete_by_id(&id)? {
        Ok(Json(DeleteResponse::new()))
    } else {
        Err(RequestError::NotFound(
            "Request not found or could not be deleted".to_string(),
        ))
    }
}

/// Handler for POST /requests/cleanup
///
/// Manually triggers the same bulk expiry delete the sweeper runs.
pub async fn cleanup_handler(State(state): State<AppState>) -> Result<Json<CleanupResponse>> {
    let mut store = state.store.write().await;
    let removed = store.delete_expired()?;

    Ok(Json(CleanupResponse::new(removed)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
