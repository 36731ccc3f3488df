//! API Module
//!
//! HTTP handlers and routing for the request backend REST API.
//!
//! # Endpoints
//! - `GET /requests` - List live requests, newest first
//! - `POST /requests` - Submit a song request
//! - `DELETE /requests/:id` - Delete a request by identifier
//! - `POST /requests/cleanup` - Manually purge expired requests
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
