//! Response DTOs for the request backend API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::store::ListedRecord;

/// Wire shape of a single song request in listings
///
/// Identifiers are always serialized as strings regardless of their
/// native type, and timestamps as RFC 3339.
#[derive(Debug, Clone, Serialize)]
pub struct RequestView {
    /// Record identifier as a string
    pub id: String,
    /// The requested song
    pub music: String,
    /// Who asked for it
    pub requester_name: String,
    /// Creation time in RFC 3339 format
    pub created_at: String,
    /// 1-based position in this listing; recomputed per call
    pub number: usize,
}

impl From<ListedRecord> for RequestView {
    fn from(listed: ListedRecord) -> Self {
        Self {
            id: listed.record.id.to_string(),
            music: listed.record.music,
            requester_name: listed.record.requester_name,
            created_at: listed.record.created_at.to_rfc3339(),
            number: listed.number,
        }
    }
}

/// Response body for the listing endpoint (GET /requests)
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    /// Always true on the success path
    pub success: bool,
    /// Live requests, newest first
    pub requests: Vec<RequestView>,
    /// Number of requests returned
    pub count: usize,
}

impl ListResponse {
    /// Creates a new ListResponse from a listing
    pub fn new(requests: Vec<RequestView>) -> Self {
        let count = requests.len();
        Self {
            success: true,
            requests,
            count,
        }
    }
}

/// Response body for a submitted request (POST /requests)
#[derive(Debug, Clone, Serialize)]
pub struct AddResponse {
    /// Always true on the success path
    pub success: bool,
    /// Success message
    pub message: String,
    /// Identifier of the new record, as a string
    pub request_id: String,
}

impl AddResponse {
    /// Creates a new AddResponse
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: "Request added successfully".to_string(),
            request_id: request_id.into(),
        }
    }
}

/// Response body for a deletion (DELETE /requests/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Always true on the success path
    pub success: bool,
    /// Success message
    pub message: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new() -> Self {
        Self {
            success: true,
            message: "Request deleted successfully".to_string(),
        }
    }
}

impl Default for DeleteResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for a manual cleanup run (POST /requests/cleanup)
#[derive(Debug, Clone, Serialize)]
pub struct CleanupResponse {
    /// Always true on the success path
    pub success: bool,
    /// Human-readable summary of the cleanup run
    pub message: String,
}

impl CleanupResponse {
    /// Creates a new CleanupResponse for a run that removed `removed` records
    pub fn new(removed: usize) -> Self {
        Self {
            success: true,
            message: format!("Cleanup completed. Removed {} expired requests.", removed),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
