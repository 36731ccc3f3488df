//! Request and Response models for the request backend API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::AddRequest;
pub use responses::{
    AddResponse, CleanupResponse, DeleteResponse, ErrorResponse, HealthResponse, ListResponse,
    RequestView,
};
