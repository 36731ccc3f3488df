//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::store::{DEFAULT_LIST_LIMIT, DEFAULT_RETENTION_HOURS};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Retention window in hours; requests older than this are expired
    pub retention_hours: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Maximum number of requests returned by a listing
    pub list_limit: usize,
    /// Per-request handler timeout in seconds
    pub request_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `RETENTION_HOURS` - Request retention window in hours (default: 24)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 3600)
    /// - `LIST_LIMIT` - Maximum requests per listing (default: 50)
    /// - `REQUEST_TIMEOUT` - Handler timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            retention_hours: env::var("RETENTION_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RETENTION_HOURS),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            list_limit: env::var("LIST_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LIST_LIMIT),
            request_timeout: env::var("REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Returns the retention window as a chrono Duration.
    pub fn retention(&self) -> chrono::Duration {
        chrono::Duration::hours(self.retention_hours as i64)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            retention_hours: DEFAULT_RETENTION_HOURS,
            cleanup_interval: 3600,
            list_limit: DEFAULT_LIST_LIMIT,
            request_timeout: 30,
        }
    }
}
