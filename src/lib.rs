//! Song Requests - A live song request backend
//!
//! Stores music requests submitted by visitors, lists them newest first,
//! and expires them automatically after a retention window.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
