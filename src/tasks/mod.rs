//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry Sweeper: purges requests older than the retention window at
//!   configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
