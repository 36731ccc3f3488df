//! Store Module
//!
//! Persistence for song requests with retention-window expiry. Expired
//! records are purged both lazily during listings and in bulk by the
//! background sweeper.

mod record;
mod store;


// Re-export public types
pub use record::{ListedRecord, Record, ANONYMOUS};
pub use store::RequestStore;

// == Public Constants ==
/// Canonical retention window in hours; requests older than this expire
pub const DEFAULT_RETENTION_HOURS: u64 = 24;

/// Default cap on the number of records a listing returns
pub const DEFAULT_LIST_LIMIT: usize = 50;
