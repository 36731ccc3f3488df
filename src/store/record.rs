//! Record Module
//!
//! Defines the persisted shape of a single song request.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Requester name used when a submission carries no usable name.
pub const ANONYMOUS: &str = "Anonymous";

// == Record ==
/// A single persisted song request.
#[derive(Debug, Clone)]
pub struct Record {
    /// Store-assigned opaque identifier
    pub id: Uuid,
    /// The requested song; never empty or whitespace-only once accepted
    pub music: String,
    /// Who asked for it; defaults to "Anonymous"
    pub requester_name: String,
    /// Server-assigned creation time, immutable after insert
    pub created_at: DateTime<Utc>,
}

impl Record {
    // == Constructor ==
    /// Creates a new record with a fresh identifier and the current time.
    ///
    /// Callers are expected to have validated `music` already; the store
    /// re-checks before accepting the record.
    pub fn new(music: String, requester_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            music,
            requester_name,
            created_at: Utc::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the record has aged out of the retention window.
    ///
    /// The boundary is exclusive: a record whose age equals the window
    /// exactly is still live. Only `now - created_at > window` expires it.
    pub fn is_expired(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now.signed_duration_since(self.created_at) > window
    }
}

/// A record paired with its 1-based position in a listing.
///
/// The number is a display convenience recomputed on every listing call;
/// it is not persisted and not stable across calls.
#[derive(Debug, Clone)]
pub struct ListedRecord {
    /// 1-based position within the returned page, newest first
    pub number: usize,
    /// The underlying record
    pub record: Record,
}
