//! Request Store Module
//!
//! In-memory persistence for song requests with retention-window expiry.

use chrono::{Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::error::{RequestError, Result};
use crate::store::{ListedRecord, Record, ANONYMOUS};

// == Request Store ==
/// Durable home of all live song requests.
///
/// Records are kept in insertion order; expiry is enforced both here
/// (lazily, during listings) and by the background sweeper calling
/// [`delete_expired`](Self::delete_expired).
#[derive(Debug)]
pub struct RequestStore {
    /// All live records, oldest first
    records: Vec<Record>,
    /// Retention window; records older than this are expired
    retention: Duration,
}

impl RequestStore {
    // == Constructor ==
    /// Creates a new empty store with the given retention window.
    pub fn new(retention: Duration) -> Self {
        Self {
            records: Vec::new(),
            retention,
        }
    }

    // == Insert ==
    /// Persists a new request and returns its store-assigned identifier.
    ///
    /// `music` is trimmed and must be non-empty afterwards; `requester_name`
    /// falls back to "Anonymous" when empty after trimming. `created_at` is
    /// assigned here, server-side, never by the caller.
    pub fn insert(&mut self, music: &str, requester_name: &str) -> Result<Uuid> {
        let music = music.trim();
        if music.is_empty() {
            return Err(RequestError::Validation(
                "Music request cannot be empty".to_string(),
            ));
        }

        let name = requester_name.trim();
        let name = if name.is_empty() { ANONYMOUS } else { name };

        let record = Record::new(music.to_string(), name.to_string());
        let id = record.id;
        self.records.push(record);
        Ok(id)
    }

    // == List Recent ==
    /// Returns live records newest first, capped at `limit`.
    ///
    /// Any expired record observed during the call is deleted on the spot,
    /// so a listing never surfaces stale entries even between sweeper runs.
    /// Each returned record carries its 1-based position as `number`; the
    /// numbering is recomputed on every call.
    pub fn list_recent(&mut self, limit: usize) -> Result<Vec<ListedRecord>> {
        let dropped = self.drop_expired();
        if dropped > 0 {
            debug!("listing removed {} expired requests", dropped);
        }

        // Insertion order is creation order, so newest-first is a reverse walk.
        Ok(self
            .records
            .iter()
            .rev()
            .take(limit)
            .enumerate()
            .map(|(i, record)| ListedRecord {
                number: i + 1,
                record: record.clone(),
            })
            .collect())
    }

    // == Delete By Id ==
    /// Removes exactly one record by identifier.
    ///
    /// Returns whether a record was actually removed. A missing identifier
    /// is a normal negative result, never an error.
    pub fn delete_by_id(&mut self, id: &Uuid) -> Result<bool> {
        match self.records.iter().position(|r| r.id == *id) {
            Some(index) => {
                self.records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // == Delete Expired ==
    /// Removes all records older than the retention window.
    ///
    /// Returns the number removed. Idempotent: with nothing expired it
    /// returns 0 and performs no mutation.
    pub fn delete_expired(&mut self) -> Result<usize> {
        Ok(self.drop_expired())
    }

    /// Shared expiry pass used by listings and the bulk delete.
    fn drop_expired(&mut self) -> usize {
        let now = Utc::now();
        let window = self.retention;
        let before = self.records.len();
        self.records.retain(|r| !r.is_expired(now, window));
        before - self.records.len()
    }

    // == Length ==
    /// Returns the current number of records in the store.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no records.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rewinds a record's creation time, for expiry tests only.
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, id: &Uuid, by: Duration) -> bool {
        match self.records.iter_mut().find(|r| r.id == *id) {
            Some(record) => {
                record.created_at = record.created_at - by;
                true
            }
            None => false,
        }
    }
}
