//! # Record Store Trait
//!
//! The storage contract shared by every backend.

use async_trait::async_trait;

use super::errors::StorageResult;
use crate::records::{NewRecord, Record};

/// Persistence for records
///
/// Listing and search results are ordered by ascending id. Ids are never
/// reused, even after the record holding one is deleted.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;

    /// All records
    async fn get_records(&self) -> StorageResult<Vec<Record>>;

    /// A record by exact id
    async fn get_record(&self, id: i64) -> StorageResult<Option<Record>>;

    /// Persist a new record, assigning its id and creation time
    async fn create_record(&self, input: NewRecord) -> StorageResult<Record>;

    /// Replace the mutable fields of an existing record
    ///
    /// Returns `None` without creating anything when `id` is absent. The
    /// existence check and the write happen atomically.
    async fn update_record(&self, id: i64, input: NewRecord) -> StorageResult<Option<Record>>;

    /// Remove a record; `false` when there was nothing to remove
    async fn delete_record(&self, id: i64) -> StorageResult<bool>;

    /// Records whose title contains `query`, ignoring case
    ///
    /// A blank query returns the same as `get_records`.
    async fn search_records(&self, query: &str) -> StorageResult<Vec<Record>>;
}

/// Lowercased search needle, or `None` when the query is blank
///
/// Blankness is judged on the trimmed query, but a non-blank query is used
/// as given: `"buy "` only matches titles containing `"buy "`.
pub fn search_needle(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// Whether `title` contains an already lowercased needle, with Unicode case
/// folding
pub fn title_matches(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle)
}
