//! Shared test support
//!
//! Builds each record store backend over throwaway state so the same
//! assertions can run against all of them.

#![allow(dead_code)]

use std::sync::Arc;

use recordkeeper::records::{NewRecord, Priority, Status};
use recordkeeper::storage::{InMemoryRecordStore, RecordStore, SqlRecordStore, StorageConfig};
use tempfile::TempDir;

/// A store plus whatever must outlive it
pub struct TestStore {
    pub store: Arc<dyn RecordStore>,
    _dir: Option<TempDir>,
}

impl TestStore {
    pub fn memory() -> Self {
        Self {
            store: Arc::new(InMemoryRecordStore::new()),
            _dir: None,
        }
    }

    pub async fn sqlite() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("records.db").display());

        let store = SqlRecordStore::connect(&StorageConfig::sqlite(url))
            .await
            .expect("Failed to open sqlite store");
        store.ensure_schema().await.expect("Failed to create schema");

        Self {
            store: Arc::new(store),
            _dir: Some(dir),
        }
    }

    /// One store per backend
    pub async fn all() -> Vec<Self> {
        vec![Self::memory(), Self::sqlite().await]
    }
}

pub fn sample(title: &str) -> NewRecord {
    NewRecord::new(title, format!("{} description", title))
}

pub fn sample_with(title: &str, status: Status, priority: Priority) -> NewRecord {
    sample(title).with_status(status).with_priority(priority)
}
