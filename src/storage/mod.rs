//! # Storage
//!
//! The record store contract and its two backends:
//! - [`InMemoryRecordStore`]: a locked map, for development and tests
//! - [`SqlRecordStore`]: a SQLite table behind a bounded pool
//!
//! The store is built once at startup by [`open_store`] and handed to the
//! HTTP layer; nothing else holds a reference to the record collection.

pub mod config;
pub mod errors;
pub mod memory;
pub mod sql;
pub mod store;

use std::sync::Arc;

pub use config::{StorageBackendKind, StorageConfig, DATABASE_URL_ENV};
pub use errors::{StorageError, StorageOperation, StorageResult};
pub use memory::InMemoryRecordStore;
pub use sql::SqlRecordStore;
pub use store::RecordStore;

use crate::observability::{log_event_with_fields, Event};

/// Build the configured store, creating the records table when needed
pub async fn open_store(config: &StorageConfig) -> StorageResult<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match config.backend {
        StorageBackendKind::Memory => Arc::new(InMemoryRecordStore::new()),
        StorageBackendKind::Sqlite => {
            let store = SqlRecordStore::connect(config).await?;
            store.ensure_schema().await?;
            Arc::new(store)
        }
    };

    let max_connections = config.max_connections.to_string();
    log_event_with_fields(
        Event::StorageOpened,
        &[
            ("backend", store.backend_name()),
            ("max_connections", &max_connections),
        ],
    );

    Ok(store)
}
