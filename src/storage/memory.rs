//! # In-Memory Record Store
//!
//! A map guarded by a single lock. The id counter lives under the same lock
//! so allocation and insertion are one step, and every update/delete runs its
//! lookup and mutation inside one write guard.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use super::errors::{StorageError, StorageOperation, StorageResult};
use super::store::{search_needle, title_matches, RecordStore};
use crate::records::{NewRecord, Record};

#[derive(Debug, Default)]
struct Inner {
    records: BTreeMap<i64, Record>,
    last_id: i64,
}

/// In-memory record store, used for development and tests
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<Inner>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self, operation: StorageOperation) -> StorageResult<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| StorageError::unavailable(operation, "Lock poisoned"))
    }

    fn write(&self, operation: StorageOperation) -> StorageResult<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| StorageError::unavailable(operation, "Lock poisoned"))
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn get_records(&self) -> StorageResult<Vec<Record>> {
        let inner = self.read(StorageOperation::GetRecords)?;
        Ok(inner.records.values().cloned().collect())
    }

    async fn get_record(&self, id: i64) -> StorageResult<Option<Record>> {
        let inner = self.read(StorageOperation::GetRecord)?;
        Ok(inner.records.get(&id).cloned())
    }

    async fn create_record(&self, input: NewRecord) -> StorageResult<Record> {
        let mut inner = self.write(StorageOperation::CreateRecord)?;

        let id = inner.last_id.checked_add(1).ok_or_else(|| {
            StorageError::unavailable(StorageOperation::CreateRecord, "Record id space exhausted")
        })?;
        inner.last_id = id;

        let record = Record::from_new(id, Utc::now(), input);
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    async fn update_record(&self, id: i64, input: NewRecord) -> StorageResult<Option<Record>> {
        let mut inner = self.write(StorageOperation::UpdateRecord)?;

        Ok(inner.records.get_mut(&id).map(|existing| {
            existing.apply(input);
            existing.clone()
        }))
    }

    async fn delete_record(&self, id: i64) -> StorageResult<bool> {
        let mut inner = self.write(StorageOperation::DeleteRecord)?;
        Ok(inner.records.remove(&id).is_some())
    }

    async fn search_records(&self, query: &str) -> StorageResult<Vec<Record>> {
        let Some(needle) = search_needle(query) else {
            return self.get_records().await;
        };

        let inner = self.read(StorageOperation::SearchRecords)?;
        Ok(inner
            .records
            .values()
            .filter(|record| title_matches(&record.title, &needle))
            .cloned()
            .collect())
    }
}
