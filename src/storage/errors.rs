//! # Storage Errors
//!
//! A missing record is not an error: stores report it through `Option` or
//! `bool`. The only failure a store raises is the backing medium being
//! unreachable or unable to finish the operation.

use std::fmt;

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage operations, named for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOperation {
    Connect,
    EnsureSchema,
    GetRecords,
    GetRecord,
    CreateRecord,
    UpdateRecord,
    DeleteRecord,
    SearchRecords,
}

impl StorageOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageOperation::Connect => "connect",
            StorageOperation::EnsureSchema => "ensure_schema",
            StorageOperation::GetRecords => "get_records",
            StorageOperation::GetRecord => "get_record",
            StorageOperation::CreateRecord => "create_record",
            StorageOperation::UpdateRecord => "update_record",
            StorageOperation::DeleteRecord => "delete_record",
            StorageOperation::SearchRecords => "search_records",
        }
    }
}

impl fmt::Display for StorageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The backing medium could not be reached or could not complete the
    /// operation (connection failure, pool timeout, constraint violation,
    /// poisoned lock, undecodable row)
    #[error("Storage unavailable during {operation}: {reason}")]
    Unavailable {
        operation: StorageOperation,
        record_id: Option<i64>,
        reason: String,
    },
}

impl StorageError {
    /// Create an unavailable error not tied to a record
    pub fn unavailable(operation: StorageOperation, reason: impl fmt::Display) -> Self {
        StorageError::Unavailable {
            operation,
            record_id: None,
            reason: reason.to_string(),
        }
    }

    /// Create an unavailable error for an operation targeting one record
    pub fn unavailable_for(
        operation: StorageOperation,
        record_id: i64,
        reason: impl fmt::Display,
    ) -> Self {
        StorageError::Unavailable {
            operation,
            record_id: Some(record_id),
            reason: reason.to_string(),
        }
    }

    pub fn operation(&self) -> StorageOperation {
        match self {
            StorageError::Unavailable { operation, .. } => *operation,
        }
    }

    pub fn record_id(&self) -> Option<i64> {
        match self {
            StorageError::Unavailable { record_id, .. } => *record_id,
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        500
    }
}
