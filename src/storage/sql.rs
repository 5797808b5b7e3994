//! # SQL Record Store
//!
//! Records persisted in a single SQLite table behind a bounded connection
//! pool:
//! - WAL journal mode, so readers do not block the writer
//! - `AUTOINCREMENT` primary key, so deleted ids are never handed out again
//! - search filters the id-ordered rows in Rust, so case folding matches
//!   the in-memory store for non-ASCII titles
//! - every update/delete runs in its own transaction whose first statement is
//!   the conditional write, which takes the write lock before the row is
//!   looked at and keeps it until commit
//!
//! Pool exhaustion past `acquire_timeout` and busy-lock waits past the same
//! bound surface as [`StorageError::Unavailable`].

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteRow,
};
use sqlx::Row;

use super::config::StorageConfig;
use super::errors::{StorageError, StorageOperation, StorageResult};
use super::store::{search_needle, title_matches, RecordStore};
use crate::records::{NewRecord, Priority, Record, Status};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS records (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    status      TEXT NOT NULL DEFAULT 'todo'
                CHECK (status IN ('todo', 'in_progress', 'done')),
    priority    TEXT NOT NULL DEFAULT 'medium'
                CHECK (priority IN ('low', 'medium', 'high')),
    created_at  TEXT NOT NULL
)
"#;

const COLUMNS: &str = "id, title, description, status, priority, created_at";

/// SQLite-backed record store
#[derive(Debug, Clone)]
pub struct SqlRecordStore {
    pool: SqlitePool,
}

impl SqlRecordStore {
    /// Open a pool using the configured connection string and bounds
    ///
    /// The database file is created when missing. The records table is not;
    /// call [`SqlRecordStore::ensure_schema`].
    pub async fn connect(config: &StorageConfig) -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| StorageError::unavailable(StorageOperation::Connect, e))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(config.acquire_timeout());

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_with(options)
            .await
            .map_err(|e| StorageError::unavailable(StorageOperation::Connect, e))?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get connection pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the records table if it does not exist
    pub async fn ensure_schema(&self) -> StorageResult<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::unavailable(StorageOperation::EnsureSchema, e))?;
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn row_to_record(row: &SqliteRow, operation: StorageOperation) -> StorageResult<Record> {
        let fail = |e: &dyn std::fmt::Display| StorageError::unavailable(operation, e);

        let status: String = row.try_get("status").map_err(|e| fail(&e))?;
        let priority: String = row.try_get("priority").map_err(|e| fail(&e))?;

        Ok(Record {
            id: row.try_get("id").map_err(|e| fail(&e))?,
            title: row.try_get("title").map_err(|e| fail(&e))?,
            description: row.try_get("description").map_err(|e| fail(&e))?,
            status: status.parse::<Status>().map_err(|e| fail(&e))?,
            priority: priority.parse::<Priority>().map_err(|e| fail(&e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| fail(&e))?,
        })
    }

    fn rows_to_records(
        rows: &[SqliteRow],
        operation: StorageOperation,
    ) -> StorageResult<Vec<Record>> {
        rows.iter()
            .map(|row| Self::row_to_record(row, operation))
            .collect()
    }
}

#[async_trait]
impl RecordStore for SqlRecordStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn get_records(&self) -> StorageResult<Vec<Record>> {
        let op = StorageOperation::GetRecords;
        let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM records ORDER BY id ASC"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StorageError::unavailable(op, e))?;

        Self::rows_to_records(&rows, op)
    }

    async fn get_record(&self, id: i64) -> StorageResult<Option<Record>> {
        let op = StorageOperation::GetRecord;
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM records WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::unavailable_for(op, id, e))?;

        row.as_ref()
            .map(|row| Self::row_to_record(row, op))
            .transpose()
    }

    async fn create_record(&self, input: NewRecord) -> StorageResult<Record> {
        let op = StorageOperation::CreateRecord;
        let row = sqlx::query(&format!(
            "INSERT INTO records (title, description, status, priority, created_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(input.title)
        .bind(input.description)
        .bind(input.status.as_str())
        .bind(input.priority.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::unavailable(op, e))?;

        Self::row_to_record(&row, op)
    }

    async fn update_record(&self, id: i64, input: NewRecord) -> StorageResult<Option<Record>> {
        let op = StorageOperation::UpdateRecord;
        let fail = |e: sqlx::Error| StorageError::unavailable_for(op, id, e);

        let mut tx = self.pool.begin().await.map_err(fail)?;

        let row = sqlx::query(&format!(
            "UPDATE records SET title = ?, description = ?, status = ?, priority = ? \
             WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(input.title)
        .bind(input.description)
        .bind(input.status.as_str())
        .bind(input.priority.as_str())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(fail)?;

        let record = row
            .as_ref()
            .map(|row| Self::row_to_record(row, op))
            .transpose()?;

        tx.commit().await.map_err(fail)?;
        Ok(record)
    }

    async fn delete_record(&self, id: i64) -> StorageResult<bool> {
        let op = StorageOperation::DeleteRecord;
        let fail = |e: sqlx::Error| StorageError::unavailable_for(op, id, e);

        let mut tx = self.pool.begin().await.map_err(fail)?;

        let result = sqlx::query("DELETE FROM records WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(fail)?;

        tx.commit().await.map_err(fail)?;
        Ok(result.rows_affected() > 0)
    }

    async fn search_records(&self, query: &str) -> StorageResult<Vec<Record>> {
        let Some(needle) = search_needle(query) else {
            return self.get_records().await;
        };

        // SQLite's lower() folds ASCII only; match in Rust like the memory store
        let op = StorageOperation::SearchRecords;
        let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM records ORDER BY id ASC"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StorageError::unavailable(op, e))?;

        Ok(Self::rows_to_records(&rows, op)?
            .into_iter()
            .filter(|record| title_matches(&record.title, &needle))
            .collect())
    }
}
