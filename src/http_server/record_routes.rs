//! Record HTTP Routes
//!
//! CRUD and search endpoints over the configured record store. Input is
//! validated here; the store only ever sees well-formed values.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::errors::{ApiError, ApiResult};
use super::response::UpdateResponse;
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::records::{parse_record_id, NewRecord, Record, RecordPayload};
use crate::storage::{RecordStore, StorageError};

// ==================
// Shared State
// ==================

/// Record state shared across handlers
pub struct RecordsState {
    pub store: Arc<dyn RecordStore>,
    pub metrics: Arc<MetricsRegistry>,
}

impl RecordsState {
    pub fn new(store: Arc<dyn RecordStore>, metrics: Arc<MetricsRegistry>) -> Self {
        Self { store, metrics }
    }

    fn storage_failure(&self, err: StorageError) -> ApiError {
        self.metrics.increment_storage_failures();

        let record_id = err.record_id().map(|id| id.to_string()).unwrap_or_default();
        let reason = err.to_string();
        log_event_with_fields(
            Event::StorageUnavailable,
            &[
                ("backend", self.store.backend_name()),
                ("operation", err.operation().as_str()),
                ("reason", &reason),
                ("record_id", &record_id),
            ],
        );

        ApiError::Storage(err)
    }

    fn rejected(&self, err: impl Into<ApiError>) -> ApiError {
        let err = err.into();
        self.metrics.increment_validation_rejections();
        log_event_with_fields(Event::ValidationRejected, &[("reason", &err.to_string())]);
        err
    }

    fn not_found(&self) -> ApiError {
        self.metrics.increment_not_found();
        ApiError::NotFound
    }

    fn parse_id(&self, raw: &str) -> ApiResult<i64> {
        parse_record_id(raw).map_err(|e| self.rejected(e))
    }

    fn parse_payload(
        &self,
        payload: Result<Json<RecordPayload>, JsonRejection>,
    ) -> ApiResult<NewRecord> {
        let Json(payload) = payload.map_err(|e| self.rejected(e))?;
        payload.validate().map_err(|e| self.rejected(e))
    }
}

// ==================
// Request Types
// ==================

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

// ==================
// Record Routes
// ==================

/// Create record routes
pub fn record_routes(state: Arc<RecordsState>) -> Router {
    Router::new()
        .route(
            "/records",
            get(list_records_handler).post(create_record_handler),
        )
        .route("/records/search", get(search_records_handler))
        .route(
            "/records/:id",
            get(get_record_handler)
                .patch(update_record_handler)
                .delete(delete_record_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_records_handler(
    State(state): State<Arc<RecordsState>>,
) -> ApiResult<Json<Vec<Record>>> {
    let records = state
        .store
        .get_records()
        .await
        .map_err(|e| state.storage_failure(e))?;

    Ok(Json(records))
}

async fn search_records_handler(
    State(state): State<Arc<RecordsState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Record>>> {
    let records = state
        .store
        .search_records(&params.q)
        .await
        .map_err(|e| state.storage_failure(e))?;

    Ok(Json(records))
}

async fn get_record_handler(
    State(state): State<Arc<RecordsState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Record>> {
    let id = state.parse_id(&raw_id)?;

    let record = state
        .store
        .get_record(id)
        .await
        .map_err(|e| state.storage_failure(e))?
        .ok_or_else(|| state.not_found())?;

    Ok(Json(record))
}

async fn create_record_handler(
    State(state): State<Arc<RecordsState>>,
    payload: Result<Json<RecordPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let input = state.parse_payload(payload)?;

    let record = state
        .store
        .create_record(input)
        .await
        .map_err(|e| state.storage_failure(e))?;

    state.metrics.increment_created();
    log_event_with_fields(Event::RecordCreated, &[("record_id", &record.id.to_string())]);

    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_record_handler(
    State(state): State<Arc<RecordsState>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<RecordPayload>, JsonRejection>,
) -> ApiResult<Json<UpdateResponse<Record>>> {
    let id = state.parse_id(&raw_id)?;
    let input = state.parse_payload(payload)?;

    let record = state
        .store
        .update_record(id, input)
        .await
        .map_err(|e| state.storage_failure(e))?
        .ok_or_else(|| state.not_found())?;

    state.metrics.increment_updated();
    log_event_with_fields(Event::RecordUpdated, &[("record_id", &raw_id)]);

    Ok(Json(UpdateResponse::new(record)))
}

async fn delete_record_handler(
    State(state): State<Arc<RecordsState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = state.parse_id(&raw_id)?;

    let removed = state
        .store
        .delete_record(id)
        .await
        .map_err(|e| state.storage_failure(e))?;

    if !removed {
        return Err(state.not_found());
    }

    state.metrics.increment_deleted();
    log_event_with_fields(Event::RecordDeleted, &[("record_id", &raw_id)]);

    Ok(StatusCode::NO_CONTENT)
}
