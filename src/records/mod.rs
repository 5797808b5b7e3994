//! # Records
//!
//! The record entity and the validation rules applied before storage.

pub mod record;
pub mod validation;

pub use record::{NewRecord, Priority, Record, Status, UnknownVariant};
pub use validation::{
    parse_record_id, RecordPayload, ValidationError, ValidationResult, DESCRIPTION_MAX_CHARS,
    TITLE_MAX_CHARS,
};
