//! # Record Input Validation
//!
//! Shape checks applied to request input before it reaches a store.
//! Stores trust that anything they receive went through here.

use serde::Deserialize;
use thiserror::Error;

use super::record::{NewRecord, Priority, Status};

/// Maximum title length in characters
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum description length in characters
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Input rejected before reaching storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Invalid record ID. Please provide a valid number.")]
    InvalidId,
}

/// Request body for create and update
///
/// Unknown keys (including `id` and `createdAt`) are ignored. Absent
/// `status`/`priority` take their defaults, on update as well as create.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl RecordPayload {
    /// Check field constraints in declaration order, reporting the first failure
    pub fn validate(self) -> ValidationResult<NewRecord> {
        let title = require("Title", self.title, TITLE_MAX_CHARS)?;
        let description = require("Description", self.description, DESCRIPTION_MAX_CHARS)?;

        Ok(NewRecord {
            title,
            description,
            status: self.status.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
        })
    }
}

fn require(field: &'static str, value: Option<String>, max: usize) -> ValidationResult<String> {
    let value = value.unwrap_or_default();
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value)
}

/// Parse a path segment as a record id
///
/// Only the canonical decimal form is accepted: `"42"` and `"-3"` parse,
/// `"042"`, `"+42"`, `"4.2"` and `"42abc"` do not.
pub fn parse_record_id(raw: &str) -> ValidationResult<i64> {
    let id: i64 = raw.parse().map_err(|_| ValidationError::InvalidId)?;
    if id.to_string() != raw {
        return Err(ValidationError::InvalidId);
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, description: &str) -> RecordPayload {
        RecordPayload {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_payload_applies_defaults() {
        let input = payload("Buy milk", "Semi-skimmed").validate().unwrap();
        assert_eq!(input.title, "Buy milk");
        assert_eq!(input.status, Status::Todo);
        assert_eq!(input.priority, Priority::Medium);
    }

    #[test]
    fn test_missing_title_reported_first() {
        let err = RecordPayload::default().validate().unwrap_err();
        assert_eq!(err, ValidationError::Required("Title"));
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn test_empty_description() {
        let err = payload("t", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "Description is required");
    }

    #[test]
    fn test_length_limits_count_characters() {
        assert!(payload(&"é".repeat(100), "d").validate().is_ok());

        let err = payload(&"a".repeat(101), "d").validate().unwrap_err();
        assert_eq!(err.to_string(), "Title must be at most 100 characters");

        let err = payload("t", &"x".repeat(501)).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "Description",
                max: DESCRIPTION_MAX_CHARS
            }
        );
    }

    #[test]
    fn test_payload_ignores_identity_fields() {
        let body = r#"{"id": 99, "createdAt": "x", "title": "t", "description": "d", "status": "done"}"#;
        let input: RecordPayload = serde_json::from_str(body).unwrap();
        let input = input.validate().unwrap();
        assert_eq!(input.status, Status::Done);
    }

    #[test]
    fn test_payload_rejects_unknown_status() {
        let body = r#"{"title": "t", "description": "d", "status": "blocked"}"#;
        assert!(serde_json::from_str::<RecordPayload>(body).is_err());
    }

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id("42"), Ok(42));
        assert_eq!(parse_record_id("-3"), Ok(-3));
        for raw in ["", "042", "+42", "4.2", "42abc", "abc", "99999999999999999999"] {
            assert_eq!(parse_record_id(raw), Err(ValidationError::InvalidId), "{raw}");
        }
    }
}
