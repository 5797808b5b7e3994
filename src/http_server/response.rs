//! # Response Formatting
//!
//! Response bodies that are not a bare record or record list.

use serde::Serialize;

/// Error body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Envelope returned by a successful update
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> UpdateResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: "Record updated successfully".to_string(),
            data,
        }
    }
}
