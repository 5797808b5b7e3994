//! Observable events for recordkeeper
//!
//! Events are explicit and typed; each renders to a stable upper-case name.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Record store built and reachable
    StorageOpened,
    /// Listener bound, ready for requests
    Serving,
    /// Listener stopped
    ShutdownComplete,

    // Requests
    /// One HTTP request served
    HttpRequest,
    /// Request body or id rejected before storage
    ValidationRejected,

    // Records
    /// Record created
    RecordCreated,
    /// Record updated
    RecordUpdated,
    /// Record deleted
    RecordDeleted,

    // Failures
    /// Backing medium could not complete an operation
    StorageUnavailable,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "RECORDKEEPER_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StorageOpened => "STORAGE_OPENED",
            Event::Serving => "RECORDKEEPER_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::HttpRequest => "HTTP_REQUEST",
            Event::ValidationRejected => "VALIDATION_REJECTED",

            Event::RecordCreated => "RECORD_CREATED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordDeleted => "RECORD_DELETED",

            Event::StorageUnavailable => "STORAGE_UNAVAILABLE",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_error(&self) -> bool {
        matches!(self, Event::StorageUnavailable)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
