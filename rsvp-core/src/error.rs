//! Error types for RSVP tracking.

use thiserror::Error;

/// Errors that can occur in rsvp operations.
///
/// Lookups never fail: unknown event ids, unknown guests and absent or
/// malformed stored values resolve to defaults instead of producing one
/// of these.
#[derive(Error, Debug)]
pub enum RsvpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown event type: {0}")]
    UnknownEventType(String),

    #[error("Unknown guest: {0}")]
    UnknownGuest(String),

    #[error("Invalid RSVP status '{0}' (expected going, maybe, declined or no-response)")]
    InvalidStatus(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),
}

/// Result type alias for rsvp operations.
pub type RsvpResult<T> = Result<T, RsvpError>;
