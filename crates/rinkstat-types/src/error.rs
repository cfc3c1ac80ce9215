use std::fmt;

use crate::EventId;

/// Result type for rinkstat-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Event type name that is not one of the six known kinds
    UnknownEventKind(String),

    /// An event with this id is already present in the log
    DuplicateEvent(EventId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownEventKind(name) => write!(f, "Unknown event type: {}", name),
            Error::DuplicateEvent(id) => write!(f, "Duplicate event id: {}", id),
        }
    }
}

impl std::error::Error for Error {}
