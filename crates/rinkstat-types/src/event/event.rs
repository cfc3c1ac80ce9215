use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::kind::EventKind;

/// Unique identifier of an event within a log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Fresh random (v4) identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Scorekeeping event
/// Immutable once created; removed from a log only as a whole
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event ID
    pub id: EventId,

    /// What happened
    #[serde(rename = "type")]
    pub kind: EventKind,

    /// When it was recorded (UTC)
    pub timestamp: DateTime<Utc>,
}

impl Event {
    /// New event with a fresh id, stamped with the current time
    pub fn now(kind: EventKind) -> Self {
        Self::new(EventId::new(), kind, Utc::now())
    }

    pub fn new(id: EventId, kind: EventKind, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            kind,
            timestamp,
        }
    }

    /// ISO-8601 timestamp with millisecond precision, as shown in exports
    pub fn timestamp_iso(&self) -> String {
        self.timestamp
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}
