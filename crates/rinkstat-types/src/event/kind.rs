use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Scorekeeping action recorded by a single event.
///
/// The serialized names (`gameStart`, `kevGoal`, ...) are the ones that
/// appear in event exports, so they are part of the external format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    GameStart,
    GameEnd,
    KevGoal,
    HarGoal,
    OppGoal,
    OvertimeStart,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        EventKind::GameStart,
        EventKind::GameEnd,
        EventKind::KevGoal,
        EventKind::HarGoal,
        EventKind::OppGoal,
        EventKind::OvertimeStart,
    ];

    /// Wire name used in exports and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::GameStart => "gameStart",
            EventKind::GameEnd => "gameEnd",
            EventKind::KevGoal => "kevGoal",
            EventKind::HarGoal => "harGoal",
            EventKind::OppGoal => "oppGoal",
            EventKind::OvertimeStart => "overtimeStart",
        }
    }

    /// Short name accepted by the console
    pub fn alias(&self) -> &'static str {
        match self {
            EventKind::GameStart => "start",
            EventKind::GameEnd => "end",
            EventKind::KevGoal => "kev",
            EventKind::HarGoal => "har",
            EventKind::OppGoal => "opp",
            EventKind::OvertimeStart => "ot",
        }
    }

    /// Resolve either the wire name or the short alias
    pub fn from_alias(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.alias() == s)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownEventKind(s.to_string()))
    }
}
