use rinkstat_types::{Error, Event, EventId, EventKind, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Append-only event log, in creation order.
///
/// The only source of truth for a session; games and statistics are
/// recomputed from it on demand. Ids are unique at all times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from already-formed events, rejecting duplicate ids
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Result<Self> {
        let mut log = Self::new();
        for event in events {
            log.insert(event)?;
        }
        Ok(log)
    }

    /// Record a new event with a fresh id and the current time
    pub fn append(&mut self, kind: EventKind) -> Event {
        let event = Event::now(kind);
        debug!(event_id = %event.id, kind = %kind, "append event");
        self.events.push(event.clone());
        event
    }

    /// Append a fully-formed event; fails only if its id is already present
    pub fn insert(&mut self, event: Event) -> Result<()> {
        if self.contains(&event.id) {
            return Err(Error::DuplicateEvent(event.id));
        }
        self.events.push(event);
        Ok(())
    }

    /// Remove the event with `id`; an unknown id is a no-op.
    ///
    /// Returns whether an event was removed. Relative order of the
    /// remaining events is unchanged.
    pub fn remove(&mut self, id: &EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|event| &event.id != id);
        let removed = self.events.len() != before;

        if removed {
            debug!(event_id = %id, "removed event");
        } else {
            debug!(event_id = %id, "remove: no such event");
        }

        removed
    }

    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
