//! Deterministic event logs for tests.
//!
//! Ids are sequential UUIDs (`...0001`, `...0002`, ...) and timestamps
//! advance one minute per event from a fixed base time, so derived
//! values and exports are stable across runs.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rinkstat_types::{Event, EventId, EventKind};
use uuid::Uuid;

/// Sequential fixture id: `event_id(1)` is `00000000-0000-0000-0000-000000000001`
pub fn event_id(n: u128) -> EventId {
    EventId::from_uuid(Uuid::from_u128(n))
}

/// Base time of every fixture log: 2025-12-14T19:00:00Z
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 14, 19, 0, 0)
        .single()
        .expect("valid fixture base time")
}

/// Build a log from a sequence of kinds with default ids and timestamps
pub fn log_of(kinds: &[EventKind]) -> Vec<Event> {
    LogBuilder::new().kinds(kinds).build()
}

/// Fluent builder for fixture logs.
///
/// # Example
/// ```
/// use rinkstat_testing::LogBuilder;
/// use rinkstat_types::EventKind;
///
/// let events = LogBuilder::new()
///     .push(EventKind::GameStart)
///     .push(EventKind::KevGoal)
///     .push(EventKind::GameEnd)
///     .build();
/// assert_eq!(events.len(), 3);
/// ```
pub struct LogBuilder {
    next_id: u128,
    next_time: DateTime<Utc>,
    step: Duration,
    events: Vec<Event>,
}

impl Default for LogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBuilder {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            next_time: base_time(),
            step: Duration::minutes(1),
            events: Vec::new(),
        }
    }

    /// Start the clock somewhere else (e.g. a different calendar day)
    pub fn starting_at(mut self, time: DateTime<Utc>) -> Self {
        self.next_time = time;
        self
    }

    /// Skip the clock forward without adding an event
    pub fn advance(mut self, by: Duration) -> Self {
        self.next_time += by;
        self
    }

    pub fn push(mut self, kind: EventKind) -> Self {
        let event = Event::new(event_id(self.next_id), kind, self.next_time);
        self.next_id += 1;
        self.next_time += self.step;
        self.events.push(event);
        self
    }

    pub fn kinds(self, kinds: &[EventKind]) -> Self {
        kinds.iter().fold(self, |builder, kind| builder.push(*kind))
    }

    /// One full game: start, the given goals, end
    pub fn game(self, goals: &[EventKind]) -> Self {
        self.push(EventKind::GameStart)
            .kinds(goals)
            .push(EventKind::GameEnd)
    }

    pub fn build(self) -> Vec<Event> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_and_times_are_sequential() {
        let events = log_of(&[EventKind::GameStart, EventKind::OppGoal]);
        assert_eq!(events[0].id, event_id(1));
        assert_eq!(events[1].id, event_id(2));
        assert_eq!(events[1].timestamp - events[0].timestamp, Duration::minutes(1));
    }

    #[test]
    fn test_game_wraps_goals() {
        let events = LogBuilder::new().game(&[EventKind::KevGoal]).build();
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EventKind::GameStart, EventKind::KevGoal, EventKind::GameEnd]
        );
    }
}
