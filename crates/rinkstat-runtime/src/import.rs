use crate::{EventLog, Result};
use rinkstat_types::Event;
use std::path::Path;

/// Parse a JSON array of events into a log.
///
/// Events keep the file's order; a repeated id is an error.
pub fn parse_events(json: &str) -> Result<EventLog> {
    let events: Vec<Event> = serde_json::from_str(json)?;
    Ok(EventLog::from_events(events)?)
}

/// Read an event file written as a JSON array.
pub fn read_events(path: &Path) -> Result<EventLog> {
    let content = std::fs::read_to_string(path)?;
    parse_events(&content)
}
