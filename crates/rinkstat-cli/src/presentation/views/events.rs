use rinkstat_types::Event;
use std::fmt;

/// Event log, newest first, with the short id used by `delete`
pub struct EventsView<'a> {
    pub events: &'a [Event],
}

impl<'a> fmt::Display for EventsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.events.is_empty() {
            return writeln!(f, "No events");
        }

        for event in self.events.iter().rev() {
            let id = event.id.to_string();
            writeln!(
                f,
                "{}  {}  {}",
                &id[..8],
                event.timestamp_iso(),
                event.kind
            )?;
        }

        Ok(())
    }
}
