use rinkstat_types::{Event, EventId, EventKind};
use std::str::FromStr;

/// Shortest id prefix accepted by `delete`
const MIN_PREFIX: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Games,
    Events,
}

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Record(EventKind),
    Delete(String),
    Events,
    Games,
    Stats,
    Score,
    Copy(CopyTarget),
    Help,
    Quit,
    Empty,
}

impl FromStr for ConsoleCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(ConsoleCommand::Empty);
        };
        let arg = words.next();

        if let Some(kind) = EventKind::from_alias(head) {
            return Ok(ConsoleCommand::Record(kind));
        }

        match (head, arg) {
            ("delete" | "del" | "rm", Some(id)) => Ok(ConsoleCommand::Delete(id.to_string())),
            ("delete" | "del" | "rm", None) => Err("Usage: delete <event id>".to_string()),
            ("events", _) => Ok(ConsoleCommand::Events),
            ("games", _) => Ok(ConsoleCommand::Games),
            ("stats", _) => Ok(ConsoleCommand::Stats),
            ("score", _) => Ok(ConsoleCommand::Score),
            ("copy", Some("games")) => Ok(ConsoleCommand::Copy(CopyTarget::Games)),
            ("copy", Some("events")) => Ok(ConsoleCommand::Copy(CopyTarget::Events)),
            ("copy", _) => Err("Usage: copy games|events".to_string()),
            ("help" | "?", _) => Ok(ConsoleCommand::Help),
            ("quit" | "exit" | "q", _) => Ok(ConsoleCommand::Quit),
            _ => Err(format!("Unknown command: {}", line.trim())),
        }
    }
}

/// Resolve a full event id or a unique prefix of one.
///
/// A well-formed id that is not in the log is returned as-is; removing it
/// is a no-op.
pub fn resolve_id(events: &[Event], needle: &str) -> Result<EventId, String> {
    if let Ok(id) = needle.parse::<EventId>() {
        return Ok(id);
    }

    if needle.len() < MIN_PREFIX {
        return Err(format!(
            "Event id prefix must be at least {} characters",
            MIN_PREFIX
        ));
    }

    let prefix = needle.to_ascii_lowercase();
    let matches: Vec<EventId> = events
        .iter()
        .map(|event| event.id)
        .filter(|id| id.to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(format!("No event matches '{}'", needle)),
        many => Err(format!(
            "'{}' matches {} events; use more characters",
            needle,
            many.len()
        )),
    }
}

pub const HELP: &str = "\
Commands:
  start | end | ot        game start, game end, overtime start
  kev | har | opp         goal by Kev, Har or the opponent
  delete <id>             remove an event (id or unique prefix)
  events | games | stats  show the log, completed games, session stats
  score                   show the current game again
  copy games|events       print the tab-separated export
  help | quit";
