//! Game reconstruction from the event log.
//!
//! Both builders rescan the full log on every call; the log is small
//! (a few hundred events per session) and there is no derived state to
//! invalidate.

mod builder;

pub use builder::GameBuilder;

use rinkstat_types::{CurrentGame, Event, EventKind, Game};
use tracing::{debug, trace};

/// Build every completed game, oldest first.
///
/// Only `gameStart … gameEnd` pairs produce a game:
/// - a `gameStart` while a game is open discards the open game
/// - events outside an open game are ignored
/// - a trailing game with no `gameEnd` is not returned
pub fn build_completed_games(events: &[Event]) -> Vec<Game> {
    let mut games = Vec::new();
    let mut current: Option<GameBuilder> = None;

    for event in events {
        if event.kind == EventKind::GameStart {
            if current.replace(GameBuilder::new(event)).is_some() {
                debug!(event_id = %event.id, "dropping unterminated game at new gameStart");
            }
            continue;
        }

        let Some(builder) = current.as_mut() else {
            trace!(event_id = %event.id, kind = %event.kind, "ignoring event outside a game");
            continue;
        };

        builder.add_event(event);

        if event.kind == EventKind::GameEnd
            && let Some(builder) = current.take()
        {
            games.push(builder.build_completed());
        }
    }

    games
}

/// Fold everything from the most recent `gameStart` to the end of the log.
///
/// `active` is true after the `gameStart` and false after a later
/// `gameEnd`. Goals logged after that `gameEnd` still count, since the
/// fold does not stop there. A log without any `gameStart` yields the
/// zero-valued inactive game.
pub fn build_current_game(events: &[Event]) -> CurrentGame {
    let Some(start) = events
        .iter()
        .rposition(|event| event.kind == EventKind::GameStart)
    else {
        return CurrentGame::default();
    };

    let mut builder = GameBuilder::new(&events[start]);
    let mut active = true;

    for event in &events[start + 1..] {
        if event.kind == EventKind::GameEnd {
            active = false;
        }
        builder.add_event(event);
    }

    builder.build_current(active)
}
