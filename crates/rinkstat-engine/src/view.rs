use rinkstat_types::{Controls, CurrentGame, Event, Game, Outcome, Scoreboard, SessionStats};
use serde::{Deserialize, Serialize};

use crate::{
    build_completed_games, build_current_game, controls, recent_results, summarize,
};

/// Everything a presentation layer needs to redraw, derived from one log
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub events: Vec<Event>,
    pub games: Vec<Game>,
    pub current: CurrentGame,
    pub scoreboard: Scoreboard,
    pub controls: Controls,
    pub stats: SessionStats,
    pub recent: Vec<Outcome>,
}

/// Derive the full view from a log
pub fn build_view(events: &[Event], recent_limit: usize) -> SessionView {
    let games = build_completed_games(events);
    let current = build_current_game(events);
    let stats = summarize(&games);
    let recent = recent_results(&games, recent_limit);

    SessionView {
        events: events.to_vec(),
        scoreboard: Scoreboard::from(&current),
        controls: controls(&current),
        games,
        current,
        stats,
        recent,
    }
}
