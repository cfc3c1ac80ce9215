use rinkstat_types::{Controls, CurrentGame, Game, Outcome};

/// Which actions the presentation layer should offer for the current game
pub fn controls(current: &CurrentGame) -> Controls {
    let tied = current.is_tied();

    Controls {
        start_game: !current.active,
        end_game: current.active && !tied,
        start_overtime: current.active && tied && !current.overtime,
        goals: current.active,
    }
}

/// Outcomes of the last `limit` completed games, newest first
pub fn recent_results(games: &[Game], limit: usize) -> Vec<Outcome> {
    games.iter().rev().take(limit).map(Game::outcome).collect()
}
