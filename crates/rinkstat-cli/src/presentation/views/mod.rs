mod events;
mod games;
mod scoreboard;
mod stats;

pub use events::EventsView;
pub use games::GamesView;
pub use scoreboard::ScoreboardView;
pub use stats::StatsView;

use rinkstat_engine::SessionView;
use rinkstat_runtime::Labels;
use std::fmt;

use super::Style;

/// Full report used by `replay`: games, then the current game, then stats
pub struct ReplayView<'a> {
    pub view: &'a SessionView,
    pub labels: &'a Labels,
    pub style: Style,
}

impl<'a> fmt::Display for ReplayView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.style.heading("Games"))?;
        write!(
            f,
            "{}",
            GamesView {
                games: &self.view.games,
                style: self.style,
            }
        )?;

        writeln!(f)?;
        writeln!(f, "{}", self.style.heading("Current game"))?;
        write!(
            f,
            "{}",
            ScoreboardView {
                view: self.view,
                labels: self.labels,
                style: self.style,
            }
        )?;

        writeln!(f)?;
        writeln!(f, "{}", self.style.heading("Session"))?;
        write!(
            f,
            "{}",
            StatsView {
                stats: &self.view.stats,
                labels: self.labels,
            }
        )
    }
}
