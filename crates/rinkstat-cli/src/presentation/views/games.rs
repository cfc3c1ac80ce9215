use rinkstat_types::Game;
use std::fmt;

use crate::presentation::Style;

/// Completed games table, oldest first
pub struct GamesView<'a> {
    pub games: &'a [Game],
    pub style: Style,
}

impl<'a> fmt::Display for GamesView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.games.is_empty() {
            return writeln!(f, "No completed games");
        }

        writeln!(f, " #  Date        Lead  Kev  Har  Opp  OT  Result")?;
        for (index, game) in self.games.iter().enumerate() {
            writeln!(
                f,
                "{:>2}  {}  {:<4}  {:>3}  {:>3}  {:>3}  {:>2}  {}",
                index + 1,
                game.date,
                u8::from(game.lead),
                game.kev_goals,
                game.har_goals,
                game.opp_goals,
                u8::from(game.overtime),
                self.style.outcome(game.outcome())
            )?;
        }

        Ok(())
    }
}
