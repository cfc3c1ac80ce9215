use rinkstat_engine::SessionView;
use rinkstat_runtime::Labels;
use std::fmt;

use crate::presentation::Style;

/// Scoreboard, current game details and the actions on offer
pub struct ScoreboardView<'a> {
    pub view: &'a SessionView,
    pub labels: &'a Labels,
    pub style: Style,
}

impl<'a> ScoreboardView<'a> {
    fn status(&self) -> &'static str {
        let current = &self.view.current;
        match (current.active, current.date) {
            (true, _) => "live",
            (false, Some(_)) => "final",
            (false, None) => "no game",
        }
    }

    fn next_actions(&self) -> Vec<&'static str> {
        let controls = &self.view.controls;
        let mut actions = Vec::new();
        if controls.start_game {
            actions.push("start");
        }
        if controls.goals {
            actions.extend(["kev", "har", "opp"]);
        }
        if controls.start_overtime {
            actions.push("ot");
        }
        if controls.end_game {
            actions.push("end");
        }
        actions
    }

    fn recent(&self) -> String {
        if self.view.recent.is_empty() {
            return "(none)".to_string();
        }
        self.view
            .recent
            .iter()
            .map(|outcome| self.style.outcome(*outcome))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> fmt::Display for ScoreboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = &self.view.scoreboard;
        let current = &self.view.current;
        let yes_no = |flag: bool| if flag { "yes" } else { "no" };

        writeln!(
            f,
            "{}",
            self.style.heading(&format!(
                "Home {} - {} Away ({})",
                board.home,
                board.away,
                self.status()
            ))
        )?;
        writeln!(
            f,
            "{} {} | {} {} | {} {}",
            self.labels.kev,
            current.kev_goals,
            self.labels.har,
            current.har_goals,
            self.labels.opp,
            current.opp_goals
        )?;
        writeln!(
            f,
            "Lead {} | Overtime {} | Max lead {} | Max trail {}",
            yes_no(board.lead),
            yes_no(board.overtime),
            board.max_lead,
            board.max_trail
        )?;
        writeln!(
            f,
            "Record {} | Recent {}",
            self.view.stats.record(),
            self.recent()
        )?;
        writeln!(f, "Next: {}", self.next_actions().join(" "))
    }
}
