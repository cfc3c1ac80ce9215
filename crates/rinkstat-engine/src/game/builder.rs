use chrono::NaiveDate;
use rinkstat_types::{CurrentGame, Event, EventKind, Game, margin};

/// Running tally of one game while the log is folded.
///
/// Every event updates the counters and then the margin-derived fields.
/// `lead` is monotonic: once set it is never cleared, even if the margin
/// later drops back to zero or below.
#[derive(Debug, Clone)]
pub struct GameBuilder {
    date: NaiveDate,
    lead: bool,
    kev_goals: u32,
    har_goals: u32,
    opp_goals: u32,
    overtime: bool,
    max_lead: u32,
    max_trail: u32,
}

impl GameBuilder {
    /// Open a game at the given `gameStart`
    pub fn new(start: &Event) -> Self {
        Self {
            date: start.timestamp.date_naive(),
            lead: false,
            kev_goals: 0,
            har_goals: 0,
            opp_goals: 0,
            overtime: false,
            max_lead: 0,
            max_trail: 0,
        }
    }

    pub fn add_event(&mut self, event: &Event) {
        match event.kind {
            EventKind::KevGoal => self.kev_goals += 1,
            EventKind::HarGoal => self.har_goals += 1,
            EventKind::OppGoal => self.opp_goals += 1,
            EventKind::OvertimeStart => self.overtime = true,
            EventKind::GameStart | EventKind::GameEnd => {}
        }

        self.update_margin();
    }

    pub fn margin(&self) -> i64 {
        margin(self.kev_goals, self.har_goals, self.opp_goals)
    }

    fn update_margin(&mut self) {
        let margin = self.margin();

        if margin > 0 {
            if !self.overtime {
                self.lead = true;
            }
            self.max_lead = self.max_lead.max(clamp(margin));
        }

        if margin < 0 {
            self.max_trail = self.max_trail.max(clamp(-margin));
        }
    }

    /// Close the game at `gameEnd`; a win needs a strictly positive margin
    pub fn build_completed(self) -> Game {
        let win = self.margin() > 0;

        Game {
            date: self.date,
            lead: self.lead,
            kev_goals: self.kev_goals,
            har_goals: self.har_goals,
            opp_goals: self.opp_goals,
            overtime: self.overtime,
            max_lead: self.max_lead,
            max_trail: self.max_trail,
            win,
        }
    }

    pub fn build_current(self, active: bool) -> CurrentGame {
        CurrentGame {
            date: Some(self.date),
            lead: self.lead,
            kev_goals: self.kev_goals,
            har_goals: self.har_goals,
            opp_goals: self.opp_goals,
            overtime: self.overtime,
            max_lead: self.max_lead,
            max_trail: self.max_trail,
            active,
        }
    }
}

fn clamp(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rinkstat_testing::log_of;

    fn fold(kinds: &[EventKind]) -> GameBuilder {
        let events = log_of(kinds);
        let mut builder = GameBuilder::new(&events[0]);
        for event in &events[1..] {
            builder.add_event(event);
        }
        builder
    }

    #[test]
    fn test_lead_is_not_set_in_overtime() {
        let game = fold(&[
            EventKind::GameStart,
            EventKind::OvertimeStart,
            EventKind::HarGoal,
        ])
        .build_completed();

        assert!(!game.lead);
        assert_eq!(game.max_lead, 1);
        assert!(game.win);
    }

    #[test]
    fn test_lead_stays_set_after_margin_drops() {
        let game = fold(&[
            EventKind::GameStart,
            EventKind::KevGoal,
            EventKind::OppGoal,
            EventKind::OppGoal,
        ])
        .build_completed();

        assert!(game.lead);
        assert_eq!(game.max_lead, 1);
        assert_eq!(game.max_trail, 1);
        assert!(!game.win);
    }

    #[test]
    fn test_tied_game_is_not_a_win() {
        let game = fold(&[EventKind::GameStart, EventKind::KevGoal, EventKind::OppGoal])
            .build_completed();

        assert_eq!(game.margin(), 0);
        assert!(!game.win);
    }

    #[test]
    fn test_date_comes_from_game_start() {
        let events = log_of(&[EventKind::GameStart]);
        let game = GameBuilder::new(&events[0]).build_current(true);
        assert_eq!(game.date, NaiveDate::from_ymd_opt(2025, 12, 14));
    }
}
