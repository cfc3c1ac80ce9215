use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary of one completed `gameStart … gameEnd` interval.
///
/// Derived from the event log on every read; it has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Calendar date (UTC) of the opening `gameStart`
    pub date: NaiveDate,
    /// Team held a positive margin at some point outside overtime
    pub lead: bool,
    pub kev_goals: u32,
    pub har_goals: u32,
    pub opp_goals: u32,
    /// Overtime was started in this game
    pub overtime: bool,
    /// Largest positive margin reached
    pub max_lead: u32,
    /// Largest deficit reached
    pub max_trail: u32,
    /// Margin was strictly positive at `gameEnd`
    pub win: bool,
}

impl Game {
    pub fn team_goals(&self) -> u32 {
        self.kev_goals + self.har_goals
    }

    pub fn margin(&self) -> i64 {
        margin(self.kev_goals, self.har_goals, self.opp_goals)
    }

    /// Classification by final score, independent of the `win` flag
    pub fn outcome(&self) -> Outcome {
        Outcome::from_margin(self.margin())
    }
}

/// The game in progress: the fold of everything from the most recent
/// `gameStart` to the end of the log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentGame {
    /// None when the log holds no `gameStart` at all
    pub date: Option<NaiveDate>,
    pub lead: bool,
    pub kev_goals: u32,
    pub har_goals: u32,
    pub opp_goals: u32,
    pub overtime: bool,
    pub max_lead: u32,
    pub max_trail: u32,
    /// Started and not yet ended
    pub active: bool,
}

impl CurrentGame {
    pub fn team_goals(&self) -> u32 {
        self.kev_goals + self.har_goals
    }

    pub fn margin(&self) -> i64 {
        margin(self.kev_goals, self.har_goals, self.opp_goals)
    }

    pub fn is_tied(&self) -> bool {
        self.margin() == 0
    }
}

/// Team goals minus opponent goals
pub fn margin(kev: u32, har: u32, opp: u32) -> i64 {
    i64::from(kev) + i64::from(har) - i64::from(opp)
}

/// Final-score classification used by the recent results strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
    /// Level score; only reachable when a game was ended while tied
    Even,
}

impl Outcome {
    pub fn from_margin(margin: i64) -> Self {
        match margin {
            m if m > 0 => Outcome::Win,
            m if m < 0 => Outcome::Loss,
            _ => Outcome::Even,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Loss => 'L',
            Outcome::Even => '-',
        }
    }
}

/// Which scorekeeping actions make sense given the current game.
///
/// Advisory only: the event log accepts any sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub start_game: bool,
    pub end_game: bool,
    pub start_overtime: bool,
    /// Shared by all three goal actions
    pub goals: bool,
}

/// Home/away view of the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub home: u32,
    pub away: u32,
    pub lead: bool,
    pub overtime: bool,
    pub max_lead: u32,
    pub max_trail: u32,
    pub active: bool,
}

impl From<&CurrentGame> for Scoreboard {
    fn from(game: &CurrentGame) -> Self {
        Self {
            home: game.team_goals(),
            away: game.opp_goals,
            lead: game.lead,
            overtime: game.overtime,
            max_lead: game.max_lead,
            max_trail: game.max_trail,
            active: game.active,
        }
    }
}
