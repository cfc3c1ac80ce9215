use serde::{Deserialize, Serialize};

/// Session-wide counters and rates over completed games.
///
/// Rates are whole percentages; a rate whose denominator is zero is 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub wins: u32,
    pub losses: u32,
    pub overtime_wins: u32,
    pub overtime_losses: u32,
    /// Games in which a lead was held outside overtime
    pub leads: u32,
    /// Of those, games that were won
    pub lead_wins: u32,
    /// Losses that had a positive margin at some point
    pub blown_leads: u32,
    /// Wins that trailed at some point
    pub comeback_wins: u32,

    pub kev_goals: u32,
    pub har_goals: u32,
    pub opp_goals: u32,

    pub win_rate: u32,
    pub overtime_win_rate: u32,
    pub lead_conversion_rate: u32,
}

impl SessionStats {
    /// Win-loss record, e.g. `3-2`
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }
}
