use rinkstat_runtime::Labels;
use rinkstat_types::SessionStats;
use std::fmt;

pub struct StatsView<'a> {
    pub stats: &'a SessionStats,
    pub labels: &'a Labels,
}

impl<'a> fmt::Display for StatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        writeln!(f, "Record           {}", s.record())?;
        writeln!(f, "Win rate         {}%", s.win_rate)?;
        writeln!(f, "Overtime wins    {}%", s.overtime_win_rate)?;
        writeln!(f, "Lead conversion  {}%", s.lead_conversion_rate)?;
        writeln!(f, "Blown leads      {}", s.blown_leads)?;
        writeln!(f, "Comeback wins    {}", s.comeback_wins)?;
        writeln!(
            f,
            "Goals            {} {} | {} {} | {} {}",
            self.labels.kev, s.kev_goals, self.labels.har, s.har_goals, self.labels.opp, s.opp_goals
        )
    }
}
