use rinkstat_types::{Game, SessionStats};

/// Aggregate session counters and rates over completed games.
pub fn summarize(games: &[Game]) -> SessionStats {
    let mut stats = SessionStats::default();

    for game in games {
        if game.lead {
            stats.leads += 1;
        }

        if game.win {
            stats.wins += 1;
            if game.max_trail > 0 {
                stats.comeback_wins += 1;
            }
            if game.lead {
                stats.lead_wins += 1;
            }
            if game.overtime {
                stats.overtime_wins += 1;
            }
        } else {
            stats.losses += 1;
            if game.max_lead > 0 {
                stats.blown_leads += 1;
            }
            if game.overtime {
                stats.overtime_losses += 1;
            }
        }

        stats.kev_goals += game.kev_goals;
        stats.har_goals += game.har_goals;
        stats.opp_goals += game.opp_goals;
    }

    stats.win_rate = percent(stats.wins, stats.wins + stats.losses);
    stats.overtime_win_rate = percent(
        stats.overtime_wins,
        stats.overtime_wins + stats.overtime_losses,
    );
    stats.lead_conversion_rate = percent(stats.lead_wins, stats.leads);

    stats
}

/// `part / whole` as a whole percentage, rounding halves up; 0 when `whole` is 0
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }

    let (part, whole) = (u64::from(part), u64::from(whole));
    // floor(100 * part / whole + 1/2)
    ((200 * part + whole) / (2 * whole)) as u32
}
