use rinkstat_types::{Event, Game};

/// Tab-separated games, newest first:
/// `date, lead, kevGoals, harGoals, oppGoals, overtime`
pub fn format_games_as_text(games: &[Game]) -> String {
    games
        .iter()
        .rev()
        .map(|game| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                game.date,
                flag(game.lead),
                game.kev_goals,
                game.har_goals,
                game.opp_goals,
                flag(game.overtime)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tab-separated events, newest first: `timestamp, type`
pub fn format_events_as_text(events: &[Event]) -> String {
    events
        .iter()
        .rev()
        .map(|event| format!("{}\t{}", event.timestamp_iso(), event.kind))
        .collect::<Vec<_>>()
        .join("\n")
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_completed_games;
    use chrono::{Duration, TimeZone, Utc};
    use rinkstat_testing::{LogBuilder, log_of};
    use rinkstat_types::EventKind::*;

    #[test]
    fn test_empty_exports_are_empty_strings() {
        assert_eq!(format_games_as_text(&[]), "");
        assert_eq!(format_events_as_text(&[]), "");
    }

    #[test]
    fn test_games_are_newest_first() {
        let events = LogBuilder::new()
            .game(&[KevGoal])
            .game(&[OppGoal, OppGoal])
            .build();
        let games = build_completed_games(&events);

        let text = format_games_as_text(&games);
        assert_eq!(text, "2025-12-14\t0\t0\t0\t2\t0\n2025-12-14\t1\t1\t0\t0\t0");
    }

    #[test]
    fn test_game_date_is_the_start_day() {
        let late = Utc.with_ymd_and_hms(2025, 12, 14, 23, 30, 0).unwrap();
        let next_evening = Utc.with_ymd_and_hms(2025, 12, 15, 19, 0, 0).unwrap();

        let first = LogBuilder::new()
            .starting_at(late)
            .push(GameStart)
            .push(KevGoal)
            .advance(Duration::hours(1))
            .push(GameEnd)
            .build();
        let second = LogBuilder::new()
            .starting_at(next_evening)
            .game(&[OppGoal])
            .build();
        // second builder restarts ids at 1; only dates matter here
        let games: Vec<_> = build_completed_games(&first)
            .into_iter()
            .chain(build_completed_games(&second))
            .collect();

        assert_eq!(
            format_games_as_text(&games),
            "2025-12-15\t0\t0\t0\t1\t0\n2025-12-14\t1\t1\t0\t0\t0"
        );
    }

    #[test]
    fn test_games_fields_split_back() {
        let events = LogBuilder::new()
            .game(&[KevGoal, HarGoal, OppGoal])
            .game(&[OppGoal, OvertimeStart, HarGoal, HarGoal])
            .build();
        let games = build_completed_games(&events);
        let text = format_games_as_text(&games);

        let rows: Vec<Vec<&str>> = text.split('\n').map(|l| l.split('\t').collect()).collect();
        assert_eq!(rows.len(), games.len());

        for (row, game) in rows.iter().zip(games.iter().rev()) {
            let expected = vec![
                game.date.to_string(),
                u8::from(game.lead).to_string(),
                game.kev_goals.to_string(),
                game.har_goals.to_string(),
                game.opp_goals.to_string(),
                u8::from(game.overtime).to_string(),
            ];
            assert_eq!(row, &expected);
        }
    }

    #[test]
    fn test_events_are_newest_first() {
        let events = log_of(&[GameStart, KevGoal]);
        let text = format_events_as_text(&events);
        assert_eq!(
            text,
            "2025-12-14T19:01:00.000Z\tkevGoal\n2025-12-14T19:00:00.000Z\tgameStart"
        );
    }
}
