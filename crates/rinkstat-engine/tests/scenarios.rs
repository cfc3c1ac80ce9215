use rinkstat_engine::{build_completed_games, build_current_game, summarize};
use rinkstat_testing::{LogBuilder, log_of};
use rinkstat_types::EventKind::*;
use rinkstat_types::Game;

#[test]
fn test_single_win_with_lead() {
    let events = log_of(&[GameStart, KevGoal, KevGoal, OppGoal, GameEnd]);
    let games = build_completed_games(&events);

    insta::assert_json_snapshot!(games, @r#"
    [
      {
        "date": "2025-12-14",
        "lead": true,
        "kev_goals": 2,
        "har_goals": 0,
        "opp_goals": 1,
        "overtime": false,
        "max_lead": 2,
        "max_trail": 0,
        "win": true
      }
    ]
    "#);
}

#[test]
fn test_loss_after_trailing() {
    let events = log_of(&[GameStart, OppGoal, OppGoal, KevGoal, GameEnd]);
    let games = build_completed_games(&events);

    assert_eq!(games.len(), 1);
    let game = &games[0];
    assert_eq!(game.kev_goals, 1);
    assert_eq!(game.opp_goals, 2);
    assert!(!game.win);
    assert_eq!(game.max_trail, 2);
    assert_eq!(game.max_lead, 0);
    assert!(!game.lead);
}

#[test]
fn test_restart_discards_unterminated_game() {
    let events = log_of(&[GameStart, KevGoal, GameStart, HarGoal, OppGoal, GameEnd]);
    let games = build_completed_games(&events);

    assert_eq!(games.len(), 1);
    let game = &games[0];
    assert_eq!(game.kev_goals, 0);
    assert_eq!(game.har_goals, 1);
    assert_eq!(game.opp_goals, 1);
    assert!(!game.win);
}

#[test]
fn test_comeback_and_blown_lead() {
    let events = LogBuilder::new()
        // trails by 2, wins 3-2
        .game(&[OppGoal, OppGoal, KevGoal, HarGoal, KevGoal])
        // leads by 3, loses 3-4
        .game(&[KevGoal, KevGoal, HarGoal, OppGoal, OppGoal, OppGoal, OppGoal])
        .build();
    let games = build_completed_games(&events);

    assert_eq!(games[0].max_trail, 2);
    assert!(games[0].win);
    assert_eq!(games[1].max_lead, 3);
    assert!(!games[1].win);

    let stats = summarize(&games);
    assert_eq!(stats.comeback_wins, 1);
    assert_eq!(stats.blown_leads, 1);
    assert_eq!(stats.win_rate, 50);
    assert_eq!(stats.record(), "1-1");
}

#[test]
fn test_overtime_winner_does_not_count_as_lead() {
    let events = log_of(&[GameStart, OppGoal, KevGoal, OvertimeStart, HarGoal, GameEnd]);
    let games = build_completed_games(&events);

    let game = &games[0];
    assert!(game.overtime);
    assert!(game.win);
    assert!(!game.lead);

    let stats = summarize(&games);
    assert_eq!(stats.overtime_wins, 1);
    assert_eq!(stats.overtime_win_rate, 100);
    assert_eq!(stats.comeback_wins, 1);
    assert_eq!(stats.leads, 0);
}

#[test]
fn test_full_session_summary() {
    let events = LogBuilder::new()
        .game(&[KevGoal, OppGoal, HarGoal])
        .game(&[OppGoal])
        .game(&[KevGoal, OppGoal, OvertimeStart, OppGoal])
        .game(&[HarGoal, HarGoal, KevGoal])
        .push(GameStart)
        .push(KevGoal)
        .build();

    let games = build_completed_games(&events);
    let stats = summarize(&games);

    insta::assert_json_snapshot!(stats, @r#"
    {
      "wins": 2,
      "losses": 2,
      "overtime_wins": 0,
      "overtime_losses": 1,
      "leads": 3,
      "lead_wins": 2,
      "blown_leads": 1,
      "comeback_wins": 0,
      "kev_goals": 3,
      "har_goals": 3,
      "opp_goals": 4,
      "win_rate": 50,
      "overtime_win_rate": 0,
      "lead_conversion_rate": 67
    }
    "#);

    let current = build_current_game(&events);
    assert!(current.active);
    assert_eq!(current.kev_goals, 1);
}

#[test]
fn test_derivations_are_repeatable() {
    let events = LogBuilder::new()
        .game(&[KevGoal, OppGoal, OppGoal])
        .push(GameStart)
        .push(OppGoal)
        .build();

    let first: Vec<Game> = build_completed_games(&events);
    let second = build_completed_games(&events);
    assert_eq!(first, second);
    assert_eq!(build_current_game(&events), build_current_game(&events));
    assert_eq!(summarize(&first), summarize(&second));
}
