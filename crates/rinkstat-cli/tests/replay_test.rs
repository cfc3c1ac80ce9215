use rinkstat_testing::{LogBuilder, TestWorld, event_id, fixtures::base_time};
use rinkstat_types::Event;
use rinkstat_types::EventKind::*;

fn session_events() -> Vec<Event> {
    LogBuilder::new()
        .game(&[KevGoal, OppGoal, HarGoal])
        .push(GameStart)
        .push(OppGoal)
        .build()
}

#[test]
fn test_replay_plain_report() {
    let world = TestWorld::new();
    let path = world
        .write_events("session.json", &session_events())
        .expect("Failed to write events");

    let result = world
        .run(&["replay", path.to_str().unwrap()])
        .expect("Failed to run replay");

    assert!(result.success(), "replay failed: {}", result.stderr);
    assert!(
        result
            .stdout
            .contains(" 1  2025-12-14  1       1    1    1   0  W")
    );
    assert!(result.stdout.contains("Home 0 - 1 Away (live)"));
    assert!(result.stdout.contains("Record           1-0"));
}

#[test]
fn test_replay_json_view() {
    let world = TestWorld::new();
    let path = world
        .write_events("session.json", &session_events())
        .expect("Failed to write events");

    let result = world
        .run(&["--format", "json", "replay", path.to_str().unwrap()])
        .expect("Failed to run replay");

    assert!(result.success());
    let json = result.json().expect("Parse failed");
    assert_eq!(json["games"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["stats"]["wins"], 1);
    assert_eq!(json["current"]["active"], true);
    assert_eq!(json["current"]["date"], "2025-12-14");
    assert_eq!(json["recent"][0], "win");
}

#[test]
fn test_replay_respects_labels() {
    let world = TestWorld::new().with_config("[labels]\nkev = \"Kevin\"\n");
    let path = world
        .write_events("session.json", &session_events())
        .expect("Failed to write events");

    let result = world
        .run(&["replay", path.to_str().unwrap()])
        .expect("Failed to run replay");

    assert!(result.success());
    assert!(result.stdout.contains("Kevin 0 | Har 0 | Opp 1"));
}

#[test]
fn test_replay_rejects_duplicate_ids() {
    let world = TestWorld::new();
    let events = vec![
        Event::new(event_id(1), GameStart, base_time()),
        Event::new(event_id(1), GameEnd, base_time()),
    ];
    let path = world
        .write_events("dup.json", &events)
        .expect("Failed to write events");

    let result = world
        .run(&["replay", path.to_str().unwrap()])
        .expect("Failed to run replay");

    assert!(!result.success());
    assert!(result.stderr.contains("Duplicate event id"));
}

#[test]
fn test_replay_missing_file() {
    let world = TestWorld::new();

    let result = world
        .run(&["replay", "missing.json"])
        .expect("Failed to run replay");

    assert!(!result.success());
    assert!(result.stderr.contains("Failed to load events from missing.json"));
}

#[test]
fn test_rust_log_overrides_log_level() {
    let world = TestWorld::new().with_env("RUST_LOG", "info");
    let path = world
        .write_events("session.json", &session_events())
        .expect("Failed to write events");

    let result = world
        .run(&["replay", path.to_str().unwrap()])
        .expect("Failed to run replay");

    assert!(result.success());
    assert!(result.stderr.contains("replaying"), "{}", result.stderr);

    let quiet = TestWorld::new();
    let path = quiet
        .write_events("session.json", &session_events())
        .expect("Failed to write events");
    let result = quiet
        .run(&["replay", path.to_str().unwrap()])
        .expect("Failed to run replay");
    assert!(!result.stderr.contains("replaying"));
}
