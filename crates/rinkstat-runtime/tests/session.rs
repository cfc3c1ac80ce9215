use rinkstat_runtime::{EventLog, Session};
use rinkstat_testing::{LogBuilder, event_id, log_of};
use rinkstat_types::EventKind::{self, *};
use rinkstat_engine::SessionView;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;

#[test]
fn test_remove_unknown_id_keeps_log() {
    let events = log_of(&[GameStart, KevGoal, HarGoal, OppGoal, GameEnd]);
    let session = Session::with_log(EventLog::from_events(events.clone()).unwrap(), 10);

    let removed = session.remove(&event_id(42)).unwrap();

    assert!(!removed);
    assert_eq!(session.events().unwrap(), events);
}

#[test]
fn test_deleting_game_end_reopens_game() {
    let events = log_of(&[GameStart, KevGoal, GameEnd]);
    let session = Session::with_log(EventLog::from_events(events).unwrap(), 10);
    assert_eq!(session.completed_games().unwrap().len(), 1);
    assert!(!session.current_game().unwrap().active);

    session.remove(&event_id(3)).unwrap();

    assert!(session.completed_games().unwrap().is_empty());
    assert!(session.current_game().unwrap().active);
    assert_eq!(session.stats().unwrap().record(), "0-0");
}

#[test]
fn test_session_exports_match_engine() {
    let events = LogBuilder::new()
        .game(&[KevGoal, OppGoal, OvertimeStart, HarGoal])
        .build();
    let session = Session::with_log(EventLog::from_events(events).unwrap(), 10);

    assert_eq!(session.export_games().unwrap(), "2025-12-14\t1\t1\t1\t1\t1");
    assert_eq!(
        session.export_events().unwrap().lines().next(),
        Some("2025-12-14T19:05:00.000Z\tgameEnd")
    );
}

#[test]
fn test_concurrent_appends_are_all_recorded() {
    let session = Session::default();
    session.append(GameStart).unwrap();

    let kinds: [EventKind; 3] = [KevGoal, HarGoal, OppGoal];
    let handles: Vec<_> = kinds
        .into_iter()
        .map(|kind| {
            let session = session.clone();
            thread::spawn(move || {
                for _ in 0..20 {
                    session.append(kind).unwrap();
                    // every derivation sees a whole log
                    let view = session.view().unwrap();
                    let goals =
                        view.current.kev_goals + view.current.har_goals + view.current.opp_goals;
                    assert_eq!(view.events.len() as u32, 1 + goals);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let events = session.events().unwrap();
    assert_eq!(events.len(), 61);

    let ids: HashSet<_> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), 61);

    let current = session.current_game().unwrap();
    assert_eq!(current.kev_goals, 20);
    assert_eq!(current.har_goals, 20);
    assert_eq!(current.opp_goals, 20);
    assert!(current.active);
}

#[test]
fn test_observers_see_concurrent_changes_in_order() {
    let session = Session::default();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    session
        .subscribe(move |view: &SessionView| -> rinkstat_runtime::Result<()> {
            sink.lock()?.push(view.events.len());
            Ok(())
        })
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let session = session.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    session.append(KevGoal).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let seen = seen.lock().unwrap();
    let expected: Vec<usize> = (1..=200).collect();
    assert_eq!(*seen, expected);
    assert_eq!(session.events().unwrap().len(), 200);
}
