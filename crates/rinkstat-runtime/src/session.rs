use crate::{EventLog, Result, SessionObserver};
use rinkstat_engine::{
    SessionView, build_completed_games, build_current_game, build_view, format_events_as_text,
    format_games_as_text, summarize,
};
use rinkstat_types::{CurrentGame, Event, EventId, EventKind, Game, SessionStats};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Shared handle to one scorekeeping session.
///
/// The log sits behind a mutex held for the whole of each mutation or
/// derivation, so a derivation never sees a half-applied change. Clones
/// share the same log and observers.
///
/// Observers run after the log lock is released but while the observer
/// list is held. They get everything they need in the view and must not
/// call back into the session.
#[derive(Clone)]
pub struct Session {
    log: Arc<Mutex<EventLog>>,
    observers: Arc<Mutex<Vec<Box<dyn SessionObserver>>>>,
    recent_limit: usize,
}

impl Session {
    pub fn new(recent_limit: usize) -> Self {
        Self::with_log(EventLog::new(), recent_limit)
    }

    pub fn with_log(log: EventLog, recent_limit: usize) -> Self {
        Self {
            log: Arc::new(Mutex::new(log)),
            observers: Arc::new(Mutex::new(Vec::new())),
            recent_limit,
        }
    }

    pub fn subscribe(&self, observer: impl SessionObserver + 'static) -> Result<()> {
        self.observers.lock()?.push(Box::new(observer));
        Ok(())
    }

    /// Record a new event and notify observers
    pub fn append(&self, kind: EventKind) -> Result<Event> {
        self.mutate(|log| log.append(kind))
    }

    /// Remove an event by id; unknown ids are a no-op. Observers are
    /// notified either way.
    pub fn remove(&self, id: &EventId) -> Result<bool> {
        self.mutate(|log| log.remove(id))
    }

    pub fn events(&self) -> Result<Vec<Event>> {
        Ok(self.log.lock()?.list().to_vec())
    }

    pub fn view(&self) -> Result<SessionView> {
        let log = self.log.lock()?;
        Ok(build_view(log.list(), self.recent_limit))
    }

    pub fn completed_games(&self) -> Result<Vec<Game>> {
        Ok(build_completed_games(self.log.lock()?.list()))
    }

    pub fn current_game(&self) -> Result<CurrentGame> {
        Ok(build_current_game(self.log.lock()?.list()))
    }

    pub fn stats(&self) -> Result<SessionStats> {
        Ok(summarize(&self.completed_games()?))
    }

    pub fn export_games(&self) -> Result<String> {
        Ok(format_games_as_text(&self.completed_games()?))
    }

    pub fn export_events(&self) -> Result<String> {
        Ok(format_events_as_text(self.log.lock()?.list()))
    }

    /// Apply a change and deliver the resulting view.
    ///
    /// Locks are always taken log first, then observers. The observer
    /// lock is acquired before the log lock is released, so observers
    /// receive views in the order the changes were applied.
    fn mutate<T>(&self, change: impl FnOnce(&mut EventLog) -> T) -> Result<T> {
        let mut log = self.log.lock()?;
        let outcome = change(&mut log);
        let view = build_view(log.list(), self.recent_limit);

        let mut observers = self.observers.lock()?;
        drop(log);

        // failures are logged; the change itself has already landed
        for observer in observers.iter_mut() {
            if let Err(err) = observer.on_change(&view) {
                warn!(observer = observer.name(), error = %err, "observer failed");
            }
        }

        Ok(outcome)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_RECENT_GAMES)
    }
}
