use crate::Result;
use rinkstat_engine::SessionView;

/// Receives a fresh view after every change to the session's log.
///
/// This is the render callback of a presentation layer: the session
/// never draws anything itself.
pub trait SessionObserver: Send {
    fn name(&self) -> &str;
    fn on_change(&mut self, view: &SessionView) -> Result<()>;
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionView) -> Result<()> + Send,
{
    fn name(&self) -> &str {
        "callback"
    }

    fn on_change(&mut self, view: &SessionView) -> Result<()> {
        self(view)
    }
}
