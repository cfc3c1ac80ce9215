// Engine module - pure derivations over the event log (games, statistics, export)
// This layer sits between raw events (types) and the runtime/CLI layers.
// Nothing here reads a clock, touches I/O or keeps state between calls.

pub mod controls;
pub mod export;
pub mod game;
pub mod stats;
pub mod view;

pub use controls::{controls, recent_results};
pub use export::{format_events_as_text, format_games_as_text};
pub use game::{build_completed_games, build_current_game};
pub use stats::summarize;
pub use view::{SessionView, build_view};
