// NOTE: rinkstat layering
//
// types   -> event and game schemas
// engine  -> pure derivations (games, stats, export); rerun on every change
// runtime -> the owned event log behind a lock, observers, config
// cli     -> this crate: the presentation collaborator
//
// The CLI never keeps derived state. Every redraw starts from a fresh
// SessionView built from the whole log.

mod args;
mod commands;
mod console;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, ExportCommand};
pub use commands::run;
