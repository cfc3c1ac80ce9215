//! Testing infrastructure for rinkstat tests.
//!
//! - `fixtures`: deterministic event logs (fixed ids and timestamps)
//! - `world`: isolated temp directory for driving the CLI

pub mod fixtures;
pub mod world;

pub use fixtures::{LogBuilder, event_id, log_of};
pub use world::{CliResult, TestWorld};
