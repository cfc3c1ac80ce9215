use super::HandlerContext;
use crate::console::CopyTarget;
use anyhow::{Context, Result};
use rinkstat_engine::{build_completed_games, format_events_as_text, format_games_as_text};
use rinkstat_runtime::read_events;
use std::path::Path;

pub fn handle(ctx: &HandlerContext, target: CopyTarget, events_path: &Path) -> Result<()> {
    let log = read_events(events_path)
        .with_context(|| format!("Failed to load events from {}", events_path.display()))?;

    let text = match target {
        CopyTarget::Games => format_games_as_text(&build_completed_games(log.list())),
        CopyTarget::Events => format_events_as_text(log.list()),
    };

    if !text.is_empty() {
        ctx.renderer().text(&text)?;
    }
    Ok(())
}
