use super::HandlerContext;
use crate::presentation::views::ReplayView;
use anyhow::{Context, Result};
use rinkstat_runtime::{Session, read_events};
use std::path::Path;
use tracing::info;

pub fn handle(ctx: &HandlerContext, events_path: &Path) -> Result<()> {
    let log = read_events(events_path)
        .with_context(|| format!("Failed to load events from {}", events_path.display()))?;
    info!(events = log.len(), path = %events_path.display(), "replaying");

    let session = Session::with_log(log, ctx.config.recent_games);
    let view = session.view()?;

    ctx.renderer().render(
        &view,
        ReplayView {
            view: &view,
            labels: &ctx.config.labels,
            style: ctx.style(),
        },
    )
}
