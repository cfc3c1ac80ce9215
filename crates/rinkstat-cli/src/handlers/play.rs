use super::HandlerContext;
use crate::console::{ConsoleCommand, CopyTarget, HELP, resolve_id};
use crate::presentation::Style;
use crate::presentation::views::{EventsView, GamesView, ScoreboardView, StatsView};
use anyhow::Result;
use rinkstat_engine::SessionView;
use rinkstat_runtime::{Labels, Session, SessionObserver};
use std::io::{self, BufRead, Write};

/// Redraws the scoreboard after every change to the log
struct ScoreboardPrinter {
    labels: Labels,
    style: Style,
    json: bool,
}

impl SessionObserver for ScoreboardPrinter {
    fn name(&self) -> &str {
        "scoreboard"
    }

    fn on_change(&mut self, view: &SessionView) -> rinkstat_runtime::Result<()> {
        let mut out = io::stdout().lock();
        if self.json {
            writeln!(out, "{}", serde_json::to_string(view)?)?;
        } else {
            writeln!(
                out,
                "{}",
                ScoreboardView {
                    view,
                    labels: &self.labels,
                    style: self.style,
                }
            )?;
        }
        out.flush()?;
        Ok(())
    }
}

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let session = Session::new(ctx.config.recent_games);
    let mut printer = ScoreboardPrinter {
        labels: ctx.config.labels.clone(),
        style: ctx.style(),
        json: ctx.format.is_json(),
    };
    printer.on_change(&session.view()?)?;
    session.subscribe(printer)?;

    let mut renderer = ctx.renderer();
    let labels = &ctx.config.labels;
    let style = ctx.style();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(line) = lines.next() {
        let line = line?;
        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{}", message);
                continue;
            }
        };

        match command {
            ConsoleCommand::Empty => {}
            ConsoleCommand::Record(kind) => {
                session.append(kind)?;
            }
            ConsoleCommand::Delete(needle) => {
                let id = match resolve_id(&session.events()?, &needle) {
                    Ok(id) => id,
                    Err(message) => {
                        eprintln!("{}", message);
                        continue;
                    }
                };

                if ctx.config.confirm_delete {
                    eprint!("Delete event {}? [y/N] ", id);
                    let answer = lines.next().transpose()?.unwrap_or_default();
                    if !matches!(answer.trim(), "y" | "Y" | "yes") {
                        eprintln!("Kept");
                        continue;
                    }
                }

                if !session.remove(&id)? {
                    eprintln!("No event with id {}", id);
                }
            }
            ConsoleCommand::Events => {
                let events = session.events()?;
                renderer.render(&events, EventsView { events: &events })?;
            }
            ConsoleCommand::Games => {
                let games = session.completed_games()?;
                renderer.render(
                    &games,
                    GamesView {
                        games: &games,
                        style,
                    },
                )?;
            }
            ConsoleCommand::Stats => {
                let stats = session.stats()?;
                renderer.render(
                    &stats,
                    StatsView {
                        stats: &stats,
                        labels,
                    },
                )?;
            }
            ConsoleCommand::Score => {
                let view = session.view()?;
                renderer.render(
                    &view,
                    ScoreboardView {
                        view: &view,
                        labels,
                        style,
                    },
                )?;
            }
            ConsoleCommand::Copy(target) => {
                let text = match target {
                    CopyTarget::Games => session.export_games()?,
                    CopyTarget::Events => session.export_events()?,
                };
                renderer.text(&text)?;
                eprintln!("Copied to clipboard");
            }
            ConsoleCommand::Help => println!("{}", HELP),
            ConsoleCommand::Quit => break,
        }
    }

    Ok(())
}
