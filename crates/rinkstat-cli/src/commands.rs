use super::args::{Cli, Commands, ConfigCommand, ExportCommand};
use super::console::CopyTarget;
use super::handlers::{self, HandlerContext};
use super::logging;
use anyhow::Result;
use rinkstat_runtime::{Config, resolve_config_path};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&config_path);
        return Ok(());
    };

    let config = Config::load_from(&config_path)?;
    let ctx = HandlerContext::new(cli.format, config, config_path);

    match command {
        Commands::Play => handlers::play::handle(&ctx),

        Commands::Replay { events } => handlers::replay::handle(&ctx, &events),

        Commands::Export { command } => match command {
            ExportCommand::Games { events } => {
                handlers::export::handle(&ctx, CopyTarget::Games, &events)
            }
            ExportCommand::Events { events } => {
                handlers::export::handle(&ctx, CopyTarget::Events, &events)
            }
        },

        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
            ConfigCommand::Show => handlers::config::show(&ctx),
        },
    }
}

fn show_guidance(config_path: &Path) {
    println!("rinkstat - hockey scorekeeping\n");

    println!("Quick commands:");
    println!("  rinkstat play                     # Keep score (type 'help' inside)");
    println!("  rinkstat replay <events.json>     # Games and stats from an event file");
    println!("  rinkstat export games <file>      # Tab-separated game lines\n");

    if !config_path.exists() {
        println!("No config file at {}", config_path.display());
        println!("  rinkstat config init              # Write one with defaults\n");
    }

    println!("For more commands:");
    println!("  rinkstat --help");
}
