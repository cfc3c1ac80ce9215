use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Keep score interactively (one command per line on stdin)")]
    Play,

    #[command(about = "Derive games and statistics from an event file")]
    Replay {
        /// JSON array of events
        events: PathBuf,
    },

    #[command(about = "Print tab-separated exports of an event file")]
    Export {
        #[command(subcommand)]
        command: ExportCommand,
    },

    #[command(about = "Manage the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ExportCommand {
    #[command(about = "One line per completed game, newest first")]
    Games { events: PathBuf },

    #[command(about = "One line per event, newest first")]
    Events { events: PathBuf },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Write a config file with default values")]
    Init {
        #[arg(long)]
        force: bool,
    },

    #[command(about = "Print the effective configuration")]
    Show,
}
