mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "rinkstat")]
#[command(about = "Keep score of hockey games and track session statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $RINKSTAT_CONFIG or the XDG config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
