pub mod renderer;
pub mod views;

pub use renderer::ConsoleRenderer;

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use rinkstat_types::Outcome;

/// Whether views may emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    /// Colors only when stdout is a terminal
    pub fn detect() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn outcome(&self, outcome: Outcome) -> String {
        let symbol = outcome.symbol().to_string();
        if !self.color {
            return symbol;
        }
        match outcome {
            Outcome::Win => symbol.green().to_string(),
            Outcome::Loss => symbol.red().to_string(),
            Outcome::Even => symbol.dimmed().to_string(),
        }
    }
}
