use crate::presentation::{ConsoleRenderer, Style};
use crate::types::OutputFormat;
use rinkstat_runtime::Config;
use std::path::PathBuf;

/// Shared inputs for every handler: output format plus the loaded config
pub struct HandlerContext {
    pub format: OutputFormat,
    pub config: Config,
    pub config_path: PathBuf,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, config: Config, config_path: PathBuf) -> Self {
        Self {
            format,
            config,
            config_path,
        }
    }

    pub fn renderer(&self) -> ConsoleRenderer<std::io::Stdout> {
        ConsoleRenderer::stdout(self.format.is_json())
    }

    pub fn style(&self) -> Style {
        Style::detect()
    }
}
