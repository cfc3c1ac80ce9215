use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_RECENT_GAMES: usize = 10;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. RINKSTAT_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.rinkstat/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("RINKSTAT_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("rinkstat").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".rinkstat").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Display names for the three scoring parties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub kev: String,
    pub har: String,
    pub opp: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            kev: "Kev".to_string(),
            har: "Har".to_string(),
            opp: "Opp".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Length of the recent results strip
    pub recent_games: usize,
    /// Ask before deleting an event in the console
    pub confirm_delete: bool,
    pub labels: Labels,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_games: DEFAULT_RECENT_GAMES,
            confirm_delete: true,
            labels: Labels::default(),
        }
    }
}

impl Config {
    /// A missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
