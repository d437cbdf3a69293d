// File: ./src/config.rs
use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;

fn default_prefill() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Pre-fill the Year/Month/Day fields with today's date on startup.
    #[serde(default = "default_prefill")]
    pub prefill_today: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefill_today: true,
        }
    }
}

impl Config {
    /// Loads ~/.config/timeblock/config.toml (or the platform equivalent).
    /// Callers fall back to `Config::default()` when this fails.
    pub fn load() -> Result<Self> {
        let proj = ProjectDirs::from("com", "timeblock", "timeblock")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        let path = proj.config_dir().join("config.toml");
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
