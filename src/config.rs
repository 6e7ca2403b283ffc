use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_riwayah")]
    pub riwayah: String,
    #[serde(default = "default_translation_lang")]
    pub translation_lang: String,
    #[serde(default)]
    pub vim_mode: bool,
    /// Media engine binary, spoken to over its JSON IPC socket
    #[serde(default = "default_player_command")]
    pub player_command: String,
    #[serde(default = "default_start_page")]
    pub start_page: u16,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_riwayah() -> String {
    "hafs".to_string()
}

fn default_translation_lang() -> String {
    "en".to_string()
}

fn default_player_command() -> String {
    "mpv".to_string()
}

fn default_start_page() -> u16 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            riwayah: default_riwayah(),
            translation_lang: default_translation_lang(),
            vim_mode: false,
            player_command: default_player_command(),
            start_page: default_start_page(),
        }
    }
}

impl Config {
    /// Read the config file at `path`, or built-in defaults when there is none
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a map
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}

/// Determine which config file to read
///
/// Order: explicit `--config` (must exist), `<config_dir>/mushaftui/config.yaml`,
/// `./config.yaml`. `None` means run on defaults.
pub fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("mushaftui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
