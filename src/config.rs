use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::logic::ui::{RELOAD_DELAY_MS, TOAST_DURATION_MS};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    #[serde(default = "default_reload_delay_ms")]
    pub reload_delay_ms: u64,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_icon_mode() -> String {
    "emoji".to_string()
}

fn default_reload_delay_ms() -> u64 {
    RELOAD_DELAY_MS
}

fn default_toast_duration_ms() -> u64 {
    TOAST_DURATION_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            download_dir: None,
            vim_mode: false,
            icon_mode: default_icon_mode(),
            reload_delay_ms: default_reload_delay_ms(),
            toast_duration_ms: default_toast_duration_ms(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file is a valid "all defaults" config
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("invalid config file")
    }

    /// Load the config from an explicit path or the default locations.
    ///
    /// An explicit path must exist. Without one, the first existing default
    /// location is used, and built-in defaults apply when there is none.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Some(path.to_path_buf())
            }
            None => default_config_paths().into_iter().find(|p| p.exists()),
        };

        let Some(path) = path else {
            tracing::debug!("no config file found, using defaults");
            return Ok(Self::default());
        };

        tracing::debug!(path = %path.display(), "loading config");
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Directory downloads are written to
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn reload_delay(&self) -> Duration {
        Duration::from_millis(self.reload_delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Default config locations, preferred first
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("filedeck").join("config.yaml"));
    }
    paths.push(PathBuf::from("config.yaml"));
    paths
}
