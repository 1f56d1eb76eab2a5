use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::batch::{BatchOptions, DEFAULT_SAVE_DIR};
use crate::fetch::{FetchOptions, DEFAULT_USER_AGENT};

/// Global configuration loaded from `~/.config/hdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HdlConfig {
    /// Directory pages are saved into.
    pub save_dir: PathBuf,
    /// Pause between consecutive requests, in seconds.
    pub delay_secs: f64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for HdlConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            delay_secs: 1.0,
            timeout_secs: 30,
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl HdlConfig {
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Converts to batch options. Fails on a negative or non-finite delay.
    pub fn batch_options(&self) -> Result<BatchOptions> {
        Ok(BatchOptions {
            save_dir: self.save_dir.clone(),
            delay: delay_from_secs(self.delay_secs)?,
            fetch: FetchOptions {
                timeout: Duration::from_secs(self.timeout_secs),
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
                user_agent: self.user_agent.clone(),
                ..FetchOptions::default()
            },
        })
    }
}

/// Parses a delay given in (fractional) seconds.
pub fn delay_from_secs(secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs)
        .with_context(|| format!("invalid delay {} (must be a non-negative number of seconds)", secs))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HdlConfig::default();
        let toml = default_cfg.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HdlConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
