use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::client::{DEFAULT_CONCURRENT_IMPORTS, IMPORT_ENDPOINT};

fn default_endpoint() -> String {
    IMPORT_ENDPOINT.to_string()
}

fn default_concurrent_imports() -> usize {
    DEFAULT_CONCURRENT_IMPORTS
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_timeout_secs() -> u64 {
    120
}

/// Global configuration loaded from `~/.config/gifs/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GifsConfig {
    /// Import endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Account API key, sent as `Gifs-Api-Key`. Get one at https://gifs.com/dashboard/api.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Default `caller` tag for imports that do not set one.
    #[serde(default)]
    pub caller: Option<String>,
    /// Maximum imports in flight for a bulk import that does not set its own limit.
    #[serde(default = "default_concurrent_imports")]
    pub concurrent_imports: usize,
    /// Connect timeout per import request, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Total timeout per import request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Extra headers sent with every import.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Default for GifsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            caller: None,
            concurrent_imports: default_concurrent_imports(),
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            headers: BTreeMap::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gifs")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GifsConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<GifsConfig> {
    if !path.exists() {
        let default_cfg = GifsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: GifsConfig = toml::from_str(&data)?;
    Ok(cfg)
}
