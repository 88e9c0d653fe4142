use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding `gateway_url`.
pub const GATEWAY_ENV: &str = "IPGET_GATEWAY";
/// Environment variable overriding `api_url`.
pub const API_ENV: &str = "IPGET_API";

/// Global configuration loaded from `~/.config/ipget/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpgetConfig {
    /// Gateway base; content hashes are appended to it for downloads.
    pub gateway_url: String,
    /// Daemon API base; endpoint names (`cat`, `ls`, `pin/ls`) are appended to it.
    pub api_url: String,
    /// Proxy for `fetch` when none is given on the command line. Gateway downloads never use it.
    #[serde(default)]
    pub proxy: Option<String>,
    /// TCP connect bound for direct connections, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for IpgetConfig {
    fn default() -> Self {
        Self {
            gateway_url: "http://127.0.0.1:8080/ipfs/".to_string(),
            api_url: "http://127.0.0.1:5001/api/v0/".to_string(),
            proxy: None,
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl IpgetConfig {
    /// Gateway base with exactly one trailing `/`.
    pub fn gateway_base(&self) -> String {
        with_trailing_slash(&self.gateway_url)
    }

    /// API base with exactly one trailing `/`.
    pub fn api_base(&self) -> String {
        with_trailing_slash(&self.api_url)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Proxy string for transports; empty when unset.
    pub fn proxy_url(&self) -> &str {
        self.proxy.as_deref().unwrap_or("")
    }

    /// Replaces the gateway/API URLs with the given overrides, ignoring empty ones.
    pub fn apply_overrides(&mut self, gateway: Option<String>, api: Option<String>) {
        if let Some(g) = gateway.filter(|s| !s.trim().is_empty()) {
            self.gateway_url = g;
        }
        if let Some(a) = api.filter(|s| !s.trim().is_empty()) {
            self.api_url = a;
        }
    }
}

fn with_trailing_slash(base: &str) -> String {
    format!("{}/", base.trim_end_matches('/'))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ipget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// `IPGET_GATEWAY` / `IPGET_API` take precedence over the file.
pub fn load_or_init() -> Result<IpgetConfig> {
    let path = config_path()?;
    let mut cfg = if !path.exists() {
        let default_cfg = IpgetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        default_cfg
    } else {
        let data = fs::read_to_string(&path)?;
        toml::from_str(&data)?
    };
    cfg.apply_overrides(std::env::var(GATEWAY_ENV).ok(), std::env::var(API_ENV).ok());
    Ok(cfg)
}
