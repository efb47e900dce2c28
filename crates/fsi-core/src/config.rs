use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Transfer tuning loaded from `~/.config/fsi/config.toml`.
///
/// The asset URL and target directory are fixed (see `paths`); only the
/// curl transfer knobs are configurable. No overall transfer deadline is
/// applied: a slow download runs to completion as long as bytes keep
/// arriving faster than the stall threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FsiConfig {
    /// Seconds allowed for the TCP/TLS connection to come up.
    pub connect_timeout_secs: u64,
    /// Maximum number of HTTP redirects to follow.
    pub max_redirections: u32,
    /// Abort the transfer when throughput stays below this many bytes/sec...
    pub low_speed_limit_bytes: u32,
    /// ...for this many consecutive seconds.
    pub low_speed_time_secs: u64,
    /// Optional curl receive buffer size in bytes (None = library default).
    #[serde(default)]
    pub recv_buffer_bytes: Option<usize>,
}

impl Default for FsiConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            max_redirections: 10,
            low_speed_limit_bytes: 1024,
            low_speed_time_secs: 60,
            recv_buffer_bytes: None,
        }
    }
}

impl FsiConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn low_speed_time(&self) -> Duration {
        Duration::from_secs(self.low_speed_time_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fsi")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FsiConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FsiConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FsiConfig = toml::from_str(&data)?;
    Ok(cfg)
}
