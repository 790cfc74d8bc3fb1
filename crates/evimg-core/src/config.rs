use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Relative directory the website serves event images from.
pub const DEFAULT_ASSET_DIR: &str = "website/assets/event-images";

/// Global configuration loaded from `~/.config/evimg/config.toml`.
/// Missing keys take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Directory holding `<event_id>.<index>.<ext>` files.
    pub asset_dir: PathBuf,
    /// Total time allowed for one image GET, in seconds.
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Redirects followed per GET.
    pub max_redirections: u32,
    pub user_agent: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            timeout_secs: 30,
            connect_timeout_secs: 15,
            max_redirections: 10,
            user_agent: concat!("evimg/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Existing config file in the XDG config dirs, if any. Never creates anything.
pub fn find_config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("evimg")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load `~/.config/evimg/config.toml` if present, otherwise built-in defaults.
///
/// Read-only: a run must not touch the filesystem before the issue body is validated.
pub fn load_or_default() -> Result<IngestConfig> {
    match find_config_path()? {
        Some(path) => load_from(&path),
        None => {
            tracing::debug!("no config file, using defaults");
            Ok(IngestConfig::default())
        }
    }
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<IngestConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: IngestConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
