//! Server configuration file handling.
//!
//! A context name resolves to `/etc/flexerp/<name>.toml`; anything that
//! looks like a path (contains `/` or `.`) is used directly.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Base directory for the SQLite database and any future stores.
    pub data_dir: String,
}

impl ServerConfig {
    /// Resolve a context name or explicit path to a config file path.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            PathBuf::from(format!("/etc/flexerp/{}.toml", name_or_path))
        }
    }

    /// Load and parse the config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("cannot read config {}: {}", path.display(), e)
        })?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
