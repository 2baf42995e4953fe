//! Startup checks.

use crate::config::ServerConfig;

/// Verify the loaded configuration before any store is opened.
pub fn verify_config(config: &ServerConfig) -> anyhow::Result<()> {
    if config.storage.data_dir.trim().is_empty() {
        anyhow::bail!("storage.data_dir must not be empty");
    }
    Ok(())
}
