//! Client-side context management.
//!
//! Reads/writes `~/.flexerp/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A single context: a connection to a flexerpd instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Context name (e.g. "plant-2").
    pub name: String,

    /// Server URL (e.g. "http://localhost:8080").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,
}

/// Client configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Name of the currently active context.
    #[serde(rename = "current-context", default)]
    pub current_context: String,

    /// List of configured contexts.
    #[serde(default)]
    pub contexts: Vec<Context>,
}

impl ClientConfig {
    /// Default config file path: ~/.flexerp/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the currently active context, if any.
    pub fn current(&self) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == self.current_context)
    }

    /// Get a mutable reference to a context by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Context> {
        self.contexts.iter_mut().find(|c| c.name == name)
    }

    /// Add or update a context.
    pub fn upsert_context(&mut self, ctx: Context) {
        if let Some(existing) = self.get_mut(&ctx.name) {
            *existing = ctx;
        } else {
            self.contexts.push(ctx);
        }
    }

    /// Remove a context by name. Returns true if it was found.
    pub fn remove_context(&mut self, name: &str) -> bool {
        let len = self.contexts.len();
        self.contexts.retain(|c| c.name != name);
        if self.current_context == name {
            self.current_context = String::new();
        }
        self.contexts.len() < len
    }
}

/// The form draft lives next to the client config between invocations.
pub fn draft_path(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.join("draft.json"))
        .unwrap_or_else(|| PathBuf::from("draft.json"))
}

/// Return the flexerp config directory (~/.flexerp).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".flexerp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.current_context.is_empty());
        assert!(config.contexts.is_empty());
        assert!(config.current().is_none());
    }

    #[test]
    fn test_roundtrip() {
        let mut config = ClientConfig::default();
        config.current_context = "plant-2".to_string();
        config.upsert_context(Context {
            name: "plant-2".to_string(),
            server: "http://localhost:8080".to_string(),
        });

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let back: ClientConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.current_context, "plant-2");
        assert_eq!(back.contexts.len(), 1);
        assert_eq!(back.current().unwrap().server, "http://localhost:8080");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = ClientConfig::default();
        config.upsert_context(Context {
            name: "local".into(),
            server: "http://127.0.0.1:8080".into(),
        });
        config.current_context = "local".into();
        config.save(&path).unwrap();

        let back = ClientConfig::load(&path).unwrap();
        assert_eq!(back.current().unwrap().name, "local");
    }

    #[test]
    fn test_remove_clears_current() {
        let mut config = ClientConfig::default();
        config.upsert_context(Context {
            name: "x".into(),
            server: String::new(),
        });
        config.current_context = "x".into();

        assert!(config.remove_context("x"));
        assert!(config.current_context.is_empty());
        assert!(!config.remove_context("x"));
    }

    #[test]
    fn test_draft_path_is_next_to_config() {
        let p = draft_path(Path::new("/home/u/.flexerp/config.toml"));
        assert_eq!(p, PathBuf::from("/home/u/.flexerp/draft.json"));
    }
}
