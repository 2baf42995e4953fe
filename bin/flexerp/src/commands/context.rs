//! Context management commands.

use std::path::Path;

use anyhow::Result;

use crate::config::{ClientConfig, Context};

/// Add (or overwrite) a context. The first context added becomes the
/// current one.
pub fn add(name: &str, server: Option<&str>, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;
    config.upsert_context(Context {
        name: name.to_string(),
        server: server.unwrap_or_default().to_string(),
    });
    if config.current_context.is_empty() {
        config.current_context = name.to_string();
    }
    config.save(config_path)?;
    println!("Context \"{}\" saved.", name);
    Ok(())
}

/// List all contexts, marking the current one.
pub fn list(config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    if config.contexts.is_empty() {
        println!("No contexts configured.");
        return Ok(());
    }
    for ctx in &config.contexts {
        let marker = if ctx.name == config.current_context { "*" } else { " " };
        let server = if ctx.server.is_empty() { "-" } else { &ctx.server };
        println!("{} {:<20} {}", marker, ctx.name, server);
    }
    Ok(())
}

/// Set properties on an existing context.
pub fn set(name: &str, server: Option<&str>, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;
    let ctx = config
        .get_mut(name)
        .ok_or_else(|| anyhow::anyhow!("Unknown context: {}", name))?;
    if let Some(server) = server {
        ctx.server = server.to_string();
    }
    config.save(config_path)?;
    println!("Context \"{}\" updated.", name);
    Ok(())
}

/// Switch the current context.
pub fn use_context(name: &str, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;
    if config.get_mut(name).is_none() {
        anyhow::bail!("Unknown context: {}", name);
    }
    config.current_context = name.to_string();
    config.save(config_path)?;
    println!("Switched to context \"{}\".", name);
    Ok(())
}

/// Delete a context.
pub fn delete(name: &str, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;
    if !config.remove_context(name) {
        anyhow::bail!("Unknown context: {}", name);
    }
    config.save(config_path)?;
    println!("Context \"{}\" deleted.", name);
    Ok(())
}
