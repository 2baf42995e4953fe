//! The `form` command family: a persistent job-sheet entry session.
//!
//! The session (draft + expansion state) is stored as JSON next to the
//! client config, so it survives between invocations until submitted or
//! reset.

use std::path::Path;

use anyhow::Result;

use crate::config::{ClientConfig, draft_path};
use crate::form::{FormSession, SECTIONS, SubmitOutcome};
use crate::http::HttpGateway;

fn load_session(config_path: &Path) -> Result<FormSession> {
    let path = draft_path(config_path);
    if !path.exists() {
        return Ok(FormSession::new());
    }
    let content = std::fs::read_to_string(&path)?;
    let session = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("draft file is corrupt ({}); run `flexerp form reset`", e))?;
    Ok(session)
}

fn save_session(session: &FormSession, config_path: &Path) -> Result<()> {
    let path = draft_path(config_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, serde_json::to_string_pretty(session)?)?;
    Ok(())
}

/// Show the draft: expansion markers, expanded section contents,
/// current errors and notice.
pub fn show(config_path: &Path) -> Result<()> {
    let session = load_session(config_path)?;
    let draft = serde_json::to_value(&session.draft)?;

    for &section in SECTIONS {
        if session.is_expanded(section) {
            println!("[-] {}", section);
            println!(
                "{}",
                serde_json::to_string_pretty(&draft[section])?
            );
        } else {
            println!("[+] {}", section);
        }
    }

    if !session.errors.is_empty() {
        println!();
        println!("Errors:");
        for (key, message) in &session.errors {
            println!("  {}: {}", key, message);
        }
    }
    if !session.notice.is_empty() {
        println!();
        println!("{}", session.notice);
    }
    Ok(())
}

/// Merge partial JSON data into one section of the draft.
pub fn update(section: &str, json_body: &str, config_path: &Path) -> Result<()> {
    let partial: serde_json::Value = serde_json::from_str(json_body)
        .map_err(|e| anyhow::anyhow!("Invalid JSON: {}", e))?;

    let mut session = load_session(config_path)?;
    session.update_section(section, &partial)?;
    save_session(&session, config_path)?;
    println!("Section {} updated.", section);
    Ok(())
}

/// Flip a section's expansion state.
pub fn toggle(section: &str, config_path: &Path) -> Result<()> {
    let mut session = load_session(config_path)?;
    let expanded = session.toggle_section(section)?;
    save_session(&session, config_path)?;
    println!(
        "Section {} {}.",
        section,
        if expanded { "expanded" } else { "collapsed" }
    );
    Ok(())
}

/// Validate and submit the draft to the current context's server.
pub fn submit(config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let ctx = config
        .current()
        .ok_or_else(|| anyhow::anyhow!("No current context."))?;
    if ctx.server.is_empty() {
        anyhow::bail!(
            "No server URL set for context \"{}\". Run `flexerp context set {} --server <url>`.",
            ctx.name,
            ctx.name
        );
    }

    let mut session = load_session(config_path)?;
    let gateway = HttpGateway::new(&ctx.server);
    let outcome = session.submit(&gateway)?;
    save_session(&session, config_path)?;

    match outcome {
        SubmitOutcome::Saved(record) => {
            println!("{}", session.notice);
            println!("Report id: {}", record.id);
        }
        SubmitOutcome::Invalid => {
            println!("The draft has validation errors:");
            for (key, message) in &session.errors {
                println!("  {}: {}", key, message);
            }
            anyhow::bail!("Not submitted.");
        }
        SubmitOutcome::Failed => {
            anyhow::bail!("{}", session.notice);
        }
    }
    Ok(())
}

/// Throw the draft away.
pub fn reset(config_path: &Path) -> Result<()> {
    let mut session = load_session(config_path).unwrap_or_default();
    session.reset();
    save_session(&session, config_path)?;
    println!("Draft reset.");
    Ok(())
}
