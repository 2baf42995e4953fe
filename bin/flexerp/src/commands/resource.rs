//! Read-side resource commands.
//!
//! `flexerp get reports`, `flexerp get job <id>`, etc. Translates
//! resource names to REST API paths.

use anyhow::Result;

use crate::config::ClientConfig;

/// Map a singular/plural resource name to the API path prefix.
fn resource_path(resource: &str) -> Result<(&'static str, &'static str)> {
    // Returns (singular, api_path).
    match resource.to_lowercase().as_str() {
        "report" | "reports" | "inspection-report" | "inspection-reports" => {
            Ok(("report", "/api/inspection-report"))
        }
        "job" | "jobs" => Ok(("job", "/api/job")),
        _ => Err(anyhow::anyhow!("Unknown resource type: {}", resource)),
    }
}

/// HTTP client helper.
fn build_client(ctx: &crate::config::Context) -> Result<(reqwest::blocking::Client, String)> {
    if ctx.server.is_empty() {
        anyhow::bail!(
            "No server URL set for context \"{}\". Run `flexerp context set {} --server <url>`.",
            ctx.name,
            ctx.name
        );
    }
    let client = reqwest::blocking::Client::new();
    Ok((client, ctx.server.trim_end_matches('/').to_string()))
}

/// GET a resource (list or get by ID).
pub fn get(
    resource: &str,
    id: Option<&str>,
    limit: Option<usize>,
    offset: Option<usize>,
    config_path: &std::path::Path,
) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let ctx = config
        .current()
        .ok_or_else(|| anyhow::anyhow!("No current context."))?;

    let (singular, api_path) = resource_path(resource)?;
    let (client, base_url) = build_client(ctx)?;

    let url = if let Some(id) = id {
        format!("{}{}/{}", base_url, api_path, id)
    } else {
        let mut u = format!("{}{}", base_url, api_path);
        let mut params = Vec::new();
        if let Some(l) = limit {
            params.push(format!("limit={}", l));
        }
        if let Some(o) = offset {
            params.push(format!("offset={}", o));
        }
        if !params.is_empty() {
            u.push('?');
            u.push_str(&params.join("&"));
        }
        u
    };

    let resp = client.get(&url).send()?;
    let status = resp.status();
    let body: serde_json::Value = resp.json()?;

    if !status.is_success() {
        let message = body["message"].as_str().unwrap_or("unknown error");
        anyhow::bail!("Error ({}): {}", status, message);
    }

    match (id, body["data"].as_array()) {
        (None, Some(items)) if items.is_empty() => {
            println!("No {}s found.", singular);
        }
        _ => {
            println!("{}", serde_json::to_string_pretty(&body["data"])?);
        }
    }
    Ok(())
}

/// STATUS: check server health.
pub fn status(config_path: &std::path::Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let ctx = config
        .current()
        .ok_or_else(|| anyhow::anyhow!("No current context."))?;

    println!("Context:   {}", ctx.name);
    println!(
        "Server:    {}",
        if ctx.server.is_empty() { "-" } else { &ctx.server }
    );

    if ctx.server.is_empty() {
        println!("Status:    no server configured");
        return Ok(());
    }

    let (client, base_url) = build_client(ctx)?;
    match client.get(format!("{}/health", base_url)).send() {
        Ok(resp) if resp.status().is_success() => {
            println!("Status:    connected");
        }
        Ok(resp) => {
            println!("Status:    error ({})", resp.status());
        }
        Err(e) => {
            println!("Status:    disconnected ({})", e);
        }
    }
    Ok(())
}
