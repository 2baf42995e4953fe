//! `flexerpd` is the Flexerp server binary.
//!
//! Usage:
//!   flexerpd -c <context-name-or-path> [--listen <addr>]
//!
//! The context name resolves to `/etc/flexerp/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly.

mod bootstrap;
mod config;
mod routes;

use std::sync::Arc;

use clap::Parser;
use flexerp_core::Module;
use tracing::info;

use config::ServerConfig;

/// Flexerp server.
#[derive(Parser, Debug)]
#[command(name = "flexerpd", about = "Flexerp server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config", required = true)]
    config: String,

    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration.
    let config_path = ServerConfig::resolve_path(&cli.config);
    info!("Loading configuration from {}", config_path.display());
    let server_config = ServerConfig::load(&config_path)?;
    bootstrap::verify_config(&server_config)?;

    // Initialize storage.
    let data_dir = std::path::PathBuf::from(&server_config.storage.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let core_config = flexerp_core::ServiceConfig {
        data_dir: Some(data_dir),
        listen: cli.listen.clone(),
        ..Default::default()
    };

    let sqlite_path = core_config.resolve_sqlite_path();
    info!("Opening SQL store at {}", sqlite_path.display());
    let store = flexerp_sql::SqliteStore::open(&sqlite_path)
        .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?;

    // Initialize the jobsheet module.
    let service = jobsheet::service::JobsheetService::new(Box::new(store))
        .map_err(|e| anyhow::anyhow!("failed to initialize jobsheet service: {}", e))?;
    let module = jobsheet::JobsheetModule::new(service);
    info!("Jobsheet module initialized");

    let module_routes = vec![(module.name(), module.routes())];
    let app = routes::build_router(module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&core_config.listen).await?;
    info!("Flexerp server listening on {}", core_config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
