//! `flexerp` is the Flexerp CLI client.
//!
//! Manages contexts, a persistent job-sheet form session, and read
//! access to stored records.

mod commands;
mod config;
mod form;
mod http;

use clap::{Parser, Subcommand};

/// Flexerp CLI tool.
#[derive(Parser, Debug)]
#[command(name = "flexerp", about = "Flexerp CLI client")]
struct Cli {
    /// Path to client config file (default: ~/.flexerp/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage contexts.
    #[command(name = "context")]
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },

    /// Switch the current context.
    #[command(name = "use")]
    Use {
        #[command(subcommand)]
        what: UseWhat,
    },

    /// Work on the job-sheet form draft.
    Form {
        #[command(subcommand)]
        action: FormAction,
    },

    /// Get resource(s): reports or jobs.
    Get {
        /// Resource type (reports, jobs).
        resource: String,
        /// Optional resource ID for single get.
        id: Option<String>,
        /// Limit results.
        #[arg(long)]
        limit: Option<usize>,
        /// Offset for pagination.
        #[arg(long)]
        offset: Option<usize>,
    },

    /// Check server status.
    Status,

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ContextAction {
    /// Add a context.
    Add {
        /// Context name.
        name: String,
        /// Server URL (e.g. http://localhost:8080).
        #[arg(long)]
        server: Option<String>,
    },
    /// List all contexts.
    List,
    /// Set properties on a context.
    Set {
        name: String,
        #[arg(long)]
        server: Option<String>,
    },
    /// Delete a context.
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
enum UseWhat {
    /// Switch to a context.
    Context { name: String },
}

#[derive(Subcommand, Debug)]
enum FormAction {
    /// Show the draft and its expansion state.
    Show,
    /// Merge partial JSON into one section of the draft.
    Update {
        /// Section name (orderDetails, jobDetails, inProcessDetails, remarks, footer).
        section: String,
        /// JSON body.
        #[arg(long = "json")]
        json_body: Option<String>,
        /// Read JSON from file.
        #[arg(short = 'f', long = "file")]
        file: Option<String>,
    },
    /// Expand or collapse a section.
    Toggle { section: String },
    /// Validate and submit the draft.
    Submit,
    /// Throw the draft away.
    Reset,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);

    match cli.command {
        Commands::Context { action } => match action {
            ContextAction::Add { name, server } => {
                commands::context::add(&name, server.as_deref(), &config_path)?;
            }
            ContextAction::List => {
                commands::context::list(&config_path)?;
            }
            ContextAction::Set { name, server } => {
                commands::context::set(&name, server.as_deref(), &config_path)?;
            }
            ContextAction::Delete { name } => {
                commands::context::delete(&name, &config_path)?;
            }
        },

        Commands::Use { what } => match what {
            UseWhat::Context { name } => {
                commands::context::use_context(&name, &config_path)?;
            }
        },

        Commands::Form { action } => match action {
            FormAction::Show => {
                commands::form::show(&config_path)?;
            }
            FormAction::Update {
                section,
                json_body,
                file,
            } => {
                let body = if let Some(path) = file {
                    std::fs::read_to_string(&path)?
                } else if let Some(json) = json_body {
                    json
                } else {
                    anyhow::bail!("Provide --json or -f <file>.");
                };
                commands::form::update(&section, &body, &config_path)?;
            }
            FormAction::Toggle { section } => {
                commands::form::toggle(&section, &config_path)?;
            }
            FormAction::Submit => {
                commands::form::submit(&config_path)?;
            }
            FormAction::Reset => {
                commands::form::reset(&config_path)?;
            }
        },

        Commands::Get {
            resource,
            id,
            limit,
            offset,
        } => {
            commands::resource::get(&resource, id.as_deref(), limit, offset, &config_path)?;
        }

        Commands::Status => {
            commands::resource::status(&config_path)?;
        }

        Commands::Version => {
            println!("flexerp cli v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
