mod commands;
mod config;
mod shutdown;
mod state;
mod watcher;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::commands::query::QueryTarget;
use crate::config::{Config, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "diablo-interface")]
#[command(about = "Query server for Diablo II character state", version)]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Character state file (overrides `state.path` from the config)
    #[arg(short, long, global = true, env = "DIABLO_INTERFACE_STATE")]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dispatch one request and print the response
    Query {
        /// Resource path, e.g. `character/current`
        #[arg(required_unless_present = "equipment_slot")]
        resource: Option<String>,

        /// Extra arguments appended after the path segments
        arguments: Vec<String>,

        /// Send a legacy `{"equipmentSlot": ...}` request instead
        #[arg(long, conflicts_with = "resource")]
        equipment_slot: Option<String>,
    },

    /// Answer newline-delimited JSON requests until the input ends
    Serve {
        /// Read requests from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Republish characters whenever the state file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Show the resolved config, registered resources and loaded characters
    CheckConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load before logging starts so the config can set the filter; report after
    let loaded = Config::load(&cli.config);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(&config)?;

    match &loaded {
        Ok(_) => info!("Loaded config from {}", cli.config.display()),
        Err(e) if !cli.config.exists() => {
            debug!("{:#}, using defaults", e)
        }
        Err(e) => warn!("{:#}, using defaults", e),
    }

    let state_path = cli.state.unwrap_or_else(|| config.state.path.clone());

    match cli.command {
        Command::Query {
            resource,
            arguments,
            equipment_slot,
        } => {
            let target = match (equipment_slot, resource) {
                (Some(slot), _) => QueryTarget::EquipmentSlot(slot),
                (None, resource) => QueryTarget::Resource {
                    resource: resource.unwrap_or_default(),
                    arguments,
                },
            };
            commands::query::run(&config, &state_path, target)
        }
        Command::Serve { input, watch } => {
            commands::serve::run(&config, &state_path, input.as_deref(), watch)
        }
        Command::CheckConfig => commands::check_config::run(&config, &cli.config, &state_path),
    }
}

/// Log to stderr; stdout carries responses.
///
/// RUST_LOG takes precedence over the config's `logging.filter`.
fn init_logging(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.log_filter())?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
