//! CLI command implementations.

pub mod check_config;
pub mod query;
pub mod serve;

use std::sync::Arc;

use anyhow::{Context, Result};
use diablo_interface::{Dispatcher, LiveCharacters, registry_for};

use crate::config::Config;

/// Build a dispatcher serving the configured resources from `live`
pub fn build_dispatcher(config: &Config, live: Arc<LiveCharacters>) -> Result<Dispatcher> {
    let registry = registry_for(&config.server.resources, live)
        .context("Failed to register configured resources")?;
    Ok(Dispatcher::new(Arc::new(registry)))
}
