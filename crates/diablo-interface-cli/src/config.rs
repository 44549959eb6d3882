//! TOML configuration for the CLI.
//!
//! ```toml
//! [server]
//! resources = ["character", "items"]
//!
//! [state]
//! path = "state.json"
//! poll_interval_ms = 500
//!
//! [logging]
//! filter = "diablo_interface=debug"
//! ```
//!
//! Every section and key is optional.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use diablo_interface::BUILTIN_RESOURCES;
use serde::{Deserialize, Serialize};

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "diablo-interface.toml";

/// Log filter used when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "diablo_interface=info";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub state: StateConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Resource roots to register
    pub resources: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            resources: BUILTIN_RESOURCES.iter().map(|r| r.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Character state file written by the memory reader
    pub path: PathBuf,
    /// How often `serve --watch` checks the state file for changes
    pub poll_interval_ms: u64,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("state.json"),
            poll_interval_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

impl Config {
    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Minimum of 10ms so a zero setting cannot spin the watcher
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.state.poll_interval_ms.max(10))
    }

    pub fn log_filter(&self) -> &str {
        self.logging.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.resources, vec!["character", "items"]);
        assert_eq!(config.state.path, PathBuf::from("state.json"));
        assert_eq!(config.poll_interval(), Duration::from_millis(500));
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::parse(
            r#"
            [state]
            poll_interval_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.state.path, PathBuf::from("state.json"));
        assert_eq!(config.poll_interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [server]
            resources = ["character"]

            [logging]
            filter = "diablo_interface=debug"
            "#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.resources, vec!["character"]);
        assert_eq!(config.log_filter(), "diablo_interface=debug");
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server\nresources = 3").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(dir.path().join("missing.toml")).is_err());
    }
}
