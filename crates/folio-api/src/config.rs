//! Server configuration, read from `folio.toml` and `FOLIO_*` variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Runtime server configuration. Every key is optional.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 8080 }

fn default_store_path() -> PathBuf { PathBuf::from("~/.local/share/folio/folio.db") }

impl Default for ServerConfig {
  fn default() -> Self {
    Self { host: default_host(), port: default_port(), store_path: default_store_path() }
  }
}

impl ServerConfig {
  /// Layer `file` (if it exists) under `FOLIO_*` environment variables.
  pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("FOLIO"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}
