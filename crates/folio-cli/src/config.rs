//! Layered CLI settings: flags (and their environment variables) override
//! the TOML config file, which overrides built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use folio_core::paths::expand_tilde;
use serde::Deserialize;

/// How markup is turned into an exported file.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RasterizerKind {
  /// Save the markup itself as `.html`.
  #[default]
  Html,
  /// Convert to PDF with `wkhtmltopdf`.
  Wkhtmltopdf,
}

/// Shape of the optional TOML config file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigFile {
  pub url:           Option<String>,
  pub store:         Option<PathBuf>,
  pub documents_dir: Option<PathBuf>,
  pub rasterizer:    Option<RasterizerKind>,
  pub share_command: Option<String>,
}

impl ConfigFile {
  pub fn read(path: &Path) -> anyhow::Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")
  }
}

/// Values supplied on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
  pub url:           Option<String>,
  pub store:         Option<PathBuf>,
  pub documents_dir: Option<PathBuf>,
  pub rasterizer:    Option<RasterizerKind>,
  pub share_command: Option<String>,
}

/// Where resumes are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
  /// A `folio-server` at this base URL.
  Remote(String),
  /// A SQLite file opened in-process.
  Local(PathBuf),
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  pub backend:       Backend,
  pub documents_dir: PathBuf,
  pub rasterizer:    RasterizerKind,
  /// `None` uses the platform opener.
  pub share_command: Option<String>,
}

impl Settings {
  pub fn resolve(flags: Overrides, file: ConfigFile) -> Self {
    let backend = match flags.url.or(file.url).filter(|u| !u.trim().is_empty()) {
      Some(url) => Backend::Remote(url),
      None => Backend::Local(expand_tilde(
        &flags
          .store
          .or(file.store)
          .unwrap_or_else(|| PathBuf::from("~/.local/share/folio/folio.db")),
      )),
    };

    Self {
      backend,
      documents_dir: expand_tilde(
        &flags
          .documents_dir
          .or(file.documents_dir)
          .unwrap_or_else(|| PathBuf::from("~/Documents")),
      ),
      rasterizer: flags.rasterizer.or(file.rasterizer).unwrap_or_default(),
      share_command: flags.share_command.or(file.share_command),
    }
  }
}
