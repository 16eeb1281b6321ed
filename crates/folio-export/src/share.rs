//! The share boundary: hand a finished file to something outside folio.

use std::{future::Future, path::Path};

use tokio::process::Command;

use crate::{Error, Result};

pub trait ShareSurface: Send + Sync {
  fn share(&self, path: &Path) -> impl Future<Output = Result<()>> + Send;
}

/// Opens the file with a desktop opener such as `xdg-open` or `open`.
#[derive(Debug, Clone)]
pub struct CommandShare {
  program: String,
}

impl CommandShare {
  pub fn new(program: impl Into<String>) -> Self { Self { program: program.into() } }
}

impl Default for CommandShare {
  fn default() -> Self {
    Self::new(if cfg!(target_os = "macos") { "open" } else { "xdg-open" })
  }
}

impl ShareSurface for CommandShare {
  async fn share(&self, path: &Path) -> Result<()> {
    let status = Command::new(&self.program).arg(path).status().await.map_err(|e| {
      Error::Share { path: path.to_owned(), reason: format!("{}: {e}", self.program) }
    })?;

    if !status.success() {
      return Err(Error::Share {
        path:   path.to_owned(),
        reason: format!("{} exited with {status}", self.program),
      });
    }
    Ok(())
  }
}
