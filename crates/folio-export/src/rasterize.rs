//! The render-to-file boundary.

use std::{future::Future, path::PathBuf};

use tokio::process::Command;
use uuid::Uuid;

use crate::{Error, Result};

/// Turns a markup string into a temporary file.
pub trait Rasterizer: Send + Sync {
  /// Extension of the files this rasterizer produces, without the dot.
  fn extension(&self) -> &str;

  /// Write `markup` out as a new temporary file and return its path.
  fn rasterize(&self, markup: &str) -> impl Future<Output = Result<PathBuf>> + Send;
}

fn temp_path(dir: &std::path::Path, extension: &str) -> PathBuf {
  dir.join(format!("folio-{}.{extension}", Uuid::new_v4()))
}

// ─── HtmlRasterizer ──────────────────────────────────────────────────────────

/// Writes the markup itself. Any browser can print the result.
#[derive(Debug, Clone)]
pub struct HtmlRasterizer {
  temp_dir: PathBuf,
}

impl HtmlRasterizer {
  pub fn new(temp_dir: impl Into<PathBuf>) -> Self { Self { temp_dir: temp_dir.into() } }
}

impl Default for HtmlRasterizer {
  fn default() -> Self { Self::new(std::env::temp_dir()) }
}

impl Rasterizer for HtmlRasterizer {
  fn extension(&self) -> &str { "html" }

  async fn rasterize(&self, markup: &str) -> Result<PathBuf> {
    let path = temp_path(&self.temp_dir, self.extension());
    tokio::fs::write(&path, markup)
      .await
      .map_err(|e| Error::Render(format!("write {}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), "wrote markup");
    Ok(path)
  }
}

// ─── CommandRasterizer ───────────────────────────────────────────────────────

/// Pipes the markup through an external converter invoked as
/// `program [args..] <input.html> <output.ext>`, e.g. `wkhtmltopdf`.
#[derive(Debug, Clone)]
pub struct CommandRasterizer {
  program:   String,
  args:      Vec<String>,
  extension: String,
  temp_dir:  PathBuf,
}

impl CommandRasterizer {
  pub fn new(
    program: impl Into<String>,
    args: impl IntoIterator<Item = impl Into<String>>,
    extension: impl Into<String>,
  ) -> Self {
    Self {
      program:   program.into(),
      args:      args.into_iter().map(Into::into).collect(),
      extension: extension.into(),
      temp_dir:  std::env::temp_dir(),
    }
  }

  /// `wkhtmltopdf` producing PDF.
  pub fn wkhtmltopdf() -> Self { Self::new("wkhtmltopdf", ["--quiet"], "pdf") }

  pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.temp_dir = dir.into();
    self
  }
}

impl Rasterizer for CommandRasterizer {
  fn extension(&self) -> &str { &self.extension }

  async fn rasterize(&self, markup: &str) -> Result<PathBuf> {
    let input = temp_path(&self.temp_dir, "html");
    let output = temp_path(&self.temp_dir, &self.extension);

    tokio::fs::write(&input, markup)
      .await
      .map_err(|e| Error::Render(format!("write {}: {e}", input.display())))?;

    let result = Command::new(&self.program)
      .args(&self.args)
      .arg(&input)
      .arg(&output)
      .output()
      .await;
    crate::discard(&input).await;

    let out = result.map_err(|e| Error::Render(format!("{}: {e}", self.program)))?;
    if !out.status.success() {
      crate::discard(&output).await;
      let stderr = String::from_utf8_lossy(&out.stderr);
      return Err(Error::Render(format!(
        "{} exited with {}: {}",
        self.program,
        out.status,
        stderr.trim()
      )));
    }

    tracing::debug!(program = %self.program, path = %output.display(), "rasterized");
    Ok(output)
  }
}
