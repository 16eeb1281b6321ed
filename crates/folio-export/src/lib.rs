//! Export pipeline for folio: rendered markup in, a file out.
//!
//! Two modes. **Share** rasterizes to a temporary file and hands it to a
//! [`ShareSurface`]. **Save** validates the file name first, rasterizes,
//! then moves the file into the documents directory under the sanitized
//! name. Failures are reported once and never retried; a temporary file
//! whose export failed is removed.

pub mod error;
mod rasterize;
mod share;

use std::path::{Path, PathBuf};

pub use error::{Error, Result};
pub use rasterize::{CommandRasterizer, HtmlRasterizer, Rasterizer};
pub use share::{CommandShare, ShareSurface};

/// What to do with the rendered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportMode {
  Share,
  /// `filename` is the user's input, without extension.
  Save { filename: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
  /// The temporary file that was handed to the share surface.
  Shared { path: PathBuf },
  /// The file now lives at `path`; `filename` includes the extension.
  Saved { path: PathBuf, filename: String },
}

impl ExportOutcome {
  pub fn path(&self) -> &Path {
    match self {
      Self::Shared { path } | Self::Saved { path, .. } => path,
    }
  }
}

// ─── Filenames ───────────────────────────────────────────────────────────────

/// Suggested file name for a resume: every character of `name` that is not
/// ASCII alphanumeric becomes `_`, then `_Resume` is appended.
pub fn default_filename(name: Option<&str>) -> String {
  match name.map(str::trim).filter(|n| !n.is_empty()) {
    Some(name) => {
      let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
      format!("{stem}_Resume")
    }
    None => "My_Resume".to_owned(),
  }
}

/// Trim a user-supplied file name and make it safe as a single path
/// component. Path separators and control characters become `_`.
pub fn sanitize_filename(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(Error::EmptyFilename);
  }
  Ok(
    trimmed
      .chars()
      .map(|c| if c == '/' || c == '\\' || c.is_control() { '_' } else { c })
      .collect(),
  )
}

// ─── Exporter ────────────────────────────────────────────────────────────────

pub struct Exporter<R, S> {
  rasterizer:    R,
  share:         S,
  documents_dir: PathBuf,
}

impl<R: Rasterizer, S: ShareSurface> Exporter<R, S> {
  pub fn new(rasterizer: R, share: S, documents_dir: impl Into<PathBuf>) -> Self {
    Self { rasterizer, share, documents_dir: documents_dir.into() }
  }

  pub fn documents_dir(&self) -> &Path { &self.documents_dir }

  pub fn extension(&self) -> &str { self.rasterizer.extension() }

  pub async fn export(&self, markup: &str, mode: ExportMode) -> Result<ExportOutcome> {
    match mode {
      ExportMode::Share => self.share(markup).await,
      ExportMode::Save { filename } => self.save(markup, &filename).await,
    }
  }

  async fn share(&self, markup: &str) -> Result<ExportOutcome> {
    let path = self.rasterizer.rasterize(markup).await?;
    if let Err(e) = self.share.share(&path).await {
      discard(&path).await;
      return Err(e);
    }
    tracing::info!(path = %path.display(), "shared export");
    Ok(ExportOutcome::Shared { path })
  }

  async fn save(&self, markup: &str, filename: &str) -> Result<ExportOutcome> {
    let stem = sanitize_filename(filename)?;
    let filename = format!("{stem}.{}", self.rasterizer.extension());
    let dest = self.documents_dir.join(&filename);

    let temp = self.rasterizer.rasterize(markup).await?;
    if let Err(source) = place(&temp, &self.documents_dir, &dest).await {
      discard(&temp).await;
      return Err(Error::Move { to: dest, source });
    }

    tracing::info!(path = %dest.display(), "saved export");
    Ok(ExportOutcome::Saved { path: dest, filename })
  }
}

/// Move `from` to `to`, creating `dir` first. Falls back to [`copy_into`]
/// when a rename is not possible (e.g. across filesystems). An existing file
/// at `to` is replaced.
async fn place(from: &Path, dir: &Path, to: &Path) -> std::io::Result<()> {
  tokio::fs::create_dir_all(dir).await?;
  if tokio::fs::rename(from, to).await.is_ok() {
    return Ok(());
  }
  copy_into(from, dir, to).await?;
  discard(from).await;
  Ok(())
}

/// Copy `from` to a staging name in `dir`, then rename it onto `to`. On
/// failure the staging file is removed and `to` keeps its old contents.
async fn copy_into(from: &Path, dir: &Path, to: &Path) -> std::io::Result<()> {
  let staging = dir.join(format!(".folio-{}.partial", uuid::Uuid::new_v4()));
  let result = match tokio::fs::copy(from, &staging).await {
    Ok(_) => tokio::fs::rename(&staging, to).await,
    Err(e) => Err(e),
  };
  if result.is_err() {
    discard(&staging).await;
  }
  result
}

/// Remove a temporary file, logging anything but a missing file.
pub(crate) async fn discard(path: &Path) {
  match tokio::fs::remove_file(path).await {
    Ok(()) => {}
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
    Err(e) => {
      tracing::warn!(path = %path.display(), error = %e, "failed to remove temporary file");
    }
  }
}

#[cfg(test)]
mod tests;
