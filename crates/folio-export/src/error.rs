//! Error type for `folio-export`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Save was requested with a blank file name. Raised before anything is
  /// rendered.
  #[error("file name must not be empty")]
  EmptyFilename,

  /// Producing the file from markup failed.
  #[error("failed to render document: {0}")]
  Render(String),

  /// The rendered file could not be placed at its destination.
  #[error("failed to save {}: {source}", to.display())]
  Move {
    to:     PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to share {}: {reason}", path.display())]
  Share { path: PathBuf, reason: String },
}

impl Error {
  /// `true` when the request was rejected before any file work began.
  pub fn is_validation(&self) -> bool { matches!(self, Self::EmptyFilename) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
