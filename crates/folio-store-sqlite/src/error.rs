//! Error type for `folio-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A child row named a resume that does not exist. Nothing from the batch
  /// was written.
  #[error("resume not found: {0}")]
  ResumeNotFound(uuid::Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
