//! Error types for `folio-core`.

use thiserror::Error;
use uuid::Uuid;

use crate::wizard::Step;

#[derive(Debug, Error)]
pub enum Error {
  /// A required personal-info field was blank. Raised before any store call.
  #[error("{0} is required")]
  MissingField(&'static str),

  #[error("row {index} is out of range (the list has {len} rows)")]
  RowOutOfRange { index: usize, len: usize },

  #[error("cannot remove the last remaining row")]
  LastRow,

  #[error("unknown field: {0:?}")]
  UnknownField(String),

  #[error("invalid value for {field}: {value:?}")]
  InvalidValue { field: String, value: String },

  #[error("unknown template: {0:?}")]
  UnknownTemplate(String),

  #[error("resume not found: {0}")]
  ResumeNotFound(Uuid),

  #[error("the {step} step does not support {action}")]
  InvalidTransition { step: Step, action: &'static str },

  /// A persistence failure, displayed verbatim.
  #[error("{0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }

  /// `true` for errors caught before any persistence call was made.
  pub fn is_validation(&self) -> bool {
    matches!(
      self,
      Self::MissingField(_)
        | Self::RowOutOfRange { .. }
        | Self::LastRow
        | Self::UnknownField(_)
        | Self::InvalidValue { .. }
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
