//! Template identifiers carried from the template picker to the preview.
//!
//! The set of layouts is closed; the renderer crate maps each kind to its
//! implementation.

use serde::{Deserialize, Serialize};

/// One of the three fixed visual layouts.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
  strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum TemplateKind {
  /// Blue accents, comma-separated skills.
  #[default]
  #[strum(to_string = "professional", serialize = "classic", serialize = "1")]
  Professional,
  /// Coloured header band, pill-shaped skill tags.
  #[strum(to_string = "creative", serialize = "modern", serialize = "2")]
  Creative,
  /// Light typography, lots of whitespace.
  #[strum(to_string = "minimal", serialize = "3")]
  Minimal,
}

impl TemplateKind {
  /// Display name shown in the template picker.
  pub fn name(self) -> &'static str {
    match self {
      Self::Professional => "Professional",
      Self::Creative => "Creative",
      Self::Minimal => "Minimal",
    }
  }

  pub fn description(self) -> &'static str {
    match self {
      Self::Professional => {
        "Clean and modern design perfect for corporate roles"
      }
      Self::Creative => "Stand out with this bold and colorful template",
      Self::Minimal => "Simple and elegant design with lots of whitespace",
    }
  }

  /// Accent colour as a CSS hex string.
  pub fn accent(self) -> &'static str {
    match self {
      Self::Professional => "#2196F3",
      Self::Creative => "#FF5722",
      Self::Minimal => "#607D8B",
    }
  }
}
