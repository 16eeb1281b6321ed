//! Glue between the settings and the export pipeline.

use std::path::PathBuf;

use folio_export::{CommandRasterizer, CommandShare, Exporter, HtmlRasterizer, Rasterizer};

use crate::config::{RasterizerKind, Settings};

/// The rasterizer selected in the settings.
#[derive(Debug, Clone)]
pub enum AnyRasterizer {
  Html(HtmlRasterizer),
  Command(CommandRasterizer),
}

impl From<RasterizerKind> for AnyRasterizer {
  fn from(kind: RasterizerKind) -> Self {
    match kind {
      RasterizerKind::Html => Self::Html(HtmlRasterizer::default()),
      RasterizerKind::Wkhtmltopdf => Self::Command(CommandRasterizer::wkhtmltopdf()),
    }
  }
}

impl Rasterizer for AnyRasterizer {
  fn extension(&self) -> &str {
    match self {
      Self::Html(r) => r.extension(),
      Self::Command(r) => r.extension(),
    }
  }

  async fn rasterize(&self, markup: &str) -> folio_export::Result<PathBuf> {
    match self {
      Self::Html(r) => r.rasterize(markup).await,
      Self::Command(r) => r.rasterize(markup).await,
    }
  }
}

pub type CliExporter = Exporter<AnyRasterizer, CommandShare>;

pub fn exporter(settings: &Settings) -> CliExporter {
  let share = settings
    .share_command
    .as_deref()
    .map(CommandShare::new)
    .unwrap_or_default();
  Exporter::new(AnyRasterizer::from(settings.rasterizer), share, &settings.documents_dir)
}
