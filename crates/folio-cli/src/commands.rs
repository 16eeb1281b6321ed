//! One-shot subcommands: everything except the interactive wizard.

use std::io::Write;

use anyhow::Context as _;
use folio_core::{
  aggregate::load_document, document::Document, store::ResumeStore,
  template::TemplateKind,
};
use folio_export::{ExportMode, ExportOutcome, Exporter, Rasterizer, ShareSurface, default_filename};
use strum::IntoEnumIterator as _;
use uuid::Uuid;

/// `folio list`
pub async fn list<S: ResumeStore>(store: &S, out: &mut impl Write) -> anyhow::Result<()> {
  let resumes = store.list_resumes().await.context("listing resumes")?;
  if resumes.is_empty() {
    writeln!(out, "No resumes yet. Run `folio new` to create one.")?;
    return Ok(());
  }
  for r in resumes {
    let title = r.title.as_deref().map(|t| format!(" ({t})")).unwrap_or_default();
    writeln!(out, "{}  {}  {}{title}", r.id, r.created_at.format("%Y-%m-%d %H:%M"), r.name)?;
  }
  Ok(())
}

/// `folio templates`
pub fn templates(out: &mut impl Write) -> anyhow::Result<()> {
  for (i, kind) in TemplateKind::iter().enumerate() {
    writeln!(out, "{}. {:<12} {}  [{}]", i + 1, kind.name(), kind.description(), kind)?;
  }
  Ok(())
}

/// `folio show <id>`: the plain-text preview, or the full markup.
pub async fn show<S: ResumeStore>(
  store: &S,
  id: Uuid,
  kind: TemplateKind,
  markup: bool,
  out: &mut impl Write,
) -> anyhow::Result<()> {
  let document = load_document(store, id).await?;
  if markup {
    writeln!(out, "{}", folio_render::render_markup(kind, &document))?;
  } else {
    write!(out, "{}", preview_text(kind, &document))?;
  }
  Ok(())
}

/// `folio export <id>`
pub async fn export<S, R, Sh>(
  store: &S,
  exporter: &Exporter<R, Sh>,
  id: Uuid,
  kind: TemplateKind,
  mode: ExportMode,
  out: &mut impl Write,
) -> anyhow::Result<()>
where
  S: ResumeStore,
  R: Rasterizer,
  Sh: ShareSurface,
{
  let document = load_document(store, id).await?;
  let outcome = export_document(exporter, &document, kind, mode).await?;
  report(&outcome, out)
}

pub fn preview_text(kind: TemplateKind, document: &Document) -> String {
  format!(
    "── {} template ──\n\n{}",
    kind.name(),
    folio_render::render_presentation(kind, document).to_text()
  )
}

/// The name offered when the user saves without typing one.
pub fn suggested_filename(document: &Document) -> String {
  default_filename(Some(&document.resume.name))
}

pub async fn export_document<R: Rasterizer, Sh: ShareSurface>(
  exporter: &Exporter<R, Sh>,
  document: &Document,
  kind: TemplateKind,
  mode: ExportMode,
) -> folio_export::Result<ExportOutcome> {
  let markup = folio_render::render_markup(kind, document);
  exporter.export(&markup, mode).await
}

pub fn report(outcome: &ExportOutcome, out: &mut impl Write) -> anyhow::Result<()> {
  match outcome {
    ExportOutcome::Saved { path, filename } => {
      writeln!(out, "Saved {filename} to {}", path.display())?
    }
    ExportOutcome::Shared { path } => writeln!(out, "Shared {}", path.display())?,
  }
  Ok(())
}
