//! Template renderer for folio.
//!
//! Turns a [`folio_core::document::Document`] into one of three fixed
//! layouts. Each layout produces a presentation tree ([`Node`]) for on-screen
//! display; the standalone markup string used for export is rendered from the
//! same tree, with every text value escaped. Pure and synchronous.
//!
//! # Quick start
//!
//! ```no_run
//! use folio_core::template::TemplateKind;
//! use folio_render::template;
//!
//! // No document: the layout's sample resume, as shown in the picker.
//! let html = template(TemplateKind::Minimal).render_markup(None);
//! assert!(html.contains("Alex Chen"));
//! ```

mod creative;
pub mod data;
mod escape;
pub mod markup;
mod minimal;
pub mod node;
mod professional;
mod template;

pub use data::TemplateData;
pub use escape::{escape_html, unescape_html};
use folio_core::{document::Document, template::TemplateKind};
pub use node::Node;
pub use template::{Template, template};

/// Render `doc` with layout `kind` as a standalone markup document.
pub fn render_markup(kind: TemplateKind, doc: &Document) -> String {
  template(kind).render_markup(Some(&TemplateData::from(doc)))
}

/// Render `doc` with layout `kind` as a presentation tree.
pub fn render_presentation(kind: TemplateKind, doc: &Document) -> Node {
  template(kind).render_presentation(Some(&TemplateData::from(doc)))
}

#[cfg(test)]
mod tests;
