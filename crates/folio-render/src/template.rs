//! The [`Template`] trait and the section builders the variants share.

use folio_core::template::TemplateKind;

use crate::{
  creative::Creative,
  data::{EducationEntry, ExperienceEntry, Placeholders, TemplateData},
  markup::{self, Rule},
  minimal::Minimal,
  node::Node,
  professional::Professional,
};

/// One visual layout.
///
/// Implementors build the presentation tree; the markup rendering is derived
/// from that tree and the variant's stylesheet, so the two stay equivalent.
pub trait Template: Sync {
  fn kind(&self) -> TemplateKind;

  /// Sample content shown wherever data is missing.
  fn placeholders(&self) -> &'static Placeholders;

  fn stylesheet(&self) -> &'static [Rule];

  /// Build the on-screen tree. `None` renders the full sample resume.
  fn render_presentation(&self, data: Option<&TemplateData>) -> Node;

  /// Build the standalone markup document used for export.
  fn render_markup(&self, data: Option<&TemplateData>) -> String {
    let title = self.placeholders().fill(data).name;
    markup::document(&self.render_presentation(data), self.stylesheet(), &title)
  }
}

/// Resolve a template kind to its layout.
pub fn template(kind: TemplateKind) -> &'static dyn Template {
  match kind {
    TemplateKind::Professional => &Professional,
    TemplateKind::Creative => &Creative,
    TemplateKind::Minimal => &Minimal,
  }
}

// ─── Shared sections ─────────────────────────────────────────────────────────

pub(crate) fn section(title: &str, body: Vec<Node>) -> Node {
  let mut children = vec![Node::text("sectionTitle", title)];
  children.extend(body);
  Node::block("section", children)
}

pub(crate) fn experience_items(entries: &[ExperienceEntry]) -> Vec<Node> {
  entries
    .iter()
    .map(|e| {
      Node::block("experienceItem", vec![
        Node::block("experienceHeader", vec![
          Node::span("jobTitle", &e.title),
          Node::span("duration", &e.duration),
        ]),
        Node::text("company", &e.company),
        Node::text("description", &e.description),
      ])
    })
    .collect()
}

pub(crate) fn education_items(entries: &[EducationEntry]) -> Vec<Node> {
  entries
    .iter()
    .map(|e| {
      Node::block("educationItem", vec![
        Node::text("degree", &e.degree),
        Node::text("school", format!("{} \u{2022} {}", e.school, e.year)),
      ])
    })
    .collect()
}

pub(crate) fn skill_pills(skills: &[String]) -> Node {
  Node::block(
    "skillsContainer",
    skills.iter().map(|s| Node::span("skillTag", s)).collect(),
  )
}
