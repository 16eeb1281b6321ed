//! The aggregated read model — never stored, always derived.

use serde::{Deserialize, Serialize};

use crate::resume::{Education, Experience, Project, Resume, Skill};

/// One resume joined with its child collections, used only for rendering.
///
/// Recomputed every time a preview is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  pub resume:       Resume,
  pub education:    Vec<Education>,
  pub experience:   Vec<Experience>,
  pub projects:     Vec<Project>,
  pub skills:       Vec<Skill>,
  pub other_skills: Vec<Skill>,
}

impl Document {
  /// Order every child collection by creation time. The sort is stable, so
  /// rows created in one batch keep the order the store returned them in.
  pub fn sort_children(&mut self) {
    self.education.sort_by_key(|r| r.created_at);
    self.experience.sort_by_key(|r| r.created_at);
    self.projects.sort_by_key(|r| r.created_at);
    self.skills.sort_by_key(|r| r.created_at);
    self.other_skills.sort_by_key(|r| r.created_at);
  }

  /// Core skill labels in document order.
  pub fn skill_labels(&self) -> Vec<&str> {
    self.skills.iter().map(|s| s.skill.as_str()).collect()
  }
}
