//! Entity schema — a resume and its four kinds of child rows.
//!
//! Children reference their resume by identifier only; they are stored and
//! fetched independently and joined at read time by
//! [`crate::aggregate::load_document`]. Persisted records are never mutated.
//!
//! Each entity comes in two shapes: the persisted record (with store-assigned
//! `id` and `created_at`) and a `New*` input that cannot carry either.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Resume ──────────────────────────────────────────────────────────────────

/// The parent record; created once, at the start of the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
  pub id:         Uuid,
  pub name:       String,
  pub email:      String,
  pub phone:      String,
  pub linkedin:   Option<String>,
  pub address:    Option<String>,
  /// Headline, e.g. "Software Engineer".
  pub title:      Option<String>,
  pub summary:    Option<String>,
  /// Server-assigned; never changes after creation.
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::ResumeStore::create_resume`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewResume {
  pub name:     String,
  pub email:    String,
  pub phone:    String,
  #[serde(default)]
  pub linkedin: Option<String>,
  #[serde(default)]
  pub address:  Option<String>,
  #[serde(default)]
  pub title:    Option<String>,
  #[serde(default)]
  pub summary:  Option<String>,
}

// ─── Education ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
  pub id:         Uuid,
  pub resume_id:  Uuid,
  pub degree:     String,
  pub university: String,
  /// Free text; usually a graduation year.
  pub year:       String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEducation {
  pub resume_id:  Uuid,
  pub degree:     String,
  pub university: String,
  pub year:       String,
}

// ─── Experience ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
  pub id:          Uuid,
  pub resume_id:   Uuid,
  pub job_title:   String,
  pub company:     String,
  pub start_date:  String,
  /// Free text; may hold a sentinel such as "Present".
  pub end_date:    Option<String>,
  pub description: Option<String>,
  pub created_at:  DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExperience {
  pub resume_id:   Uuid,
  pub job_title:   String,
  pub company:     String,
  pub start_date:  String,
  #[serde(default)]
  pub end_date:    Option<String>,
  #[serde(default)]
  pub description: Option<String>,
}

// ─── Project ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
  pub id:          Uuid,
  pub resume_id:   Uuid,
  pub name:        String,
  pub description: Option<String>,
  pub created_at:  DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
  pub resume_id:   Uuid,
  pub name:        String,
  #[serde(default)]
  pub description: Option<String>,
}

// ─── Skill ───────────────────────────────────────────────────────────────────

/// Which of the two identically-shaped skill collections a row belongs to.
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
#[strum(serialize_all = "lowercase")]
pub enum SkillKind {
  /// The skills shown on every template.
  #[default]
  Core,
  /// Secondary skills (languages, tools, hobbies).
  Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
  pub id:         Uuid,
  pub resume_id:  Uuid,
  pub kind:       SkillKind,
  pub skill:      String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSkill {
  pub resume_id: Uuid,
  #[serde(default)]
  pub kind:      SkillKind,
  pub skill:     String,
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// `None` for an empty or whitespace-only value, otherwise the value as typed.
pub fn non_blank(value: String) -> Option<String> {
  if value.trim().is_empty() { None } else { Some(value) }
}
