//! Conversions between domain types and the plain-text SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings (nanosecond
//! precision, `Z` suffix) so that lexical order matches chronological order.
//! UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use folio_core::resume::{Education, Experience, Project, Resume, Skill, SkillKind};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Scalars ─────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `resumes` row.
pub struct RawResume {
  pub id:         String,
  pub name:       String,
  pub email:      String,
  pub phone:      String,
  pub linkedin:   Option<String>,
  pub address:    Option<String>,
  pub title:      Option<String>,
  pub summary:    Option<String>,
  pub created_at: String,
}

pub const RESUME_COLUMNS: &str =
  "id, name, email, phone, linkedin, address, title, summary, created_at";

impl RawResume {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      name:       row.get(1)?,
      email:      row.get(2)?,
      phone:      row.get(3)?,
      linkedin:   row.get(4)?,
      address:    row.get(5)?,
      title:      row.get(6)?,
      summary:    row.get(7)?,
      created_at: row.get(8)?,
    })
  }

  pub fn into_resume(self) -> Result<Resume> {
    Ok(Resume {
      id:         decode_uuid(&self.id)?,
      name:       self.name,
      email:      self.email,
      phone:      self.phone,
      linkedin:   self.linkedin,
      address:    self.address,
      title:      self.title,
      summary:    self.summary,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

pub struct RawEducation {
  pub id:         String,
  pub resume_id:  String,
  pub degree:     String,
  pub university: String,
  pub year:       String,
  pub created_at: String,
}

impl RawEducation {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      resume_id:  row.get(1)?,
      degree:     row.get(2)?,
      university: row.get(3)?,
      year:       row.get(4)?,
      created_at: row.get(5)?,
    })
  }

  pub fn into_education(self) -> Result<Education> {
    Ok(Education {
      id:         decode_uuid(&self.id)?,
      resume_id:  decode_uuid(&self.resume_id)?,
      degree:     self.degree,
      university: self.university,
      year:       self.year,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

pub struct RawExperience {
  pub id:          String,
  pub resume_id:   String,
  pub job_title:   String,
  pub company:     String,
  pub start_date:  String,
  pub end_date:    Option<String>,
  pub description: Option<String>,
  pub created_at:  String,
}

impl RawExperience {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      resume_id:   row.get(1)?,
      job_title:   row.get(2)?,
      company:     row.get(3)?,
      start_date:  row.get(4)?,
      end_date:    row.get(5)?,
      description: row.get(6)?,
      created_at:  row.get(7)?,
    })
  }

  pub fn into_experience(self) -> Result<Experience> {
    Ok(Experience {
      id:          decode_uuid(&self.id)?,
      resume_id:   decode_uuid(&self.resume_id)?,
      job_title:   self.job_title,
      company:     self.company,
      start_date:  self.start_date,
      end_date:    self.end_date,
      description: self.description,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

pub struct RawProject {
  pub id:          String,
  pub resume_id:   String,
  pub name:        String,
  pub description: Option<String>,
  pub created_at:  String,
}

impl RawProject {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      resume_id:   row.get(1)?,
      name:        row.get(2)?,
      description: row.get(3)?,
      created_at:  row.get(4)?,
    })
  }

  pub fn into_project(self) -> Result<Project> {
    Ok(Project {
      id:          decode_uuid(&self.id)?,
      resume_id:   decode_uuid(&self.resume_id)?,
      name:        self.name,
      description: self.description,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

/// A row from either skill table; the kind comes from the table it was read
/// from.
pub struct RawSkill {
  pub id:         String,
  pub resume_id:  String,
  pub skill:      String,
  pub created_at: String,
}

impl RawSkill {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      resume_id:  row.get(1)?,
      skill:      row.get(2)?,
      created_at: row.get(3)?,
    })
  }

  pub fn into_skill(self, kind: SkillKind) -> Result<Skill> {
    Ok(Skill {
      id: decode_uuid(&self.id)?,
      resume_id: decode_uuid(&self.resume_id)?,
      kind,
      skill: self.skill,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
