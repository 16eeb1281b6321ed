//! SQL schema for the folio SQLite store.
//!
//! Executed once at connection startup. Every statement is idempotent.

pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS resumes (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL,
    phone       TEXT NOT NULL,
    linkedin    TEXT,
    address     TEXT,
    title       TEXT,
    summary     TEXT,
    created_at  TEXT NOT NULL    -- RFC 3339 UTC, fixed width
);

CREATE TABLE IF NOT EXISTS education (
    id          TEXT PRIMARY KEY,
    resume_id   TEXT NOT NULL REFERENCES resumes(id),
    degree      TEXT NOT NULL,
    university  TEXT NOT NULL,
    year        TEXT NOT NULL,
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS experience (
    id          TEXT PRIMARY KEY,
    resume_id   TEXT NOT NULL REFERENCES resumes(id),
    job_title   TEXT NOT NULL,
    company     TEXT NOT NULL,
    start_date  TEXT NOT NULL,
    end_date    TEXT,
    description TEXT,
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS projects (
    id          TEXT PRIMARY KEY,
    resume_id   TEXT NOT NULL REFERENCES resumes(id),
    name        TEXT NOT NULL,
    description TEXT,
    created_at  TEXT NOT NULL
);

-- Core and other skills share a shape but live in separate tables.
CREATE TABLE IF NOT EXISTS skills (
    id          TEXT PRIMARY KEY,
    resume_id   TEXT NOT NULL REFERENCES resumes(id),
    skill       TEXT NOT NULL,
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS other_skills (
    id          TEXT PRIMARY KEY,
    resume_id   TEXT NOT NULL REFERENCES resumes(id),
    skill       TEXT NOT NULL,
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS education_resume_idx    ON education(resume_id);
CREATE INDEX IF NOT EXISTS experience_resume_idx   ON experience(resume_id);
CREATE INDEX IF NOT EXISTS projects_resume_idx     ON projects(resume_id);
CREATE INDEX IF NOT EXISTS skills_resume_idx       ON skills(resume_id);
CREATE INDEX IF NOT EXISTS other_skills_resume_idx ON other_skills(resume_id);

PRAGMA user_version = 1;
";

/// Table backing each skill collection.
pub fn skill_table(kind: folio_core::resume::SkillKind) -> &'static str {
  match kind {
    folio_core::resume::SkillKind::Core => "skills",
    folio_core::resume::SkillKind::Other => "other_skills",
  }
}
