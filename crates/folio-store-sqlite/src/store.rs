//! [`SqliteStore`] — the SQLite implementation of [`ResumeStore`].

use std::path::Path;

use chrono::Utc;
use folio_core::{
  resume::{
    Education, Experience, NewEducation, NewExperience, NewProject, NewResume,
    NewSkill, Project, Resume, Skill, SkillKind,
  },
  store::ResumeStore,
};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{
    RESUME_COLUMNS, RawEducation, RawExperience, RawProject, RawResume, RawSkill,
    encode_dt, encode_uuid,
  },
  schema::{SCHEMA, skill_table},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A folio resume store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

type BatchWrite = Box<dyn FnOnce(&rusqlite::Transaction<'_>) -> rusqlite::Result<()> + Send>;

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run `write` in one transaction after checking that every id in
  /// `parents` names an existing resume. A missing parent rolls the whole
  /// batch back.
  async fn insert_batch(&self, parents: Vec<Uuid>, write: BatchWrite) -> Result<()> {
    let mut parents = parents;
    parents.sort_unstable();
    parents.dedup();

    let missing: Option<Uuid> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        for id in parents {
          let exists = tx
            .query_row(
              "SELECT 1 FROM resumes WHERE id = ?1",
              rusqlite::params![encode_uuid(id)],
              |_| Ok(()),
            )
            .optional()?
            .is_some();
          if !exists {
            return Ok(Some(id));
          }
        }
        write(&tx)?;
        tx.commit()?;
        Ok(None)
      })
      .await?;

    match missing {
      Some(id) => Err(Error::ResumeNotFound(id)),
      None => Ok(()),
    }
  }

  /// Rows of one child table for `resume_id`, oldest first.
  async fn query_children<T, F>(
    &self,
    sql: String,
    resume_id: Uuid,
    map: F,
  ) -> Result<Vec<T>>
  where
    T: Send + 'static,
    F: Fn(&rusqlite::Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    let id_str = encode_uuid(resume_id);
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![id_str], |row| map(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}

// ─── ResumeStore impl ────────────────────────────────────────────────────────

impl ResumeStore for SqliteStore {
  type Error = Error;

  // ── Resumes ───────────────────────────────────────────────────────────────

  async fn create_resume(&self, input: NewResume) -> Result<Resume> {
    let resume = Resume {
      id:         Uuid::new_v4(),
      name:       input.name,
      email:      input.email,
      phone:      input.phone,
      linkedin:   input.linkedin,
      address:    input.address,
      title:      input.title,
      summary:    input.summary,
      created_at: Utc::now(),
    };

    let row = resume.clone();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO resumes (
             id, name, email, phone, linkedin, address, title, summary, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
          rusqlite::params![
            encode_uuid(row.id),
            row.name,
            row.email,
            row.phone,
            row.linkedin,
            row.address,
            row.title,
            row.summary,
            encode_dt(row.created_at),
          ],
        )?;
        Ok(())
      })
      .await?;

    tracing::debug!(resume_id = %resume.id, "inserted resume");
    Ok(resume)
  }

  async fn get_resume(&self, id: Uuid) -> Result<Option<Resume>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawResume> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {RESUME_COLUMNS} FROM resumes WHERE id = ?1"),
              rusqlite::params![id_str],
              RawResume::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawResume::into_resume).transpose()
  }

  async fn list_resumes(&self) -> Result<Vec<Resume>> {
    let raws: Vec<RawResume> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {RESUME_COLUMNS} FROM resumes ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt
          .query_map([], RawResume::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawResume::into_resume).collect()
  }

  // ── Children — bulk inserts ───────────────────────────────────────────────

  async fn insert_education(&self, rows: Vec<NewEducation>) -> Result<Vec<Education>> {
    if rows.is_empty() {
      return Ok(Vec::new());
    }
    let now = Utc::now();
    let saved: Vec<Education> = rows
      .into_iter()
      .map(|r| Education {
        id:         Uuid::new_v4(),
        resume_id:  r.resume_id,
        degree:     r.degree,
        university: r.university,
        year:       r.year,
        created_at: now,
      })
      .collect();

    let parents = saved.iter().map(|r| r.resume_id).collect();
    let batch = saved.clone();
    self
      .insert_batch(
        parents,
        Box::new(move |tx| {
          let mut stmt = tx.prepare(
            "INSERT INTO education (id, resume_id, degree, university, year, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          )?;
          for r in batch {
            stmt.execute(rusqlite::params![
              encode_uuid(r.id),
              encode_uuid(r.resume_id),
              r.degree,
              r.university,
              r.year,
              encode_dt(r.created_at),
            ])?;
          }
          Ok(())
        }),
      )
      .await?;

    tracing::debug!(rows = saved.len(), "inserted education");
    Ok(saved)
  }

  async fn insert_experience(&self, rows: Vec<NewExperience>) -> Result<Vec<Experience>> {
    if rows.is_empty() {
      return Ok(Vec::new());
    }
    let now = Utc::now();
    let saved: Vec<Experience> = rows
      .into_iter()
      .map(|r| Experience {
        id:          Uuid::new_v4(),
        resume_id:   r.resume_id,
        job_title:   r.job_title,
        company:     r.company,
        start_date:  r.start_date,
        end_date:    r.end_date,
        description: r.description,
        created_at:  now,
      })
      .collect();

    let parents = saved.iter().map(|r| r.resume_id).collect();
    let batch = saved.clone();
    self
      .insert_batch(
        parents,
        Box::new(move |tx| {
          let mut stmt = tx.prepare(
            "INSERT INTO experience (
               id, resume_id, job_title, company, start_date, end_date,
               description, created_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          )?;
          for r in batch {
            stmt.execute(rusqlite::params![
              encode_uuid(r.id),
              encode_uuid(r.resume_id),
              r.job_title,
              r.company,
              r.start_date,
              r.end_date,
              r.description,
              encode_dt(r.created_at),
            ])?;
          }
          Ok(())
        }),
      )
      .await?;

    tracing::debug!(rows = saved.len(), "inserted experience");
    Ok(saved)
  }

  async fn insert_projects(&self, rows: Vec<NewProject>) -> Result<Vec<Project>> {
    if rows.is_empty() {
      return Ok(Vec::new());
    }
    let now = Utc::now();
    let saved: Vec<Project> = rows
      .into_iter()
      .map(|r| Project {
        id:          Uuid::new_v4(),
        resume_id:   r.resume_id,
        name:        r.name,
        description: r.description,
        created_at:  now,
      })
      .collect();

    let parents = saved.iter().map(|r| r.resume_id).collect();
    let batch = saved.clone();
    self
      .insert_batch(
        parents,
        Box::new(move |tx| {
          let mut stmt = tx.prepare(
            "INSERT INTO projects (id, resume_id, name, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
          )?;
          for r in batch {
            stmt.execute(rusqlite::params![
              encode_uuid(r.id),
              encode_uuid(r.resume_id),
              r.name,
              r.description,
              encode_dt(r.created_at),
            ])?;
          }
          Ok(())
        }),
      )
      .await?;

    tracing::debug!(rows = saved.len(), "inserted projects");
    Ok(saved)
  }

  async fn insert_skills(&self, rows: Vec<NewSkill>) -> Result<Vec<Skill>> {
    if rows.is_empty() {
      return Ok(Vec::new());
    }
    let now = Utc::now();
    let saved: Vec<Skill> = rows
      .into_iter()
      .map(|r| Skill {
        id:         Uuid::new_v4(),
        resume_id:  r.resume_id,
        kind:       r.kind,
        skill:      r.skill,
        created_at: now,
      })
      .collect();

    let parents = saved.iter().map(|r| r.resume_id).collect();
    let batch = saved.clone();
    self
      .insert_batch(
        parents,
        Box::new(move |tx| {
          for r in batch {
            tx.execute(
              &format!(
                "INSERT INTO {} (id, resume_id, skill, created_at) VALUES (?1, ?2, ?3, ?4)",
                skill_table(r.kind)
              ),
              rusqlite::params![
                encode_uuid(r.id),
                encode_uuid(r.resume_id),
                r.skill,
                encode_dt(r.created_at),
              ],
            )?;
          }
          Ok(())
        }),
      )
      .await?;

    tracing::debug!(rows = saved.len(), "inserted skills");
    Ok(saved)
  }

  // ── Children — reads ──────────────────────────────────────────────────────

  async fn list_education(&self, resume_id: Uuid) -> Result<Vec<Education>> {
    let raws = self
      .query_children(
        "SELECT id, resume_id, degree, university, year, created_at
         FROM education WHERE resume_id = ?1 ORDER BY created_at, rowid"
          .to_owned(),
        resume_id,
        RawEducation::from_row,
      )
      .await?;
    raws.into_iter().map(RawEducation::into_education).collect()
  }

  async fn list_experience(&self, resume_id: Uuid) -> Result<Vec<Experience>> {
    let raws = self
      .query_children(
        "SELECT id, resume_id, job_title, company, start_date, end_date,
                description, created_at
         FROM experience WHERE resume_id = ?1 ORDER BY created_at, rowid"
          .to_owned(),
        resume_id,
        RawExperience::from_row,
      )
      .await?;
    raws.into_iter().map(RawExperience::into_experience).collect()
  }

  async fn list_projects(&self, resume_id: Uuid) -> Result<Vec<Project>> {
    let raws = self
      .query_children(
        "SELECT id, resume_id, name, description, created_at
         FROM projects WHERE resume_id = ?1 ORDER BY created_at, rowid"
          .to_owned(),
        resume_id,
        RawProject::from_row,
      )
      .await?;
    raws.into_iter().map(RawProject::into_project).collect()
  }

  async fn list_skills(&self, resume_id: Uuid, kind: SkillKind) -> Result<Vec<Skill>> {
    let raws = self
      .query_children(
        format!(
          "SELECT id, resume_id, skill, created_at
           FROM {} WHERE resume_id = ?1 ORDER BY created_at, rowid",
          skill_table(kind)
        ),
        resume_id,
        RawSkill::from_row,
      )
      .await?;
    raws.into_iter().map(|raw| raw.into_skill(kind)).collect()
  }
}
