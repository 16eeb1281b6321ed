//! In-memory [`ResumeStore`] used by this crate's tests, with switches for
//! injecting write and per-collection read failures.

use std::{
  collections::HashSet,
  sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
  },
};

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::{
  resume::{
    Education, Experience, NewEducation, NewExperience, NewProject, NewResume,
    NewSkill, Project, Resume, Skill, SkillKind,
  },
  store::ResumeStore,
};

#[derive(Debug, Error)]
pub enum MemoryError {
  #[error("injected write failure")]
  Write,
  #[error("injected read failure on {0}")]
  Read(&'static str),
  #[error("resume not found: {0}")]
  ResumeNotFound(Uuid),
}

#[derive(Default)]
struct Tables {
  resumes:      Vec<Resume>,
  education:    Vec<Education>,
  experience:   Vec<Experience>,
  projects:     Vec<Project>,
  skills:       Vec<Skill>,
}

#[derive(Default)]
pub struct MemoryStore {
  tables:      Mutex<Tables>,
  fail_writes: AtomicBool,
  fail_reads:  Mutex<HashSet<&'static str>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  pub fn fail_writes(&self, on: bool) { self.fail_writes.store(on, Ordering::SeqCst); }

  /// Make every read of `collection` (e.g. `"education"`, `"resumes"`) fail.
  pub fn fail_reads_of(&self, collection: &'static str) {
    self.fail_reads.lock().unwrap().insert(collection);
  }

  pub async fn seed_resume(&self, name: &str) -> Resume {
    self
      .create_resume(NewResume {
        name: name.into(),
        email: "someone@example.com".into(),
        phone: "555-0100".into(),
        ..NewResume::default()
      })
      .await
      .unwrap()
  }

  fn check_write(&self) -> Result<(), MemoryError> {
    if self.fail_writes.load(Ordering::SeqCst) {
      Err(MemoryError::Write)
    } else {
      Ok(())
    }
  }

  fn check_read(&self, collection: &'static str) -> Result<(), MemoryError> {
    if self.fail_reads.lock().unwrap().contains(collection) {
      Err(MemoryError::Read(collection))
    } else {
      Ok(())
    }
  }

  fn check_parents(&self, ids: impl IntoIterator<Item = Uuid>) -> Result<(), MemoryError> {
    let tables = self.tables.lock().unwrap();
    for id in ids {
      if !tables.resumes.iter().any(|r| r.id == id) {
        return Err(MemoryError::ResumeNotFound(id));
      }
    }
    Ok(())
  }
}

impl ResumeStore for MemoryStore {
  type Error = MemoryError;

  async fn create_resume(&self, input: NewResume) -> Result<Resume, MemoryError> {
    self.check_write()?;
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
    self.tables.lock().unwrap().resumes.push(resume.clone());
    Ok(resume)
  }

  async fn get_resume(&self, id: Uuid) -> Result<Option<Resume>, MemoryError> {
    self.check_read("resumes")?;
    let tables = self.tables.lock().unwrap();
    Ok(tables.resumes.iter().find(|r| r.id == id).cloned())
  }

  async fn list_resumes(&self) -> Result<Vec<Resume>, MemoryError> {
    self.check_read("resumes")?;
    let mut all = self.tables.lock().unwrap().resumes.clone();
    all.reverse();
    Ok(all)
  }

  async fn insert_education(
    &self,
    rows: Vec<NewEducation>,
  ) -> Result<Vec<Education>, MemoryError> {
    self.check_write()?;
    self.check_parents(rows.iter().map(|r| r.resume_id))?;
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
    self.tables.lock().unwrap().education.extend(saved.iter().cloned());
    Ok(saved)
  }

  async fn insert_experience(
    &self,
    rows: Vec<NewExperience>,
  ) -> Result<Vec<Experience>, MemoryError> {
    self.check_write()?;
    self.check_parents(rows.iter().map(|r| r.resume_id))?;
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
    self.tables.lock().unwrap().experience.extend(saved.iter().cloned());
    Ok(saved)
  }

  async fn insert_projects(
    &self,
    rows: Vec<NewProject>,
  ) -> Result<Vec<Project>, MemoryError> {
    self.check_write()?;
    self.check_parents(rows.iter().map(|r| r.resume_id))?;
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
    self.tables.lock().unwrap().projects.extend(saved.iter().cloned());
    Ok(saved)
  }

  async fn insert_skills(&self, rows: Vec<NewSkill>) -> Result<Vec<Skill>, MemoryError> {
    self.check_write()?;
    self.check_parents(rows.iter().map(|r| r.resume_id))?;
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
    self.tables.lock().unwrap().skills.extend(saved.iter().cloned());
    Ok(saved)
  }

  async fn list_education(&self, resume_id: Uuid) -> Result<Vec<Education>, MemoryError> {
    self.check_read("education")?;
    let tables = self.tables.lock().unwrap();
    Ok(tables.education.iter().filter(|r| r.resume_id == resume_id).cloned().collect())
  }

  async fn list_experience(&self, resume_id: Uuid) -> Result<Vec<Experience>, MemoryError> {
    self.check_read("experience")?;
    let tables = self.tables.lock().unwrap();
    Ok(tables.experience.iter().filter(|r| r.resume_id == resume_id).cloned().collect())
  }

  async fn list_projects(&self, resume_id: Uuid) -> Result<Vec<Project>, MemoryError> {
    self.check_read("projects")?;
    let tables = self.tables.lock().unwrap();
    Ok(tables.projects.iter().filter(|r| r.resume_id == resume_id).cloned().collect())
  }

  async fn list_skills(
    &self,
    resume_id: Uuid,
    kind: SkillKind,
  ) -> Result<Vec<Skill>, MemoryError> {
    self.check_read(match kind {
      SkillKind::Core => "skills",
      SkillKind::Other => "other_skills",
    })?;
    let tables = self.tables.lock().unwrap();
    Ok(
      tables
        .skills
        .iter()
        .filter(|r| r.resume_id == resume_id && r.kind == kind)
        .cloned()
        .collect(),
    )
  }
}
