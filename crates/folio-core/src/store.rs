//! The `ResumeStore` trait — the persistence boundary.
//!
//! The trait is implemented by storage backends (`folio-store-sqlite`) and by
//! the HTTP client in `folio-cli`. Higher layers depend on this abstraction,
//! never on a concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::resume::{
  Education, Experience, NewEducation, NewExperience, NewProject, NewResume,
  NewSkill, Project, Resume, Skill, SkillKind,
};

/// Abstraction over a folio persistence backend.
///
/// Writes are insert-only. Bulk inserts are all-or-nothing: either every row
/// in the batch is persisted or none is. Inserting a child row whose
/// `resume_id` does not name an existing resume is an error.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ResumeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Resumes ───────────────────────────────────────────────────────────

  /// Persist a new resume; the store assigns `id` and `created_at`.
  fn create_resume(
    &self,
    input: NewResume,
  ) -> impl Future<Output = Result<Resume, Self::Error>> + Send + '_;

  /// Retrieve a resume by id. Returns `None` if not found.
  fn get_resume(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Resume>, Self::Error>> + Send + '_;

  /// All resumes, newest first.
  fn list_resumes(
    &self,
  ) -> impl Future<Output = Result<Vec<Resume>, Self::Error>> + Send + '_;

  // ── Children — bulk inserts ───────────────────────────────────────────

  fn insert_education(
    &self,
    rows: Vec<NewEducation>,
  ) -> impl Future<Output = Result<Vec<Education>, Self::Error>> + Send + '_;

  fn insert_experience(
    &self,
    rows: Vec<NewExperience>,
  ) -> impl Future<Output = Result<Vec<Experience>, Self::Error>> + Send + '_;

  fn insert_projects(
    &self,
    rows: Vec<NewProject>,
  ) -> impl Future<Output = Result<Vec<Project>, Self::Error>> + Send + '_;

  /// Each row is routed to the collection named by its [`SkillKind`].
  fn insert_skills(
    &self,
    rows: Vec<NewSkill>,
  ) -> impl Future<Output = Result<Vec<Skill>, Self::Error>> + Send + '_;

  // ── Children — reads filtered by resume ───────────────────────────────

  fn list_education(
    &self,
    resume_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Education>, Self::Error>> + Send + '_;

  fn list_experience(
    &self,
    resume_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Experience>, Self::Error>> + Send + '_;

  fn list_projects(
    &self,
    resume_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Project>, Self::Error>> + Send + '_;

  fn list_skills(
    &self,
    resume_id: Uuid,
    kind: SkillKind,
  ) -> impl Future<Output = Result<Vec<Skill>, Self::Error>> + Send + '_;
}
