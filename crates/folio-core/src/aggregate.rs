//! The aggregator: joins a resume with its child collections.

use std::fmt::Display;

use uuid::Uuid;

use crate::{
  Error, Result,
  document::Document,
  resume::SkillKind,
  store::ResumeStore,
};

/// Load the [`Document`] for `resume_id`.
///
/// The six reads are independent and are polled concurrently. A failed or
/// missing resume read fails the whole load; a failed child read is logged
/// and treated as an empty collection.
pub async fn load_document<S: ResumeStore>(
  store: &S,
  resume_id: Uuid,
) -> Result<Document> {
  let (resume, education, experience, projects, skills, other_skills) = tokio::join!(
    store.get_resume(resume_id),
    store.list_education(resume_id),
    store.list_experience(resume_id),
    store.list_projects(resume_id),
    store.list_skills(resume_id, SkillKind::Core),
    store.list_skills(resume_id, SkillKind::Other),
  );

  let resume = resume
    .map_err(Error::store)?
    .ok_or(Error::ResumeNotFound(resume_id))?;

  let mut document = Document {
    resume,
    education: or_empty(resume_id, "education", education),
    experience: or_empty(resume_id, "experience", experience),
    projects: or_empty(resume_id, "projects", projects),
    skills: or_empty(resume_id, "skills", skills),
    other_skills: or_empty(resume_id, "other_skills", other_skills),
  };
  document.sort_children();

  tracing::debug!(
    %resume_id,
    education = document.education.len(),
    experience = document.experience.len(),
    projects = document.projects.len(),
    skills = document.skills.len(),
    "document loaded"
  );

  Ok(document)
}

fn or_empty<T, E: Display>(
  resume_id: Uuid,
  collection: &'static str,
  result: std::result::Result<Vec<T>, E>,
) -> Vec<T> {
  result.unwrap_or_else(|e| {
    tracing::warn!(%resume_id, collection, error = %e, "child read failed; using an empty list");
    Vec::new()
  })
}
