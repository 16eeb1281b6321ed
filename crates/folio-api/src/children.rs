//! Handlers for the child collections of a resume.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/resumes/{id}/education` | Creation order |
//! | `POST` | `/resumes/{id}/education` | Body: array of rows, all-or-nothing |
//! | `GET`  | `/resumes/{id}/experience` | |
//! | `POST` | `/resumes/{id}/experience` | |
//! | `GET`  | `/resumes/{id}/projects` | |
//! | `POST` | `/resumes/{id}/projects` | |
//! | `GET`  | `/resumes/{id}/skills` | Optional `?kind=core\|other`, default `core` |
//! | `POST` | `/resumes/{id}/skills` | Each row may carry `"kind"` |
//!
//! Request rows never carry their own `resume_id`; the path names the
//! parent. A `resume_id` field in a row is ignored. Every route answers 404
//! when the resume does not exist.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use folio_core::{
  resume::{
    Education, Experience, NewEducation, NewExperience, NewProject, NewSkill,
    Project, Skill, SkillKind,
  },
  store::ResumeStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::ApiError, resumes::require};

// ─── Request rows ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EducationRow {
  pub degree:     String,
  pub university: String,
  pub year:       String,
}

#[derive(Debug, Deserialize)]
pub struct ExperienceRow {
  pub job_title:   String,
  pub company:     String,
  pub start_date:  String,
  #[serde(default)]
  pub end_date:    Option<String>,
  #[serde(default)]
  pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectRow {
  pub name:        String,
  #[serde(default)]
  pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillRow {
  pub skill: String,
  #[serde(default)]
  pub kind:  SkillKind,
}

#[derive(Debug, Deserialize)]
pub struct SkillParams {
  #[serde(default)]
  pub kind: SkillKind,
}

// ─── Education ────────────────────────────────────────────────────────────────

/// `GET /resumes/{id}/education`
pub async fn list_education<S: ResumeStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Vec<Education>>, ApiError> {
  require(&*store, id).await?;
  let rows = store.list_education(id).await.map_err(ApiError::store)?;
  Ok(Json(rows))
}

/// `POST /resumes/{id}/education`
pub async fn insert_education<S: ResumeStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<Vec<EducationRow>>,
) -> Result<impl IntoResponse, ApiError> {
  require(&*store, id).await?;
  let rows = body
    .into_iter()
    .map(|r| NewEducation {
      resume_id:  id,
      degree:     r.degree,
      university: r.university,
      year:       r.year,
    })
    .collect();
  let inserted = store.insert_education(rows).await.map_err(ApiError::store)?;
  tracing::info!(resume_id = %id, count = inserted.len(), "education inserted");
  Ok((StatusCode::CREATED, Json(inserted)))
}

// ─── Experience ───────────────────────────────────────────────────────────────

/// `GET /resumes/{id}/experience`
pub async fn list_experience<S: ResumeStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Vec<Experience>>, ApiError> {
  require(&*store, id).await?;
  let rows = store.list_experience(id).await.map_err(ApiError::store)?;
  Ok(Json(rows))
}

/// `POST /resumes/{id}/experience`
pub async fn insert_experience<S: ResumeStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<Vec<ExperienceRow>>,
) -> Result<impl IntoResponse, ApiError> {
  require(&*store, id).await?;
  let rows = body
    .into_iter()
    .map(|r| NewExperience {
      resume_id:   id,
      job_title:   r.job_title,
      company:     r.company,
      start_date:  r.start_date,
      end_date:    r.end_date,
      description: r.description,
    })
    .collect();
  let inserted = store.insert_experience(rows).await.map_err(ApiError::store)?;
  tracing::info!(resume_id = %id, count = inserted.len(), "experience inserted");
  Ok((StatusCode::CREATED, Json(inserted)))
}

// ─── Projects ─────────────────────────────────────────────────────────────────

/// `GET /resumes/{id}/projects`
pub async fn list_projects<S: ResumeStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Vec<Project>>, ApiError> {
  require(&*store, id).await?;
  let rows = store.list_projects(id).await.map_err(ApiError::store)?;
  Ok(Json(rows))
}

/// `POST /resumes/{id}/projects`
pub async fn insert_projects<S: ResumeStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<Vec<ProjectRow>>,
) -> Result<impl IntoResponse, ApiError> {
  require(&*store, id).await?;
  let rows = body
    .into_iter()
    .map(|r| NewProject { resume_id: id, name: r.name, description: r.description })
    .collect();
  let inserted = store.insert_projects(rows).await.map_err(ApiError::store)?;
  tracing::info!(resume_id = %id, count = inserted.len(), "projects inserted");
  Ok((StatusCode::CREATED, Json(inserted)))
}

// ─── Skills ───────────────────────────────────────────────────────────────────

/// `GET /resumes/{id}/skills[?kind=core|other]`
pub async fn list_skills<S: ResumeStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Query(params): Query<SkillParams>,
) -> Result<Json<Vec<Skill>>, ApiError> {
  require(&*store, id).await?;
  let rows = store.list_skills(id, params.kind).await.map_err(ApiError::store)?;
  Ok(Json(rows))
}

/// `POST /resumes/{id}/skills`
pub async fn insert_skills<S: ResumeStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<Vec<SkillRow>>,
) -> Result<impl IntoResponse, ApiError> {
  require(&*store, id).await?;
  let rows = body
    .into_iter()
    .map(|r| NewSkill { resume_id: id, kind: r.kind, skill: r.skill })
    .collect();
  let inserted = store.insert_skills(rows).await.map_err(ApiError::store)?;
  tracing::info!(resume_id = %id, count = inserted.len(), "skills inserted");
  Ok((StatusCode::CREATED, Json(inserted)))
}
