//! Handlers for `/resumes` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/resumes` | Newest first |
//! | `POST` | `/resumes` | Body: a `NewResume` |
//! | `GET`  | `/resumes/{id}` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use folio_core::{
  resume::{NewResume, Resume},
  store::ResumeStore,
};
use uuid::Uuid;

use crate::error::ApiError;

/// `GET /resumes`
pub async fn list<S: ResumeStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Resume>>, ApiError> {
  let resumes = store.list_resumes().await.map_err(ApiError::store)?;
  Ok(Json(resumes))
}

/// `POST /resumes`
pub async fn create<S: ResumeStore>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewResume>,
) -> Result<impl IntoResponse, ApiError> {
  let resume = store.create_resume(body).await.map_err(ApiError::store)?;
  tracing::info!(id = %resume.id, "resume created");
  Ok((StatusCode::CREATED, Json(resume)))
}

/// `GET /resumes/{id}`
pub async fn get_one<S: ResumeStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Resume>, ApiError> {
  require(&*store, id).await.map(Json)
}

/// Fetch resume `id`, mapping absence to a 404.
pub(crate) async fn require<S: ResumeStore>(
  store: &S,
  id: Uuid,
) -> Result<Resume, ApiError> {
  store
    .get_resume(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::resume_not_found(id))
}
