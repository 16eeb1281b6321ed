//! Read-model and rendering endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/templates` | The three layouts, in picker order |
//! | `GET`  | `/resumes/{id}/document` | The aggregated document as JSON |
//! | `GET`  | `/resumes/{id}/markup` | `?template=<kind>`, default `professional`; 400 on an unknown kind |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  response::Html,
};
use folio_core::{
  aggregate::load_document, document::Document, store::ResumeStore,
  template::TemplateKind,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator as _;
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
  pub id:          TemplateKind,
  pub name:        &'static str,
  pub description: &'static str,
  pub accent:      &'static str,
}

/// `GET /templates`
pub async fn templates() -> Json<Vec<TemplateInfo>> {
  Json(
    TemplateKind::iter()
      .map(|kind| TemplateInfo {
        id:          kind,
        name:        kind.name(),
        description: kind.description(),
        accent:      kind.accent(),
      })
      .collect(),
  )
}

/// `GET /resumes/{id}/document`
pub async fn document<S: ResumeStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Document>, ApiError> {
  Ok(Json(load_document(&*store, id).await?))
}

#[derive(Debug, Deserialize)]
pub struct MarkupParams {
  pub template: Option<String>,
}

/// `GET /resumes/{id}/markup[?template=<kind>]`
pub async fn markup<S: ResumeStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Query(params): Query<MarkupParams>,
) -> Result<Html<String>, ApiError> {
  let kind = match params.template.as_deref() {
    None => TemplateKind::default(),
    Some(raw) => raw
      .parse::<TemplateKind>()
      .map_err(|_| folio_core::Error::UnknownTemplate(raw.to_owned()))?,
  };
  let document = load_document(&*store, id).await?;
  Ok(Html(folio_render::render_markup(kind, &document)))
}
