//! JSON REST API for folio.
//!
//! Exposes an axum [`Router`] backed by any [`folio_core::store::ResumeStore`].
//! This is the remote persistence service the `folio` CLI talks to; it also
//! serves the aggregated document and rendered markup of a resume.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", folio_api::api_router(store.clone()))
//! ```

pub mod children;
pub mod config;
pub mod error;
pub mod render;
pub mod resumes;

use std::sync::Arc;

use axum::{Router, routing::get};
use folio_core::store::ResumeStore;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ResumeStore + 'static,
{
  Router::new()
    // Resumes
    .route("/resumes", get(resumes::list::<S>).post(resumes::create::<S>))
    .route("/resumes/{id}", get(resumes::get_one::<S>))
    // Children
    .route(
      "/resumes/{id}/education",
      get(children::list_education::<S>).post(children::insert_education::<S>),
    )
    .route(
      "/resumes/{id}/experience",
      get(children::list_experience::<S>).post(children::insert_experience::<S>),
    )
    .route(
      "/resumes/{id}/projects",
      get(children::list_projects::<S>).post(children::insert_projects::<S>),
    )
    .route(
      "/resumes/{id}/skills",
      get(children::list_skills::<S>).post(children::insert_skills::<S>),
    )
    // Rendering
    .route("/resumes/{id}/document", get(render::document::<S>))
    .route("/resumes/{id}/markup", get(render::markup::<S>))
    .route("/templates", get(render::templates))
    .layer(TraceLayer::new_for_http())
    .with_state(store)
}
