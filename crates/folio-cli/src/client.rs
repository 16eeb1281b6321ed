//! [`RemoteStore`]: a [`ResumeStore`] backed by the folio JSON API.

use folio_core::{
  resume::{
    Education, Experience, NewEducation, NewExperience, NewProject, NewResume,
    NewSkill, Project, Resume, Skill, SkillKind,
  },
  store::ResumeStore,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("failed to build HTTP client: {0}")]
  Build(#[source] reqwest::Error),

  /// The request never produced a response.
  #[error("request to {url} failed: {source}")]
  Network {
    url:    String,
    #[source]
    source: reqwest::Error,
  },

  /// The server answered with a non-success status; `message` is its error
  /// text, verbatim.
  #[error("{message}")]
  Status { status: StatusCode, message: String },

  /// A success response whose body did not have the expected shape.
  #[error("unexpected response from {url}: {source}")]
  Mapping {
    url:    String,
    #[source]
    source: reqwest::Error,
  },

  /// Rows in one batch named different resumes; the API takes the parent
  /// from the URL, so such a batch cannot be sent atomically.
  #[error("a batch may only contain rows for a single resume")]
  MixedBatch,
}

type Result<T, E = ClientError> = std::result::Result<T, E>;

/// Async HTTP client for a `folio-server`.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct RemoteStore {
  client:   Client,
  base_url: String,
}

impl RemoteStore {
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder().build().map_err(ClientError::Build)?;
    Ok(Self { client, base_url: base_url.into() })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.base_url.trim_end_matches('/'))
  }

  async fn send(&self, url: &str, req: RequestBuilder) -> Result<Response> {
    let resp = req.send().await.map_err(|source| ClientError::Network {
      url: url.to_owned(),
      source,
    })?;
    if resp.status().is_success() {
      return Ok(resp);
    }

    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
      .ok()
      .and_then(|v| v.get("error")?.as_str().map(str::to_owned))
      .unwrap_or_else(|| if body.is_empty() { status.to_string() } else { body });
    Err(ClientError::Status { status, message })
  }

  async fn decode<T: DeserializeOwned>(url: &str, resp: Response) -> Result<T> {
    resp.json().await.map_err(|source| ClientError::Mapping {
      url: url.to_owned(),
      source,
    })
  }

  async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let url = self.url(path);
    let resp = self.send(&url, self.client.get(&url)).await?;
    Self::decode(&url, resp).await
  }

  async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
    let url = self.url(path);
    let resp = self.send(&url, self.client.post(&url).json(body)).await?;
    Self::decode(&url, resp).await
  }

  /// POST a batch of child rows to `/resumes/{id}/{collection}`.
  async fn post_batch<B: Serialize, T: DeserializeOwned>(
    &self,
    collection: &str,
    rows: Vec<B>,
    resume_id: impl Fn(&B) -> Uuid,
  ) -> Result<Vec<T>> {
    let Some(first) = rows.first().map(&resume_id) else {
      return Ok(Vec::new());
    };
    if rows.iter().any(|r| resume_id(r) != first) {
      return Err(ClientError::MixedBatch);
    }
    self.post(&format!("/resumes/{first}/{collection}"), &rows).await
  }
}

impl ResumeStore for RemoteStore {
  type Error = ClientError;

  async fn create_resume(&self, input: NewResume) -> Result<Resume> {
    self.post("/resumes", &input).await
  }

  async fn get_resume(&self, id: Uuid) -> Result<Option<Resume>> {
    match self.get(&format!("/resumes/{id}")).await {
      Ok(resume) => Ok(Some(resume)),
      Err(ClientError::Status { status: StatusCode::NOT_FOUND, .. }) => Ok(None),
      Err(e) => Err(e),
    }
  }

  async fn list_resumes(&self) -> Result<Vec<Resume>> { self.get("/resumes").await }

  async fn insert_education(&self, rows: Vec<NewEducation>) -> Result<Vec<Education>> {
    self.post_batch("education", rows, |r| r.resume_id).await
  }

  async fn insert_experience(&self, rows: Vec<NewExperience>) -> Result<Vec<Experience>> {
    self.post_batch("experience", rows, |r| r.resume_id).await
  }

  async fn insert_projects(&self, rows: Vec<NewProject>) -> Result<Vec<Project>> {
    self.post_batch("projects", rows, |r| r.resume_id).await
  }

  async fn insert_skills(&self, rows: Vec<NewSkill>) -> Result<Vec<Skill>> {
    self.post_batch("skills", rows, |r| r.resume_id).await
  }

  async fn list_education(&self, resume_id: Uuid) -> Result<Vec<Education>> {
    self.get(&format!("/resumes/{resume_id}/education")).await
  }

  async fn list_experience(&self, resume_id: Uuid) -> Result<Vec<Experience>> {
    self.get(&format!("/resumes/{resume_id}/experience")).await
  }

  async fn list_projects(&self, resume_id: Uuid) -> Result<Vec<Project>> {
    self.get(&format!("/resumes/{resume_id}/projects")).await
  }

  async fn list_skills(&self, resume_id: Uuid, kind: SkillKind) -> Result<Vec<Skill>> {
    self.get(&format!("/resumes/{resume_id}/skills?kind={kind}")).await
  }
}
