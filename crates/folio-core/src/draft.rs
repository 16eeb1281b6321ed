//! Screen-scoped draft state for the wizard's data-entry steps.
//!
//! A draft is an unsaved, freely editable record. Each collection screen owns
//! an ordered list of drafts and turns the non-blank ones into `New*` inputs
//! on submit. Drafts are never handed to the next screen; only the resume
//! identifier travels forward.

use std::{fmt::Display, str::FromStr};

use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::{
  Error, Result,
  resume::{
    Education, Experience, NewEducation, NewExperience, NewProject, NewResume,
    NewSkill, Project, Resume, Skill, SkillKind, non_blank,
  },
  store::ResumeStore,
};

// ─── DraftRecord ─────────────────────────────────────────────────────────────

/// An editable, not-yet-persisted child row.
pub trait DraftRecord: Default + Clone {
  /// The editable fields, addressable by their snake_case names.
  type Field: Copy + Display + FromStr + IntoEnumIterator;
  /// Store input produced on submit.
  type New;
  /// Persisted record returned by the store.
  type Record;

  /// The field whose emptiness decides whether the row is discarded.
  fn primary_label(&self) -> &str;

  fn get(&self, field: Self::Field) -> &str;

  fn set(&mut self, field: Self::Field, value: String) -> Result<()>;

  fn into_new(self, resume_id: Uuid) -> Self::New;

  /// Bulk-insert `rows` through the matching store method.
  async fn persist<S: ResumeStore>(
    store: &S,
    rows: Vec<Self::New>,
  ) -> Result<Vec<Self::Record>, S::Error>;

  /// `true` when the primary label is empty or whitespace-only.
  fn is_blank(&self) -> bool { self.primary_label().trim().is_empty() }
}

/// Parse a snake_case field name for draft type `D`.
pub fn parse_field<D: DraftRecord>(name: &str) -> Result<D::Field> {
  name
    .parse::<D::Field>()
    .map_err(|_| Error::UnknownField(name.to_owned()))
}

// ─── CollectionScreen ────────────────────────────────────────────────────────

/// The mutable list of drafts behind one collection screen.
///
/// The list always holds at least one row while the screen is active.
#[derive(Debug, Clone)]
pub struct CollectionScreen<D> {
  rows: Vec<D>,
}

impl<D: DraftRecord> Default for CollectionScreen<D> {
  fn default() -> Self { Self::new() }
}

impl<D: DraftRecord> CollectionScreen<D> {
  /// A screen holding a single blank row.
  pub fn new() -> Self { Self { rows: vec![D::default()] } }

  pub fn rows(&self) -> &[D] { &self.rows }

  pub fn len(&self) -> usize { self.rows.len() }

  pub fn is_empty(&self) -> bool { self.rows.is_empty() }

  /// Append a blank row and return its index.
  pub fn add(&mut self) -> usize {
    self.rows.push(D::default());
    self.rows.len() - 1
  }

  /// Update one field of the row at `index`; other rows are untouched.
  pub fn edit(
    &mut self,
    index: usize,
    field: D::Field,
    value: impl Into<String>,
  ) -> Result<()> {
    let len = self.rows.len();
    let row = self
      .rows
      .get_mut(index)
      .ok_or(Error::RowOutOfRange { index, len })?;
    row.set(field, value.into())
  }

  /// [`Self::edit`] with the field given by name.
  pub fn edit_named(
    &mut self,
    index: usize,
    field: &str,
    value: impl Into<String>,
  ) -> Result<()> {
    let field = parse_field::<D>(field)?;
    self.edit(index, field, value)
  }

  /// Remove and return the row at `index`. The last row cannot be removed.
  pub fn remove(&mut self, index: usize) -> Result<D> {
    let len = self.rows.len();
    if index >= len {
      return Err(Error::RowOutOfRange { index, len });
    }
    if len == 1 {
      return Err(Error::LastRow);
    }
    Ok(self.rows.remove(index))
  }

  /// The rows that would be persisted: those with a non-blank primary label.
  pub fn persistable(&self) -> Vec<&D> {
    self.rows.iter().filter(|r| !r.is_blank()).collect()
  }

  /// Persist the non-blank rows under `resume_id`.
  ///
  /// The draft list is left untouched whatever the outcome. When every row
  /// is blank no store call is made.
  pub async fn submit<S: ResumeStore>(
    &self,
    store: &S,
    resume_id: Uuid,
  ) -> Result<Vec<D::Record>> {
    let rows: Vec<D::New> = self
      .persistable()
      .into_iter()
      .cloned()
      .map(|d| d.into_new(resume_id))
      .collect();

    if rows.is_empty() {
      tracing::debug!(%resume_id, "no non-blank rows to persist");
      return Ok(Vec::new());
    }

    let submitted = rows.len();
    let saved = D::persist(store, rows).await.map_err(Error::store)?;
    tracing::debug!(%resume_id, submitted, saved = saved.len(), "rows persisted");
    Ok(saved)
  }
}

// ─── Personal info ───────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  strum::Display,
  strum::EnumString,
  strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum PersonalInfoField {
  Name,
  Email,
  Phone,
  Linkedin,
  Address,
  Title,
  Summary,
}

/// The single record behind the personal-info screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfoDraft {
  pub name:     String,
  pub email:    String,
  pub phone:    String,
  pub linkedin: String,
  pub address:  String,
  pub title:    String,
  pub summary:  String,
}

impl PersonalInfoDraft {
  pub fn get(&self, field: PersonalInfoField) -> &str {
    match field {
      PersonalInfoField::Name => &self.name,
      PersonalInfoField::Email => &self.email,
      PersonalInfoField::Phone => &self.phone,
      PersonalInfoField::Linkedin => &self.linkedin,
      PersonalInfoField::Address => &self.address,
      PersonalInfoField::Title => &self.title,
      PersonalInfoField::Summary => &self.summary,
    }
  }

  pub fn set(&mut self, field: PersonalInfoField, value: String) {
    let slot = match field {
      PersonalInfoField::Name => &mut self.name,
      PersonalInfoField::Email => &mut self.email,
      PersonalInfoField::Phone => &mut self.phone,
      PersonalInfoField::Linkedin => &mut self.linkedin,
      PersonalInfoField::Address => &mut self.address,
      PersonalInfoField::Title => &mut self.title,
      PersonalInfoField::Summary => &mut self.summary,
    };
    *slot = value;
  }

  /// Check the required fields and build the store input.
  pub fn validate(&self) -> Result<NewResume> {
    for (field, value) in [
      ("name", &self.name),
      ("email", &self.email),
      ("phone", &self.phone),
    ] {
      if value.trim().is_empty() {
        return Err(Error::MissingField(field));
      }
    }

    Ok(NewResume {
      name:     self.name.clone(),
      email:    self.email.clone(),
      phone:    self.phone.clone(),
      linkedin: non_blank(self.linkedin.clone()),
      address:  non_blank(self.address.clone()),
      title:    non_blank(self.title.clone()),
      summary:  non_blank(self.summary.clone()),
    })
  }
}

/// The first wizard screen. It has no list and no remove operation.
#[derive(Debug, Clone, Default)]
pub struct PersonalInfoScreen {
  draft: PersonalInfoDraft,
}

impl PersonalInfoScreen {
  pub fn new() -> Self { Self::default() }

  pub fn draft(&self) -> &PersonalInfoDraft { &self.draft }

  pub fn edit(&mut self, field: PersonalInfoField, value: impl Into<String>) {
    self.draft.set(field, value.into());
  }

  pub fn edit_named(&mut self, field: &str, value: impl Into<String>) -> Result<()> {
    let field = field
      .parse::<PersonalInfoField>()
      .map_err(|_| Error::UnknownField(field.to_owned()))?;
    self.edit(field, value);
    Ok(())
  }

  /// Create the resume. Validation runs before any store call; on failure
  /// the draft is left as it was.
  pub async fn submit<S: ResumeStore>(&self, store: &S) -> Result<Resume> {
    let input = self.draft.validate()?;
    let resume = store.create_resume(input).await.map_err(Error::store)?;
    tracing::info!(resume_id = %resume.id, "resume created");
    Ok(resume)
  }
}

// ─── Education ───────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  strum::Display,
  strum::EnumString,
  strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum EducationField {
  Degree,
  University,
  Year,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationDraft {
  pub degree:     String,
  pub university: String,
  pub year:       String,
}

impl DraftRecord for EducationDraft {
  type Field = EducationField;
  type New = NewEducation;
  type Record = Education;

  fn primary_label(&self) -> &str { &self.degree }

  fn get(&self, field: EducationField) -> &str {
    match field {
      EducationField::Degree => &self.degree,
      EducationField::University => &self.university,
      EducationField::Year => &self.year,
    }
  }

  fn set(&mut self, field: EducationField, value: String) -> Result<()> {
    match field {
      EducationField::Degree => self.degree = value,
      EducationField::University => self.university = value,
      EducationField::Year => self.year = value,
    }
    Ok(())
  }

  fn into_new(self, resume_id: Uuid) -> NewEducation {
    NewEducation {
      resume_id,
      degree: self.degree,
      university: self.university,
      year: self.year,
    }
  }

  async fn persist<S: ResumeStore>(
    store: &S,
    rows: Vec<NewEducation>,
  ) -> Result<Vec<Education>, S::Error> {
    store.insert_education(rows).await
  }
}

// ─── Experience ──────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  strum::Display,
  strum::EnumString,
  strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum ExperienceField {
  JobTitle,
  Company,
  StartDate,
  EndDate,
  Description,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceDraft {
  pub job_title:   String,
  pub company:     String,
  pub start_date:  String,
  pub end_date:    String,
  pub description: String,
}

impl DraftRecord for ExperienceDraft {
  type Field = ExperienceField;
  type New = NewExperience;
  type Record = Experience;

  fn primary_label(&self) -> &str { &self.job_title }

  fn get(&self, field: ExperienceField) -> &str {
    match field {
      ExperienceField::JobTitle => &self.job_title,
      ExperienceField::Company => &self.company,
      ExperienceField::StartDate => &self.start_date,
      ExperienceField::EndDate => &self.end_date,
      ExperienceField::Description => &self.description,
    }
  }

  fn set(&mut self, field: ExperienceField, value: String) -> Result<()> {
    match field {
      ExperienceField::JobTitle => self.job_title = value,
      ExperienceField::Company => self.company = value,
      ExperienceField::StartDate => self.start_date = value,
      ExperienceField::EndDate => self.end_date = value,
      ExperienceField::Description => self.description = value,
    }
    Ok(())
  }

  fn into_new(self, resume_id: Uuid) -> NewExperience {
    NewExperience {
      resume_id,
      job_title: self.job_title,
      company: self.company,
      start_date: self.start_date,
      end_date: non_blank(self.end_date),
      description: non_blank(self.description),
    }
  }

  async fn persist<S: ResumeStore>(
    store: &S,
    rows: Vec<NewExperience>,
  ) -> Result<Vec<Experience>, S::Error> {
    store.insert_experience(rows).await
  }
}

// ─── Project ─────────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  strum::Display,
  strum::EnumString,
  strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum ProjectField {
  Name,
  Description,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
  pub name:        String,
  pub description: String,
}

impl DraftRecord for ProjectDraft {
  type Field = ProjectField;
  type New = NewProject;
  type Record = Project;

  fn primary_label(&self) -> &str { &self.name }

  fn get(&self, field: ProjectField) -> &str {
    match field {
      ProjectField::Name => &self.name,
      ProjectField::Description => &self.description,
    }
  }

  fn set(&mut self, field: ProjectField, value: String) -> Result<()> {
    match field {
      ProjectField::Name => self.name = value,
      ProjectField::Description => self.description = value,
    }
    Ok(())
  }

  fn into_new(self, resume_id: Uuid) -> NewProject {
    NewProject {
      resume_id,
      name: self.name,
      description: non_blank(self.description),
    }
  }

  async fn persist<S: ResumeStore>(
    store: &S,
    rows: Vec<NewProject>,
  ) -> Result<Vec<Project>, S::Error> {
    store.insert_projects(rows).await
  }
}

// ─── Skill ───────────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  strum::Display,
  strum::EnumString,
  strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum SkillField {
  Skill,
  /// `core` or `other`.
  Kind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillDraft {
  pub skill: String,
  pub kind:  SkillKind,
}

impl DraftRecord for SkillDraft {
  type Field = SkillField;
  type New = NewSkill;
  type Record = Skill;

  fn primary_label(&self) -> &str { &self.skill }

  fn get(&self, field: SkillField) -> &str {
    match field {
      SkillField::Skill => &self.skill,
      SkillField::Kind => match self.kind {
        SkillKind::Core => "core",
        SkillKind::Other => "other",
      },
    }
  }

  fn set(&mut self, field: SkillField, value: String) -> Result<()> {
    match field {
      SkillField::Skill => self.skill = value,
      SkillField::Kind => {
        self.kind = value.trim().parse().map_err(|_| Error::InvalidValue {
          field: field.to_string(),
          value,
        })?;
      }
    }
    Ok(())
  }

  fn into_new(self, resume_id: Uuid) -> NewSkill {
    NewSkill { resume_id, kind: self.kind, skill: self.skill }
  }

  async fn persist<S: ResumeStore>(
    store: &S,
    rows: Vec<NewSkill>,
  ) -> Result<Vec<Skill>, S::Error> {
    store.insert_skills(rows).await
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_store::MemoryStore;

  fn experience(job_title: &str, company: &str) -> ExperienceDraft {
    ExperienceDraft {
      job_title: job_title.into(),
      company: company.into(),
      start_date: "2020".into(),
      end_date: "Present".into(),
      description: String::new(),
    }
  }

  #[test]
  fn new_screen_has_one_blank_row() {
    let screen = CollectionScreen::<EducationDraft>::new();
    assert_eq!(screen.len(), 1);
    assert!(screen.rows()[0].is_blank());
  }

  #[test]
  fn add_appends_blank_row_at_end() {
    let mut screen = CollectionScreen::<ProjectDraft>::new();
    screen.edit(0, ProjectField::Name, "folio").unwrap();
    let idx = screen.add();
    assert_eq!(idx, 1);
    assert_eq!(screen.rows()[0].name, "folio");
    assert_eq!(screen.rows()[1], ProjectDraft::default());
  }

  #[test]
  fn edit_touches_only_the_addressed_row() {
    let mut screen = CollectionScreen::<ExperienceDraft>::new();
    screen.add();
    screen.add();
    screen.edit(1, ExperienceField::Company, "Acme").unwrap();

    assert_eq!(screen.rows()[0], ExperienceDraft::default());
    assert_eq!(screen.rows()[1].company, "Acme");
    assert_eq!(screen.rows()[2], ExperienceDraft::default());
  }

  #[test]
  fn edit_out_of_range_is_an_error() {
    let mut screen = CollectionScreen::<EducationDraft>::new();
    let err = screen.edit(3, EducationField::Degree, "BS").unwrap_err();
    assert!(matches!(err, Error::RowOutOfRange { index: 3, len: 1 }));
  }

  #[test]
  fn edit_named_parses_snake_case_fields() {
    let mut screen = CollectionScreen::<ExperienceDraft>::new();
    screen.edit_named(0, "start_date", "Jan 2020").unwrap();
    assert_eq!(screen.rows()[0].start_date, "Jan 2020");

    let err = screen.edit_named(0, "salary", "lots").unwrap_err();
    assert!(matches!(err, Error::UnknownField(f) if f == "salary"));
  }

  #[test]
  fn remove_keeps_order_of_remaining_rows() {
    let mut screen = CollectionScreen::<SkillDraft>::new();
    for (i, s) in ["Rust", "Go", "SQL"].iter().enumerate() {
      if i > 0 {
        screen.add();
      }
      screen.edit(i, SkillField::Skill, *s).unwrap();
    }
    let removed = screen.remove(1).unwrap();
    assert_eq!(removed.skill, "Go");
    let names: Vec<&str> = screen.rows().iter().map(|r| r.skill.as_str()).collect();
    assert_eq!(names, ["Rust", "SQL"]);
  }

  #[test]
  fn last_row_cannot_be_removed() {
    let mut screen = CollectionScreen::<SkillDraft>::new();
    assert!(matches!(screen.remove(0), Err(Error::LastRow)));
    assert_eq!(screen.len(), 1);
  }

  #[test]
  fn skill_kind_field_rejects_unknown_values() {
    let mut screen = CollectionScreen::<SkillDraft>::new();
    screen.edit(0, SkillField::Kind, "other").unwrap();
    assert_eq!(screen.rows()[0].kind, SkillKind::Other);

    let err = screen.edit(0, SkillField::Kind, "hobby").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(screen.rows()[0].kind, SkillKind::Other);
  }

  #[tokio::test]
  async fn submit_persists_only_rows_with_a_label() {
    let store = MemoryStore::new();
    let resume = store.seed_resume("Jane Doe").await;

    let mut screen = CollectionScreen::<ExperienceDraft>::new();
    screen.edit(0, ExperienceField::JobTitle, "Engineer").unwrap();
    screen.edit(0, ExperienceField::Company, "Acme").unwrap();
    screen.add();
    screen.edit(1, ExperienceField::Company, "Ghost Corp").unwrap();
    screen.add();
    screen.edit(2, ExperienceField::JobTitle, "   ").unwrap();

    let saved = screen.submit(&store, resume.id).await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].job_title, "Engineer");
    assert_eq!(saved[0].resume_id, resume.id);

    let stored = store.list_experience(resume.id).await.unwrap();
    assert_eq!(stored.len(), 1);
    // Drafts are untouched by a successful submit as well.
    assert_eq!(screen.len(), 3);
  }

  #[tokio::test]
  async fn submit_maps_blank_optionals_to_none() {
    let store = MemoryStore::new();
    let resume = store.seed_resume("Jane Doe").await;

    let mut screen = CollectionScreen::<ExperienceDraft>::new();
    screen.edit(0, ExperienceField::JobTitle, "Engineer").unwrap();

    let saved = screen.submit(&store, resume.id).await.unwrap();
    assert_eq!(saved[0].end_date, None);
    assert_eq!(saved[0].description, None);
  }

  #[tokio::test]
  async fn all_blank_submit_skips_the_store() {
    let store = MemoryStore::new();
    store.fail_writes(true);
    let screen = CollectionScreen::<EducationDraft>::new();
    let saved = screen.submit(&store, Uuid::new_v4()).await.unwrap();
    assert!(saved.is_empty());
  }

  #[tokio::test]
  async fn failed_submit_keeps_drafts_and_surfaces_message() {
    let store = MemoryStore::new();
    let resume = store.seed_resume("Jane Doe").await;
    store.fail_writes(true);

    let mut screen = CollectionScreen::<ExperienceDraft>::new();
    screen.edit(0, ExperienceField::JobTitle, "Engineer").unwrap();
    let before = screen.rows().to_vec();

    let err = screen.submit(&store, resume.id).await.unwrap_err();
    assert_eq!(err.to_string(), "injected write failure");
    assert!(!err.is_validation());
    assert_eq!(screen.rows(), before.as_slice());
    assert!(store.list_experience(resume.id).await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn experience_rows_with_and_without_title() {
    let store = MemoryStore::new();
    let resume = store.seed_resume("Jane Doe").await;

    let mut screen = CollectionScreen::<ExperienceDraft>::new();
    *screen.rows.get_mut(0).unwrap() = experience("Engineer", "Acme");
    screen.rows.push(experience("", "Nowhere"));

    screen.submit(&store, resume.id).await.unwrap();
    let stored = store.list_experience(resume.id).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].company, "Acme");
  }

  #[tokio::test]
  async fn personal_info_requires_name_email_phone() {
    let store = MemoryStore::new();
    store.fail_writes(true);

    let mut screen = PersonalInfoScreen::new();
    screen.edit(PersonalInfoField::Name, "Jane Doe");
    screen.edit(PersonalInfoField::Email, "jane@x.com");

    let err = screen.submit(&store).await.unwrap_err();
    assert!(matches!(err, Error::MissingField("phone")));
    assert!(err.is_validation());
  }

  #[tokio::test]
  async fn personal_info_creates_resume_with_optional_fields() {
    let store = MemoryStore::new();
    let mut screen = PersonalInfoScreen::new();
    screen.edit(PersonalInfoField::Name, "Jane Doe");
    screen.edit(PersonalInfoField::Email, "jane@x.com");
    screen.edit(PersonalInfoField::Phone, "555-0100");
    screen.edit_named("summary", "Builds things.").unwrap();
    screen.edit(PersonalInfoField::Address, "  ");

    let resume = screen.submit(&store).await.unwrap();
    assert_eq!(resume.name, "Jane Doe");
    assert_eq!(resume.summary.as_deref(), Some("Builds things."));
    assert_eq!(resume.address, None);
    assert_eq!(resume.linkedin, None);
    assert!(store.get_resume(resume.id).await.unwrap().is_some());
  }
}
