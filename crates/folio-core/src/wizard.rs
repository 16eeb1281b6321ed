//! The wizard — an explicit state machine over the resume-building steps.
//!
//! ```text
//! PersonalInfo → Education → Experience → Projects → Skills → TemplatePicker → Preview
//! ```
//!
//! Every forward transition out of a data-entry step is guarded by that
//! step's submit succeeding; TemplatePicker → Preview fires on template
//! selection alone. Each state owns only its own screen plus the resume
//! identifier, so nothing but the identifier (and, for the preview, the
//! template) crosses from one step to the next.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
  Error, Result,
  draft::{
    CollectionScreen, EducationDraft, ExperienceDraft, PersonalInfoScreen,
    ProjectDraft, SkillDraft,
  },
  store::ResumeStore,
  template::TemplateKind,
};

// ─── Step ────────────────────────────────────────────────────────────────────

/// The name of a wizard state, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Step {
  PersonalInfo,
  Education,
  Experience,
  Projects,
  Skills,
  TemplatePicker,
  Preview,
}

impl Step {
  /// Screen heading.
  pub fn title(self) -> &'static str {
    match self {
      Self::PersonalInfo => "Personal Information",
      Self::Education => "Education",
      Self::Experience => "Professional Experience",
      Self::Projects => "Projects",
      Self::Skills => "Skills",
      Self::TemplatePicker => "Choose Template",
      Self::Preview => "Preview",
    }
  }
}

// ─── State ───────────────────────────────────────────────────────────────────

/// A wizard state together with the data that state owns.
#[derive(Debug, Clone)]
pub enum State {
  PersonalInfo(PersonalInfoScreen),
  Education {
    resume_id: Uuid,
    screen:    CollectionScreen<EducationDraft>,
  },
  Experience {
    resume_id: Uuid,
    screen:    CollectionScreen<ExperienceDraft>,
  },
  Projects {
    resume_id: Uuid,
    screen:    CollectionScreen<ProjectDraft>,
  },
  Skills {
    resume_id: Uuid,
    screen:    CollectionScreen<SkillDraft>,
  },
  TemplatePicker {
    resume_id: Uuid,
  },
  Preview {
    resume_id: Uuid,
    template:  TemplateKind,
  },
}

impl State {
  pub fn step(&self) -> Step {
    match self {
      Self::PersonalInfo(_) => Step::PersonalInfo,
      Self::Education { .. } => Step::Education,
      Self::Experience { .. } => Step::Experience,
      Self::Projects { .. } => Step::Projects,
      Self::Skills { .. } => Step::Skills,
      Self::TemplatePicker { .. } => Step::TemplatePicker,
      Self::Preview { .. } => Step::Preview,
    }
  }

  /// The resume being built; absent only before personal info is submitted.
  pub fn resume_id(&self) -> Option<Uuid> {
    match self {
      Self::PersonalInfo(_) => None,
      Self::Education { resume_id, .. }
      | Self::Experience { resume_id, .. }
      | Self::Projects { resume_id, .. }
      | Self::Skills { resume_id, .. }
      | Self::TemplatePicker { resume_id }
      | Self::Preview { resume_id, .. } => Some(*resume_id),
    }
  }
}

// ─── Wizard ──────────────────────────────────────────────────────────────────

/// Drives one resume through the steps, persisting through `S`.
pub struct Wizard<S> {
  store: Arc<S>,
  state: State,
}

impl<S: ResumeStore> Wizard<S> {
  /// Start a new resume at the personal-info step.
  pub fn new(store: Arc<S>) -> Self {
    Self { store, state: State::PersonalInfo(PersonalInfoScreen::new()) }
  }

  /// Resume an already-created resume at the template picker.
  pub fn for_resume(store: Arc<S>, resume_id: Uuid) -> Self {
    Self { store, state: State::TemplatePicker { resume_id } }
  }

  pub fn step(&self) -> Step { self.state.step() }

  pub fn state(&self) -> &State { &self.state }

  /// Mutable access to the current screen for add/edit/remove.
  pub fn state_mut(&mut self) -> &mut State { &mut self.state }

  pub fn resume_id(&self) -> Option<Uuid> { self.state.resume_id() }

  pub fn store(&self) -> &Arc<S> { &self.store }

  /// The chosen template, once the preview has been reached.
  pub fn template(&self) -> Option<TemplateKind> {
    match self.state {
      State::Preview { template, .. } => Some(template),
      _ => None,
    }
  }

  /// Submit the current screen and advance on success.
  ///
  /// On failure the state is left exactly as it was, drafts included, and
  /// the error is returned for display.
  pub async fn submit(&mut self) -> Result<Step> {
    let store = &*self.store;
    let next = match &self.state {
      State::PersonalInfo(screen) => {
        let resume = screen.submit(store).await?;
        State::Education { resume_id: resume.id, screen: CollectionScreen::new() }
      }
      State::Education { resume_id, screen } => {
        screen.submit(store, *resume_id).await?;
        State::Experience { resume_id: *resume_id, screen: CollectionScreen::new() }
      }
      State::Experience { resume_id, screen } => {
        screen.submit(store, *resume_id).await?;
        State::Projects { resume_id: *resume_id, screen: CollectionScreen::new() }
      }
      State::Projects { resume_id, screen } => {
        screen.submit(store, *resume_id).await?;
        State::Skills { resume_id: *resume_id, screen: CollectionScreen::new() }
      }
      State::Skills { resume_id, screen } => {
        screen.submit(store, *resume_id).await?;
        State::TemplatePicker { resume_id: *resume_id }
      }
      State::TemplatePicker { .. } | State::Preview { .. } => {
        return Err(Error::InvalidTransition { step: self.step(), action: "submit" });
      }
    };
    Ok(self.transition(next))
  }

  /// TemplatePicker → Preview. No persistence is involved.
  pub fn choose_template(&mut self, template: TemplateKind) -> Result<Step> {
    match self.state {
      State::TemplatePicker { resume_id } | State::Preview { resume_id, .. } => {
        Ok(self.transition(State::Preview { resume_id, template }))
      }
      _ => Err(Error::InvalidTransition {
        step:   self.step(),
        action: "choosing a template",
      }),
    }
  }

  /// Step back with a fresh screen. Rows already committed stay committed.
  ///
  /// Going back to personal info is refused once the resume exists, since
  /// submitting it again would create a second resume.
  pub fn back(&mut self) -> Result<Step> {
    let prev = match &self.state {
      State::Experience { resume_id, .. } => {
        State::Education { resume_id: *resume_id, screen: CollectionScreen::new() }
      }
      State::Projects { resume_id, .. } => {
        State::Experience { resume_id: *resume_id, screen: CollectionScreen::new() }
      }
      State::Skills { resume_id, .. } => {
        State::Projects { resume_id: *resume_id, screen: CollectionScreen::new() }
      }
      State::TemplatePicker { resume_id } => {
        State::Skills { resume_id: *resume_id, screen: CollectionScreen::new() }
      }
      State::Preview { resume_id, .. } => State::TemplatePicker { resume_id: *resume_id },
      State::PersonalInfo(_) | State::Education { .. } => {
        return Err(Error::InvalidTransition { step: self.step(), action: "going back" });
      }
    };
    Ok(self.transition(prev))
  }

  fn transition(&mut self, next: State) -> Step {
    let from = self.step();
    self.state = next;
    let to = self.step();
    tracing::debug!(%from, %to, resume_id = ?self.resume_id(), "wizard transition");
    to
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
