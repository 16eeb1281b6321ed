//! Renderer input and the fallback policy that fills it.

use folio_core::document::Document;
use serde::{Deserialize, Serialize};

/// One experience entry as the templates show it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
  pub title:       String,
  pub company:     String,
  /// `start_date - end_date`.
  pub duration:    String,
  pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
  pub degree: String,
  pub school: String,
  pub year:   String,
}

/// Everything a template needs, with optional fields flattened to strings.
///
/// A missing optional field is the empty string here; the template decides
/// whether to show its placeholder instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateData {
  pub name:       String,
  pub email:      String,
  pub phone:      String,
  pub address:    String,
  pub title:      String,
  pub summary:    String,
  pub experience: Vec<ExperienceEntry>,
  pub education:  Vec<EducationEntry>,
  pub skills:     Vec<String>,
}

impl From<&Document> for TemplateData {
  fn from(doc: &Document) -> Self {
    let r = &doc.resume;
    Self {
      name:       r.name.clone(),
      email:      r.email.clone(),
      phone:      r.phone.clone(),
      address:    r.address.clone().unwrap_or_default(),
      title:      r.title.clone().unwrap_or_default(),
      summary:    r.summary.clone().unwrap_or_default(),
      experience: doc
        .experience
        .iter()
        .map(|e| ExperienceEntry {
          title:       e.job_title.clone(),
          company:     e.company.clone(),
          duration:    duration(&e.start_date, e.end_date.as_deref()),
          description: e.description.clone().unwrap_or_default(),
        })
        .collect(),
      education:  doc
        .education
        .iter()
        .map(|e| EducationEntry {
          degree: e.degree.clone(),
          school: e.university.clone(),
          year:   e.year.clone(),
        })
        .collect(),
      skills:     doc.skill_labels().into_iter().map(str::to_owned).collect(),
    }
  }
}

/// `start + " - " + end`, with a missing end rendered as the empty string.
pub fn duration(start: &str, end: Option<&str>) -> String {
  format!("{start} - {}", end.unwrap_or_default())
}

// ─── Placeholders ────────────────────────────────────────────────────────────

/// Sample content a template shows in place of missing data.
#[derive(Debug)]
pub struct Placeholders {
  pub name:       &'static str,
  pub email:      &'static str,
  pub phone:      &'static str,
  pub address:    &'static str,
  pub title:      &'static str,
  pub summary:    &'static str,
  /// `(title, duration, company, description)`
  pub experience: &'static [(&'static str, &'static str, &'static str, &'static str)],
  /// `(degree, school, year)`
  pub education:  &'static [(&'static str, &'static str, &'static str)],
  pub skills:     &'static [&'static str],
}

impl Placeholders {
  /// Apply the fallback policy.
  ///
  /// With no data at all, every field (lists included) takes its sample
  /// value. With real data, blank scalars fall back individually but lists
  /// are taken as they are, so an empty list renders an empty section.
  pub fn fill(&self, data: Option<&TemplateData>) -> TemplateData {
    let Some(data) = data else {
      return self.sample();
    };

    let or = |value: &str, fallback: &'static str| {
      if value.trim().is_empty() { fallback.to_owned() } else { value.to_owned() }
    };

    TemplateData {
      name:       or(&data.name, self.name),
      email:      or(&data.email, self.email),
      phone:      or(&data.phone, self.phone),
      address:    or(&data.address, self.address),
      title:      or(&data.title, self.title),
      summary:    or(&data.summary, self.summary),
      experience: data.experience.clone(),
      education:  data.education.clone(),
      skills:     data.skills.clone(),
    }
  }

  /// The template's full sample resume.
  pub fn sample(&self) -> TemplateData {
    TemplateData {
      name:       self.name.to_owned(),
      email:      self.email.to_owned(),
      phone:      self.phone.to_owned(),
      address:    self.address.to_owned(),
      title:      self.title.to_owned(),
      summary:    self.summary.to_owned(),
      experience: self
        .experience
        .iter()
        .map(|(title, duration, company, description)| ExperienceEntry {
          title:       (*title).to_owned(),
          company:     (*company).to_owned(),
          duration:    (*duration).to_owned(),
          description: (*description).to_owned(),
        })
        .collect(),
      education:  self
        .education
        .iter()
        .map(|(degree, school, year)| EducationEntry {
          degree: (*degree).to_owned(),
          school: (*school).to_owned(),
          year:   (*year).to_owned(),
        })
        .collect(),
      skills:     self.skills.iter().map(|s| (*s).to_owned()).collect(),
    }
  }
}
