//! Cross-layout properties of the renderer.

use chrono::Utc;
use folio_core::{
  document::Document,
  resume::{Education, Experience, Resume, Skill, SkillKind},
  template::TemplateKind,
};
use strum::IntoEnumIterator as _;
use uuid::Uuid;

use crate::{
  Node, TemplateData, markup::text_content, render_markup, render_presentation, template,
  unescape_html,
};

fn document(name: &str) -> Document {
  let resume_id = Uuid::new_v4();
  let now = Utc::now();
  Document {
    resume:       Resume {
      id:         resume_id,
      name:       name.into(),
      email:      "jane@x.com".into(),
      phone:      "555-0100".into(),
      linkedin:   None,
      address:    None,
      title:      None,
      summary:    Some("Builds reliable systems.".into()),
      created_at: now,
    },
    education:    vec![Education {
      id: Uuid::new_v4(),
      resume_id,
      degree: "BS CS".into(),
      university: "MIT".into(),
      year: "2020".into(),
      created_at: now,
    }],
    experience:   vec![Experience {
      id: Uuid::new_v4(),
      resume_id,
      job_title: "Engineer".into(),
      company: "Acme".into(),
      start_date: "2020".into(),
      end_date: Some("Present".into()),
      description: None,
      created_at: now,
    }],
    projects:     vec![],
    skills:       ["Rust", "SQL", "Go"]
      .into_iter()
      .map(|s| Skill {
        id: Uuid::new_v4(),
        resume_id,
        kind: SkillKind::Core,
        skill: s.into(),
        created_at: now,
      })
      .collect(),
    other_skills: vec![],
  }
}

/// `true` if every `&` in `text` starts one of the entities we emit.
fn ampersands_are_entities(text: &str) -> bool {
  text.match_indices('&').all(|(i, _)| {
    ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
      .iter()
      .any(|e| text[i..].starts_with(e))
  })
}

#[test]
fn every_kind_resolves_to_its_layout() {
  for kind in TemplateKind::iter() {
    assert_eq!(template(kind).kind(), kind);
  }
}

#[test]
fn sample_render_has_no_missing_values() {
  for kind in TemplateKind::iter() {
    let t = template(kind);
    let tree = t.render_presentation(None);
    let html = t.render_markup(None);

    assert!(tree.texts().iter().all(|s| !s.trim().is_empty()), "{kind}: blank text");
    for bad in ["undefined", "null"] {
      assert!(!html.contains(bad), "{kind}: markup contains {bad}");
      assert!(!tree.to_text().contains(bad), "{kind}: text contains {bad}");
    }
    assert!(tree.to_text().contains(t.placeholders().name.to_uppercase().as_str())
      || tree.to_text().contains(t.placeholders().name));
    assert!(tree.to_text().contains(t.placeholders().summary));
  }
}

#[test]
fn blank_document_shows_scalar_placeholders() {
  let mut doc = document("  ");
  doc.resume.email = String::new();
  doc.resume.phone = " ".into();
  doc.resume.summary = None;
  doc.education.clear();
  doc.experience.clear();
  doc.skills.clear();

  for kind in TemplateKind::iter() {
    let ph = template(kind).placeholders();
    let tree = render_presentation(kind, &doc);
    let text = tree.to_text();
    let html = render_markup(kind, &doc);

    assert!(
      text.contains(ph.name) || text.contains(ph.name.to_uppercase().as_str()),
      "{kind}: name placeholder missing"
    );
    for value in [ph.email, ph.phone, ph.address, ph.summary] {
      assert!(text.contains(value), "{kind}: {value:?} missing");
    }
    for bad in ["undefined", "null"] {
      assert!(!html.contains(bad), "{kind}: markup contains {bad}");
      assert!(!text.contains(bad), "{kind}: text contains {bad}");
    }
    // Lists stay empty rather than falling back to sample entries.
    assert!(tree.find("experienceItem").is_none(), "{kind}: sample experience shown");
    assert!(tree.find("educationItem").is_none(), "{kind}: sample education shown");
  }
}

#[test]
fn every_layout_renders_the_same_sections() {
  for kind in TemplateKind::iter() {
    let tree = render_presentation(kind, &document("Jane Doe"));
    for class in ["header", "summary", "experienceItem", "educationItem"] {
      assert!(tree.find(class).is_some(), "{kind}: missing {class}");
    }
    assert!(
      tree.find("skills").is_some() || tree.find("skillsContainer").is_some(),
      "{kind}: missing skills"
    );
  }
}

#[test]
fn real_document_with_blank_optionals_falls_back_per_field() {
  let doc = document("Jane Doe");
  for kind in TemplateKind::iter() {
    let t = template(kind);
    let text = render_presentation(kind, &doc).to_text();
    assert!(text.contains(t.placeholders().address), "{kind}: address fallback");
    assert!(text.contains("Builds reliable systems."));
    assert!(!text.contains(t.placeholders().summary));
  }
}

#[test]
fn empty_lists_render_empty_sections() {
  let mut doc = document("Jane Doe");
  doc.experience.clear();
  doc.education.clear();
  doc.skills.clear();

  for kind in TemplateKind::iter() {
    let tree = render_presentation(kind, &doc);
    assert!(tree.find("experienceItem").is_none(), "{kind}");
    assert!(tree.find("educationItem").is_none(), "{kind}");
    let html = render_markup(kind, &doc);
    assert!(!html.contains("undefined") && !html.contains("null"));
  }
}

#[test]
fn markup_escapes_hostile_names() {
  let name = r#"<Jane> & "Jo" O'Neil"#;
  let doc = document(name);

  for kind in TemplateKind::iter() {
    let html = render_markup(kind, &doc);
    let text = text_content(&html);
    for c in ['<', '>', '"', '\''] {
      assert!(!text.contains(c), "{kind}: literal {c:?} in text content");
    }
    assert!(ampersands_are_entities(&text), "{kind}: bare ampersand");
    assert!(!html.contains("<Jane>"));
  }

  // The tree itself carries the raw value; only the markup is escaped.
  let tree = render_presentation(TemplateKind::Creative, &doc);
  let Some(Node::Text { text, .. }) = tree.find("name") else {
    panic!("no name node");
  };
  assert_eq!(text, name);

  let html = render_markup(TemplateKind::Creative, &doc);
  let start = html.find("<div class=\"name\">").unwrap() + "<div class=\"name\">".len();
  let end = start + html[start..].find("</div>").unwrap();
  assert_eq!(unescape_html(&html[start..end]), name);
}

#[test]
fn markup_contains_every_tree_text_escaped() {
  let doc = document("Tom & Jerry");
  for kind in TemplateKind::iter() {
    let tree = render_presentation(kind, &doc);
    let html = render_markup(kind, &doc);
    for t in tree.texts() {
      assert!(html.contains(&crate::escape_html(t)), "{kind}: {t:?} missing from markup");
    }
  }
}

#[test]
fn professional_joins_skills_and_upper_cases_the_name() {
  let tree = render_presentation(TemplateKind::Professional, &document("Jane Doe"));
  assert_eq!(tree.find("skills"), Some(&Node::text("skills", "Rust, SQL, Go")));
  assert_eq!(tree.find("name"), Some(&Node::text("name", "JANE DOE")));
  assert!(tree.find("skillTag").is_none());
}

#[test]
fn creative_and_minimal_render_skill_pills() {
  for kind in [TemplateKind::Creative, TemplateKind::Minimal] {
    let tree = render_presentation(kind, &document("Jane Doe"));
    let pills = tree.find("skillsContainer").unwrap().children();
    assert_eq!(pills.len(), 3, "{kind}");
    assert_eq!(pills[0], Node::span("skillTag", "Rust"));
    assert!(tree.find("skills").is_none());
  }
}

#[test]
fn duration_is_start_dash_end() {
  let mut doc = document("Jane Doe");
  let data = TemplateData::from(&doc);
  assert_eq!(data.experience[0].duration, "2020 - Present");
  assert_eq!(data.experience[0].description, "");

  doc.experience[0].end_date = None;
  let html = render_markup(TemplateKind::Minimal, &doc);
  assert!(html.contains("<span class=\"duration\">2020 - </span>"));
}

#[test]
fn education_line_joins_school_and_year() {
  let tree = render_presentation(TemplateKind::Minimal, &document("Jane Doe"));
  assert_eq!(tree.find("school"), Some(&Node::text("school", "MIT \u{2022} 2020")));
}

#[test]
fn template_data_serializes_with_snake_case_fields() {
  let json = serde_json::to_value(TemplateData::from(&document("Jane Doe"))).unwrap();
  assert_eq!(json["experience"][0]["duration"], "2020 - Present");
  assert_eq!(json["education"][0]["school"], "MIT");
}
