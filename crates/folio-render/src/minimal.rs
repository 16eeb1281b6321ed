//! Minimal: light typography, centred header, outlined skill pills.

use folio_core::template::TemplateKind;

use crate::{
  data::{Placeholders, TemplateData},
  markup::{Rule, rule},
  node::Node,
  template::{Template, education_items, experience_items, section, skill_pills},
};

pub struct Minimal;

static PLACEHOLDERS: Placeholders = Placeholders {
  name:       "Alex Chen",
  email:      "alex.chen@email.com",
  phone:      "+1 (555) 456-7890",
  address:    "Seattle, WA",
  title:      "Software Engineer",
  summary:    "Dedicated software engineer with a passion for clean code and \
               efficient solutions. Experienced in building scalable \
               applications and collaborating with cross-functional teams to \
               deliver high-quality products.",
  experience: &[(
    "Software Engineer",
    "2021 - Present",
    "Tech Innovations LLC",
    "Develop and maintain web applications using modern technologies. \
     Collaborate with design and product teams to implement user-friendly \
     interfaces and optimize application performance.",
  )],
  education:  &[(
    "Master of Science in Computer Science",
    "University of Washington",
    "2021",
  )],
  skills:     &["JavaScript", "React", "Node.js", "Python", "AWS", "Docker"],
};

static STYLESHEET: [Rule; 19] = [
  rule("body", "font-family: Arial, sans-serif; padding: 30px; background-color: #fff;"),
  rule(".header", "margin-bottom: 40px; text-align: center;"),
  rule(
    ".name",
    "font-size: 36px; font-weight: 300; color: #333; margin-bottom: 8px; letter-spacing: 2px;",
  ),
  rule(".title", "font-size: 18px; color: #666; margin-bottom: 20px; font-weight: 400;"),
  rule(".contact", "font-size: 14px; color: #888; font-weight: 300; margin-bottom: 4px;"),
  rule(".section", "margin-bottom: 35px;"),
  rule(
    ".sectionTitle",
    "font-size: 20px; font-weight: 400; color: #333; margin-bottom: 15px; \
     text-transform: uppercase; letter-spacing: 1px;",
  ),
  rule(".summary", "font-size: 15px; line-height: 24px; color: #555; font-weight: 300;"),
  rule(".experienceItem", "margin-bottom: 25px;"),
  rule(
    ".experienceHeader",
    "display: flex; justify-content: space-between; align-items: center; margin-bottom: 6px;",
  ),
  rule(".jobTitle", "font-size: 17px; font-weight: 500; color: #333;"),
  rule(".duration", "font-size: 14px; color: #888; font-weight: 300;"),
  rule(".company", "font-size: 15px; color: #666; margin-bottom: 8px; font-weight: 400;"),
  rule(".description", "font-size: 14px; line-height: 22px; color: #555; font-weight: 300;"),
  rule(".educationItem", "margin-bottom: 20px;"),
  rule(".degree", "font-size: 16px; font-weight: 500; color: #333; margin-bottom: 4px;"),
  rule(".school", "font-size: 14px; color: #666; font-weight: 300;"),
  rule(".skillsContainer", "display: flex; flex-wrap: wrap; gap: 10px;"),
  rule(
    ".skillTag",
    "background-color: #f5f5f5; color: #555; padding: 8px 16px; border-radius: 25px; \
     border: 1px solid #e0e0e0; font-size: 13px; font-weight: 400;",
  ),
];

impl Template for Minimal {
  fn kind(&self) -> TemplateKind { TemplateKind::Minimal }

  fn placeholders(&self) -> &'static Placeholders { &PLACEHOLDERS }

  fn stylesheet(&self) -> &'static [Rule] { &STYLESHEET }

  fn render_presentation(&self, data: Option<&TemplateData>) -> Node {
    let d = PLACEHOLDERS.fill(data);

    Node::block("resume", vec![
      Node::block("header", vec![
        Node::text("name", d.name),
        Node::text("title", d.title),
        Node::text("contact", d.email),
        Node::text("contact", d.phone),
        Node::text("contact", d.address),
      ]),
      section("Summary", vec![Node::text("summary", d.summary)]),
      section("Experience", experience_items(&d.experience)),
      section("Education", education_items(&d.education)),
      section("Skills", vec![skill_pills(&d.skills)]),
    ])
  }
}
