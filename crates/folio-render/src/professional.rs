//! Professional: blue accents, a ruled header, skills as one comma-joined
//! line. Also accepted as `classic`.

use folio_core::template::TemplateKind;

use crate::{
  data::{Placeholders, TemplateData},
  markup::{Rule, rule},
  node::Node,
  template::{Template, education_items, experience_items, section},
};

pub struct Professional;

static PLACEHOLDERS: Placeholders = Placeholders {
  name:       "John Doe",
  email:      "john.doe@email.com",
  phone:      "+1 (555) 123-4567",
  address:    "New York, NY",
  title:      "Software Engineer",
  summary:    "Experienced software engineer with 5+ years of expertise in \
               full-stack development, specializing in React, Node.js, and \
               cloud technologies. Proven track record of delivering scalable \
               solutions and leading development teams.",
  experience: &[(
    "Senior Software Engineer",
    "2020 - Present",
    "Tech Solutions Inc.",
    "Led development of scalable web applications using React and Node.js. \
     Managed team of 5 developers and delivered 3 major projects on time and \
     within budget.",
  )],
  education:  &[(
    "Bachelor of Science in Computer Science",
    "University of Technology",
    "2018",
  )],
  skills:     &[
    "JavaScript",
    "React",
    "Node.js",
    "Python",
    "AWS",
    "Docker",
    "Git",
    "Agile Methodologies",
  ],
};

static STYLESHEET: [Rule; 18] = [
  rule("body", "font-family: Arial, sans-serif; padding: 20px; background-color: #fff;"),
  rule(".header", "border-bottom: 2px solid #2196F3; padding-bottom: 15px; margin-bottom: 20px;"),
  rule(".name", "font-size: 28px; font-weight: bold; color: #2196F3; margin-bottom: 5px;"),
  rule(".contact", "font-size: 14px; color: #666; margin-bottom: 3px;"),
  rule(".address", "font-size: 14px; color: #666;"),
  rule(".section", "margin-bottom: 20px;"),
  rule(
    ".sectionTitle",
    "font-size: 16px; font-weight: bold; color: #2196F3; margin-bottom: 10px; \
     text-transform: uppercase;",
  ),
  rule(".summary", "font-size: 14px; line-height: 20px; color: #333;"),
  rule(".experienceItem", "margin-bottom: 15px;"),
  rule(
    ".experienceHeader",
    "display: flex; justify-content: space-between; align-items: center; margin-bottom: 5px;",
  ),
  rule(".jobTitle", "font-size: 16px; font-weight: bold; color: #333;"),
  rule(".duration", "font-size: 14px; color: #666;"),
  rule(".company", "font-size: 14px; font-weight: 600; color: #666; margin-bottom: 5px;"),
  rule(".description", "font-size: 14px; line-height: 18px; color: #333;"),
  rule(".educationItem", "margin-bottom: 10px;"),
  rule(".degree", "font-size: 16px; font-weight: bold; color: #333;"),
  rule(".school", "font-size: 14px; color: #666;"),
  rule(".skills", "font-size: 14px; line-height: 18px; color: #333;"),
];

impl Template for Professional {
  fn kind(&self) -> TemplateKind { TemplateKind::Professional }

  fn placeholders(&self) -> &'static Placeholders { &PLACEHOLDERS }

  fn stylesheet(&self) -> &'static [Rule] { &STYLESHEET }

  fn render_presentation(&self, data: Option<&TemplateData>) -> Node {
    let d = PLACEHOLDERS.fill(data);

    Node::block("resume", vec![
      Node::block("header", vec![
        Node::text("name", d.name.to_uppercase()),
        Node::text("contact", format!("{} | {}", d.email, d.phone)),
        Node::text("address", d.address),
      ]),
      section("Professional Summary", vec![Node::text("summary", d.summary)]),
      section("Professional Experience", experience_items(&d.experience)),
      section("Education", education_items(&d.education)),
      section("Technical Skills", vec![Node::text("skills", d.skills.join(", "))]),
    ])
  }
}
