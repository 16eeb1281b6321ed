//! Creative: a coloured header band and pill-shaped skill tags. Also
//! accepted as `modern`.

use folio_core::template::TemplateKind;

use crate::{
  data::{Placeholders, TemplateData},
  markup::{Rule, rule},
  node::Node,
  template::{Template, education_items, experience_items, section, skill_pills},
};

pub struct Creative;

static PLACEHOLDERS: Placeholders = Placeholders {
  name:       "Sarah Johnson",
  email:      "sarah.johnson@email.com",
  phone:      "+1 (555) 987-6543",
  address:    "San Francisco, CA",
  title:      "Creative Designer & Developer",
  summary:    "Passionate creative professional with expertise in UI/UX design \
               and front-end development. Combining artistic vision with \
               technical skills to create engaging digital experiences that \
               drive user engagement and business growth.",
  experience: &[
    (
      "Senior UI/UX Designer",
      "2021 - Present",
      "Creative Studio Pro",
      "Lead designer for mobile and web applications, creating intuitive user \
       interfaces that improve user engagement by 40%. Collaborated with \
       development teams to ensure seamless implementation.",
    ),
    (
      "Frontend Developer",
      "2019 - 2021",
      "Digital Innovations Co.",
      "Developed responsive web applications using React and modern CSS. \
       Implemented design systems and maintained code quality across multiple \
       projects.",
    ),
  ],
  education:  &[("Bachelor of Arts in Graphic Design", "Design Institute", "2019")],
  skills:     &[
    "UI/UX Design",
    "React",
    "Figma",
    "JavaScript",
    "CSS3",
    "Adobe Creative Suite",
  ],
};

static STYLESHEET: [Rule; 20] = [
  rule("body", "font-family: Arial, sans-serif; margin: 0; padding: 0; background-color: #f8f9fa;"),
  rule(".header", "background-color: #FF5722; color: white; padding: 25px; text-align: center;"),
  rule(".name", "font-size: 32px; font-weight: bold; margin-bottom: 5px;"),
  rule(".title", "font-size: 18px; opacity: 0.9; margin-bottom: 15px;"),
  rule(".contact", "font-size: 14px; opacity: 0.8; margin-bottom: 3px;"),
  rule(".content", "padding: 30px;"),
  rule(".section", "margin-bottom: 25px;"),
  rule(
    ".sectionTitle",
    "font-size: 18px; font-weight: bold; color: #FF5722; margin-bottom: 12px; \
     border-left: 4px solid #FF5722; padding-left: 10px;",
  ),
  rule(".summary", "font-size: 14px; line-height: 22px; color: #333;"),
  rule(".experienceItem", "margin-bottom: 20px; padding-left: 10px;"),
  rule(
    ".experienceHeader",
    "display: flex; justify-content: space-between; align-items: center; margin-bottom: 5px;",
  ),
  rule(".jobTitle", "font-size: 16px; font-weight: bold; color: #333;"),
  rule(".duration", "font-size: 14px; color: #666; font-style: italic;"),
  rule(".company", "font-size: 14px; font-weight: 600; color: #FF5722; margin-bottom: 8px;"),
  rule(".description", "font-size: 14px; line-height: 20px; color: #555;"),
  rule(".educationItem", "margin-bottom: 15px; padding-left: 10px;"),
  rule(".degree", "font-size: 16px; font-weight: bold; color: #333;"),
  rule(".school", "font-size: 14px; color: #666; margin-top: 2px;"),
  rule(".skillsContainer", "display: flex; flex-wrap: wrap; gap: 8px;"),
  rule(
    ".skillTag",
    "background-color: #FF5722; color: white; padding: 6px 12px; border-radius: 20px; \
     font-size: 12px; font-weight: 600;",
  ),
];

impl Template for Creative {
  fn kind(&self) -> TemplateKind { TemplateKind::Creative }

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
      Node::block("content", vec![
        section("About Me", vec![Node::text("summary", d.summary)]),
        section("Work Experience", experience_items(&d.experience)),
        section("Education", education_items(&d.education)),
        section("Skills & Expertise", vec![skill_pills(&d.skills)]),
      ]),
    ])
  }
}
