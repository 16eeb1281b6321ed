//! The presentation tree shared by both renderings.
//!
//! A template builds one [`Node`] tree; the markup string and the terminal
//! text are both walks over it, so they cannot drift apart.

/// One element of the presentation tree. `class` names the stylesheet rule
/// that applies to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  /// A block container.
  Block { class: &'static str, children: Vec<Node> },
  /// A block holding one line of text.
  Text { class: &'static str, text: String },
  /// Inline text, laid out in a row with its inline siblings.
  Span { class: &'static str, text: String },
}

impl Node {
  pub fn block(class: &'static str, children: Vec<Node>) -> Self {
    Self::Block { class, children }
  }

  pub fn text(class: &'static str, text: impl Into<String>) -> Self {
    Self::Text { class, text: text.into() }
  }

  pub fn span(class: &'static str, text: impl Into<String>) -> Self {
    Self::Span { class, text: text.into() }
  }

  pub fn class(&self) -> &'static str {
    match self {
      Self::Block { class, .. } | Self::Text { class, .. } | Self::Span { class, .. } => {
        *class
      }
    }
  }

  pub fn children(&self) -> &[Node] {
    match self {
      Self::Block { children, .. } => children,
      _ => &[],
    }
  }

  /// Every text value in the tree, depth first.
  pub fn texts(&self) -> Vec<&str> {
    let mut out = Vec::new();
    self.collect_texts(&mut out);
    out
  }

  fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
    match self {
      Self::Block { children, .. } => {
        for child in children {
          child.collect_texts(out);
        }
      }
      Self::Text { text, .. } | Self::Span { text, .. } => out.push(text),
    }
  }

  /// The first node with `class`, depth first.
  pub fn find(&self, class: &str) -> Option<&Node> {
    if self.class() == class {
      return Some(self);
    }
    self.children().iter().find_map(|c| c.find(class))
  }

  /// Plain-text rendering for a terminal.
  ///
  /// Text blocks get their own line, runs of inline spans share one line,
  /// and a blank line follows each `section` block.
  pub fn to_text(&self) -> String {
    let mut out = String::new();
    self.write_text(&mut out);
    out
  }

  fn write_text(&self, out: &mut String) {
    match self {
      Self::Text { text, .. } => {
        out.push_str(text);
        out.push('\n');
      }
      Self::Span { text, .. } => {
        out.push_str(text);
        out.push('\n');
      }
      Self::Block { class, children } => {
        let mut row: Vec<&str> = Vec::new();
        for child in children {
          match child {
            Self::Span { text, .. } => row.push(text),
            other => {
              flush_row(&mut row, out);
              other.write_text(out);
            }
          }
        }
        flush_row(&mut row, out);
        if *class == "section" {
          out.push('\n');
        }
      }
    }
  }
}

fn flush_row(row: &mut Vec<&str>, out: &mut String) {
  if row.is_empty() {
    return;
  }
  out.push_str(&row.join("  "));
  out.push('\n');
  row.clear();
}
