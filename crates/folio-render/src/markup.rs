//! Standalone markup rendering: the presentation tree plus an embedded
//! stylesheet.

use std::fmt::Write as _;

use crate::{escape::escape_html, node::Node};

/// One CSS rule: a selector and its declaration block.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
  pub selector:     &'static str,
  pub declarations: &'static str,
}

pub const fn rule(selector: &'static str, declarations: &'static str) -> Rule {
  Rule { selector, declarations }
}

/// Render `tree` as a complete HTML document styled by `stylesheet`.
///
/// Every text value passes through [`escape_html`]; class names and the
/// stylesheet are fixed strings and are written as they are.
pub fn document(tree: &Node, stylesheet: &[Rule], title: &str) -> String {
  let mut out = String::new();
  out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
  let _ = writeln!(out, "<title>{}</title>", escape_html(title));
  out.push_str("<style>\n");
  for r in stylesheet {
    let _ = writeln!(out, "{} {{ {} }}", r.selector, r.declarations);
  }
  out.push_str("</style>\n</head>\n<body>\n");
  write_node(tree, &mut out);
  out.push_str("</body>\n</html>\n");
  out
}

fn write_node(node: &Node, out: &mut String) {
  match node {
    Node::Block { class, children } => {
      let _ = writeln!(out, "<div class=\"{class}\">");
      for child in children {
        write_node(child, out);
      }
      out.push_str("</div>\n");
    }
    Node::Text { class, text } => {
      let _ = writeln!(out, "<div class=\"{class}\">{}</div>", escape_html(text));
    }
    Node::Span { class, text } => {
      let _ = writeln!(out, "<span class=\"{class}\">{}</span>", escape_html(text));
    }
  }
}

/// The text content of `markup` with tags and the `<style>` block removed,
/// entities left in place.
#[cfg(test)]
pub(crate) fn text_content(markup: &str) -> String {
  let body = markup.find("<body>").map_or(markup, |start| &markup[start..]);
  let mut out = String::new();
  let mut in_tag = false;
  for c in body.chars() {
    match c {
      '<' => in_tag = true,
      '>' if in_tag => in_tag = false,
      c if !in_tag => out.push(c),
      _ => {}
    }
  }
  out
}
