//! Markup escaping for free-text values.

/// Escape `&`, `<`, `>`, `"` and `'` for interpolation into markup, in text
/// or in a quoted attribute.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
  out
}

/// Inverse of [`escape_html`]. Unknown entities are left as they are.
pub fn unescape_html(s: &str) -> String {
  const ENTITIES: [(&str, char); 5] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
  ];

  let mut out = String::with_capacity(s.len());
  let mut rest = s;
  while let Some(pos) = rest.find('&') {
    out.push_str(&rest[..pos]);
    rest = &rest[pos..];
    match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
      Some((entity, c)) => {
        out.push(*c);
        rest = &rest[entity.len()..];
      }
      None => {
        out.push('&');
        rest = &rest[1..];
      }
    }
  }
  out.push_str(rest);
  out
}
