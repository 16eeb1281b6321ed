//! Path helpers shared by the folio binaries.

use std::path::{Path, PathBuf};

/// Expand a leading `~/` to the user's home directory. Any other path, or a
/// missing `HOME`, is returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tilde_is_expanded_only_at_the_start() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(expand_tilde(Path::new("~/x.db")), PathBuf::from(home).join("x.db"));
    assert_eq!(expand_tilde(Path::new("/a/~/x.db")), PathBuf::from("/a/~/x.db"));
    assert_eq!(expand_tilde(Path::new("~user/x.db")), PathBuf::from("~user/x.db"));
    assert_eq!(expand_tilde(Path::new("relative/x.db")), PathBuf::from("relative/x.db"));
  }
}
