//! Export pipeline tests with fake rasterizers and share surfaces.

use std::{
  path::{Path, PathBuf},
  sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
  },
};

use tempfile::TempDir;

use crate::*;

/// Writes the markup verbatim into `dir` and counts invocations.
struct FakeRasterizer {
  dir:   PathBuf,
  calls: AtomicUsize,
  fail:  bool,
}

impl FakeRasterizer {
  fn new(dir: &Path) -> Self {
    Self { dir: dir.to_owned(), calls: AtomicUsize::new(0), fail: false }
  }

  fn failing(dir: &Path) -> Self { Self { fail: true, ..Self::new(dir) } }

  fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
}

impl Rasterizer for FakeRasterizer {
  fn extension(&self) -> &str { "pdf" }

  async fn rasterize(&self, markup: &str) -> Result<PathBuf> {
    let n = self.calls.fetch_add(1, Ordering::SeqCst);
    if self.fail {
      return Err(Error::Render("converter crashed".into()));
    }
    let path = self.dir.join(format!("render-{n}.pdf"));
    std::fs::write(&path, markup).unwrap();
    Ok(path)
  }
}

#[derive(Default)]
struct RecordingShare {
  shared: Mutex<Vec<PathBuf>>,
  fail:   bool,
}

impl ShareSurface for RecordingShare {
  async fn share(&self, path: &Path) -> Result<()> {
    if self.fail {
      return Err(Error::Share { path: path.to_owned(), reason: "no handler".into() });
    }
    self.shared.lock().unwrap().push(path.to_owned());
    Ok(())
  }
}

struct Fixture {
  _tmp:     TempDir,
  temp_dir: PathBuf,
  docs_dir: PathBuf,
}

fn fixture() -> Fixture {
  let tmp = TempDir::new().unwrap();
  let temp_dir = tmp.path().join("tmp");
  let docs_dir = tmp.path().join("Documents");
  std::fs::create_dir_all(&temp_dir).unwrap();
  Fixture { _tmp: tmp, temp_dir, docs_dir }
}

fn entries(dir: &Path) -> Vec<String> {
  let Ok(read) = std::fs::read_dir(dir) else { return vec![] };
  let mut names: Vec<String> =
    read.map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect();
  names.sort();
  names
}

fn save(name: &str) -> ExportMode { ExportMode::Save { filename: name.into() } }

// ─── Filenames ───────────────────────────────────────────────────────────────

#[test]
fn default_filename_replaces_non_alphanumerics() {
  assert_eq!(default_filename(Some("Jane Doe")), "Jane_Doe_Resume");
  assert_eq!(default_filename(Some("O'Neil, Jo")), "O_Neil__Jo_Resume");
  assert_eq!(default_filename(Some("   ")), "My_Resume");
  assert_eq!(default_filename(None), "My_Resume");
}

#[test]
fn sanitize_trims_and_strips_separators() {
  assert_eq!(sanitize_filename("  My CV  ").unwrap(), "My CV");
  assert_eq!(sanitize_filename("../etc/passwd").unwrap(), ".._etc_passwd");
  assert_eq!(sanitize_filename("a\\b\nc").unwrap(), "a_b_c");
  assert!(matches!(sanitize_filename(" \t "), Err(Error::EmptyFilename)));
}

// ─── Save ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn whitespace_filename_is_rejected_before_rendering() {
  let f = fixture();
  let exporter = Exporter::new(FakeRasterizer::new(&f.temp_dir), RecordingShare::default(), &f.docs_dir);

  let err = exporter.export("<html/>", save("  ")).await.unwrap_err();
  assert!(matches!(err, Error::EmptyFilename));
  assert!(err.is_validation());
  assert_eq!(exporter.rasterizer.calls(), 0);
  assert!(entries(&f.temp_dir).is_empty());
  assert!(!f.docs_dir.exists());
}

#[tokio::test]
async fn save_moves_file_under_sanitized_name() {
  let f = fixture();
  let exporter = Exporter::new(FakeRasterizer::new(&f.temp_dir), RecordingShare::default(), &f.docs_dir);

  let outcome = exporter.export("<p>hi</p>", save(" Jane/Doe ")).await.unwrap();
  let ExportOutcome::Saved { path, filename } = outcome else { panic!("expected save") };

  assert_eq!(filename, "Jane_Doe.pdf");
  assert_eq!(path, f.docs_dir.join("Jane_Doe.pdf"));
  assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>hi</p>");
  assert!(entries(&f.temp_dir).is_empty());
}

#[tokio::test]
async fn saving_twice_keeps_the_last_write() {
  let f = fixture();
  let exporter = Exporter::new(FakeRasterizer::new(&f.temp_dir), RecordingShare::default(), &f.docs_dir);

  exporter.export("first", save("cv")).await.unwrap();
  exporter.export("second", save("cv")).await.unwrap();

  assert_eq!(entries(&f.docs_dir), ["cv.pdf"]);
  assert_eq!(std::fs::read_to_string(f.docs_dir.join("cv.pdf")).unwrap(), "second");
}

#[tokio::test]
async fn move_failure_is_distinct_and_cleans_up() {
  let f = fixture();
  // A regular file where the documents directory should be.
  std::fs::write(&f.docs_dir, "not a directory").unwrap();
  let exporter = Exporter::new(FakeRasterizer::new(&f.temp_dir), RecordingShare::default(), &f.docs_dir);

  let err = exporter.export("<html/>", save("cv")).await.unwrap_err();
  assert!(matches!(err, Error::Move { .. }), "got {err:?}");
  assert!(!err.is_validation());
  assert_eq!(exporter.rasterizer.calls(), 1);
  assert!(entries(&f.temp_dir).is_empty());
}

#[tokio::test]
async fn failed_copy_keeps_the_previous_export() {
  let f = fixture();
  std::fs::create_dir_all(&f.docs_dir).unwrap();
  let dest = f.docs_dir.join("cv.pdf");
  std::fs::write(&dest, "previous export").unwrap();

  let gone = f.temp_dir.join("render-gone.pdf");
  let err = copy_into(&gone, &f.docs_dir, &dest).await.unwrap_err();
  assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
  assert_eq!(std::fs::read_to_string(&dest).unwrap(), "previous export");
  // No staging file is left next to it.
  assert_eq!(entries(&f.docs_dir), ["cv.pdf"]);
}

#[tokio::test]
async fn copy_replaces_the_destination_whole() {
  let f = fixture();
  std::fs::create_dir_all(&f.docs_dir).unwrap();
  let dest = f.docs_dir.join("cv.pdf");
  std::fs::write(&dest, "previous export").unwrap();
  let src = f.temp_dir.join("render-0.pdf");
  std::fs::write(&src, "fresh export").unwrap();

  copy_into(&src, &f.docs_dir, &dest).await.unwrap();
  assert_eq!(std::fs::read_to_string(&dest).unwrap(), "fresh export");
  assert_eq!(entries(&f.docs_dir), ["cv.pdf"]);
}

#[tokio::test]
async fn failed_rename_onto_destination_removes_the_staging_file() {
  let f = fixture();
  // A non-empty directory at the destination cannot be replaced by a file.
  let dest = f.docs_dir.join("cv.pdf");
  std::fs::create_dir_all(dest.join("inner")).unwrap();
  let src = f.temp_dir.join("render-0.pdf");
  std::fs::write(&src, "fresh export").unwrap();

  assert!(copy_into(&src, &f.docs_dir, &dest).await.is_err());
  assert!(dest.is_dir());
  assert_eq!(entries(&f.docs_dir), ["cv.pdf"]);
}

#[tokio::test]
async fn render_failure_is_distinct() {
  let f = fixture();
  let exporter =
    Exporter::new(FakeRasterizer::failing(&f.temp_dir), RecordingShare::default(), &f.docs_dir);

  let err = exporter.export("<html/>", save("cv")).await.unwrap_err();
  assert!(matches!(err, Error::Render(_)));
  assert_eq!(err.to_string(), "failed to render document: converter crashed");
  assert!(!f.docs_dir.exists());
}

// ─── Share ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn share_hands_over_the_rendered_file() {
  let f = fixture();
  let exporter = Exporter::new(FakeRasterizer::new(&f.temp_dir), RecordingShare::default(), &f.docs_dir);

  let outcome = exporter.export("<html/>", ExportMode::Share).await.unwrap();
  let shared = exporter.share.shared.lock().unwrap().clone();
  assert_eq!(shared, [outcome.path().to_owned()]);
  assert!(outcome.path().exists());
  assert!(!f.docs_dir.exists());
}

#[tokio::test]
async fn share_failure_removes_the_temporary_file() {
  let f = fixture();
  let share = RecordingShare { fail: true, ..RecordingShare::default() };
  let exporter = Exporter::new(FakeRasterizer::new(&f.temp_dir), share, &f.docs_dir);

  let err = exporter.export("<html/>", ExportMode::Share).await.unwrap_err();
  assert!(matches!(err, Error::Share { .. }));
  assert!(entries(&f.temp_dir).is_empty());
}

// ─── Real rasterizers ────────────────────────────────────────────────────────

#[tokio::test]
async fn html_rasterizer_writes_markup() {
  let f = fixture();
  let r = HtmlRasterizer::new(&f.temp_dir);
  let path = r.rasterize("<html>ok</html>").await.unwrap();
  assert_eq!(path.extension().unwrap(), "html");
  assert_eq!(std::fs::read_to_string(path).unwrap(), "<html>ok</html>");
}

#[cfg(unix)]
#[tokio::test]
async fn command_rasterizer_runs_the_converter() {
  let f = fixture();
  let r = CommandRasterizer::new("cp", Vec::<String>::new(), "pdf").with_temp_dir(&f.temp_dir);
  let path = r.rasterize("<html>converted</html>").await.unwrap();

  assert_eq!(path.extension().unwrap(), "pdf");
  assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html>converted</html>");
  // The intermediate markup file is gone.
  assert_eq!(entries(&f.temp_dir).len(), 1);
}

#[cfg(unix)]
#[tokio::test]
async fn command_rasterizer_reports_converter_failure() {
  let f = fixture();
  let r = CommandRasterizer::new("false", Vec::<String>::new(), "pdf").with_temp_dir(&f.temp_dir);
  let err = r.rasterize("<html/>").await.unwrap_err();
  assert!(matches!(err, Error::Render(_)));
  assert!(entries(&f.temp_dir).is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn converter_output_is_removed_when_it_exits_nonzero() {
  let f = fixture();
  // Writes its output, then fails.
  let r = CommandRasterizer::new("sh", ["-c", "cp \"$0\" \"$1\"; exit 3"], "pdf")
    .with_temp_dir(&f.temp_dir);
  let err = r.rasterize("<html/>").await.unwrap_err();
  assert!(err.to_string().contains("exited with"), "got {err}");
  assert!(entries(&f.temp_dir).is_empty());
}

#[tokio::test]
async fn missing_converter_is_a_render_error() {
  let f = fixture();
  let r = CommandRasterizer::new("folio-no-such-converter", Vec::<String>::new(), "pdf")
    .with_temp_dir(&f.temp_dir);
  assert!(matches!(r.rasterize("<html/>").await, Err(Error::Render(_))));
  assert!(entries(&f.temp_dir).is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn command_share_reports_exit_status() {
  let f = fixture();
  let file = f.temp_dir.join("x.pdf");
  std::fs::write(&file, "x").unwrap();

  CommandShare::new("true").share(&file).await.unwrap();
  let err = CommandShare::new("false").share(&file).await.unwrap_err();
  assert!(matches!(err, Error::Share { .. }));
}
