//! `folio` — build, preview and export resumes from the terminal.
//!
//! # Usage
//!
//! ```text
//! folio new                                  # walk through the wizard
//! folio list
//! folio show <id> --template creative
//! folio export <id> --save "Jane Doe CV"
//! folio --url http://localhost:8080 list     # use a folio-server
//! ```

mod app;
mod client;
mod commands;
mod config;
mod export;

use std::{io, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use app::Session;
use clap::{Parser, Subcommand};
use client::RemoteStore;
use config::{Backend, ConfigFile, Overrides, RasterizerKind, Settings};
use folio_core::{store::ResumeStore, template::TemplateKind, wizard::Wizard};
use folio_export::ExportMode;
use folio_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "folio", about = "Build, preview and export resumes")]
struct Args {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE", env = "FOLIO_CONFIG")]
  config: Option<PathBuf>,

  /// Base URL of a folio-server. Without it, resumes live in a local file.
  #[arg(long, env = "FOLIO_URL")]
  url: Option<String>,

  /// Local SQLite file (default: ~/.local/share/folio/folio.db).
  #[arg(long, env = "FOLIO_STORE")]
  store: Option<PathBuf>,

  /// Where saved exports go (default: ~/Documents).
  #[arg(long, env = "FOLIO_DOCUMENTS_DIR")]
  documents_dir: Option<PathBuf>,

  /// `html` or `wkhtmltopdf`.
  #[arg(long, env = "FOLIO_RASTERIZER")]
  rasterizer: Option<RasterizerKind>,

  /// Program used to share an export (default: xdg-open / open).
  #[arg(long, env = "FOLIO_SHARE_COMMAND")]
  share_command: Option<String>,

  #[command(subcommand)]
  command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
  /// Create a resume with the step-by-step wizard.
  New,
  /// Continue an existing resume at the template picker.
  Open { id: Uuid },
  /// List resumes, newest first.
  List,
  /// Print the three templates.
  Templates,
  /// Preview a resume in the terminal.
  Show {
    id:       Uuid,
    #[arg(short, long, default_value_t)]
    template: TemplateKind,
    /// Print the full markup instead of the text preview.
    #[arg(long)]
    markup:   bool,
  },
  /// Save or share a rendered resume.
  Export {
    id:       Uuid,
    #[arg(short, long, default_value_t)]
    template: TemplateKind,
    /// File name without extension (default: <Name>_Resume).
    #[arg(long, value_name = "NAME", conflicts_with = "share")]
    save:     Option<Option<String>>,
    #[arg(long)]
    share:    bool,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg = match &args.config {
    Some(path) => ConfigFile::read(path)?,
    None => ConfigFile::default(),
  };
  let flags = Overrides {
    url:           args.url,
    store:         args.store,
    documents_dir: args.documents_dir,
    rasterizer:    args.rasterizer,
    share_command: args.share_command,
  };
  let settings = Settings::resolve(flags, file_cfg);
  tracing::debug!(?settings, "resolved settings");

  match &settings.backend {
    Backend::Remote(url) => {
      let store = RemoteStore::new(url.clone())?;
      run(Arc::new(store), args.command, &settings).await
    }
    Backend::Local(path) => {
      if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
      {
        std::fs::create_dir_all(parent)
          .with_context(|| format!("creating {}", parent.display()))?;
      }
      let store = SqliteStore::open(path)
        .await
        .with_context(|| format!("opening store at {}", path.display()))?;
      run(Arc::new(store), args.command, &settings).await
    }
  }
}

async fn run<S: ResumeStore>(store: Arc<S>, command: Cmd, settings: &Settings) -> Result<()> {
  let mut out = io::stdout();
  let exporter = export::exporter(settings);

  match command {
    Cmd::New => {
      let mut session = Session::new(Wizard::new(store), exporter);
      session.run(tokio::io::BufReader::new(tokio::io::stdin()), &mut out).await
    }
    Cmd::Open { id } => {
      store
        .get_resume(id)
        .await
        .context("loading resume")?
        .with_context(|| format!("resume {id} not found"))?;
      let mut session = Session::new(Wizard::for_resume(store, id), exporter);
      session.run(tokio::io::BufReader::new(tokio::io::stdin()), &mut out).await
    }
    Cmd::List => commands::list(&*store, &mut out).await,
    Cmd::Templates => commands::templates(&mut out),
    Cmd::Show { id, template, markup } => {
      commands::show(&*store, id, template, markup, &mut out).await
    }
    Cmd::Export { id, template, save, share } => {
      let mode = match (save, share) {
        (_, true) => ExportMode::Share,
        (Some(Some(filename)), false) => ExportMode::Save { filename },
        (Some(None) | None, false) => {
          let resume = store
            .get_resume(id)
            .await
            .context("loading resume")?
            .with_context(|| format!("resume {id} not found"))?;
          ExportMode::Save { filename: folio_export::default_filename(Some(&resume.name)) }
        }
      };
      commands::export(&*store, &exporter, id, template, mode, &mut out).await
    }
  }
}
