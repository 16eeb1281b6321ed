//! The interactive wizard: a line-driven loop over [`Wizard`].
//!
//! Each input line is one [`Command`]. Errors from a command are printed
//! and the loop continues on the same step with its drafts intact.

use std::{io::Write, str::FromStr};

use anyhow::{anyhow, bail};
use folio_core::{
  aggregate::load_document,
  document::Document,
  draft::{CollectionScreen, DraftRecord, PersonalInfoField},
  store::ResumeStore,
  template::TemplateKind,
  wizard::{State, Step, Wizard},
};
use folio_export::{ExportMode, Exporter, Rasterizer, ShareSurface};
use strum::IntoEnumIterator as _;
use tokio::io::{AsyncBufRead, AsyncBufReadExt as _};

use crate::commands::{export_document, preview_text, report, suggested_filename, templates};

// ─── Command ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  /// `set [row] <field> <value...>`; `row` is 1-based as typed.
  Set { row: Option<usize>, field: String, value: String },
  Add,
  Remove(usize),
  Show,
  Next,
  Back,
  Pick(String),
  Save(Option<String>),
  Share,
  Markup,
  Help,
  Quit,
}

impl FromStr for Command {
  type Err = anyhow::Error;

  fn from_str(line: &str) -> anyhow::Result<Self> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let cmd = match word {
      "set" => {
        let (first, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let (row, field, value) = match first.parse::<usize>() {
          Ok(row) => {
            let tail = tail.trim();
            let (field, value) = tail.split_once(char::is_whitespace).unwrap_or((tail, ""));
            (Some(row), field, value)
          }
          Err(_) => (None, first, tail),
        };
        if field.is_empty() {
          bail!("usage: set [row] <field> <value>");
        }
        Self::Set { row, field: field.to_owned(), value: value.trim().to_owned() }
      }
      "add" | "a" => Self::Add,
      "remove" | "rm" => {
        let row = rest.parse().map_err(|_| anyhow!("usage: remove <row>"))?;
        Self::Remove(row)
      }
      "show" | "ls" => Self::Show,
      "next" | "n" => Self::Next,
      "back" | "b" => Self::Back,
      "pick" | "template" => {
        if rest.is_empty() {
          bail!("usage: pick <template>");
        }
        Self::Pick(rest.to_owned())
      }
      "save" => Self::Save((!rest.is_empty()).then(|| rest.to_owned())),
      "share" => Self::Share,
      "markup" => Self::Markup,
      "help" | "?" => Self::Help,
      "quit" | "q" | "exit" => Self::Quit,
      other => bail!("unknown command {other:?}; type `help`"),
    };
    Ok(cmd)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Continue,
  Quit,
}

// ─── Row access ───────────────────────────────────────────────────────────────

/// Object-safe view of a [`CollectionScreen`], whatever its draft type.
trait Rows {
  fn add_row(&mut self) -> usize;
  fn edit_row(&mut self, index: usize, field: &str, value: String) -> folio_core::Result<()>;
  fn remove_row(&mut self, index: usize) -> folio_core::Result<()>;
  fn row_count(&self) -> usize;
  fn describe(&self) -> Vec<String>;
  fn field_names(&self) -> Vec<String>;
}

impl<D: DraftRecord> Rows for CollectionScreen<D> {
  fn add_row(&mut self) -> usize { self.add() }

  fn edit_row(&mut self, index: usize, field: &str, value: String) -> folio_core::Result<()> {
    self.edit_named(index, field, value)
  }

  fn remove_row(&mut self, index: usize) -> folio_core::Result<()> {
    self.remove(index).map(drop)
  }

  fn row_count(&self) -> usize { self.len() }

  fn describe(&self) -> Vec<String> {
    self
      .rows()
      .iter()
      .map(|row| {
        D::Field::iter()
          .map(|f| format!("{f}: {}", row.get(f)))
          .collect::<Vec<_>>()
          .join(" | ")
      })
      .collect()
  }

  fn field_names(&self) -> Vec<String> { D::Field::iter().map(|f| f.to_string()).collect() }
}

fn screen_rows(state: &State) -> Option<&dyn Rows> {
  match state {
    State::Education { screen, .. } => Some(screen),
    State::Experience { screen, .. } => Some(screen),
    State::Projects { screen, .. } => Some(screen),
    State::Skills { screen, .. } => Some(screen),
    _ => None,
  }
}

fn screen_rows_mut(state: &mut State) -> Option<&mut dyn Rows> {
  match state {
    State::Education { screen, .. } => Some(screen),
    State::Experience { screen, .. } => Some(screen),
    State::Projects { screen, .. } => Some(screen),
    State::Skills { screen, .. } => Some(screen),
    _ => None,
  }
}

/// Convert a 1-based row number as typed into an index into `screen`.
fn index(screen: &dyn Rows, row: usize) -> anyhow::Result<usize> {
  let index = row.checked_sub(1).ok_or_else(|| anyhow!("rows are numbered from 1"))?;
  let len = screen.row_count();
  if index >= len {
    bail!("there is no row {row}; this step has {len}");
  }
  Ok(index)
}

// ─── Session ──────────────────────────────────────────────────────────────────

/// One interactive run of the wizard.
pub struct Session<S, R, Sh> {
  wizard:   Wizard<S>,
  exporter: Exporter<R, Sh>,
}

impl<S, R, Sh> Session<S, R, Sh>
where
  S: ResumeStore,
  R: Rasterizer,
  Sh: ShareSurface,
{
  pub fn new(wizard: Wizard<S>, exporter: Exporter<R, Sh>) -> Self { Self { wizard, exporter } }

  pub fn wizard(&self) -> &Wizard<S> { &self.wizard }

  /// Read commands from `input` until it ends or the user quits.
  pub async fn run<I, W>(&mut self, input: I, out: &mut W) -> anyhow::Result<()>
  where
    I: AsyncBufRead + Unpin,
    W: Write,
  {
    self.show(out).await?;
    let mut lines = input.lines();
    loop {
      write!(out, "{}> ", self.wizard.step())?;
      out.flush()?;
      let Some(line) = lines.next_line().await? else { break };
      if line.trim().is_empty() {
        continue;
      }
      let cmd = match line.parse::<Command>() {
        Ok(cmd) => cmd,
        Err(e) => {
          writeln!(out, "error: {e}")?;
          continue;
        }
      };
      if self.handle(cmd, out).await? == Flow::Quit {
        break;
      }
    }
    if let Some(id) = self.wizard.resume_id() {
      writeln!(out, "Resume {id} is saved. Export it later with `folio export {id}`.")?;
    }
    Ok(())
  }

  /// Execute one command. Only output failures are returned; everything
  /// else is printed as `error: ...`.
  pub async fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> anyhow::Result<Flow> {
    if let Err(e) = self.apply(cmd.clone(), out).await {
      writeln!(out, "error: {e}")?;
    }
    Ok(if cmd == Command::Quit { Flow::Quit } else { Flow::Continue })
  }

  async fn apply<W: Write>(&mut self, cmd: Command, out: &mut W) -> anyhow::Result<()> {
    match cmd {
      Command::Set { row, field, value } => self.set(row, &field, value),
      Command::Add => {
        let screen = self.rows_mut()?;
        let index = screen.add_row();
        writeln!(out, "Added row {}.", index + 1)?;
        Ok(())
      }
      Command::Remove(row) => {
        let screen = self.rows_mut()?;
        let index = index(screen, row)?;
        screen.remove_row(index)?;
        writeln!(out, "Removed row {row}.")?;
        Ok(())
      }
      Command::Show => self.show(out).await,
      Command::Next => {
        self.wizard.submit().await?;
        self.show(out).await
      }
      Command::Back => {
        self.wizard.back()?;
        self.show(out).await
      }
      Command::Pick(name) => {
        let kind: TemplateKind = name
          .parse()
          .map_err(|_| folio_core::Error::UnknownTemplate(name.clone()))?;
        self.wizard.choose_template(kind)?;
        self.show(out).await
      }
      Command::Save(name) => {
        let (document, kind) = self.preview_document().await?;
        let filename = name.unwrap_or_else(|| suggested_filename(&document));
        let outcome =
          export_document(&self.exporter, &document, kind, ExportMode::Save { filename }).await?;
        report(&outcome, out)
      }
      Command::Share => {
        let (document, kind) = self.preview_document().await?;
        let outcome = export_document(&self.exporter, &document, kind, ExportMode::Share).await?;
        report(&outcome, out)
      }
      Command::Markup => {
        let (document, kind) = self.preview_document().await?;
        writeln!(out, "{}", folio_render::render_markup(kind, &document))?;
        Ok(())
      }
      Command::Help => self.help(out),
      Command::Quit => Ok(()),
    }
  }

  fn set(&mut self, row: Option<usize>, field: &str, value: String) -> anyhow::Result<()> {
    if let State::PersonalInfo(screen) = self.wizard.state_mut() {
      if row.is_some() {
        bail!("personal information has a single record; use `set <field> <value>`");
      }
      screen.edit_named(field, value)?;
      return Ok(());
    }

    let screen = self.rows_mut()?;
    // Without a row number, edit the newest row.
    let index = match row {
      Some(row) => index(screen, row)?,
      None => screen.row_count() - 1,
    };
    screen.edit_row(index, field, value)?;
    Ok(())
  }

  fn rows_mut(&mut self) -> anyhow::Result<&mut dyn Rows> {
    let step = self.wizard.step();
    screen_rows_mut(self.wizard.state_mut()).ok_or_else(|| anyhow!("the {step} step has no rows"))
  }

  async fn preview_document(&self) -> anyhow::Result<(Document, TemplateKind)> {
    let (Some(id), Some(kind)) = (self.wizard.resume_id(), self.wizard.template()) else {
      bail!("pick a template first");
    };
    Ok((load_document(&**self.wizard.store(), id).await?, kind))
  }

  async fn show<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
    let step = self.wizard.step();
    writeln!(out, "\n== {} ==", step.title())?;

    match self.wizard.state() {
      State::PersonalInfo(screen) => {
        for field in PersonalInfoField::iter() {
          writeln!(out, "  {field:<9} {}", screen.draft().get(field))?;
        }
        writeln!(out, "name, email and phone are required.")?;
      }
      State::TemplatePicker { .. } => {
        templates(out)?;
        writeln!(out, "Type `pick <template>` to preview.")?;
      }
      State::Preview { .. } => {
        let (document, kind) = self.preview_document().await?;
        write!(out, "{}", preview_text(kind, &document))?;
        writeln!(
          out,
          "`save [name]` (default {}), `share`, `pick <template>`, or `quit`.",
          suggested_filename(&document)
        )?;
      }
      state => {
        if let Some(screen) = screen_rows(state) {
          for (i, line) in screen.describe().iter().enumerate() {
            writeln!(out, "  {}. {line}", i + 1)?;
          }
          writeln!(out, "fields: {}", screen.field_names().join(", "))?;
        }
      }
    }
    Ok(())
  }

  fn help<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
    let text = match self.wizard.step() {
      Step::PersonalInfo => "set <field> <value>, show, next, quit",
      Step::TemplatePicker => "pick <template>, back, show, quit",
      Step::Preview => "save [name], share, markup, pick <template>, back, show, quit",
      _ => "add, set [row] <field> <value>, remove <row>, show, next, back, quit",
    };
    writeln!(out, "commands: {text}")?;
    Ok(())
  }
}
