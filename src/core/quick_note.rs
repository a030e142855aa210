//! QuickNote implementation for quicknote

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, info};

use crate::constants::DATE_FORMAT;
use crate::core::frontmatter;
use crate::core::template::Template;
use crate::core::title::NoteTitle;
use crate::error::{QuicknoteError, Result};
use crate::settings::Settings;
use crate::utils::create_date_directories;

/// A dated note, stored as `<base>/<YYYY>/<MM>/YYYY-MM-DD <title>.md`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickNote {
    date: NaiveDate,
    title: NoteTitle,
}

/// What happened when a quick note was requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteOutcome {
    /// A new file was written
    Created(PathBuf),
    /// A note with the same date and title already existed and was left as is
    Existing(PathBuf),
}

impl NoteOutcome {
    /// Path of the note, relative to the vault
    pub fn path(&self) -> &Path {
        match self {
            NoteOutcome::Created(path) | NoteOutcome::Existing(path) => path,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, NoteOutcome::Created(_))
    }
}

impl QuickNote {
    pub fn new(date: NaiveDate, title: NoteTitle) -> Self {
        Self { date, title }
    }

    /// `YYYY-MM-DD <title>.md`
    pub fn file_name(&self) -> String {
        format!(
            "{} {}.md",
            self.date.format(DATE_FORMAT),
            self.title.file_stem_part()
        )
    }

    /// Initial content of the note
    pub fn render(&self, template: Option<&Template>, add_frontmatter: bool) -> String {
        let body = template
            .map(|t| t.render(self.title.as_str(), self.date))
            .unwrap_or_default();

        if add_frontmatter {
            frontmatter::inject(&body, self.title.as_str(), self.date)
        } else {
            body
        }
    }

    /// Create the note in the vault unless it already exists
    ///
    /// The returned path is relative to the vault.
    pub fn create(&self, vault: &Path, settings: &Settings) -> Result<NoteOutcome> {
        let root = settings.notes_root(vault);
        let month_dir = create_date_directories(&root, self.date)?;
        let path = month_dir.join(self.file_name());

        let relative = path
            .strip_prefix(vault)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());

        if path.exists() {
            debug!("Note {} already exists", path.display());
            return Ok(NoteOutcome::Existing(relative));
        }

        let template = match settings.template_path(vault) {
            Some(template_path) => {
                debug!("Using template {}", template_path.display());
                Some(Template::load(&template_path)?)
            }
            None => None,
        };

        let content = self.render(template.as_ref(), settings.add_frontmatter);

        // create_new so a note written concurrently is never clobbered
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(content.as_bytes())?;
                info!("Created note {}", path.display());
                Ok(NoteOutcome::Created(relative))
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(NoteOutcome::Existing(relative)),
            Err(e) => Err(QuicknoteError::Io(e)),
        }
    }
}
