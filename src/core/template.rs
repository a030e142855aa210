//! Note templates for quicknote

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use regex::{Captures, Regex};

use crate::constants::DATE_FORMAT;
use crate::error::{QuicknoteError, Result};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*(title|date)(?::([^}]*))?\s*\}\}").expect("placeholder pattern is valid")
});

/// A Markdown template used to seed new notes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    content: String,
}

impl Template {
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Read a template from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(QuicknoteError::TemplateNotFound(
                path.display().to_string(),
            ));
        }

        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|_| QuicknoteError::InvalidUtf8Content(path.display().to_string()))?;

        Ok(Self { content })
    }

    /// Substitute `{{title}}`, `{{date}}` and `{{date:<format>}}`
    ///
    /// Unknown placeholders, and date formats chrono cannot parse, are left as written.
    pub fn render(&self, title: &str, date: NaiveDate) -> String {
        PLACEHOLDER
            .replace_all(&self.content, |caps: &Captures| match &caps[1] {
                "title" if caps.get(2).is_none() => title.to_string(),
                "date" => match caps.get(2) {
                    None => date.format(DATE_FORMAT).to_string(),
                    Some(fmt) => format_date(date, fmt.as_str())
                        .unwrap_or_else(|| caps[0].to_string()),
                },
                _ => caps[0].to_string(),
            })
            .into_owned()
    }
}

/// Format a date with a user-supplied strftime pattern
///
/// Returns None for invalid patterns and for fields a date does not have
/// (`%H`, `%z`, ...).
fn format_date(date: NaiveDate, fmt: &str) -> Option<String> {
    let items: Vec<Item> = StrftimeItems::new(fmt).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }

    let mut formatted = String::new();
    write!(formatted, "{}", date.format_with_items(items.into_iter())).ok()?;
    Some(formatted)
}
