//! Note title implementation for quicknote

use std::fmt;

use crate::constants::{MAX_FILE_STEM_BYTES, MAX_TITLE_CHARS};
use crate::error::{QuicknoteError, Result, TitleError};

/// An opaque wrapper type that represents a valid note title
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteTitle(String);

impl NoteTitle {
    /// Create a new title from a string, validating it in the process
    ///
    /// Surrounding whitespace is trimmed and runs of inner whitespace are
    /// collapsed to a single space.
    pub fn new(input: &str) -> Result<Self> {
        let title = input.split_whitespace().collect::<Vec<_>>().join(" ");

        if title.is_empty() {
            return Err(QuicknoteError::TitleError(TitleError::Empty));
        }

        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(QuicknoteError::TitleError(TitleError::TooLong(
                MAX_TITLE_CHARS,
            )));
        }

        Ok(NoteTitle(title))
    }

    /// Get the title as typed by the user
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The title with characters that are illegal in file names replaced by '-'
    ///
    /// Cut to at most `MAX_FILE_STEM_BYTES` bytes on a char boundary so the
    /// whole file name stays under the 255-byte limit of common filesystems.
    pub fn file_stem_part(&self) -> String {
        let mut stem = String::new();
        for c in self.0.chars() {
            let c = match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
                _ => c,
            };
            if stem.len() + c.len_utf8() > MAX_FILE_STEM_BYTES {
                break;
            }
            stem.push(c);
        }

        stem.trim_end().to_string()
    }
}

impl fmt::Display for NoteTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
