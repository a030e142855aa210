use std::path::Path;

use crate::cli::NewArgs;
use crate::core::quick_note::{NoteOutcome, QuickNote};
use crate::core::title::NoteTitle;
use crate::error::{QuicknoteError, Result, TitleError};
use crate::settings::Settings;
use crate::utils::{first_line, open_in_editor, parse_date, today};

/// Create a quick note and report where it is
///
/// Returns the outcome with a path relative to the vault
pub fn new_note(
    vault: &Path,
    settings: &Settings,
    args: NewArgs,
    stdin_content: &str,
) -> Result<NoteOutcome> {
    let note = note_from_args(&args, stdin_content)?;
    let outcome = note.create(vault, settings)?;

    // Print with absolute path for user convenience
    let absolute_path = vault.join(outcome.path());
    match &outcome {
        NoteOutcome::Created(_) => println!("Note created: {}", absolute_path.display()),
        NoteOutcome::Existing(_) => println!("Note already exists: {}", absolute_path.display()),
    }

    let open = !args.no_edit && (args.edit || settings.open_after_create);
    if open {
        open_in_editor(&absolute_path)?;
    }

    Ok(outcome)
}

/// Whether the title has to come from stdin because no words were given
pub fn title_from_stdin(args: &NewArgs) -> bool {
    args.args.iter().all(|word| word.trim().is_empty())
}

/// Build the QuickNote described by the command line arguments
///
/// The title comes from the trailing words, or from the first line of stdin
/// when no words were given.
pub fn note_from_args(args: &NewArgs, stdin_content: &str) -> Result<QuickNote> {
    let words = args.args.join(" ");
    let raw_title = if title_from_stdin(args) {
        first_line(stdin_content).ok_or(QuicknoteError::TitleError(TitleError::Empty))?
    } else {
        words.as_str()
    };

    let title = NoteTitle::new(raw_title)?;
    let date = match &args.date {
        Some(date) => parse_date(date)?,
        None => today(),
    };

    Ok(QuickNote::new(date, title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DATE_FORMAT;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(words: &[&str], date: Option<&str>) -> NewArgs {
        NewArgs {
            args: words.iter().map(|w| w.to_string()).collect(),
            date: date.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_note_from_args_joins_words() {
        let note = note_from_args(&args(&["Weekly", "review"], Some("2025-04-01")), "").unwrap();
        assert_eq!(note.file_name(), "2025-04-01 Weekly review.md");
    }

    #[test]
    fn test_note_from_args_defaults_to_today() {
        let note = note_from_args(&args(&["Standup"], None), "").unwrap();
        let prefix = format!("{} ", today().format(DATE_FORMAT));
        assert_eq!(note.file_name(), format!("{}Standup.md", prefix));
    }

    #[test]
    fn test_note_from_args_reads_stdin_title() {
        let note = note_from_args(&args(&[], Some("2025-04-01")), "\n Piped title \nrest").unwrap();
        assert_eq!(note.file_name(), "2025-04-01 Piped title.md");

        // Words on the command line win over stdin
        let note = note_from_args(&args(&["Args"], Some("2025-04-01")), "Piped").unwrap();
        assert_eq!(note.file_name(), "2025-04-01 Args.md");
    }

    #[test]
    fn test_title_from_stdin() {
        assert!(title_from_stdin(&args(&[], None)));
        assert!(title_from_stdin(&args(&["", "  "], None)));
        assert!(!title_from_stdin(&args(&["Standup"], None)));
    }

    #[test]
    fn test_note_from_args_errors() {
        assert!(matches!(
            note_from_args(&args(&[], None), ""),
            Err(QuicknoteError::TitleError(TitleError::Empty))
        ));
        assert!(matches!(
            note_from_args(&args(&["x"], Some("2025-13-01")), ""),
            Err(QuicknoteError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_new_note_creates_then_finds_existing() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::default();

        let first = new_note(
            temp_dir.path(),
            &settings,
            args(&["Standup"], Some("2025-04-01")),
            "",
        )
        .unwrap();
        assert_eq!(
            first,
            NoteOutcome::Created(
                PathBuf::from("Quick Notes/2025/04/2025-04-01 Standup.md")
            )
        );

        let second = new_note(
            temp_dir.path(),
            &settings,
            args(&["Standup"], Some("2025-04-01")),
            "",
        )
        .unwrap();
        assert!(!second.is_created());
    }
}
