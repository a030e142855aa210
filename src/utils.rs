use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{Datelike, Local, NaiveDate};
use dirs::home_dir;
use log::{debug, info};

use crate::constants::{DATE_FORMAT, DEFAULT_VAULT_DIR, VAULT_ENV_VAR};
use crate::error::{QuicknoteError, Result};

/// Determine the vault directory from the provided path, environment variable, or default
pub fn get_vault_dir(vault: Option<PathBuf>) -> Result<PathBuf> {
    vault
        .or_else(|| env::var(VAULT_ENV_VAR).map(PathBuf::from).ok())
        .or_else(|| home_dir().map(|p| p.join(DEFAULT_VAULT_DIR)))
        .ok_or_else(|| {
            QuicknoteError::VaultNotFound("Could not determine home directory".to_string())
        })
}

/// Ensure the vault directory exists
pub fn ensure_vault_exists(vault: &Path) -> Result<()> {
    if !vault.exists() {
        return Err(QuicknoteError::VaultNotFound(format!(
            "Directory does not exist: {}",
            vault.display()
        )));
    } else if !vault.is_dir() {
        return Err(QuicknoteError::VaultNotFound(format!(
            "{} is not a directory",
            vault.display()
        )));
    }

    Ok(())
}

/// Ensure the vault directory is writable
pub fn ensure_vault_writable(vault: &Path) -> Result<()> {
    // Check by attempting to create a temporary file
    let temp_file_path = vault.join(".quicknote_write_test");
    match File::create(&temp_file_path) {
        Ok(_) => {
            let _ = fs::remove_file(temp_file_path);
            Ok(())
        }
        Err(e) => Err(QuicknoteError::VaultNotWritable(format!(
            "{}: {}",
            vault.display(),
            e
        ))),
    }
}

/// Relative `YYYY/MM` folder for a date
pub fn date_directory(date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("{:04}", date.year())).join(format!("{:02}", date.month()))
}

/// Create the year and month directories under `root` for the note
pub fn create_date_directories(root: &Path, date: NaiveDate) -> Result<PathBuf> {
    let month_dir = root.join(date_directory(date));

    if !month_dir.is_dir() {
        fs::create_dir_all(&month_dir)?;
        info!("Created folder {}", month_dir.display());
    }

    Ok(month_dir)
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| QuicknoteError::InvalidDate(input.to_string()))
}

/// Open a file in the user's editor
pub fn open_in_editor(path: &Path) -> Result<()> {
    let editor = env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| "nano".to_string());

    debug!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| QuicknoteError::EditorLaunchFailed(format!("{}: {}", editor, e)))?;

    if !status.success() {
        return Err(QuicknoteError::EditorLaunchFailed(format!(
            "{} exited with status {}",
            editor, status
        )));
    }

    Ok(())
}

/// First non-empty line of some text, used when the title arrives on stdin
pub fn first_line(content: &str) -> Option<&str> {
    content.lines().map(str::trim).find(|line| !line.is_empty())
}
