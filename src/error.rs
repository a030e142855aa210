use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuicknoteError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Vault directory does not exist or is not a directory: {0}")]
    VaultNotFound(String),

    #[error("Vault directory is not writable: {0}")]
    VaultNotWritable(String),

    #[error("Invalid title: {0}")]
    TitleError(#[from] TitleError),

    #[error("Settings error: {0}")]
    SettingsError(#[from] SettingsError),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("File contains invalid UTF-8: {0}")]
    InvalidUtf8Content(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Failed to launch editor: {0}")]
    EditorLaunchFailed(String),

    #[error("MCP server error: {0}")]
    McpServerError(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TitleError {
    #[error("Title cannot be empty")]
    Empty,

    #[error("Title is longer than {0} characters")]
    TooLong(usize),
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to parse settings file: {0}")]
    InvalidYaml(String),

    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    #[error("Unknown settings key: {0}")]
    UnknownKey(String),

    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, QuicknoteError>;
