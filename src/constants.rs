//! Constants used throughout the application

/// Name of the settings file, stored at the root of the vault
pub const SETTINGS_FILENAME: &str = ".quicknote.yaml";

/// Environment variable that overrides the default vault location
pub const VAULT_ENV_VAR: &str = "QUICKNOTE_VAULT";

/// Default vault directory name (relative to $HOME)
pub const DEFAULT_VAULT_DIR: &str = "Notes";

/// Default folder (relative to the vault) holding the year/month tree
pub const DEFAULT_BASE_FOLDER: &str = "Quick Notes";

/// Maximum length of a note title in characters
pub const MAX_TITLE_CHARS: usize = 200;

/// Maximum length in bytes of the title part of a note file name
pub const MAX_FILE_STEM_BYTES: usize = 200;

/// Default number of title suggestions (10)
pub const DEFAULT_SUGGESTIONS: usize = 10;

/// Maximum number of title suggestions the MCP server returns (25)
pub const MAX_SUGGESTIONS: usize = 25;

/// Date format used in file names and frontmatter
pub const DATE_FORMAT: &str = "%Y-%m-%d";
