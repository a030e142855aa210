//! Persistent settings for quicknote
//!
//! Settings live in a YAML file at the root of the vault. Every field is
//! optional in the file and falls back to its default.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_FOLDER, DEFAULT_SUGGESTIONS, SETTINGS_FILENAME};
use crate::error::{Result, SettingsError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Folder (relative to the vault) holding the year/month tree
    pub base_folder: String,
    /// Template used to seed new notes
    pub template: Option<PathBuf>,
    /// Whether to inject title/date frontmatter into new notes
    pub add_frontmatter: bool,
    /// Whether to open the editor after creating a note
    pub open_after_create: bool,
    /// Default number of title suggestions
    pub max_suggestions: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_folder: DEFAULT_BASE_FOLDER.to_string(),
            template: None,
            add_frontmatter: true,
            open_after_create: false,
            max_suggestions: DEFAULT_SUGGESTIONS,
        }
    }
}

impl Settings {
    /// Path of the settings file for a vault
    pub fn path(vault: &Path) -> PathBuf {
        vault.join(SETTINGS_FILENAME)
    }

    /// Load settings from the vault, falling back to defaults if there is no settings file
    pub fn load(vault: &Path) -> Result<Self> {
        let path = Self::path(vault);
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file is valid and means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content)
            .map_err(|e| SettingsError::InvalidYaml(e.to_string()).into())
    }

    /// Format the settings as YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| SettingsError::Serialize(e.to_string()).into())
    }

    /// Write the settings file into the vault
    pub fn save(&self, vault: &Path) -> Result<()> {
        let path = Self::path(vault);
        fs::write(&path, self.to_yaml()?)?;
        debug!("Settings written to {}", path.display());
        Ok(())
    }

    /// Absolute path of the folder holding the year/month tree
    pub fn notes_root(&self, vault: &Path) -> PathBuf {
        let base = self.base_folder.trim().trim_matches('/');
        if base.is_empty() {
            vault.to_path_buf()
        } else {
            vault.join(base)
        }
    }

    /// Resolved template path, if a template is configured
    pub fn template_path(&self, vault: &Path) -> Option<PathBuf> {
        self.template
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| if p.is_absolute() { p.clone() } else { vault.join(p) })
    }

    /// Update a single setting from its string representation
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || SettingsError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "base_folder" => self.base_folder = value.to_string(),
            "template" => {
                self.template = match value.trim() {
                    "" | "none" | "null" => None,
                    path => Some(PathBuf::from(path)),
                }
            }
            "add_frontmatter" => self.add_frontmatter = parse_bool(value).ok_or_else(invalid)?,
            "open_after_create" => {
                self.open_after_create = parse_bool(value).ok_or_else(invalid)?
            }
            "max_suggestions" => {
                self.max_suggestions = value
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(invalid)?
            }
            _ => return Err(SettingsError::UnknownKey(key.to_string()).into()),
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
