use std::path::Path;

use crate::cli::{SettingsAction, SettingsArgs};
use crate::error::Result;
use crate::settings::Settings;
use crate::utils::ensure_vault_writable;

/// Handle the settings command
pub fn settings_command(vault: &Path, args: SettingsArgs) -> Result<()> {
    let path = Settings::path(vault);

    if args.init {
        if path.exists() {
            println!("Settings file already exists: {}", path.display());
        } else {
            ensure_vault_writable(vault)?;
            Settings::default().save(vault)?;
            println!("Settings written to: {}", path.display());
        }
    }

    let mut settings = Settings::load(vault)?;

    match args.action {
        Some(SettingsAction::Set { key, value }) => {
            ensure_vault_writable(vault)?;
            settings.set(&key, &value)?;
            settings.save(vault)?;
            println!("Updated {} in {}", key, path.display());
        }
        None if !args.init => print!("{}", settings.to_yaml()?),
        None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_init_and_set() {
        let temp_dir = TempDir::new().unwrap();

        settings_command(
            temp_dir.path(),
            SettingsArgs {
                init: true,
                action: None,
            },
        )
        .unwrap();
        assert!(Settings::path(temp_dir.path()).exists());

        settings_command(
            temp_dir.path(),
            SettingsArgs {
                init: false,
                action: Some(SettingsAction::Set {
                    key: "base_folder".to_string(),
                    value: "Inbox".to_string(),
                }),
            },
        )
        .unwrap();

        let settings = Settings::load(temp_dir.path()).unwrap();
        assert_eq!(settings.base_folder, "Inbox");
    }

    #[test]
    fn test_settings_set_unknown_key_fails_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let result = settings_command(
            temp_dir.path(),
            SettingsArgs {
                init: false,
                action: Some(SettingsAction::Set {
                    key: "nope".to_string(),
                    value: "x".to_string(),
                }),
            },
        );

        assert!(result.is_err());
        assert!(!Settings::path(temp_dir.path()).exists());
    }
}
