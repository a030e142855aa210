//! Previously used note titles, for autocomplete

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use log::{debug, warn};
use regex::Regex;
use serde::Serialize;

use crate::constants::DATE_FORMAT;
use crate::error::Result;

static QUICK_NOTE_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}) (.+)\.md$").expect("file name pattern is valid")
});

/// A title together with the most recent date it was used
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleEntry {
    pub title: String,
    pub last_used: NaiveDate,
}

/// Parse a quick note file name into its date and title
pub fn parse_file_name(name: &str) -> Option<(NaiveDate, String)> {
    let caps = QUICK_NOTE_FILENAME.captures(name)?;
    let date = NaiveDate::parse_from_str(&caps[1], DATE_FORMAT).ok()?;
    Some((date, caps[2].to_string()))
}

/// Collect every distinct title under `root`, most recently used first
pub fn scan_titles(root: &Path) -> Result<Vec<TitleEntry>> {
    let mut latest: HashMap<String, NaiveDate> = HashMap::new();

    if root.is_dir() {
        collect_titles(root, &mut latest)?;
    } else {
        debug!("Notes folder {} does not exist yet", root.display());
    }

    let mut entries: Vec<TitleEntry> = latest
        .into_iter()
        .map(|(title, last_used)| TitleEntry { title, last_used })
        .collect();

    entries.sort_by(|a, b| {
        b.last_used
            .cmp(&a.last_used)
            .then_with(|| a.title.cmp(&b.title))
    });

    Ok(entries)
}

/// Walk a directory recursively, keeping the newest date seen for each title
fn collect_titles(dir: &Path, latest: &mut HashMap<String, NaiveDate>) -> Result<()> {
    let entries = fs::read_dir(dir)?;

    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        // file_type does not follow symlinks, so a link back to an ancestor
        // cannot send the walk into a loop
        let Ok(file_type) = entry.file_type() else {
            warn!("Skipping {}: cannot read file type", path.display());
            continue;
        };

        if file_type.is_dir() {
            if name.starts_with('.') {
                continue;
            }

            // One unreadable folder should not hide the rest of the history
            if let Err(e) = collect_titles(&path, latest) {
                warn!("Skipping {}: {}", path.display(), e);
            }
            continue;
        }

        if let Some((date, title)) = parse_file_name(&name) {
            latest
                .entry(title)
                .and_modify(|d| *d = (*d).max(date))
                .or_insert(date);
        }
    }

    Ok(())
}

/// Filter titles by a case-insensitive query
///
/// Titles starting with the query come first; recency order is kept within
/// each group. An empty query matches everything.
pub fn suggest<'a>(entries: &'a [TitleEntry], query: &str, limit: usize) -> Vec<&'a TitleEntry> {
    let query = query.trim().to_lowercase();

    let (mut prefix, rest): (Vec<&TitleEntry>, Vec<&TitleEntry>) = entries
        .iter()
        .filter(|e| e.title.to_lowercase().contains(&query))
        .partition(|e| e.title.to_lowercase().starts_with(&query));

    prefix.extend(rest);
    prefix.truncate(limit);
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(title: &str, date: NaiveDate) -> TitleEntry {
        TitleEntry {
            title: title.to_string(),
            last_used: date,
        }
    }

    #[test]
    fn test_parse_file_name() {
        assert_eq!(
            parse_file_name("2025-04-01 Weekly review.md"),
            Some((ymd(2025, 4, 1), "Weekly review".to_string()))
        );
        assert_eq!(parse_file_name("2025-04-01.md"), None);
        assert_eq!(parse_file_name("2025-04-01 notes.txt"), None);
        assert_eq!(parse_file_name("Weekly review.md"), None);
        // Shape matches but not a real date
        assert_eq!(parse_file_name("2025-02-30 Impossible.md"), None);
    }

    #[test]
    fn test_scan_titles_dedupes_and_keeps_latest() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "2025/03/2025-03-10 Standup.md");
        touch(root, "2025/04/2025-04-02 Standup.md");
        touch(root, "2025/04/2025-04-01 Planning.md");
        touch(root, "2024/12/2024-12-24 Gifts.md");
        touch(root, "2025/04/random.md");

        let titles = scan_titles(root).unwrap();
        assert_eq!(
            titles,
            vec![
                entry("Standup", ymd(2025, 4, 2)),
                entry("Planning", ymd(2025, 4, 1)),
                entry("Gifts", ymd(2024, 12, 24)),
            ]
        );
    }

    #[test]
    fn test_scan_titles_orders_same_day_by_title() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "2025/04/2025-04-01 b.md");
        touch(temp_dir.path(), "2025/04/2025-04-01 a.md");

        let titles = scan_titles(temp_dir.path()).unwrap();
        assert_eq!(titles[0].title, "a");
        assert_eq!(titles[1].title, "b");
    }

    #[test]
    fn test_scan_titles_skips_hidden_dirs() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), ".trash/2025-04-01 Deleted.md");
        touch(temp_dir.path(), "2025/04/2025-04-01 Kept.md");

        let titles = scan_titles(temp_dir.path()).unwrap();
        assert_eq!(titles, vec![entry("Kept", ymd(2025, 4, 1))]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_titles_does_not_follow_directory_symlinks() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "2025/04/2025-04-01 Standup.md");
        symlink(root, root.join("2025").join("a")).unwrap();
        symlink(root, root.join("2025").join("b")).unwrap();

        let titles = scan_titles(root).unwrap();
        assert_eq!(titles, vec![entry("Standup", ymd(2025, 4, 1))]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_titles_skips_unreadable_dirs() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "2025/03/2025-03-01 Locked.md");
        touch(root, "2025/04/2025-04-01 Standup.md");

        let locked = root.join("2025").join("03");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        let result = scan_titles(root);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // The sibling folder is still scanned; the locked one may or may not be
        // readable depending on privileges
        let titles = result.unwrap();
        assert!(titles.contains(&entry("Standup", ymd(2025, 4, 1))));
    }

    #[test]
    fn test_scan_titles_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let titles = scan_titles(&temp_dir.path().join("nope")).unwrap();
        assert!(titles.is_empty());
    }

    #[test]
    fn test_suggest() {
        let entries = vec![
            entry("Project sync", ymd(2025, 4, 3)),
            entry("Standup", ymd(2025, 4, 2)),
            entry("Sync with design", ymd(2025, 4, 1)),
            entry("Groceries", ymd(2025, 3, 1)),
        ];

        let titles = |query: &str, limit: usize| -> Vec<String> {
            suggest(&entries, query, limit)
                .into_iter()
                .map(|e| e.title.clone())
                .collect()
        };

        // Prefix matches before substring matches
        assert_eq!(titles("sync", 10), vec!["Sync with design", "Project sync"]);
        // Case-insensitive and trimmed
        assert_eq!(titles("  STAND ", 10), vec!["Standup"]);
        // Empty query keeps recency order
        assert_eq!(titles("", 2), vec!["Project sync", "Standup"]);
        assert!(titles("zzz", 10).is_empty());
    }
}
