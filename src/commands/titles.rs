use std::path::Path;

use crate::cli::TitlesArgs;
use crate::constants::DATE_FORMAT;
use crate::error::Result;
use crate::history::{scan_titles, suggest};
use crate::settings::Settings;

/// Print previously used titles matching the query, one per line
pub fn list_titles(vault: &Path, settings: &Settings, args: TitlesArgs) -> Result<()> {
    for line in title_lines(vault, settings, &args)? {
        println!("{}", line);
    }

    Ok(())
}

fn title_lines(vault: &Path, settings: &Settings, args: &TitlesArgs) -> Result<Vec<String>> {
    let entries = scan_titles(&settings.notes_root(vault))?;
    let query = args.query.as_deref().unwrap_or("");

    // An explicit query narrows the list; without one show everything unless limited
    let limit = match (args.limit, args.query.is_some()) {
        (Some(limit), _) => limit,
        (None, true) => settings.max_suggestions,
        (None, false) => usize::MAX,
    };

    Ok(suggest(&entries, query, limit)
        .into_iter()
        .map(|entry| {
            if args.dates {
                format!("{} {}", entry.last_used.format(DATE_FORMAT), entry.title)
            } else {
                entry.title.clone()
            }
        })
        .collect())
}
