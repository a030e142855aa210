//! Frontmatter injection for quicknote
//!
//! Works on the raw text of a note rather than a parsed document: keys are
//! recognized only when they start a line inside the leading `---` block.
//! Anything else in the block is preserved verbatim.

use chrono::NaiveDate;

use crate::constants::DATE_FORMAT;

/// Byte range of the key lines between the opening and closing `---`
fn find_block(content: &str) -> Option<(usize, usize)> {
    let first_end = content.find('\n')?;
    if content[..first_end].trim_end() != "---" {
        return None;
    }

    let body_start = first_end + 1;
    let mut offset = body_start;
    for line in content[body_start..].split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((body_start, offset));
        }
        offset += line.len();
    }

    // No closing delimiter, not a frontmatter block
    None
}

/// Whether the frontmatter body has `key:` at the start of a line
fn has_key(body: &str, key: &str) -> bool {
    let prefix = format!("{}:", key);
    body.lines().any(|line| line.starts_with(&prefix))
}

/// Format a string as a YAML scalar, quoting it only when a plain scalar
/// would not read back as the same string
pub fn yaml_scalar(value: &str) -> String {
    let reads_back = matches!(
        serde_yaml::from_str::<serde_yaml::Value>(value),
        Ok(serde_yaml::Value::String(ref s)) if s == value
    );

    if reads_back && !value.contains('"') {
        value.to_string()
    } else {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

/// Add `title:` and `date:` to the frontmatter of `content`
///
/// Keys already present are left alone. Added lines use the line ending of
/// the opening `---`. Without a frontmatter block a new one is prepended.
pub fn inject(content: &str, title: &str, date: NaiveDate) -> String {
    let title = yaml_scalar(title);
    let date = date.format(DATE_FORMAT);

    match find_block(content) {
        Some((start, end)) => {
            let body = &content[start..end];
            let eol = if content[..start].ends_with("\r\n") { "\r\n" } else { "\n" };

            let mut missing = String::new();
            if !has_key(body, "title") {
                missing.push_str(&format!("title: {}{}", title, eol));
            }
            if !has_key(body, "date") {
                missing.push_str(&format!("date: {}{}", date, eol));
            }

            format!("{}{}{}", &content[..start], missing, &content[start..])
        }
        None => {
            let block = format!("---\ntitle: {}\ndate: {}\n---\n", title, date);
            if content.is_empty() {
                block
            } else {
                format!("{}\n{}", block, content)
            }
        }
    }
}
