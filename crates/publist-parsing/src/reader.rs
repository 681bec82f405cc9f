use std::path::Path;

use publist_core::{LineSummary, PublistError};

/// Number of characters of the last line kept in [`LineSummary::last_line_preview`].
const PREVIEW_CHARS: usize = 50;

/// Read a source file into its ordered lines.
///
/// Line terminators (`\n`, `\r\n` or a bare `\r`) are removed and a leading UTF-8 BOM is
/// dropped; everything else is kept verbatim. Consumers trim each line
/// themselves.
pub fn read_lines(path: &Path) -> Result<Vec<String>, PublistError> {
    if !path.exists() {
        return Err(PublistError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(split_lines(&content))
}

/// Split in-memory text the same way [`read_lines`] splits a file.
///
/// `\r\n`, a bare `\r` and `\n` all end a line.
pub fn split_lines(content: &str) -> Vec<String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}

/// Total line count and a quoted preview of the last line.
pub fn summarize_lines(lines: &[String]) -> LineSummary {
    let last_line_preview = match lines.last() {
        Some(last) => {
            let prefix: String = last.chars().take(PREVIEW_CHARS).collect();
            format!("{:?}", prefix)
        }
        None => format!("{:?}", "Empty"),
    };
    LineSummary {
        total_lines: lines.len(),
        last_line_preview,
    }
}
