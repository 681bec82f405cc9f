use once_cell::sync::Lazy;
use publist_core::RawEntry;
use regex::Regex;

use crate::config::ParsingConfig;

/// Matches the start of an Arabic-numbered entry: `12.`
static ARABIC_START_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").unwrap());

/// Matches the start of a Chinese-numbered entry: `三：`
static CHINESE_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[一二三四五六七八九十]+：").unwrap());

/// Output of segmenting a source file.
#[derive(Debug, Clone, Default)]
pub struct SegmentationResult {
    /// Entries with enough lines to be handed to the parser.
    pub entries: Vec<RawEntry>,
    /// Number of lines that matched an entry-start pattern.
    pub candidates: usize,
    /// Candidates dropped for having too few non-empty lines.
    pub too_short: usize,
}

/// Whether a line opens a new entry, using the built-in patterns.
pub fn is_entry_start(line: &str) -> bool {
    is_entry_start_with_config(line, &ParsingConfig::default())
}

pub(crate) fn is_entry_start_with_config(line: &str, config: &ParsingConfig) -> bool {
    let line = line.trim();
    let arabic = config.arabic_start_re.as_ref().unwrap_or(&ARABIC_START_RE);
    let chinese = config.chinese_start_re.as_ref().unwrap_or(&CHINESE_START_RE);
    arabic.is_match(line) || chinese.is_match(line)
}

/// Group source lines into raw entries using the default configuration.
pub fn segment_entries(lines: &[String]) -> SegmentationResult {
    segment_entries_with_config(lines, &ParsingConfig::default())
}

/// Config-aware version of [`segment_entries`].
///
/// A start line is followed by at most `body_window` lines. Collection stops
/// before a line that itself starts an entry; blank lines inside the window
/// are dropped but still use up the window, so an entry separated from its
/// author/venue lines by blanks loses those lines. Entries ending up with
/// fewer than `min_entry_lines` lines are discarded.
pub(crate) fn segment_entries_with_config(
    lines: &[String],
    config: &ParsingConfig,
) -> SegmentationResult {
    let mut result = SegmentationResult::default();
    let mut i = 0;

    while i < lines.len() {
        if !is_entry_start_with_config(&lines[i], config) {
            i += 1;
            continue;
        }
        result.candidates += 1;

        let mut entry_lines = vec![lines[i].clone()];
        let window_end = i.saturating_add(1).saturating_add(config.body_window);
        let mut j = i + 1;
        while j < lines.len() && j < window_end {
            let next = lines[j].trim();
            if is_entry_start_with_config(next, config) {
                break;
            }
            if !next.is_empty() {
                entry_lines.push(lines[j].clone());
            }
            j += 1;
        }

        if entry_lines.len() >= config.min_entry_lines {
            result.entries.push(RawEntry {
                start_line: i,
                lines: entry_lines,
            });
        } else {
            tracing::debug!(
                line = i + 1,
                collected = entry_lines.len(),
                "skipping short entry"
            );
            result.too_short += 1;
        }

        i = j;
    }

    result
}
