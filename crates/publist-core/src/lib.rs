use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

pub mod config_file;

/// Year used when the venue line carries no parenthesized 4-digit year.
pub const DEFAULT_FALLBACK_YEAR: &str = "2015";

/// Name of the metadata document written into each entry directory.
pub const INDEX_FILENAME: &str = "index.md";

#[derive(Error, Debug)]
pub enum PublistError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse language classification of an entry, derived from its numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PublicationType {
    English,
    Chinese,
}

impl PublicationType {
    /// Tag written into `publication_types` of the generated document.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Chinese => "中文",
        }
    }
}

/// A group of 1–3 consecutive source lines, verbatim, before field extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// 0-based index of the title line in the source file.
    pub start_line: usize,
    pub lines: Vec<String>,
}

/// A structured bibliography record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedEntry {
    /// Output directory name: decimal digits, or `c`-prefixed for Chinese numbering.
    pub number: String,
    pub title: String,
    pub author_text: String,
    pub other_text: String,
    pub year: String,
    pub publication_type: PublicationType,
}

/// Counts of candidate entries that did not make it to the emitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipStats {
    /// Lines that matched an entry-start pattern.
    pub total_candidates: usize,
    /// Candidates with fewer than the required number of non-empty lines.
    pub too_short: usize,
    /// Candidates whose first line did not match either parse pattern.
    pub unparseable: usize,
}

impl SkipStats {
    pub fn skipped(&self) -> usize {
        self.too_short + self.unparseable
    }
}

/// Diagnostic summary of the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSummary {
    pub total_lines: usize,
    /// Debug-quoted prefix of the last line, or `"Empty"` for an empty file.
    pub last_line_preview: String,
}

/// Result of running the extraction pipeline over one source file.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub entries: Vec<ParsedEntry>,
    pub skip_stats: SkipStats,
    pub summary: LineSummary,
}
