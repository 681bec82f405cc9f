use std::path::Path;

use publist_core::{ExtractionResult, ParsedEntry, PublistError, RawEntry, SkipStats};

use crate::config::ParsingConfig;
use crate::segment::SegmentationResult;
use crate::{entry, reader, segment};

/// A configurable publication list extraction pipeline.
///
/// Holds a [`ParsingConfig`] and exposes each pipeline step as a method.
/// The default constructor uses built-in defaults; use [`EntryExtractor::with_config`]
/// to supply custom patterns and thresholds.
pub struct EntryExtractor {
    config: ParsingConfig,
}

impl Default for EntryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParsingConfig::default(),
        }
    }

    /// Create an extractor with a custom configuration.
    pub fn with_config(config: ParsingConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the current config.
    pub fn config(&self) -> &ParsingConfig {
        &self.config
    }

    /// Read the source file into lines (step 1).
    pub fn read_lines(&self, path: &Path) -> Result<Vec<String>, PublistError> {
        reader::read_lines(path)
    }

    /// Group lines into raw entries (step 2).
    pub fn segment(&self, lines: &[String]) -> SegmentationResult {
        segment::segment_entries_with_config(lines, &self.config)
    }

    /// Extract structured fields from one raw entry (step 3).
    pub fn parse(&self, raw: &RawEntry) -> Option<ParsedEntry> {
        entry::parse_entry_with_config(&raw.lines, &self.config)
    }

    /// Run the full pipeline on a file.
    pub fn extract_from_path(&self, path: &Path) -> Result<ExtractionResult, PublistError> {
        let lines = self.read_lines(path)?;
        Ok(self.extract_from_lines(&lines))
    }

    /// Run steps 2 and 3 on in-memory text.
    pub fn extract_from_str(&self, text: &str) -> ExtractionResult {
        self.extract_from_lines(&reader::split_lines(text))
    }

    /// Run steps 2 and 3 on already-read lines.
    pub fn extract_from_lines(&self, lines: &[String]) -> ExtractionResult {
        let summary = reader::summarize_lines(lines);
        let segmented = self.segment(lines);

        let mut stats = SkipStats {
            total_candidates: segmented.candidates,
            too_short: segmented.too_short,
            ..Default::default()
        };

        let mut entries = Vec::with_capacity(segmented.entries.len());
        for raw in &segmented.entries {
            match self.parse(raw) {
                Some(parsed) => entries.push(parsed),
                None => {
                    tracing::debug!(line = raw.start_line + 1, "skipping unparseable entry");
                    stats.unparseable += 1;
                }
            }
        }

        tracing::info!(
            lines = summary.total_lines,
            entries = entries.len(),
            skipped = stats.skipped(),
            "extraction complete"
        );

        ExtractionResult {
            entries,
            skip_stats: stats,
            summary,
        }
    }
}
