//! Plain-text publication list parsing.
//!
//! Reads a bibliography where each record is a numbered title line (`12. Title`
//! or `三：标题`) followed by an author line and a venue line, and turns each
//! record into a [`ParsedEntry`].

pub mod config;
pub mod entry;
pub mod extractor;
pub mod reader;
pub mod segment;

pub use config::{ParsingConfig, ParsingConfigBuilder};
pub use entry::{chinese_number_tag, extract_year, parse_entry};
pub use extractor::EntryExtractor;
pub use segment::{SegmentationResult, is_entry_start, segment_entries};
// Re-export domain types from core (canonical definitions live there)
pub use publist_core::{
    ExtractionResult, LineSummary, ParsedEntry, PublicationType, PublistError, RawEntry, SkipStats,
};

