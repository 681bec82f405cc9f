//! Materializes parsed entries on disk.
//!
//! Each entry becomes `<base>/<number>/index.md`. Writes are idempotent: the
//! directory is created if missing and the document is overwritten.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use publist_core::{INDEX_FILENAME, ParsedEntry};
use thiserror::Error;

pub mod document;

pub use document::render_index_md;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("entry has an empty number")]
    EmptyNumber,
}

/// Write one entry's document under `base_dir` and return the document path.
pub fn emit_entry(base_dir: &Path, entry: &ParsedEntry) -> Result<PathBuf, EmitError> {
    if entry.number.is_empty() {
        return Err(EmitError::EmptyNumber);
    }

    let folder = base_dir.join(&entry.number);
    std::fs::create_dir_all(&folder).map_err(|source| EmitError::Io {
        path: folder.clone(),
        source,
    })?;

    let doc_path = folder.join(INDEX_FILENAME);
    std::fs::write(&doc_path, render_index_md(entry)).map_err(|source| EmitError::Io {
        path: doc_path.clone(),
        source,
    })?;

    tracing::debug!(path = %doc_path.display(), "wrote entry document");
    Ok(doc_path)
}

/// Emits a run's entries into one base directory.
///
/// Tracks which numbers were written so a repeated number can be reported;
/// the later entry still overwrites the earlier one.
pub struct Emitter {
    base_dir: PathBuf,
    seen: HashSet<String>,
    documents_written: usize,
}

impl Emitter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            seen: HashSet::new(),
            documents_written: 0,
        }
    }

    /// Number of documents written so far, repeated numbers included.
    pub fn written_count(&self) -> usize {
        self.documents_written
    }

    pub fn emit(&mut self, entry: &ParsedEntry) -> Result<PathBuf, EmitError> {
        let path = emit_entry(&self.base_dir, entry)?;
        self.documents_written += 1;
        if !self.seen.insert(entry.number.clone()) {
            tracing::warn!(number = %entry.number, "entry number repeated, previous document overwritten");
        }
        Ok(path)
    }
}
