use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;
use publist_core::{LineSummary, ParsedEntry, SkipStats};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the diagnostic for a missing input file.
pub fn print_missing_input(w: &mut dyn Write, path: &Path, color: ColorMode) -> std::io::Result<()> {
    let msg = format!("Error: file not found {}", path.display());
    if color.enabled() {
        writeln!(w, "{}", msg.red())
    } else {
        writeln!(w, "{}", msg)
    }
}

/// Print the file header: path, line count and last-line preview.
pub fn print_file_summary(
    w: &mut dyn Write,
    path: &Path,
    summary: &LineSummary,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "Processing file: {}", path.display().bold())?;
    } else {
        writeln!(w, "Processing file: {}", path.display())?;
    }
    writeln!(w, "Total lines: {}", summary.total_lines)?;
    writeln!(w, "Last line: {}", summary.last_line_preview)?;
    Ok(())
}

/// Print the confirmation line for one written document.
pub fn print_created(w: &mut dyn Write, doc_path: &Path, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{} {}", "Created:".green(), doc_path.display())
    } else {
        writeln!(w, "Created: {}", doc_path.display())
    }
}

/// Print the completion message after all entries were written.
pub fn print_completion(
    w: &mut dyn Write,
    written: usize,
    stats: &SkipStats,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", "Done!".bold().green())?;
    } else {
        writeln!(w, "Done!")?;
    }

    let line = format!(
        "({} entries written, {} skipped: {} too short, {} unparseable)",
        written,
        stats.skipped(),
        stats.too_short,
        stats.unparseable
    );
    if color.enabled() {
        writeln!(w, "{}", line.dimmed())?;
    } else {
        writeln!(w, "{}", line)?;
    }
    Ok(())
}

/// Print one entry in dry-run mode.
pub fn print_dry_run_entry(
    w: &mut dyn Write,
    entry: &ParsedEntry,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", format!("[{}]", entry.number).bold().yellow())?;
    } else {
        writeln!(w, "[{}]", entry.number)?;
    }

    writeln!(w, "  Title:   {}", entry.title)?;
    writeln!(w, "  Authors: {}", display_or_none(&entry.author_text))?;
    writeln!(w, "  Venue:   {}", display_or_none(&entry.other_text))?;
    writeln!(w, "  Year:    {}", entry.year)?;
    writeln!(w, "  Type:    {}", entry.publication_type.tag())?;
    writeln!(w)?;
    Ok(())
}

/// Print the dry-run footer.
pub fn print_dry_run_total(
    w: &mut dyn Write,
    parsed: usize,
    stats: &SkipStats,
) -> std::io::Result<()> {
    writeln!(
        w,
        "Total: {} candidates ({} parsed, {} skipped: {} too short, {} unparseable)",
        stats.total_candidates,
        parsed,
        stats.skipped(),
        stats.too_short,
        stats.unparseable
    )
}

fn display_or_none(s: &str) -> &str {
    if s.is_empty() { "(none)" } else { s }
}
