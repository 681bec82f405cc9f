use publist_core::DEFAULT_FALLBACK_YEAR;
use regex::Regex;

/// Configuration for the entry extraction pipeline.
///
/// All regex fields are `Option<Regex>` — `None` means "use the built-in default".
/// Use [`ParsingConfigBuilder`] to construct with string patterns.
#[derive(Debug, Clone)]
pub struct ParsingConfig {
    // ── segment.rs ──
    /// Regex testing whether a trimmed line starts an Arabic-numbered entry.
    pub(crate) arabic_start_re: Option<Regex>,
    /// Regex testing whether a trimmed line starts a Chinese-numbered entry.
    pub(crate) chinese_start_re: Option<Regex>,
    /// Number of lines after the title line examined for body lines (default: 2).
    pub(crate) body_window: usize,
    /// Minimum number of collected lines, title included, for an entry to be kept (default: 3).
    pub(crate) min_entry_lines: usize,

    // ── entry.rs ──
    /// Regex splitting an Arabic title line into number and title (2 capture groups).
    pub(crate) arabic_entry_re: Option<Regex>,
    /// Regex splitting a Chinese title line into numeral glyphs and title (2 capture groups).
    pub(crate) chinese_entry_re: Option<Regex>,
    /// Regex locating the year in the venue line (1 capture group).
    pub(crate) year_re: Option<Regex>,
    /// Year used when the venue line has no match.
    pub(crate) fallback_year: String,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            arabic_start_re: None,
            chinese_start_re: None,
            body_window: 2,
            min_entry_lines: 3,
            arabic_entry_re: None,
            chinese_entry_re: None,
            year_re: None,
            fallback_year: DEFAULT_FALLBACK_YEAR.to_string(),
        }
    }
}

impl ParsingConfig {
    pub fn body_window(&self) -> usize {
        self.body_window
    }

    pub fn min_entry_lines(&self) -> usize {
        self.min_entry_lines
    }

    pub fn fallback_year(&self) -> &str {
        &self.fallback_year
    }
}

/// Builder for [`ParsingConfig`].
///
/// Accepts string patterns that are compiled to `Regex` in [`build()`](Self::build).
/// Fails fast with `regex::Error` if any pattern is invalid.
#[derive(Debug, Clone, Default)]
pub struct ParsingConfigBuilder {
    arabic_start_re: Option<String>,
    chinese_start_re: Option<String>,
    body_window: Option<usize>,
    min_entry_lines: Option<usize>,
    arabic_entry_re: Option<String>,
    chinese_entry_re: Option<String>,
    year_re: Option<String>,
    fallback_year: Option<String>,
}

impl ParsingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Segmentation ──

    pub fn arabic_start_regex(mut self, pattern: &str) -> Self {
        self.arabic_start_re = Some(pattern.to_string());
        self
    }

    pub fn chinese_start_regex(mut self, pattern: &str) -> Self {
        self.chinese_start_re = Some(pattern.to_string());
        self
    }

    pub fn body_window(mut self, lines: usize) -> Self {
        self.body_window = Some(lines);
        self
    }

    pub fn min_entry_lines(mut self, lines: usize) -> Self {
        self.min_entry_lines = Some(lines);
        self
    }

    // ── Field extraction ──

    pub fn arabic_entry_regex(mut self, pattern: &str) -> Self {
        self.arabic_entry_re = Some(pattern.to_string());
        self
    }

    pub fn chinese_entry_regex(mut self, pattern: &str) -> Self {
        self.chinese_entry_re = Some(pattern.to_string());
        self
    }

    pub fn year_regex(mut self, pattern: &str) -> Self {
        self.year_re = Some(pattern.to_string());
        self
    }

    pub fn fallback_year(mut self, year: &str) -> Self {
        self.fallback_year = Some(year.to_string());
        self
    }

    /// Compile all string patterns into regexes and produce a [`ParsingConfig`].
    pub fn build(self) -> Result<ParsingConfig, regex::Error> {
        let compile = |opt: Option<String>| -> Result<Option<Regex>, regex::Error> {
            opt.map(|p| Regex::new(&p)).transpose()
        };

        Ok(ParsingConfig {
            arabic_start_re: compile(self.arabic_start_re)?,
            chinese_start_re: compile(self.chinese_start_re)?,
            body_window: self.body_window.unwrap_or(2),
            min_entry_lines: self.min_entry_lines.unwrap_or(3),
            arabic_entry_re: compile(self.arabic_entry_re)?,
            chinese_entry_re: compile(self.chinese_entry_re)?,
            year_re: compile(self.year_re)?,
            fallback_year: self
                .fallback_year
                .unwrap_or_else(|| DEFAULT_FALLBACK_YEAR.to_string()),
        })
    }
}
