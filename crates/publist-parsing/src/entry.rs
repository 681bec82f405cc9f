use once_cell::sync::Lazy;
use publist_core::{ParsedEntry, PublicationType};
use regex::Regex;

use crate::config::ParsingConfig;

/// `12. Some Title` → number `12`, title `Some Title`.
static ARABIC_ENTRY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s+(.+)$").unwrap());

/// `三：标题` → glyphs `三`, title `标题`.
static CHINESE_ENTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([一二三四五六七八九十]+)：(.+)$").unwrap());

/// Four digits in parentheses. Half-width and full-width brackets are accepted
/// independently on each side, so `(2020）` matches too.
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[(（](\d{4})[)）]").unwrap());

const CHINESE_NUMERALS: [(&str, &str); 10] = [
    ("一", "c1"),
    ("二", "c2"),
    ("三", "c3"),
    ("四", "c4"),
    ("五", "c5"),
    ("六", "c6"),
    ("七", "c7"),
    ("八", "c8"),
    ("九", "c9"),
    ("十", "c10"),
];

/// Map a Chinese numeral glyph sequence to its directory tag.
///
/// The ten single glyphs map to `c1`..`c10`; anything else becomes `c` followed
/// by the raw glyphs. The `c` prefix keeps these apart from Arabic-numbered
/// directories.
pub fn chinese_number_tag(glyphs: &str) -> String {
    CHINESE_NUMERALS
        .iter()
        .find(|(glyph, _)| *glyph == glyphs)
        .map(|(_, tag)| tag.to_string())
        .unwrap_or_else(|| format!("c{}", glyphs))
}

/// Extract a parenthesized 4-digit year from venue text, or `fallback`.
pub fn extract_year(other_text: &str, fallback: &str) -> String {
    extract_year_with_config(other_text, fallback, &ParsingConfig::default())
}

fn extract_year_with_config(other_text: &str, fallback: &str, config: &ParsingConfig) -> String {
    let re = config.year_re.as_ref().unwrap_or(&YEAR_RE);
    re.captures(other_text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Parse an entry's lines (title, authors, venue) with the default configuration.
///
/// Returns `None` when the first line matches neither numbering pattern.
pub fn parse_entry<S: AsRef<str>>(lines: &[S]) -> Option<ParsedEntry> {
    parse_entry_with_config(lines, &ParsingConfig::default())
}

/// Config-aware version of [`parse_entry`].
pub(crate) fn parse_entry_with_config<S: AsRef<str>>(
    lines: &[S],
    config: &ParsingConfig,
) -> Option<ParsedEntry> {
    let first_line = lines.first()?.as_ref().trim();

    let arabic = config.arabic_entry_re.as_ref().unwrap_or(&ARABIC_ENTRY_RE);
    let chinese = config.chinese_entry_re.as_ref().unwrap_or(&CHINESE_ENTRY_RE);

    let (number, title, publication_type) = if let Some(caps) = arabic.captures(first_line) {
        (
            caps.get(1)?.as_str().to_string(),
            caps.get(2)?.as_str(),
            PublicationType::English,
        )
    } else if let Some(caps) = chinese.captures(first_line) {
        (
            chinese_number_tag(caps.get(1)?.as_str()),
            caps.get(2)?.as_str(),
            PublicationType::Chinese,
        )
    } else {
        return None;
    };

    let line_at = |idx: usize| {
        lines
            .get(idx)
            .map(|l| l.as_ref().trim().to_string())
            .unwrap_or_default()
    };
    let author_text = line_at(1);
    let other_text = line_at(2);
    let year = extract_year_with_config(&other_text, &config.fallback_year, config);

    Some(ParsedEntry {
        number,
        title: title.trim().to_string(),
        author_text,
        other_text,
        year,
        publication_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_entry() {
        let entry = parse_entry(&["12. Some Title", "A. Smith", "Journal X (2020)"]).unwrap();
        assert_eq!(entry.number, "12");
        assert_eq!(entry.title, "Some Title");
        assert_eq!(entry.author_text, "A. Smith");
        assert_eq!(entry.other_text, "Journal X (2020)");
        assert_eq!(entry.year, "2020");
        assert_eq!(entry.publication_type, PublicationType::English);
    }

    #[test]
    fn test_chinese_entry() {
        let entry = parse_entry(&["三：标题", "张三，李四", "期刊（2019）"]).unwrap();
        assert_eq!(entry.number, "c3");
        assert_eq!(entry.title, "标题");
        assert_eq!(entry.year, "2019");
        assert_eq!(entry.publication_type, PublicationType::Chinese);
    }

    #[test]
    fn test_chinese_entry_with_leading_space_and_padded_title() {
        let entry = parse_entry(&["   十：  标题  ", " 作者 ", " 期刊 "]).unwrap();
        assert_eq!(entry.number, "c10");
        assert_eq!(entry.title, "标题");
        assert_eq!(entry.author_text, "作者");
        assert_eq!(entry.other_text, "期刊");
    }

    #[test]
    fn test_unmapped_chinese_numeral() {
        let entry = parse_entry(&["十一：标题", "作者", "期刊"]).unwrap();
        assert_eq!(entry.number, "c十一");
        assert_eq!(chinese_number_tag("二十"), "c二十");
    }

    #[test]
    fn test_all_mapped_numerals() {
        let glyphs = ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];
        for (i, glyph) in glyphs.iter().enumerate() {
            assert_eq!(chinese_number_tag(glyph), format!("c{}", i + 1));
        }
    }

    #[test]
    fn test_unparseable_first_line() {
        assert!(parse_entry(&["12.NoSpace", "A", "B"]).is_none());
        assert!(parse_entry(&["12. ", "A", "B"]).is_none());
        assert!(parse_entry(&["三:半角", "A", "B"]).is_none());
        assert!(parse_entry(&["Plain title", "A", "B"]).is_none());
        assert!(parse_entry::<&str>(&[]).is_none());
    }

    #[test]
    fn test_missing_body_lines() {
        let entry = parse_entry(&["1. Only a title"]).unwrap();
        assert_eq!(entry.author_text, "");
        assert_eq!(entry.other_text, "");
        assert_eq!(entry.year, "2015");
    }

    #[test]
    fn test_year_extraction() {
        assert_eq!(extract_year("Journal X (2020)", "2015"), "2020");
        assert_eq!(extract_year("期刊（2019）", "2015"), "2019");
        assert_eq!(extract_year("Journal, no year", "2015"), "2015");
    }

    #[test]
    fn test_year_mixed_brackets() {
        assert_eq!(extract_year("Venue (2020）", "2015"), "2020");
        assert_eq!(extract_year("期刊（2021)", "2015"), "2021");
    }

    #[test]
    fn test_year_requires_exactly_four_digits_in_brackets() {
        assert_eq!(extract_year("Vol (12345)", "2015"), "2015");
        assert_eq!(extract_year("Published 2020", "2015"), "2015");
        assert_eq!(extract_year("Vol. 3 (12) (2017)", "2015"), "2017");
    }

    #[test]
    fn test_configured_fallback_year() {
        let config = crate::ParsingConfigBuilder::new()
            .fallback_year("1970")
            .build()
            .unwrap();
        let entry = parse_entry_with_config(&["1. T", "A", "no year"], &config).unwrap();
        assert_eq!(entry.year, "1970");
    }
}
