use publist_core::ParsedEntry;

/// Render the front-matter document for one entry.
///
/// Field values are written verbatim, without YAML quoting, except `year`
/// which is always quoted. `doi` is always empty.
pub fn render_index_md(entry: &ParsedEntry) -> String {
    let mut out = String::new();
    out.push_str("---\n");
    out.push_str(&format!("title: {}\n", entry.title));
    out.push_str(&format!("author_text: {}\n", entry.author_text));
    out.push_str(&format!("other_text: {}\n", entry.other_text));
    out.push('\n');
    out.push_str(&format!("year: \"{}\"\n", entry.year));
    out.push_str("doi: \"\"\n");
    out.push_str(&format!(
        "publication_types: [\"{}\"]\n",
        entry.publication_type.tag()
    ));
    out.push_str("---\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use publist_core::PublicationType;

    #[test]
    fn renders_english_entry() {
        let entry = ParsedEntry {
            number: "1".into(),
            title: "Deep Learning for X".into(),
            author_text: "A. Smith, B. Lee".into(),
            other_text: "Journal of Y (2021)".into(),
            year: "2021".into(),
            publication_type: PublicationType::English,
        };
        assert_eq!(
            render_index_md(&entry),
            "---\n\
             title: Deep Learning for X\n\
             author_text: A. Smith, B. Lee\n\
             other_text: Journal of Y (2021)\n\
             \n\
             year: \"2021\"\n\
             doi: \"\"\n\
             publication_types: [\"English\"]\n\
             ---\n"
        );
    }

    #[test]
    fn renders_chinese_entry_with_empty_fields() {
        let entry = ParsedEntry {
            number: "c2".into(),
            title: "中文标题示例".into(),
            author_text: String::new(),
            other_text: String::new(),
            year: "2015".into(),
            publication_type: PublicationType::Chinese,
        };
        let doc = render_index_md(&entry);
        assert!(doc.contains("author_text: \n"));
        assert!(doc.contains("other_text: \n\nyear: \"2015\"\n"));
        assert!(doc.contains("publication_types: [\"中文\"]\n"));
        assert!(doc.starts_with("---\ntitle: 中文标题示例\n"));
        assert!(doc.ends_with("---\n"));
    }
}
