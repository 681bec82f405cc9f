//! End-to-end conversion: source text file in, entry directories out.

use std::path::Path;

use publist_emit::Emitter;
use publist_parsing::EntryExtractor;

const MIXED_LIST: &str = "\
1. Deep Learning for X
A. Smith, B. Lee
Journal of Y (2021)
二：中文标题示例
张三，李四
期刊名称（2018）
";

fn convert(input: &Path, out: &Path) -> usize {
    let result = EntryExtractor::new().extract_from_path(input).unwrap();
    let mut emitter = Emitter::new(out);
    for entry in &result.entries {
        emitter.emit(entry).unwrap();
    }
    emitter.written_count()
}

fn sorted_dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn mixed_list_yields_two_directories() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("new.txt");
    std::fs::write(&input, MIXED_LIST).unwrap();
    let out = dir.path().join("out");

    assert_eq!(convert(&input, &out), 2);
    assert_eq!(sorted_dir_names(&out), vec!["1", "c2"]);

    let en = std::fs::read_to_string(out.join("1").join("index.md")).unwrap();
    assert!(en.contains("title: Deep Learning for X\n"));
    assert!(en.contains("year: \"2021\"\n"));
    assert!(en.contains("publication_types: [\"English\"]\n"));

    let zh = std::fs::read_to_string(out.join("c2").join("index.md")).unwrap();
    assert!(zh.contains("title: 中文标题示例\n"));
    assert!(zh.contains("author_text: 张三，李四\n"));
    assert!(zh.contains("year: \"2018\"\n"));
    assert!(zh.contains("publication_types: [\"中文\"]\n"));
}

#[test]
fn short_entries_create_no_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("new.txt");
    std::fs::write(&input, "1. Lonely Title\nOnly Author\n\n\n2. Full\nAuthor\nVenue (2012)\n")
        .unwrap();
    let out = dir.path().join("out");

    assert_eq!(convert(&input, &out), 1);
    assert_eq!(sorted_dir_names(&out), vec!["2"]);
}

#[test]
fn rerun_produces_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("new.txt");
    std::fs::write(&input, MIXED_LIST).unwrap();
    let out = dir.path().join("out");

    convert(&input, &out);
    let first = std::fs::read_to_string(out.join("c2").join("index.md")).unwrap();
    convert(&input, &out);
    let second = std::fs::read_to_string(out.join("c2").join("index.md")).unwrap();

    assert_eq!(first, second);
    assert_eq!(sorted_dir_names(&out), vec!["1", "c2"]);
}
