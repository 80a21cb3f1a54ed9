use super::*;
use crate::config::{Config, OutputFormat};
use crate::lexer::NormalizationLevel;

fn config() -> Config {
    Config {
        min_tokens: 3,
        normalize: NormalizationLevel::Exact,
        output_format: OutputFormat::Human,
        ignore_patterns: Vec::new(),
        languages: Vec::new(),
        suppress_patterns: Vec::new(),
    }
}

#[test]
fn finds_clone_between_two_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let body = "fn add(a: i32, b: i32) -> i32 {\n    let sum = a + b;\n    sum\n}\n";
    std::fs::write(dir.path().join("a.rs"), body).unwrap();
    std::fs::write(dir.path().join("b.rs"), body).unwrap();

    let reports = scan(&config(), &[dir.path().to_path_buf()]);
    assert_eq!(reports.len(), 1);
    assert!(reports[0].total_cloned_lines >= 3);
}

#[test]
fn unrelated_files_produce_no_reports() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.rs"), "fn one() -> i32 {\n    1\n}\n").unwrap();
    std::fs::write(dir.path().join("b.rs"), "struct Widget {\n    name: String,\n}\n").unwrap();

    let reports = scan(&config(), &[dir.path().to_path_buf()]);
    assert!(reports.is_empty());
}

#[test]
fn suppress_pattern_drops_matching_clone() {
    let dir = tempfile::tempdir().unwrap();
    let body = "fn add(a: i32, b: i32) -> i32 {\n    let sum = a + b;\n    sum\n}\n";
    std::fs::write(dir.path().join("a.rs"), body).unwrap();
    std::fs::write(dir.path().join("b.rs"), body).unwrap();

    let mut cfg = config();
    cfg.suppress_patterns = vec!["*let sum*".to_string()];
    let reports = scan(&cfg, &[dir.path().to_path_buf()]);
    assert!(reports.is_empty());
}

#[test]
fn unreadable_path_is_skipped_without_panic() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.rs"), "fn only() -> i32 {\n    1\n}\n").unwrap();
    let missing = dir.path().join("missing.rs");

    let reports = scan(&config(), &[dir.path().to_path_buf(), missing]);
    assert!(reports.is_empty());
}

#[test]
fn file_below_min_tokens_floor_never_enters_the_index() {
    let dir = tempfile::tempdir().unwrap();
    let body = "fn add(a: i32, b: i32) -> i32 {\n    let sum = a + b;\n    sum\n}\n";
    std::fs::write(dir.path().join("a.rs"), body).unwrap();
    std::fs::write(dir.path().join("b.rs"), body).unwrap();

    let mut cfg = config();
    cfg.min_tokens = 1000;
    let reports = scan(&cfg, &[dir.path().to_path_buf()]);
    assert!(reports.is_empty());
}

#[test]
fn clone_below_min_group_tokens_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let body = "fn f() {\n    1;\n}\n";
    std::fs::write(dir.path().join("a.rs"), body).unwrap();
    std::fs::write(dir.path().join("b.rs"), body).unwrap();

    let mut cfg = config();
    cfg.min_tokens = 0;
    let reports = scan(&cfg, &[dir.path().to_path_buf()]);
    assert!(reports.is_empty());
}
