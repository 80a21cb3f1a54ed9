use super::*;
use crate::engine::model::CloneGroup;
use std::path::PathBuf;

fn sample_report() -> CloneReport {
    CloneReport {
        file_a: PathBuf::from("a.rs"),
        file_b: PathBuf::from("b.rs"),
        groups: vec![CloneGroup { lines_a: (1, 6), lines_b: (10, 15), line_count: 6, token_count: 40 }],
        total_cloned_lines: 6,
    }
}

#[test]
fn human_output_is_empty_message_when_no_reports() {
    let mut buf = Vec::new();
    print_human(&[], &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "No clones detected.\n");
}

#[test]
fn human_output_matches_exact_format() {
    let mut buf = Vec::new();
    print_human(&[sample_report()], &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(
        text,
        "Found potential clones in 1 file pair(s):\n\n  a.rs  <->  b.rs\n    Lines 1-6 <-> Lines 10-15 (6 lines, 40 tokens)\n    Total cloned lines: 6\n\n"
    );
}

#[test]
fn json_output_matches_schema() {
    let json = format_json(&[sample_report()]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total_pairs"], 1);
    assert_eq!(value["clone_reports"][0]["file_a"], "a.rs");
    assert_eq!(value["clone_reports"][0]["groups"][0]["lines_a"][0], 1);
    assert_eq!(value["clone_reports"][0]["groups"][0]["token_count"], 40);
}

#[test]
fn empty_json_output_has_zero_pairs() {
    let json = format_json(&[]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total_pairs"], 0);
    assert!(value["clone_reports"].as_array().unwrap().is_empty());
}
