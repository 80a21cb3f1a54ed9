use super::*;
use std::path::Path;

#[test]
fn detects_by_extension() {
    let spec = detect(Path::new("main.rs")).unwrap();
    assert_eq!(spec.name, "Rust");
}

#[test]
fn detects_by_filename() {
    let spec = detect(Path::new("Makefile")).unwrap();
    assert_eq!(spec.name, "Makefile");
}

#[test]
fn unknown_extension_returns_none() {
    assert!(detect(Path::new("data.xyz123")).is_none());
}

#[test]
fn detects_by_shebang_direct() {
    let spec = detect_by_shebang("#!/usr/bin/python3\n").unwrap();
    assert_eq!(spec.name, "Python");
}

#[test]
fn detects_by_shebang_env_wrapper() {
    let spec = detect_by_shebang("#!/usr/bin/env -S python3 -u\n").unwrap();
    assert_eq!(spec.name, "Python");
}

#[test]
fn non_shebang_line_returns_none() {
    assert!(detect_by_shebang("fn main() {}\n").is_none());
}

#[test]
fn matches_language_empty_list_matches_all() {
    let spec = detect(Path::new("main.rs")).unwrap();
    assert!(matches_language(spec, &[]));
}

#[test]
fn matches_language_is_case_insensitive() {
    let spec = detect(Path::new("main.rs")).unwrap();
    assert!(matches_language(spec, &["rust".to_string()]));
    assert!(!matches_language(spec, &["python".to_string()]));
}
