use super::*;

#[test]
fn discovers_file_directly() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.rs");
    std::fs::write(&file, "fn main() {}\n").unwrap();
    let filter = DiscoveryFilter::default();
    let found = discover_files(&[file.clone()], &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, file);
}

#[test]
fn discovers_files_in_directory_recursively() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("a.rs"), "fn a() {}\n").unwrap();
    std::fs::write(dir.path().join("sub/b.py"), "def b(): pass\n").unwrap();
    let filter = DiscoveryFilter::default();
    let found = discover_files(&[dir.path().to_path_buf()], &filter);
    assert_eq!(found.len(), 2);
}

#[test]
fn unrecognized_extension_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("data.bin"), b"\x00\x01").unwrap();
    let filter = DiscoveryFilter::default();
    let found = discover_files(&[dir.path().to_path_buf()], &filter);
    assert!(found.is_empty());
}

#[test]
fn ignore_glob_excludes_matching_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("keep.rs"), "fn a() {}\n").unwrap();
    std::fs::write(dir.path().join("skip_test.rs"), "fn b() {}\n").unwrap();
    let filter = DiscoveryFilter::new(&["*_test.rs".to_string()], &[]);
    let found = discover_files(&[dir.path().to_path_buf()], &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0.file_name().unwrap(), "keep.rs");
}

#[test]
fn language_filter_restricts_to_named_languages() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.rs"), "fn a() {}\n").unwrap();
    std::fs::write(dir.path().join("b.py"), "def b(): pass\n").unwrap();
    let filter = DiscoveryFilter::new(&[], &["python".to_string()]);
    let found = discover_files(&[dir.path().to_path_buf()], &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].1.name, "Python");
}

#[test]
fn duplicate_roots_are_deduplicated() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.rs");
    std::fs::write(&file, "fn a() {}\n").unwrap();
    let found = discover_files(&[file.clone(), file.clone()], &DiscoveryFilter::default());
    assert_eq!(found.len(), 1);
}
